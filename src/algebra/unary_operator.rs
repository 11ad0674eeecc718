//! Unary operators: one-argument scalar functions, consumed by `apply`.

use num_traits::One;
use std::marker::PhantomData;
use std::ops::{Div, Neg};


//  ---------------------------------------------------------------------------
//  THE UNARY OPERATOR TRAIT
//  ---------------------------------------------------------------------------


/// A one-argument scalar function `D1 -> D2`.
pub trait UnaryOp< D1, D2 = D1 > {

    /// Evaluate the operator.
    fn apply( &self, x: D1 ) -> D2;
}

// References to operators are operators.
impl    < 'a, D1, D2, Op >
        UnaryOp < D1, D2 > for &'a Op
    where   Op: UnaryOp< D1, D2 >,
{
    fn apply( &self, x: D1 ) -> D2 { (**self).apply( x ) }
}


//  ---------------------------------------------------------------------------
//  STOCK UNARY OPERATORS
//  ---------------------------------------------------------------------------


/// Returns its argument unchanged.
#[derive(Debug, Clone)]
pub struct Identity< T > { phantom: PhantomData<*const T> }

impl < T > Identity < T > {
    pub fn new() -> Self { Identity { phantom: PhantomData } }
}

impl < T > Default for Identity < T > {
    fn default() -> Self { Self::new() }
}

impl < T > UnaryOp < T > for Identity < T > {
    fn apply( &self, x: T ) -> T { x }
}


/// Additive inverse `-x`.
#[derive(Debug, Clone)]
pub struct AdditiveInverse< T > { phantom: PhantomData<*const T> }

impl < T > AdditiveInverse < T > {
    pub fn new() -> Self { AdditiveInverse { phantom: PhantomData } }
}

impl < T > Default for AdditiveInverse < T > {
    fn default() -> Self { Self::new() }
}

impl < T > UnaryOp < T > for AdditiveInverse < T >
    where T: Neg< Output = T >
{
    fn apply( &self, x: T ) -> T { - x }
}


/// Multiplicative inverse `1/x`.
///
/// Inversion of zero behaves as the underlying type's division does.
#[derive(Debug, Clone)]
pub struct MultiplicativeInverse< T > { phantom: PhantomData<*const T> }

impl < T > MultiplicativeInverse < T > {
    pub fn new() -> Self { MultiplicativeInverse { phantom: PhantomData } }
}

impl < T > Default for MultiplicativeInverse < T > {
    fn default() -> Self { Self::new() }
}

impl < T > UnaryOp < T > for MultiplicativeInverse < T >
    where T: One + Div< Output = T >
{
    fn apply( &self, x: T ) -> T { T::one() / x }
}


/// Logical negation.
#[derive(Debug, Clone, Default)]
pub struct LogicalNot;

impl LogicalNot {
    pub fn new() -> Self { LogicalNot }
}

impl UnaryOp< bool > for LogicalNot {
    fn apply( &self, x: bool ) -> bool { ! x }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_unary_operators() {
        assert_eq!( 4,     Identity::<i64>::new().apply( 4 ) );
        assert_eq!( -4,    AdditiveInverse::<i64>::new().apply( 4 ) );
        assert_eq!( 0.25,  MultiplicativeInverse::<f64>::new().apply( 4.0 ) );
        assert!(           LogicalNot::new().apply( false ) );
        assert!(        !  LogicalNot::new().apply( true  ) );
    }
}
