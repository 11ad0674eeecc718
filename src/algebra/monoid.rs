//! Monoids: commutative, associative binary operators with a two-sided
//! identity.
//!
//! A monoid is the additive half of a semiring and the folding structure of
//! `reduce`.  Each stock monoid pairs an operator with its identity:
//! plus/`0`, times/`1`, min/`MAX`, max/`MIN`, or/`false`, and/`true`.
//! The min and max identities come from [`num::traits::Bounded`]: the largest
//! (resp. smallest) representable value stands in for +∞ (resp. −∞).

use crate::algebra::binary_operator::BinaryOp;
use num::traits::{Bounded, One, Zero};
use std::marker::PhantomData;
use std::ops::{Add, Mul};


//  ---------------------------------------------------------------------------
//  THE MONOID TRAIT
//  ---------------------------------------------------------------------------


/// A binary operator together with its two-sided identity.
///
/// Associativity and commutativity of [`BinaryOp::apply`], and the identity
/// law `apply(identity(), x) == x`, are the implementor's obligation.
pub trait Monoid< D > : BinaryOp< D, D, D > {

    /// The two-sided identity of the operator.
    fn identity( &self ) -> D;
}

// References to monoids are monoids.
impl    < 'a, D, Mo >
        Monoid < D > for &'a Mo
    where   Mo: Monoid< D >,
{
    fn identity( &self ) -> D { (**self).identity() }
}


//  ---------------------------------------------------------------------------
//  ARITHMETIC MONOIDS
//  ---------------------------------------------------------------------------


/// Addition with identity `0`.
///
/// # Examples
///
/// ```
/// use garnet::algebra::binary_operator::BinaryOp;
/// use garnet::algebra::monoid::{Monoid, PlusMonoid};
///
/// let monoid = PlusMonoid::<i64>::new();
///
/// assert_eq!( 0, monoid.identity() );
/// assert_eq!( 3, monoid.apply( monoid.identity(), 3 ) );
/// ```
#[derive(Debug, Clone)]
pub struct PlusMonoid< T > { phantom: PhantomData<*const T> }

impl < T > PlusMonoid < T > {
    pub fn new() -> Self { PlusMonoid { phantom: PhantomData } }
}

impl < T > Default for PlusMonoid < T > {
    fn default() -> Self { Self::new() }
}

impl < T > BinaryOp < T > for PlusMonoid < T >
    where T: Add< Output = T >
{
    fn apply( &self, x: T, y: T ) -> T { x + y }
}

impl < T > Monoid < T > for PlusMonoid < T >
    where T: Add< Output = T > + Zero
{
    fn identity( &self ) -> T { T::zero() }
}


/// Multiplication with identity `1`.
#[derive(Debug, Clone)]
pub struct TimesMonoid< T > { phantom: PhantomData<*const T> }

impl < T > TimesMonoid < T > {
    pub fn new() -> Self { TimesMonoid { phantom: PhantomData } }
}

impl < T > Default for TimesMonoid < T > {
    fn default() -> Self { Self::new() }
}

impl < T > BinaryOp < T > for TimesMonoid < T >
    where T: Mul< Output = T >
{
    fn apply( &self, x: T, y: T ) -> T { x * y }
}

impl < T > Monoid < T > for TimesMonoid < T >
    where T: Mul< Output = T > + One
{
    fn identity( &self ) -> T { T::one() }
}


//  ---------------------------------------------------------------------------
//  ORDER MONOIDS
//  ---------------------------------------------------------------------------


/// Minimum with identity `T::max_value()`.
#[derive(Debug, Clone)]
pub struct MinMonoid< T > { phantom: PhantomData<*const T> }

impl < T > MinMonoid < T > {
    pub fn new() -> Self { MinMonoid { phantom: PhantomData } }
}

impl < T > Default for MinMonoid < T > {
    fn default() -> Self { Self::new() }
}

impl < T > BinaryOp < T > for MinMonoid < T >
    where T: PartialOrd
{
    fn apply( &self, x: T, y: T ) -> T { if y < x { y } else { x } }
}

impl < T > Monoid < T > for MinMonoid < T >
    where T: PartialOrd + Bounded
{
    fn identity( &self ) -> T { T::max_value() }
}


/// Maximum with identity `T::min_value()`.
#[derive(Debug, Clone)]
pub struct MaxMonoid< T > { phantom: PhantomData<*const T> }

impl < T > MaxMonoid < T > {
    pub fn new() -> Self { MaxMonoid { phantom: PhantomData } }
}

impl < T > Default for MaxMonoid < T > {
    fn default() -> Self { Self::new() }
}

impl < T > BinaryOp < T > for MaxMonoid < T >
    where T: PartialOrd
{
    fn apply( &self, x: T, y: T ) -> T { if y > x { y } else { x } }
}

impl < T > Monoid < T > for MaxMonoid < T >
    where T: PartialOrd + Bounded
{
    fn identity( &self ) -> T { T::min_value() }
}


//  ---------------------------------------------------------------------------
//  BOOLEAN MONOIDS
//  ---------------------------------------------------------------------------


/// Disjunction with identity `false`.
#[derive(Debug, Clone, Default)]
pub struct LogicalOrMonoid;

impl LogicalOrMonoid {
    pub fn new() -> Self { LogicalOrMonoid }
}

impl BinaryOp< bool > for LogicalOrMonoid {
    fn apply( &self, x: bool, y: bool ) -> bool { x || y }
}

impl Monoid< bool > for LogicalOrMonoid {
    fn identity( &self ) -> bool { false }
}


/// Conjunction with identity `true`.
#[derive(Debug, Clone, Default)]
pub struct LogicalAndMonoid;

impl LogicalAndMonoid {
    pub fn new() -> Self { LogicalAndMonoid }
}

impl BinaryOp< bool > for LogicalAndMonoid {
    fn apply( &self, x: bool, y: bool ) -> bool { x && y }
}

impl Monoid< bool > for LogicalAndMonoid {
    fn identity( &self ) -> bool { true }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_identities() {
        assert_eq!( 0,                PlusMonoid::<i64>::new().identity() );
        assert_eq!( 1,                TimesMonoid::<i64>::new().identity() );
        assert_eq!( i64::MAX,         MinMonoid::<i64>::new().identity() );
        assert_eq!( i64::MIN,         MaxMonoid::<i64>::new().identity() );
        assert_eq!( false,            LogicalOrMonoid::new().identity() );
        assert_eq!( true,             LogicalAndMonoid::new().identity() );
    }

    #[test]
    fn test_identity_law() {
        let monoid  =   MinMonoid::<u32>::new();
        assert_eq!( 7, monoid.apply( monoid.identity(), 7 ) );
        assert_eq!( 7, monoid.apply( 7, monoid.identity() ) );
    }
}
