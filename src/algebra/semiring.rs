//! Semirings: an additive monoid paired with a multiplicative operator.
//!
//! A semiring drives the multiply kernels (`mxv`, `vxm`, `mxm`): the
//! multiplicative operator combines matching entries and the additive monoid
//! folds the products.  Distributivity of the multiply over the add is the
//! caller's obligation.
//!
//! The stock semirings are instances of [`CompositeSemiring`], which pairs
//! any [`Monoid`] with any [`BinaryOp`]:
//!
//! ```
//! use garnet::algebra::semiring::{ArithmeticSemiring, MinPlusSemiring, Semiring};
//!
//! let arithmetic = ArithmeticSemiring::<i64>::new();
//! assert_eq!( 0, arithmetic.zero() );
//! assert_eq!( 5, arithmetic.add( 2, 3 ) );
//! assert_eq!( 6, arithmetic.multiply( 2, 3 ) );
//!
//! // In the min-plus (tropical) semiring, "add" is min and "multiply" is +;
//! // the additive identity is the largest representable value, standing in
//! // for +∞.
//! let tropical = MinPlusSemiring::<i64>::new();
//! assert_eq!( i64::MAX, tropical.zero() );
//! assert_eq!( 2, tropical.add( 2, 3 ) );
//! assert_eq!( 5, tropical.multiply( 2, 3 ) );
//! ```

use crate::algebra::binary_operator::{BinaryOp, LogicalAnd, Plus, Times};
use crate::algebra::monoid::{LogicalOrMonoid, MaxMonoid, MinMonoid, Monoid, PlusMonoid};


//  ---------------------------------------------------------------------------
//  THE SEMIRING TRAIT
//  ---------------------------------------------------------------------------


/// Basic operations for semirings.
///
/// `D1` and `D2` are the input domains of the multiplicative operator; `D3`
/// is its result domain and the carrier of the additive monoid.
pub trait Semiring< D1, D2 = D1, D3 = D1 > {

    /// The identity of the additive monoid.
    fn zero( &self ) -> D3;

    /// Add two partial sums.
    fn add( &self, x: D3, y: D3 ) -> D3;

    /// Multiply a pair of matching entries.
    fn multiply( &self, x: D1, y: D2 ) -> D3;
}

// References to semirings are semirings.
impl    < 'a, D1, D2, D3, SR >
        Semiring < D1, D2, D3 > for &'a SR
    where   SR: Semiring< D1, D2, D3 >,
{
    fn zero( &self ) -> D3 { (**self).zero() }

    fn add( &self, x: D3, y: D3 ) -> D3 { (**self).add( x, y ) }

    fn multiply( &self, x: D1, y: D2 ) -> D3 { (**self).multiply( x, y ) }
}


//  ---------------------------------------------------------------------------
//  COMPOSITE SEMIRINGS
//  ---------------------------------------------------------------------------


/// The semiring assembled from an additive monoid and a multiplicative
/// operator.
///
/// All stock semirings are aliases of this struct; user-defined semirings
/// are ordinary instantiations of it:
///
/// ```
/// use garnet::algebra::binary_operator::Times;
/// use garnet::algebra::monoid::MaxMonoid;
/// use garnet::algebra::semiring::{CompositeSemiring, Semiring};
///
/// // max-times, e.g. for most-reliable-path computations
/// let semiring = CompositeSemiring::< MaxMonoid<f64>, Times<f64> >::new();
/// assert_eq!( 6.0, semiring.multiply( 2.0, 3.0 ) );
/// assert_eq!( 3.0, semiring.add( 2.0, 3.0 ) );
/// ```
#[derive(Debug, Clone)]
pub struct CompositeSemiring< AddMonoid, MulOp > {
    add_monoid: AddMonoid,
    mul_op:     MulOp,
}

impl    < AddMonoid, MulOp >
        CompositeSemiring
        < AddMonoid, MulOp >
{
    /// Assemble a semiring from zero-memory parts.
    pub fn new() -> Self
        where   AddMonoid:  Default,
                MulOp:      Default,
    {
        CompositeSemiring { add_monoid: AddMonoid::default(), mul_op: MulOp::default() }
    }

    /// Assemble a semiring from parts that carry state of their own.
    pub fn from_parts( add_monoid: AddMonoid, mul_op: MulOp ) -> Self {
        CompositeSemiring { add_monoid, mul_op }
    }
}

impl    < AddMonoid, MulOp >
        Default for CompositeSemiring
        < AddMonoid, MulOp >
    where   AddMonoid:  Default,
            MulOp:      Default,
{
    fn default() -> Self { Self::new() }
}

impl    < D1, D2, D3, AddMonoid, MulOp >
        Semiring < D1, D2, D3 > for CompositeSemiring
        < AddMonoid, MulOp >
    where   AddMonoid:  Monoid< D3 >,
            MulOp:      BinaryOp< D1, D2, D3 >,
{
    fn zero( &self ) -> D3 { self.add_monoid.identity() }

    fn add( &self, x: D3, y: D3 ) -> D3 { self.add_monoid.apply( x, y ) }

    fn multiply( &self, x: D1, y: D2 ) -> D3 { self.mul_op.apply( x, y ) }
}


//  ---------------------------------------------------------------------------
//  STOCK SEMIRINGS
//  ---------------------------------------------------------------------------


/// Plus-times over a native numeric type; the semiring of ordinary linear
/// algebra.
pub type ArithmeticSemiring< T > = CompositeSemiring< PlusMonoid< T >, Times< T > >;

/// Or-and over the booleans; the semiring of reachability.
pub type LogicalSemiring = CompositeSemiring< LogicalOrMonoid, LogicalAnd >;

/// Min-plus (tropical); the semiring of shortest paths.
pub type MinPlusSemiring< T > = CompositeSemiring< MinMonoid< T >, Plus< T > >;

/// Max-plus; the semiring of critical paths.
pub type MaxPlusSemiring< T > = CompositeSemiring< MaxMonoid< T >, Plus< T > >;


//  ---------------------------------------------------------------------------
//  LIFTING A SEMIRING TO A BINARY OPERATOR
//  ---------------------------------------------------------------------------


/// The binary operator `(x, y) -> semiring.multiply(x, y)`.
///
/// Constructed by [`multiply_op`]; lets the element-wise kernels accept a
/// semiring wherever they accept a plain operator.
#[derive(Debug, Clone)]
pub struct MultiplyOp< SR > {
    semiring: SR,
}

impl    < D1, D2, D3, SR >
        BinaryOp < D1, D2, D3 > for MultiplyOp
        < SR >
    where   SR: Semiring< D1, D2, D3 >,
{
    fn apply( &self, x: D1, y: D2 ) -> D3 { self.semiring.multiply( x, y ) }
}

/// Lift a semiring into the plain binary operator given by its multiply.
///
/// ```
/// use garnet::algebra::binary_operator::BinaryOp;
/// use garnet::algebra::semiring::{multiply_op, ArithmeticSemiring};
///
/// let op = multiply_op( ArithmeticSemiring::<i64>::new() );
/// assert_eq!( 6, op.apply( 2, 3 ) );
/// ```
pub fn multiply_op< SR >( semiring: SR ) -> MultiplyOp< SR > {
    MultiplyOp { semiring }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_logical_semiring() {
        let semiring    =   LogicalSemiring::new();

        assert!(    !   semiring.zero() );
        assert!(        semiring.add( false, true ) );
        assert!(    !   semiring.add( false, false ) );
        assert!(        semiring.multiply( true, true ) );
        assert!(    !   semiring.multiply( true, false ) );
    }

    #[test]
    fn test_max_plus_semiring() {
        let semiring    =   MaxPlusSemiring::<i64>::new();

        assert_eq!( i64::MIN,   semiring.zero() );
        assert_eq!( 3,          semiring.add( 2, 3 ) );
        assert_eq!( 5,          semiring.multiply( 2, 3 ) );
    }

    #[test]
    fn test_multiply_op_lift() {
        let op  =   multiply_op( MinPlusSemiring::<u32>::new() );
        // the lifted operator is min-plus "multiply", i.e. ordinary +
        assert_eq!( 5, op.apply( 2, 3 ) );
    }
}
