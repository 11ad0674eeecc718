//! Binary operators, unary operators, monoids, semirings, accumulators.
//!
//! GARNET uses *operator objects* to perform the scalar work inside every
//! kernel: an operator is a zero-memory struct implementing one of the traits
//! in this module, and the kernels are generic over it, so the scalar
//! operations inline into the inner loops.  The main advantage of this
//! approach is that one can work with infinitely many algebras, in principle,
//! without defining infinitely many types.

pub mod binary_operator;
pub mod unary_operator;
pub mod monoid;
pub mod semiring;
pub mod accumulate;
