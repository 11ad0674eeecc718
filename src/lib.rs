//! Sparse linear algebra over semirings: you pick the algebra, GARNET does
//! the rest.
//!
//! # Start here
//!
//! GARNET expresses graph algorithms as operations on sparse matrices and
//! vectors, evaluated over an algebra you choose.  Every operation (the
//! multiplies `mxv`/`vxm`/`mxm`, the element-wise combinators, `extract`,
//! `assign`, `apply`, `reduce`, `transpose`) runs one shared pipeline:
//! compute a sparse intermediate with your semiring or operator, combine it
//! with the output's current contents through an optional *accumulator*, and
//! commit the result through an optional *mask* with replace or merge
//! semantics.
//!
//! # Containers and stored zeros
//!
//! A [`Vector`](containers::vector::Vector) or
//! [`Matrix`](containers::matrix::Matrix) stores an explicit set of entries;
//! a position either holds a stored value or is absent.  A stored value may
//! *be* zero, and the distinction is observable: stored zeros count toward
//! `nvals` and survive pass-through operations, and a mask treats them as
//! present but false.  Loading from dense data decides which of the two you
//! get:
//!
//! ```
//! use garnet::containers::vector::Vector;
//!
//! // drop values equal to the implicit zero...
//! let sparse = Vector::from_dense_with_zero( vec![ 0, 0, 12, 7 ], 0 );
//! assert_eq!( 2, sparse.nvals() );
//!
//! // ...or store everything, explicit zeros included
//! let stored = Vector::from_dense( vec![ 0, 0, 12, 7 ] );
//! assert_eq!( 4, stored.nvals() );
//! ```
//!
//! # The algebra layer
//!
//! Scalar work is delegated to zero-memory *operator objects*:
//! [binary operators](algebra::binary_operator),
//! [monoids](algebra::monoid) (an operator plus its identity), and
//! [semirings](algebra::semiring) (an additive monoid plus a multiplicative
//! operator).  The stock semirings cover arithmetic, logical, min-plus, and
//! max-plus, and
//! [`CompositeSemiring`](algebra::semiring::CompositeSemiring) assembles new
//! ones from parts.  Because operations are generic over the operator type,
//! the scalar calls inline into the kernels' inner loops.
//!
//! ```
//! use garnet::algebra::accumulate::NoAccumulate;
//! use garnet::algebra::semiring::ArithmeticSemiring;
//! use garnet::containers::matrix::Matrix;
//! use garnet::containers::vector::Vector;
//! use garnet::operations::mxv::mxv;
//! use garnet::views::mask::NoMask;
//!
//! let a = Matrix::from_dense_with_zero(
//!     vec![ vec![ 0, 0 ],
//!           vec![ 1, 1 ] ],
//!     0,
//! ).unwrap();
//! let u = Vector::from_dense_with_zero( vec![ 1, 1 ], 0 );
//! let mut w = Vector::new( 2 );
//!
//! mxv( &mut w, &NoMask::new(), &NoAccumulate::new(),
//!      &ArithmeticSemiring::<i64>::new(), &a, &u, false ).unwrap();
//!
//! // row 0 of A stores nothing, so w[0] is absent, not zero
//! assert_eq!( w.contents(), &[ (1, 2) ] );
//! ```
//!
//! # Masks, accumulators, replace
//!
//! The last two arguments of most operations control the write-back:
//!
//! * the **mask** admits writes at its truthy stored positions
//!   ([`NoMask`](views::mask::NoMask) admits everything;
//!   [`complement`](views::complement::complement) flips any mask, and a
//!   stored zero counts as present-but-false);
//! * the **accumulator** decides whether the computed intermediate replaces
//!   the output's contents
//!   ([`NoAccumulate`](algebra::accumulate::NoAccumulate)) or merges with
//!   them through a binary operator;
//! * **replace** decides the fate of output entries *outside* the mask:
//!   cleared when `true`, kept when `false`.
//!
//! ```
//! use garnet::algebra::accumulate::NoAccumulate;
//! use garnet::algebra::binary_operator::Times;
//! use garnet::containers::vector::Vector;
//! use garnet::operations::ewise_mult::ewise_mult_vector;
//!
//! let u    = Vector::from_dense_with_zero( vec![ 0.0, 0.0, 12.0, 7.0 ], 0.0 );
//! let v    = Vector::from_dense_with_zero( vec![ 2.0, 2.0,  2.0, 2.0 ], 0.0 );
//! let mask = Vector::from_dense_with_zero( vec![ 0.0, 1.0,  1.0, 0.0 ], 0.0 );
//!
//! let mut w = Vector::from_dense( vec![ 2.0, 2.0, 2.0, 2.0 ] );
//! ewise_mult_vector( &mut w, &mask, &NoAccumulate::new(),
//!                    &Times::<f64>::new(), &u, &v, false ).unwrap();
//!
//! // outside the mask w keeps its old entries; inside, position 1 clears
//! // (u stores nothing there) and position 2 takes the product
//! assert_eq!( w.contents(), &[ (0, 2.0), (2, 24.0), (3, 2.0) ] );
//! ```
//!
//! # Views
//!
//! [`transpose`](views::transpose::transpose) and
//! [`complement`](views::complement::complement) are non-owning, read-only
//! adapters: they borrow their subject without allocating, and they
//! implement the same read traits as owning containers, so they drop into
//! any kernel argument.  To *store* a transpose, use the
//! [materializing operation](operations::transpose::transpose) instead.
//!
//! # Errors
//!
//! Operations validate shapes before computing and never mutate their output
//! on failure; see [`error::Error`] for the taxonomy.

pub mod algebra;
pub mod containers;
pub mod error;
pub mod index;
pub mod operations;
pub mod utilities;
pub mod views;
