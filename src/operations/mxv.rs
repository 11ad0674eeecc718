//! Matrix-vector multiply: `w<mask> = accum( w, A ⊕.⊗ u )`.

use crate::algebra::accumulate::Accumulator;
use crate::algebra::semiring::Semiring;
use crate::containers::vector::Vector;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_vector_mask, dot, write_with_mask_vector,
};
use crate::views::mask::VectorMask;


/// Multiply a matrix by a column vector over a semiring.
///
/// Row `i` of the intermediate is the sparse dot product of row `i` of `a`
/// against `u`: the semiring's multiply combines matching entries and its
/// additive monoid folds the products, starting from the additive identity.
/// An entry is emitted for row `i` iff the structural intersection of that
/// row with `u` is non-empty.  Presence is driven by structure, so a fold
/// that lands on the identity value still stores it.
///
/// `a` may be an owning [`Matrix`](crate::containers::matrix::Matrix) or a
/// [`TransposeView`](crate::views::transpose::TransposeView).
///
/// # Examples
///
/// ```
/// use garnet::algebra::accumulate::NoAccumulate;
/// use garnet::algebra::semiring::ArithmeticSemiring;
/// use garnet::containers::matrix::Matrix;
/// use garnet::containers::vector::Vector;
/// use garnet::operations::mxv::mxv;
/// use garnet::views::mask::NoMask;
///
/// let a = Matrix::from_dense_with_zero(
///     vec![ vec![ 0, 0 ],
///           vec![ 1, 1 ] ],
///     0,
/// ).unwrap();
/// let u = Vector::from_dense_with_zero( vec![ 1, 1 ], 0 );
/// let mut w = Vector::new( 2 );
///
/// mxv( &mut w, &NoMask::new(), &NoAccumulate::new(),
///      &ArithmeticSemiring::<i64>::new(), &a, &u, false ).unwrap();
///
/// // row 0 of A is empty, so position 0 stays absent
/// assert_eq!( w.contents(), &[ (1, 2) ] );
/// ```
pub fn mxv< T2, T3, M, Acc, SR, Mat >(
    w:        &mut Vector< T3 >,
    mask:     &M,
    accum:    &Acc,
    semiring: &SR,
    a:        &Mat,
    u:        &Vector< T2 >,
    replace:  bool,
) -> Result< (), Error >
    where   T2:  Clone,
            T3:  Clone,
            M:   VectorMask,
            Acc: Accumulator< T3 >,
            Mat: MatrixRows,
            SR:  Semiring< Mat::Scalar, T2, T3 >,
{
    check_vector_mask( mask, w.size(), "mxv: failed size(w) == size(mask) check" )?;
    check_dimension( a.nrows(), w.size(), "mxv: failed size(w) == nrows(A) check" )?;
    check_dimension( u.size(), a.ncols(), "mxv: failed size(u) == ncols(A) check" )?;

    // the dot-product sweep over the rows of A
    let mut t: Vec<(Index, T3)> = Vec::new();
    if a.nvals() > 0 && u.nvals() > 0 {
        for row_index in 0 .. w.size() {
            let a_row = a.view_row( row_index );
            if a_row.is_empty() { continue }
            if let Some( value ) = dot( semiring, &a_row, u.contents() ) {
                t.push( ( row_index, value ) );
            }
        }
    }

    let z = accum.accumulate( w.contents(), t );
    write_with_mask_vector( w, z, mask, replace );
    Ok(())
}
