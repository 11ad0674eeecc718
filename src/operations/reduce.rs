//! Monoid folds over stored entries.
//!
//! Three shapes: a vector to a scalar, a matrix row-wise to a vector, and a
//! matrix to a scalar.  Folds always start from the **monoid identity**,
//! never from a container's implicit zero, so e.g. a min-fold over an empty
//! structure yields `T::max_value()`, and stored zeros fold in as ordinary
//! values.

use crate::algebra::accumulate::Accumulator;
use crate::algebra::monoid::Monoid;
use crate::containers::vector::Vector;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_vector_mask, write_with_mask_vector,
};
use crate::views::mask::VectorMask;


/// `s = accum( s, ⊕ u[i] )` over every stored entry of `u`.
///
/// An empty structure folds to the monoid identity.
pub fn reduce_vector< T, Acc, Mo >(
    s:      &mut T,
    accum:  &Acc,
    monoid: &Mo,
    u:      &Vector< T >,
)
    where   T:   Clone,
            Acc: Accumulator< T >,
            Mo:  Monoid< T >,
{
    let folded = u.iter().fold(
        monoid.identity(),
        | partial, ( _, value ) | monoid.apply( partial, value.clone() ),
    );
    *s = accum.accumulate_scalar( s.clone(), folded );
}

/// `s = accum( s, ⊕ a[i][j] )` over every stored entry of `a`.
pub fn reduce_matrix< T, Acc, Mo, Mat >(
    s:      &mut T,
    accum:  &Acc,
    monoid: &Mo,
    a:      &Mat,
)
    where   T:   Clone,
            Acc: Accumulator< T >,
            Mo:  Monoid< T >,
            Mat: MatrixRows< Scalar = T >,
{
    let mut folded = monoid.identity();
    for row in 0 .. a.nrows() {
        for ( _, value ) in a.view_row( row ).iter() {
            folded = monoid.apply( folded, value.clone() );
        }
    }
    *s = accum.accumulate_scalar( s.clone(), folded );
}

/// `w<mask> = accum( w, ⊕_j a[i][j] )`: fold each row of `a` into position
/// `i` of `w`.
///
/// A row with no stored entries produces no output entry; a non-empty row
/// always does, even when its fold lands on the identity value.
pub fn reduce_matrix_rows< T, M, Acc, Mo, Mat >(
    w:       &mut Vector< T >,
    mask:    &M,
    accum:   &Acc,
    monoid:  &Mo,
    a:       &Mat,
    replace: bool,
) -> Result< (), Error >
    where   T:   Clone,
            M:   VectorMask,
            Acc: Accumulator< T >,
            Mo:  Monoid< T >,
            Mat: MatrixRows< Scalar = T >,
{
    check_vector_mask( mask, w.size(), "reduce: failed size(w) == size(mask) check" )?;
    check_dimension( a.nrows(), w.size(), "reduce: failed size(w) == nrows(A) check" )?;

    let mut t: Vec<(Index, T)> = Vec::new();
    for row in 0 .. a.nrows() {
        let entries = a.view_row( row );
        if entries.is_empty() { continue }
        let folded = entries.iter().fold(
            monoid.identity(),
            | partial, ( _, value ) | monoid.apply( partial, value.clone() ),
        );
        t.push( ( row, folded ) );
    }

    let z = accum.accumulate( w.contents(), t );
    write_with_mask_vector( w, z, mask, replace );
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::accumulate::NoAccumulate;
    use crate::algebra::binary_operator::Plus;
    use crate::algebra::monoid::{MinMonoid, PlusMonoid};
    use crate::containers::matrix::Matrix;
    use crate::views::mask::NoMask;


    #[test]
    fn test_reduce_vector() {
        let u       =   Vector::from_dense_with_zero( vec![ 1, 0, 3, 4 ], 0 );
        let mut s   =   0;
        reduce_vector( &mut s, &NoAccumulate::new(), &PlusMonoid::<i64>::new(), &u );
        assert_eq!( 8, s );

        // with an accumulator, the fold combines with the prior value
        reduce_vector( &mut s, &Plus::<i64>::new(), &PlusMonoid::<i64>::new(), &u );
        assert_eq!( 16, s );
    }

    #[test]
    fn test_reduce_empty_is_identity() {
        let u       =   Vector::<i64>::new( 5 );
        let mut s   =   99;
        reduce_vector( &mut s, &NoAccumulate::new(), &MinMonoid::<i64>::new(), &u );
        assert_eq!( i64::MAX, s );
    }

    #[test]
    fn test_reduce_min_sees_stored_zero() {
        // the stored zero participates in the fold as an ordinary value
        let u       =   Vector::from_dense( vec![ 0, 5, 7 ] );
        let mut s   =   99;
        reduce_vector( &mut s, &NoAccumulate::new(), &MinMonoid::<i64>::new(), &u );
        assert_eq!( 0, s );
    }

    #[test]
    fn test_reduce_matrix() {
        let a       =   Matrix::from_tuples( 2, 2, vec![ (0, 0, 2), (1, 1, 3) ] ).unwrap();
        let mut s   =   0;
        reduce_matrix( &mut s, &NoAccumulate::new(), &PlusMonoid::<i64>::new(), &a );
        assert_eq!( 5, s );
    }

    #[test]
    fn test_reduce_matrix_rows() {
        let a       =   Matrix::from_dense_with_zero(
                            vec![ vec![ 1, 2 ],
                                  vec![ 0, 0 ],
                                  vec![ 0, 7 ] ],
                            0,
                        ).unwrap();
        let mut w   =   Vector::new( 3 );

        reduce_matrix_rows( &mut w, &NoMask::new(), &NoAccumulate::new(),
                            &PlusMonoid::<i64>::new(), &a, false ).unwrap();

        // the empty middle row produces no entry
        assert_eq!( w.contents(), &[ (0, 3), (2, 7) ] );
    }

    #[test]
    fn test_reduce_matrix_rows_bad_dimensions() {
        let a       =   Matrix::<i64>::new( 3, 2 );
        let mut w   =   Vector::<i64>::new( 2 );
        let outcome =   reduce_matrix_rows( &mut w, &NoMask::new(), &NoAccumulate::new(),
                                            &PlusMonoid::<i64>::new(), &a, false );
        assert!( matches!( outcome, Err( Error::DimensionMismatch( _ ) ) ) );
    }
}
