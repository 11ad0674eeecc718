//! Materialize a transpose: `C<mask> = accum( C, Aᵀ )`.
//!
//! The lazy counterpart is the
//! [transpose view](crate::views::transpose::transpose), which any kernel
//! can consume without copying; this operation is for when the transpose
//! should be *stored*, optionally combined with the usual accumulate and
//! mask stages.

use crate::algebra::accumulate::Accumulator;
use crate::containers::matrix::Matrix;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_matrix_mask, write_with_mask_matrix,
};
use crate::views::mask::MatrixMask;
use crate::views::transpose::TransposeView;


/// Write the transpose of `a` into `c` through the pipeline.
pub fn transpose< T, M, Acc, Mat >(
    c:       &mut Matrix< T >,
    mask:    &M,
    accum:   &Acc,
    a:       &Mat,
    replace: bool,
) -> Result< (), Error >
    where   T:   Clone,
            M:   MatrixMask,
            Acc: Accumulator< T >,
            Mat: MatrixRows< Scalar = T >,
{
    check_matrix_mask( mask, c.nrows(), c.ncols(),
                       "transpose: failed shape(C) == shape(mask) check" )?;
    check_dimension( a.ncols(), c.nrows(), "transpose: failed nrows(C) == ncols(A) check" )?;
    check_dimension( a.nrows(), c.ncols(), "transpose: failed ncols(C) == nrows(A) check" )?;

    let flipped = TransposeView::new( a );
    let z_rows: Vec< Vec<(Index, T)> > =
        ( 0 .. c.nrows() )
            .map( | row | {
                let t_row = flipped.view_row( row ).into_owned();
                accum.accumulate( c.row( row ), t_row )
            })
            .collect();
    write_with_mask_matrix( c, z_rows, mask, replace );
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::accumulate::NoAccumulate;
    use crate::algebra::binary_operator::Plus;
    use crate::utilities::random::randgen_sparse_matrix;
    use crate::views::mask::NoMask;


    #[test]
    fn test_transpose_materializes() {
        let a       =   Matrix::from_tuples( 2, 3, vec![ (0, 2, 5), (1, 0, 3) ] ).unwrap();
        let mut c   =   Matrix::new( 3, 2 );

        transpose( &mut c, &NoMask::new(), &NoAccumulate::new(), &a, false ).unwrap();

        assert_eq!( c.row( 0 ), &[ (1, 3) ] );
        assert!( c.row( 1 ).is_empty() );
        assert_eq!( c.row( 2 ), &[ (0, 5) ] );
    }

    #[test]
    fn test_transpose_twice_is_original() {
        let a           =   randgen_sparse_matrix( 5, 7, 0.4, 11 );
        let mut once    =   Matrix::new( 7, 5 );
        transpose( &mut once, &NoMask::new(), &NoAccumulate::new(), &a, false ).unwrap();
        let mut twice   =   Matrix::new( 5, 7 );
        transpose( &mut twice, &NoMask::new(), &NoAccumulate::new(), &once, false ).unwrap();
        assert_eq!( a, twice );
    }

    #[test]
    fn test_transpose_with_accum() {
        let a       =   Matrix::from_tuples( 2, 2, vec![ (0, 1, 5) ] ).unwrap();
        let mut c   =   Matrix::from_dense( vec![ vec![ 1, 1 ], vec![ 1, 1 ] ] ).unwrap();

        transpose( &mut c, &NoMask::new(), &Plus::<i64>::new(), &a, false ).unwrap();

        assert_eq!( c.row( 0 ), &[ (0, 1), (1, 1) ] );
        assert_eq!( c.row( 1 ), &[ (0, 6), (1, 1) ] );
    }

    #[test]
    fn test_transpose_bad_dimensions() {
        let a       =   Matrix::<i64>::new( 2, 3 );
        let mut c   =   Matrix::<i64>::new( 2, 3 ); // should be 3 × 2
        let outcome =   transpose( &mut c, &NoMask::new(), &NoAccumulate::new(), &a, false );
        assert!( matches!( outcome, Err( Error::DimensionMismatch( _ ) ) ) );
    }
}
