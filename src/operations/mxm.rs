//! Matrix-matrix multiply: `C<mask> = accum( C, A ⊕.⊗ B )`.

use crate::algebra::accumulate::Accumulator;
use crate::algebra::semiring::Semiring;
use crate::containers::matrix::Matrix;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_matrix_mask, write_with_mask_matrix,
};
use crate::views::mask::MatrixMask;


/// Multiply two matrices over a semiring, row by row (Gustavson).
///
/// For each row `i` of `a`, the stored entries `a[i][k]` scatter the matching
/// rows of `b` into a dense accumulator: `t[i][j] ⊕= a[i][k] ⊗ b[k][j]`.
/// An entry `(i, j)` is emitted iff at least one `k` contributed, so a fold
/// landing on the additive identity is still stored.
///
/// Either operand may be an owning matrix or a transpose view.
pub fn mxm< T3, M, Acc, SR, MatA, MatB >(
    c:        &mut Matrix< T3 >,
    mask:     &M,
    accum:    &Acc,
    semiring: &SR,
    a:        &MatA,
    b:        &MatB,
    replace:  bool,
) -> Result< (), Error >
    where   T3:   Clone,
            M:    MatrixMask,
            Acc:  Accumulator< T3 >,
            MatA: MatrixRows,
            MatB: MatrixRows,
            SR:   Semiring< MatA::Scalar, MatB::Scalar, T3 >,
{
    check_matrix_mask( mask, c.nrows(), c.ncols(),
                       "mxm: failed shape(C) == shape(mask) check" )?;
    check_dimension( a.nrows(), c.nrows(), "mxm: failed nrows(C) == nrows(A) check" )?;
    check_dimension( b.ncols(), c.ncols(), "mxm: failed ncols(C) == ncols(B) check" )?;
    check_dimension( b.nrows(), a.ncols(), "mxm: failed ncols(A) == nrows(B) check" )?;

    // one dense scatter workspace, reused across rows
    let mut workspace: Vec< Option< T3 > > = ( 0 .. b.ncols() ).map( | _ | None ).collect();
    let mut t_rows: Vec< Vec<(Index, T3)> > = Vec::with_capacity( a.nrows() );

    for row_index in 0 .. a.nrows() {
        let mut touched: Vec< Index > = Vec::new();
        let a_row = a.view_row( row_index );
        for ( k, a_value ) in a_row.iter() {
            let b_row = b.view_row( *k );
            for ( col, b_value ) in b_row.iter() {
                let product = semiring.multiply( a_value.clone(), b_value.clone() );
                let sum = match workspace[ *col ].take() {
                    None            => {
                        touched.push( *col );
                        semiring.add( semiring.zero(), product )
                    }
                    Some( partial ) => semiring.add( partial, product ),
                };
                workspace[ *col ] = Some( sum );
            }
        }
        touched.sort_unstable();
        let mut t_row: Vec<(Index, T3)> = Vec::with_capacity( touched.len() );
        for col in touched {
            if let Some( value ) = workspace[ col ].take() {
                t_row.push( ( col, value ) );
            }
        }
        t_rows.push( t_row );
    }

    let z_rows: Vec< Vec<(Index, T3)> > =
        t_rows.into_iter()
            .enumerate()
            .map( | ( row_index, t_row ) | accum.accumulate( c.row( row_index ), t_row ) )
            .collect();
    write_with_mask_matrix( c, z_rows, mask, replace );
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::accumulate::NoAccumulate;
    use crate::algebra::binary_operator::Plus;
    use crate::algebra::semiring::{ArithmeticSemiring, Semiring};
    use crate::operations::helpers::dot;
    use crate::utilities::random::randgen_sparse_matrix;
    use crate::views::mask::NoMask;
    use crate::views::transpose::transpose;


    // dot-product-per-cell reference, for cross-checking the scatter kernel
    fn naive_mxm( a: &Matrix<f64>, b: &Matrix<f64> ) -> Matrix<f64> {
        let semiring    =   ArithmeticSemiring::<f64>::new();
        let b_t         =   transpose( b );
        let mut product =   Matrix::new( a.nrows(), b.ncols() );
        for row in 0 .. a.nrows() {
            for col in 0 .. b.ncols() {
                let b_col = b_t.view_row( col );
                if let Some( value ) = dot( &semiring, a.row( row ), &b_col ) {
                    product.set_element( row, col, value ).unwrap();
                }
            }
        }
        product
    }

    #[test]
    fn test_mxm_known_product() {
        let a       =   Matrix::from_dense_with_zero(
                            vec![ vec![ 1, 2 ],
                                  vec![ 0, 3 ] ],
                            0,
                        ).unwrap();
        let b       =   Matrix::from_dense_with_zero(
                            vec![ vec![ 4, 0 ],
                                  vec![ 5, 6 ] ],
                            0,
                        ).unwrap();
        let mut c   =   Matrix::new( 2, 2 );

        mxm( &mut c, &NoMask::new(), &NoAccumulate::new(),
             &ArithmeticSemiring::<i64>::new(), &a, &b, false ).unwrap();

        assert_eq!( c.row( 0 ), &[ (0, 14), (1, 12) ] );
        assert_eq!( c.row( 1 ), &[ (0, 15), (1, 18) ] );
    }

    #[test]
    fn test_mxm_bad_dimensions() {
        let a       =   Matrix::<i64>::new( 2, 3 );
        let b       =   Matrix::<i64>::new( 4, 2 ); // inner dimensions disagree
        let mut c   =   Matrix::<i64>::new( 2, 2 );
        let before  =   c.clone();

        let outcome =   mxm( &mut c, &NoMask::new(), &NoAccumulate::new(),
                             &ArithmeticSemiring::<i64>::new(), &a, &b, false );
        assert!( matches!( outcome, Err( Error::DimensionMismatch( _ ) ) ) );
        assert_eq!( before, c );
    }

    #[test]
    fn test_mxm_agrees_with_naive_reference() {
        for trial in 0 .. 8 {
            let a   =   randgen_sparse_matrix( 5, 7, 0.4, trial );
            let b   =   randgen_sparse_matrix( 7, 4, 0.4, trial + 50 );

            let mut c   =   Matrix::new( 5, 4 );
            mxm( &mut c, &NoMask::new(), &NoAccumulate::new(),
                 &ArithmeticSemiring::<f64>::new(), &a, &b, false ).unwrap();

            assert_eq!( c, naive_mxm( &a, &b ) );
        }
    }

    #[test]
    fn test_mxm_masked_merge_and_accumulate() {
        let ones    =   Matrix::from_dense( vec![ vec![ 1, 1 ], vec![ 1, 1 ] ] ).unwrap();
        let mask    =   Matrix::from_tuples( 2, 2, vec![ (0, 0, 1), (1, 1, 1) ] ).unwrap();

        let mut c   =   Matrix::from_dense( vec![ vec![ 10, 10 ], vec![ 10, 10 ] ] ).unwrap();
        mxm( &mut c, &mask, &Plus::<i64>::new(),
             &ArithmeticSemiring::<i64>::new(), &ones, &ones, false ).unwrap();

        // on-diagonal (in mask): 10 + 2; off-diagonal: untouched
        assert_eq!( c.row( 0 ), &[ (0, 12), (1, 10) ] );
        assert_eq!( c.row( 1 ), &[ (0, 10), (1, 12) ] );

        let mut c   =   Matrix::from_dense( vec![ vec![ 10, 10 ], vec![ 10, 10 ] ] ).unwrap();
        mxm( &mut c, &mask, &NoAccumulate::new(),
             &ArithmeticSemiring::<i64>::new(), &ones, &ones, true ).unwrap();

        // replace drops everything outside the mask
        assert_eq!( c.row( 0 ), &[ (0, 2) ] );
        assert_eq!( c.row( 1 ), &[ (1, 2) ] );
    }

    #[test]
    fn test_mxm_transposed_operand() {
        let a       =   Matrix::from_tuples( 3, 2, vec![ (0, 0, 2), (2, 1, 3) ] ).unwrap();
        let b       =   Matrix::from_tuples( 3, 2, vec![ (0, 1, 5), (2, 0, 7) ] ).unwrap();
        let mut c   =   Matrix::new( 2, 2 );

        // C = Aᵀ B
        mxm( &mut c, &NoMask::new(), &NoAccumulate::new(),
             &ArithmeticSemiring::<i64>::new(), &transpose( &a ), &b, false ).unwrap();

        assert_eq!( c.row( 0 ), &[ (1, 10) ] );
        assert_eq!( c.row( 1 ), &[ (0, 21) ] );
    }

    #[test]
    fn test_mxm_stored_zero_emits_entry() {
        // a stored zero times a stored value contributes an explicit zero
        let a       =   Matrix::from_tuples( 1, 1, vec![ (0, 0, 0) ] ).unwrap();
        let b       =   Matrix::from_tuples( 1, 1, vec![ (0, 0, 9) ] ).unwrap();
        let mut c   =   Matrix::new( 1, 1 );

        mxm( &mut c, &NoMask::new(), &NoAccumulate::new(),
             &ArithmeticSemiring::<i64>::new(), &a, &b, false ).unwrap();

        let semiring = ArithmeticSemiring::<i64>::new();
        assert_eq!( c.row( 0 ), &[ (0, semiring.zero()) ] );
        assert_eq!( 1, c.nvals() );
    }
}
