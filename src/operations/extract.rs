//! Gather stored entries through an index list: `w = u[indices]`,
//! `C = A[row_indices, col_indices]`.

use crate::algebra::accumulate::Accumulator;
use crate::containers::matrix::Matrix;
use crate::containers::vector::Vector;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_indices, check_matrix_mask, check_vector_mask,
    write_with_mask_matrix, write_with_mask_vector,
};
use crate::views::mask::{MatrixMask, VectorMask};


/// `w<mask> = accum( w, u[indices] )`.
///
/// `t[i] = u[ indices[i] ]` wherever that position of `u` stores a value.
/// The output size must equal `indices.len()`; every index must lie inside
/// `u`.
///
/// # Examples
///
/// ```
/// use garnet::algebra::accumulate::NoAccumulate;
/// use garnet::containers::vector::Vector;
/// use garnet::operations::extract::extract_vector;
/// use garnet::views::mask::NoMask;
///
/// let u = Vector::from_dense_with_zero( vec![ 0, 10, 20, 30 ], 0 );
/// let mut w = Vector::new( 3 );
///
/// extract_vector( &mut w, &NoMask::new(), &NoAccumulate::new(),
///                 &u, &[ 3, 0, 1 ], false ).unwrap();
///
/// // u[0] stores nothing, so position 1 of the result stays absent
/// assert_eq!( w.contents(), &[ (0, 30), (2, 10) ] );
/// ```
pub fn extract_vector< T, M, Acc >(
    w:       &mut Vector< T >,
    mask:    &M,
    accum:   &Acc,
    u:       &Vector< T >,
    indices: &[Index],
    replace: bool,
) -> Result< (), Error >
    where   T:   Clone,
            M:   VectorMask,
            Acc: Accumulator< T >,
{
    check_vector_mask( mask, w.size(), "extract: failed size(w) == size(mask) check" )?;
    check_dimension( indices.len(), w.size(), "extract: failed size(w) == len(indices) check" )?;
    check_indices( indices, u.size() )?;

    let mut t: Vec<(Index, T)> = Vec::new();
    for ( output_index, &source_index ) in indices.iter().enumerate() {
        if let Some( value ) = u.get( source_index ) {
            t.push( ( output_index, value.clone() ) );
        }
    }

    let z = accum.accumulate( w.contents(), t );
    write_with_mask_vector( w, z, mask, replace );
    Ok(())
}

/// `C<mask> = accum( C, A[row_indices, col_indices] )`.
///
/// `t[i][j] = a[ row_indices[i] ][ col_indices[j] ]` wherever stored.  The
/// output shape must be `len(row_indices) × len(col_indices)`.
pub fn extract_submatrix< T, M, Acc, Mat >(
    c:           &mut Matrix< T >,
    mask:        &M,
    accum:       &Acc,
    a:           &Mat,
    row_indices: &[Index],
    col_indices: &[Index],
    replace:     bool,
) -> Result< (), Error >
    where   T:   Clone,
            M:   MatrixMask,
            Acc: Accumulator< T >,
            Mat: MatrixRows< Scalar = T >,
{
    check_matrix_mask( mask, c.nrows(), c.ncols(),
                       "extract: failed shape(C) == shape(mask) check" )?;
    check_dimension( row_indices.len(), c.nrows(),
                     "extract: failed nrows(C) == len(row_indices) check" )?;
    check_dimension( col_indices.len(), c.ncols(),
                     "extract: failed ncols(C) == len(col_indices) check" )?;
    check_indices( row_indices, a.nrows() )?;
    check_indices( col_indices, a.ncols() )?;

    let z_rows: Vec< Vec<(Index, T)> > =
        row_indices.iter()
            .enumerate()
            .map( | ( output_row, &source_row ) | {
                let source  =   a.view_row( source_row );
                let mut t_row: Vec<(Index, T)> = Vec::new();
                for ( output_col, &source_col ) in col_indices.iter().enumerate() {
                    if let Ok( pos ) = source.binary_search_by( | e | e.0.cmp( &source_col ) ) {
                        t_row.push( ( output_col, source[ pos ].1.clone() ) );
                    }
                }
                accum.accumulate( c.row( output_row ), t_row )
            })
            .collect();
    write_with_mask_matrix( c, z_rows, mask, replace );
    Ok(())
}
