//! Scatter stored entries through an index list: the dual of `extract`.
//!
//! `t[ indices[i] ] = u[i]` builds the intermediate, which then runs the
//! ordinary accumulate/mask/replace pipeline.  In particular, with `NoMask`
//! and [`NoAccumulate`](crate::algebra::accumulate::NoAccumulate) the output
//! is rebuilt from the scatter alone; pass an accumulator (e.g.
//! [`Second`](crate::algebra::binary_operator::Second)) or a mask to leave
//! positions outside the scatter untouched.
//!
//! Index lists must not name the same target twice; duplicates are the
//! caller's responsibility.

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


/// `c<mask>[indices] = accum( c[indices], u )`.
pub fn assign_vector< T, M, Acc >(
    c:       &mut Vector< T >,
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
    check_vector_mask( mask, c.size(), "assign: failed size(c) == size(mask) check" )?;
    check_dimension( u.size(), indices.len(), "assign: failed size(u) == len(indices) check" )?;
    check_indices( indices, c.size() )?;

    let mut t: Vec<(Index, T)> = u.iter()
                                    .map( | ( i, value ) | ( indices[ *i ], value.clone() ) )
                                    .collect();
    t.sort_by( | a, b | a.0.cmp( &b.0 ) );

    let z = accum.accumulate( c.contents(), t );
    write_with_mask_vector( c, z, mask, replace );
    Ok(())
}

/// `C<mask>[row_indices, col_indices] = accum( …, A )`.
pub fn assign_matrix< T, M, Acc, Mat >(
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
                       "assign: failed shape(C) == shape(mask) check" )?;
    check_dimension( a.nrows(), row_indices.len(),
                     "assign: failed nrows(A) == len(row_indices) check" )?;
    check_dimension( a.ncols(), col_indices.len(),
                     "assign: failed ncols(A) == len(col_indices) check" )?;
    check_indices( row_indices, c.nrows() )?;
    check_indices( col_indices, c.ncols() )?;

    // scatter rows of A onto their targets; untargeted rows scatter nothing
    let mut t_rows: Vec< Vec<(Index, T)> > =
        ( 0 .. c.nrows() ).map( | _ | Vec::new() ).collect();
    for ( source_row, &target_row ) in row_indices.iter().enumerate() {
        let source  =   a.view_row( source_row );
        let mut t_row: Vec<(Index, T)> =
            source.iter()
                .map( | ( col, value ) | ( col_indices[ *col ], value.clone() ) )
                .collect();
        t_row.sort_by( | x, y | x.0.cmp( &y.0 ) );
        t_rows[ target_row ] = t_row;
    }

    let z_rows: Vec< Vec<(Index, T)> > =
        t_rows.into_iter()
            .enumerate()
            .map( | ( row, t_row ) | accum.accumulate( c.row( row ), t_row ) )
            .collect();
    write_with_mask_matrix( c, z_rows, mask, replace );
    Ok(())
}
