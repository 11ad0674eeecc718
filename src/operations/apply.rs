//! Apply a unary operator to every stored entry.
//!
//! `t[i] = op( u[i] )` for each stored `i`; the structure is unchanged, only
//! values map.  Combined with the pipeline this is also how one clears or
//! rescales a masked region in place.

use crate::algebra::accumulate::Accumulator;
use crate::algebra::unary_operator::UnaryOp;
use crate::containers::matrix::Matrix;
use crate::containers::vector::Vector;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_matrix_mask, check_vector_mask,
    write_with_mask_matrix, write_with_mask_vector,
};
use crate::views::mask::{MatrixMask, VectorMask};


/// `w<mask> = accum( w, op( u ) )`.
pub fn apply_vector< T1, T2, M, Acc, Op >(
    w:       &mut Vector< T2 >,
    mask:    &M,
    accum:   &Acc,
    op:      &Op,
    u:       &Vector< T1 >,
    replace: bool,
) -> Result< (), Error >
    where   T1:  Clone,
            T2:  Clone,
            M:   VectorMask,
            Acc: Accumulator< T2 >,
            Op:  UnaryOp< T1, T2 >,
{
    check_vector_mask( mask, w.size(), "apply: failed size(w) == size(mask) check" )?;
    check_dimension( u.size(), w.size(), "apply: failed size(w) == size(u) check" )?;

    let t: Vec<(Index, T2)> = u.iter()
                                .map( | ( index, value ) | ( *index, op.apply( value.clone() ) ) )
                                .collect();

    let z = accum.accumulate( w.contents(), t );
    write_with_mask_vector( w, z, mask, replace );
    Ok(())
}

/// `C<mask> = accum( C, op( A ) )`, row by row.
pub fn apply_matrix< T2, M, Acc, Op, Mat >(
    c:       &mut Matrix< T2 >,
    mask:    &M,
    accum:   &Acc,
    op:      &Op,
    a:       &Mat,
    replace: bool,
) -> Result< (), Error >
    where   T2:  Clone,
            M:   MatrixMask,
            Acc: Accumulator< T2 >,
            Mat: MatrixRows,
            Op:  UnaryOp< Mat::Scalar, T2 >,
{
    check_matrix_mask( mask, c.nrows(), c.ncols(),
                       "apply: failed shape(C) == shape(mask) check" )?;
    check_dimension( a.nrows(), c.nrows(), "apply: failed nrows(C) == nrows(A) check" )?;
    check_dimension( a.ncols(), c.ncols(), "apply: failed ncols(C) == ncols(A) check" )?;

    let z_rows: Vec< Vec<(Index, T2)> > =
        ( 0 .. c.nrows() )
            .map( | row | {
                let t_row: Vec<(Index, T2)> =
                    a.view_row( row )
                        .iter()
                        .map( | ( col, value ) | ( *col, op.apply( value.clone() ) ) )
                        .collect();
                accum.accumulate( c.row( row ), t_row )
            })
            .collect();
    write_with_mask_matrix( c, z_rows, mask, replace );
    Ok(())
}
