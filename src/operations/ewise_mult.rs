//! Element-wise multiply: entries at the *intersection* of the operands'
//! structures.
//!
//! Presence here is purely structural: `t[i] = op( u[i], v[i] )` exactly at
//! the positions stored in **both** operands, so a position absent from
//! either side stays absent no matter what values are involved.  The
//! operator may be a plain [`BinaryOp`] or a semiring lifted with
//! [`multiply_op`](crate::algebra::semiring::multiply_op).

use crate::algebra::accumulate::Accumulator;
use crate::algebra::binary_operator::BinaryOp;
use crate::containers::matrix::Matrix;
use crate::containers::vector::Vector;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_matrix_mask, check_vector_mask, ewise_intersection,
    write_with_mask_matrix, write_with_mask_vector,
};
use crate::views::mask::{MatrixMask, VectorMask};


/// `w<mask> = accum( w, u .⊗ v )`, with entries where both operands store.
///
/// # Examples
///
/// ```
/// use garnet::algebra::accumulate::NoAccumulate;
/// use garnet::algebra::binary_operator::Times;
/// use garnet::containers::vector::Vector;
/// use garnet::operations::ewise_mult::ewise_mult_vector;
/// use garnet::views::mask::NoMask;
///
/// let u = Vector::from_dense_with_zero( vec![ 0.0, 0.0, 12.0, 7.0 ], 0.0 );
/// let v = Vector::from_dense_with_zero( vec![ 2.0, 2.0, 2.0, 2.0 ], 0.0 );
/// let mut w = Vector::new( 4 );
///
/// ewise_mult_vector( &mut w, &NoMask::new(), &NoAccumulate::new(),
///                    &Times::<f64>::new(), &u, &v, false ).unwrap();
///
/// assert_eq!( w.contents(), &[ (2, 24.0), (3, 14.0) ] );
/// ```
pub fn ewise_mult_vector< T1, T2, T3, M, Acc, Op >(
    w:       &mut Vector< T3 >,
    mask:    &M,
    accum:   &Acc,
    op:      &Op,
    u:       &Vector< T1 >,
    v:       &Vector< T2 >,
    replace: bool,
) -> Result< (), Error >
    where   T1:  Clone,
            T2:  Clone,
            T3:  Clone,
            M:   VectorMask,
            Acc: Accumulator< T3 >,
            Op:  BinaryOp< T1, T2, T3 >,
{
    check_vector_mask( mask, w.size(), "eWiseMult: failed size(w) == size(mask) check" )?;
    check_dimension( u.size(), w.size(), "eWiseMult: failed size(w) == size(u) check" )?;
    check_dimension( v.size(), w.size(), "eWiseMult: failed size(w) == size(v) check" )?;

    let t = ewise_intersection( op, u.contents(), v.contents() );

    let z = accum.accumulate( w.contents(), t );
    write_with_mask_vector( w, z, mask, replace );
    Ok(())
}

/// `C<mask> = accum( C, A .⊗ B )`, row by row.
pub fn ewise_mult_matrix< T3, M, Acc, Op, MatA, MatB >(
    c:       &mut Matrix< T3 >,
    mask:    &M,
    accum:   &Acc,
    op:      &Op,
    a:       &MatA,
    b:       &MatB,
    replace: bool,
) -> Result< (), Error >
    where   T3:   Clone,
            M:    MatrixMask,
            Acc:  Accumulator< T3 >,
            MatA: MatrixRows,
            MatB: MatrixRows,
            Op:   BinaryOp< MatA::Scalar, MatB::Scalar, T3 >,
{
    check_matrix_mask( mask, c.nrows(), c.ncols(),
                       "eWiseMult: failed shape(C) == shape(mask) check" )?;
    check_dimension( a.nrows(), c.nrows(), "eWiseMult: failed nrows(C) == nrows(A) check" )?;
    check_dimension( a.ncols(), c.ncols(), "eWiseMult: failed ncols(C) == ncols(A) check" )?;
    check_dimension( b.nrows(), c.nrows(), "eWiseMult: failed nrows(C) == nrows(B) check" )?;
    check_dimension( b.ncols(), c.ncols(), "eWiseMult: failed ncols(C) == ncols(B) check" )?;

    let z_rows: Vec< Vec<(Index, T3)> > =
        ( 0 .. c.nrows() )
            .map( | row | {
                let t_row = ewise_intersection( op, &a.view_row( row ), &b.view_row( row ) );
                accum.accumulate( c.row( row ), t_row )
            })
            .collect();
    write_with_mask_matrix( c, z_rows, mask, replace );
    Ok(())
}
