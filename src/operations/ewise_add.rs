//! Element-wise add: entries at the *union* of the operands' structures.
//!
//! `t[i] = op( u[i], v[i] )` where both operands store an entry; where only
//! one side stores, its value is carried through unchanged.  Because
//! singletons pass through, the two input domains and the output domain
//! coincide here, unlike the intersection kernel.

use crate::algebra::accumulate::Accumulator;
use crate::algebra::binary_operator::BinaryOp;
use crate::containers::matrix::Matrix;
use crate::containers::vector::Vector;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_matrix_mask, check_vector_mask, ewise_union,
    write_with_mask_matrix, write_with_mask_vector,
};
use crate::views::mask::{MatrixMask, VectorMask};


/// `w<mask> = accum( w, u .⊕ v )`, with entries where either operand stores.
///
/// # Examples
///
/// ```
/// use garnet::algebra::accumulate::NoAccumulate;
/// use garnet::algebra::binary_operator::Plus;
/// use garnet::containers::vector::Vector;
/// use garnet::operations::ewise_add::ewise_add_vector;
/// use garnet::views::mask::NoMask;
///
/// let u = Vector::from_tuples( 4, vec![ (0, 1.0), (2, 2.0) ] ).unwrap();
/// let v = Vector::from_tuples( 4, vec![ (2, 10.0), (3, 3.0) ] ).unwrap();
/// let mut w = Vector::new( 4 );
///
/// ewise_add_vector( &mut w, &NoMask::new(), &NoAccumulate::new(),
///                   &Plus::<f64>::new(), &u, &v, false ).unwrap();
///
/// assert_eq!( w.contents(), &[ (0, 1.0), (2, 12.0), (3, 3.0) ] );
/// ```
pub fn ewise_add_vector< T, M, Acc, Op >(
    w:       &mut Vector< T >,
    mask:    &M,
    accum:   &Acc,
    op:      &Op,
    u:       &Vector< T >,
    v:       &Vector< T >,
    replace: bool,
) -> Result< (), Error >
    where   T:   Clone,
            M:   VectorMask,
            Acc: Accumulator< T >,
            Op:  BinaryOp< T, T, T >,
{
    check_vector_mask( mask, w.size(), "eWiseAdd: failed size(w) == size(mask) check" )?;
    check_dimension( u.size(), w.size(), "eWiseAdd: failed size(w) == size(u) check" )?;
    check_dimension( v.size(), w.size(), "eWiseAdd: failed size(w) == size(v) check" )?;

    let t = ewise_union( op, u.contents(), v.contents() );

    let z = accum.accumulate( w.contents(), t );
    write_with_mask_vector( w, z, mask, replace );
    Ok(())
}

/// `C<mask> = accum( C, A .⊕ B )`, row by row.
pub fn ewise_add_matrix< T, M, Acc, Op, MatA, MatB >(
    c:       &mut Matrix< T >,
    mask:    &M,
    accum:   &Acc,
    op:      &Op,
    a:       &MatA,
    b:       &MatB,
    replace: bool,
) -> Result< (), Error >
    where   T:    Clone,
            M:    MatrixMask,
            Acc:  Accumulator< T >,
            MatA: MatrixRows< Scalar = T >,
            MatB: MatrixRows< Scalar = T >,
            Op:   BinaryOp< T, T, T >,
{
    check_matrix_mask( mask, c.nrows(), c.ncols(),
                       "eWiseAdd: failed shape(C) == shape(mask) check" )?;
    check_dimension( a.nrows(), c.nrows(), "eWiseAdd: failed nrows(C) == nrows(A) check" )?;
    check_dimension( a.ncols(), c.ncols(), "eWiseAdd: failed ncols(C) == ncols(A) check" )?;
    check_dimension( b.nrows(), c.nrows(), "eWiseAdd: failed nrows(C) == nrows(B) check" )?;
    check_dimension( b.ncols(), c.ncols(), "eWiseAdd: failed ncols(C) == ncols(B) check" )?;

    let z_rows: Vec< Vec<(Index, T)> > =
        ( 0 .. c.nrows() )
            .map( | row | {
                let t_row = ewise_union( op, &a.view_row( row ), &b.view_row( row ) );
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
    use crate::algebra::binary_operator::{Min, Plus, Times};
    use crate::views::mask::NoMask;


    #[test]
    fn test_ewise_add_vector_union_semantics() {
        let u       =   Vector::from_dense_with_zero( vec![ 0, 3, 0, 4 ], 0 );
        let v       =   Vector::from_dense_with_zero( vec![ 1, 2, 0, 5 ], 0 );
        let mut w   =   Vector::new( 4 );

        ewise_add_vector( &mut w, &NoMask::new(), &NoAccumulate::new(),
                          &Plus::<i64>::new(), &u, &v, false ).unwrap();

        // position 0 carries v through; positions 1 and 3 combine
        assert_eq!( w.contents(), &[ (0, 1), (1, 5), (3, 9) ] );
    }

    #[test]
    fn test_ewise_add_symmetric_for_commutative_op() {
        let u       =   Vector::from_tuples( 5, vec![ (0, 2), (3, 8) ] ).unwrap();
        let v       =   Vector::from_tuples( 5, vec![ (1, 4), (3, 5) ] ).unwrap();

        let mut forward     =   Vector::new( 5 );
        ewise_add_vector( &mut forward, &NoMask::new(), &NoAccumulate::new(),
                          &Min::<i64>::new(), &u, &v, false ).unwrap();

        let mut backward    =   Vector::new( 5 );
        ewise_add_vector( &mut backward, &NoMask::new(), &NoAccumulate::new(),
                          &Min::<i64>::new(), &v, &u, false ).unwrap();

        assert_eq!( forward, backward );
        assert_eq!( forward.contents(), &[ (0, 2), (1, 4), (3, 5) ] );
    }

    #[test]
    fn test_ewise_add_vector_masked_replace() {
        let u       =   Vector::from_tuples( 3, vec![ (0, 1), (1, 1) ] ).unwrap();
        let v       =   Vector::from_tuples( 3, vec![ (2, 1) ] ).unwrap();
        let mask    =   Vector::from_dense_with_zero( vec![ 1, 0, 1 ], 0 );
        let mut w   =   Vector::from_dense( vec![ 9, 9, 9 ] );

        ewise_add_vector( &mut w, &mask, &NoAccumulate::new(),
                          &Plus::<i64>::new(), &u, &v, true ).unwrap();

        assert_eq!( w.contents(), &[ (0, 1), (2, 1) ] );
    }

    #[test]
    fn test_ewise_add_vector_bad_dimensions() {
        let u       =   Vector::<i64>::new( 3 );
        let v       =   Vector::<i64>::new( 4 );
        let mut w   =   Vector::<i64>::new( 3 );
        let outcome =   ewise_add_vector( &mut w, &NoMask::new(), &NoAccumulate::new(),
                                          &Plus::<i64>::new(), &u, &v, false );
        assert!( matches!( outcome, Err( Error::DimensionMismatch( _ ) ) ) );
    }

    #[test]
    fn test_ewise_add_matrix() {
        let a       =   Matrix::from_dense_with_zero(
                            vec![ vec![ 1, 0 ], vec![ 0, 2 ] ], 0 ).unwrap();
        let b       =   Matrix::from_dense_with_zero(
                            vec![ vec![ 3, 4 ], vec![ 0, 0 ] ], 0 ).unwrap();
        let mut c   =   Matrix::new( 2, 2 );

        ewise_add_matrix( &mut c, &NoMask::new(), &NoAccumulate::new(),
                          &Times::<i64>::new(), &a, &b, false ).unwrap();

        // overlap at (0,0) multiplies; singletons pass through
        assert_eq!( c.row( 0 ), &[ (0, 3), (1, 4) ] );
        assert_eq!( c.row( 1 ), &[ (1, 2) ] );
    }
}
