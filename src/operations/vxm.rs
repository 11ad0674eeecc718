//! Vector-matrix multiply: `w<mask> = accum( w, u ⊕.⊗ A )`.

use crate::algebra::accumulate::Accumulator;
use crate::algebra::semiring::Semiring;
use crate::containers::vector::Vector;
use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use crate::operations::helpers::{
    check_dimension, check_vector_mask, write_with_mask_vector,
};
use crate::views::mask::VectorMask;


/// Multiply a row vector by a matrix over a semiring.
///
/// `t[j] = ⊕_i ( u[i] ⊗ a[i][j] )`, computed by scattering each stored entry
/// of `u` across the matching row of `a`; row-major storage makes this the
/// natural access order.  `vxm( w, …, u, a )` agrees observationally with
/// `mxv( w, …, transpose( &a ), u )`.
pub fn vxm< T1, T3, M, Acc, SR, Mat >(
    w:        &mut Vector< T3 >,
    mask:     &M,
    accum:    &Acc,
    semiring: &SR,
    u:        &Vector< T1 >,
    a:        &Mat,
    replace:  bool,
) -> Result< (), Error >
    where   T1:  Clone,
            T3:  Clone,
            M:   VectorMask,
            Acc: Accumulator< T3 >,
            Mat: MatrixRows,
            SR:  Semiring< T1, Mat::Scalar, T3 >,
{
    check_vector_mask( mask, w.size(), "vxm: failed size(w) == size(mask) check" )?;
    check_dimension( a.ncols(), w.size(), "vxm: failed size(w) == ncols(A) check" )?;
    check_dimension( u.size(), a.nrows(), "vxm: failed size(u) == nrows(A) check" )?;

    // scatter-accumulate along the rows selected by u
    let mut workspace: Vec< Option< T3 > > = ( 0 .. a.ncols() ).map( | _ | None ).collect();
    let mut touched: Vec< Index > = Vec::new();

    if a.nvals() > 0 && u.nvals() > 0 {
        for ( row_index, u_value ) in u.iter() {
            let a_row = a.view_row( *row_index );
            for ( col, a_value ) in a_row.iter() {
                let product = semiring.multiply( u_value.clone(), a_value.clone() );
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
    }

    touched.sort_unstable();
    let mut t: Vec<(Index, T3)> = Vec::with_capacity( touched.len() );
    for col in touched {
        if let Some( value ) = workspace[ col ].take() {
            t.push( ( col, value ) );
        }
    }

    let z = accum.accumulate( w.contents(), t );
    write_with_mask_vector( w, z, mask, replace );
    Ok(())
}
