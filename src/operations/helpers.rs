//! Shared machinery of the operation pipeline: dimension checks, sorted
//! merges, the sparse dot product, and the masked write-back stage.
//!
//! Every two-operand element-wise computation in the crate reduces to a
//! sorted merge over ascending indices; `merge_join_by` from itertools is
//! the single merge primitive all of them reuse.

use crate::algebra::binary_operator::BinaryOp;
use crate::algebra::semiring::Semiring;
use crate::containers::matrix::Matrix;
use crate::containers::vector::Vector;
use crate::error::Error;
use crate::index::Index;
use crate::views::mask::{MatrixMask, VectorMask};
use itertools::{merge_join_by, EitherOrBoth};


//  ---------------------------------------------------------------------------
//  DIMENSION CHECKS
//  ---------------------------------------------------------------------------


pub(crate) fn check_dimension(
    actual:   Index,
    expected: Index,
    context:  &'static str,
) -> Result< (), Error > {
    if actual == expected {
        Ok(())
    } else {
        Err( Error::DimensionMismatch( context.to_string() ) )
    }
}

pub(crate) fn check_indices( indices: &[Index], bound: Index ) -> Result< (), Error > {
    for &index in indices {
        if index >= bound {
            return Err( Error::IndexOutOfBounds { index, bound } );
        }
    }
    Ok(())
}

pub(crate) fn check_vector_mask< M: VectorMask >(
    mask:    &M,
    size:    Index,
    context: &'static str,
) -> Result< (), Error > {
    match mask.mask_size() {
        None                          => Ok(()),
        Some( s ) if s == size        => Ok(()),
        Some( _ )                     => Err( Error::DimensionMismatch( context.to_string() ) ),
    }
}

pub(crate) fn check_matrix_mask< M: MatrixMask >(
    mask:    &M,
    nrows:   Index,
    ncols:   Index,
    context: &'static str,
) -> Result< (), Error > {
    match mask.mask_shape() {
        None                                      => Ok(()),
        Some( shape ) if shape == (nrows, ncols)  => Ok(()),
        Some( _ )                                 =>
            Err( Error::DimensionMismatch( context.to_string() ) ),
    }
}


//  ---------------------------------------------------------------------------
//  SORTED MERGES
//  ---------------------------------------------------------------------------


/// Intersection merge: `op(a, b)` at positions stored in both lists.
pub(crate) fn ewise_intersection< Op, T1, T2, T3 >(
    op: &Op,
    a:  &[(Index, T1)],
    b:  &[(Index, T2)],
) -> Vec<(Index, T3)>
    where   Op: BinaryOp< T1, T2, T3 >,
            T1: Clone,
            T2: Clone,
{
    merge_join_by( a.iter(), b.iter(), | x, y | x.0.cmp( &y.0 ) )
        .filter_map( | pair | match pair {
            EitherOrBoth::Both( x, y ) => Some( ( x.0, op.apply( x.1.clone(), y.1.clone() ) ) ),
            _                          => None,
        })
        .collect()
}

/// Union merge: `op(a, b)` at positions stored in both lists, the stored
/// side carried through unchanged at singletons.
pub(crate) fn ewise_union< Op, T >(
    op: &Op,
    a:  &[(Index, T)],
    b:  &[(Index, T)],
) -> Vec<(Index, T)>
    where   Op: BinaryOp< T, T, T >,
            T:  Clone,
{
    merge_join_by( a.iter(), b.iter(), | x, y | x.0.cmp( &y.0 ) )
        .map( | pair | match pair {
            EitherOrBoth::Both( x, y ) => ( x.0, op.apply( x.1.clone(), y.1.clone() ) ),
            EitherOrBoth::Left( x )    => x.clone(),
            EitherOrBoth::Right( y )   => y.clone(),
        })
        .collect()
}


//  ---------------------------------------------------------------------------
//  THE SPARSE DOT PRODUCT
//  ---------------------------------------------------------------------------


/// Fold `⊕ ( a[k] ⊗ u[k] )` over the positions stored in both lists.
///
/// Returns `None` when the structural intersection is empty; otherwise the
/// fold starts from the semiring's additive identity, so a stored zero times
/// a stored value still produces an (explicitly zero) output.
pub(crate) fn dot< SR, T1, T2, T3 >(
    semiring: &SR,
    a:        &[(Index, T1)],
    u:        &[(Index, T2)],
) -> Option< T3 >
    where   SR: Semiring< T1, T2, T3 >,
            T1: Clone,
            T2: Clone,
{
    let mut sum: Option< T3 > = None;
    for pair in merge_join_by( a.iter(), u.iter(), | x, y | x.0.cmp( &y.0 ) ) {
        if let EitherOrBoth::Both( x, y ) = pair {
            let product = semiring.multiply( x.1.clone(), y.1.clone() );
            sum = Some( match sum {
                None            => semiring.add( semiring.zero(), product ),
                Some( partial ) => semiring.add( partial, product ),
            });
        }
    }
    sum
}


//  ---------------------------------------------------------------------------
//  MASKED WRITE-BACK
//  ---------------------------------------------------------------------------


/// Commit accumulated entries `z` into `w` under `mask`.
///
/// * `replace == true`: `w` ends up holding exactly the in-mask entries of
///   `z`; everything else is cleared.
/// * `replace == false` (merge): in-mask positions are overwritten from `z`
///   (or cleared where `z` stores nothing); out-of-mask positions keep their
///   prior stored state.
pub(crate) fn write_with_mask_vector< T, M >(
    w:       &mut Vector< T >,
    z:       Vec<(Index, T)>,
    mask:    &M,
    replace: bool,
)
    where   T: Clone,
            M: VectorMask,
{
    let merged = masked_entries( w.contents(), z, | index | mask.is_set( index ), replace );
    w.set_contents( merged );
}

/// Row-by-row analogue of [`write_with_mask_vector`].
pub(crate) fn write_with_mask_matrix< T, M >(
    c:       &mut Matrix< T >,
    z_rows:  Vec< Vec<(Index, T)> >,
    mask:    &M,
    replace: bool,
)
    where   T: Clone,
            M: MatrixMask,
{
    for ( row, z_row ) in z_rows.into_iter().enumerate() {
        let merged = masked_entries(
            c.row( row ),
            z_row,
            | col | mask.is_set( row, col ),
            replace,
        );
        c.set_row_contents( row, merged );
    }
}

fn masked_entries< T, F >(
    current:  &[(Index, T)],
    z:        Vec<(Index, T)>,
    in_mask:  F,
    replace:  bool,
) -> Vec<(Index, T)>
    where   T: Clone,
            F: Fn( Index ) -> bool,
{
    let admitted = z.into_iter().filter( | entry | in_mask( entry.0 ) );
    if replace {
        return admitted.collect();
    }
    let kept: Vec<(Index, T)> = current.iter()
                                    .filter( | entry | ! in_mask( entry.0 ) )
                                    .cloned()
                                    .collect();
    merge_join_by( kept, admitted, | x, y | x.0.cmp( &y.0 ) )
        .map( | pair | match pair {
            EitherOrBoth::Left( x )    => x,
            EitherOrBoth::Right( y )   => y,
            // kept entries are outside the mask and admitted ones inside,
            // so the two sides are disjoint
            EitherOrBoth::Both( x, _ ) => x,
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::binary_operator::{Plus, Times};
    use crate::algebra::semiring::ArithmeticSemiring;
    use crate::views::mask::NoMask;


    #[test]
    fn test_intersection_and_union() {
        let a   =   vec![ (0, 1), (2, 2), (5, 3) ];
        let b   =   vec![ (2, 10), (4, 20) ];

        assert_eq!(
            ewise_intersection( &Times::<i64>::new(), &a, &b ),
            vec![ (2, 20) ],
        );
        assert_eq!(
            ewise_union( &Plus::<i64>::new(), &a, &b ),
            vec![ (0, 1), (2, 12), (4, 20), (5, 3) ],
        );
    }

    #[test]
    fn test_dot_product() {
        let semiring    =   ArithmeticSemiring::<i64>::new();
        let a           =   vec![ (0, 2), (3, 4) ];
        let u           =   vec![ (1, 5), (3, 6) ];
        assert_eq!( Some( 24 ), dot( &semiring, &a, &u ) );

        // empty structural intersection: no output entry
        let v           =   vec![ (1, 5), (2, 6) ];
        assert_eq!( None, dot::<_, _, _, i64>( &semiring, &a, &v ) );

        // a stored zero still produces an entry
        let z           =   vec![ (3, 0) ];
        assert_eq!( Some( 0 ), dot( &semiring, &a, &z ) );
    }

    #[test]
    fn test_write_back_replace_vs_merge() {
        let mask    =   Vector::from_dense_with_zero( vec![ 0, 1, 1, 0 ], 0 );
        let z       =   vec![ (1, 10.0), (3, 30.0) ];

        // merge: out-of-mask entries of w survive, in-mask come from z
        let mut w   =   Vector::from_dense( vec![ 1.0, 2.0, 3.0, 4.0 ] );
        write_with_mask_vector( &mut w, z.clone(), &mask, false );
        assert_eq!( w.contents(), &[ (0, 1.0), (1, 10.0), (3, 4.0) ] );

        // replace: only the in-mask part of z remains
        let mut w   =   Vector::from_dense( vec![ 1.0, 2.0, 3.0, 4.0 ] );
        write_with_mask_vector( &mut w, z, &mask, true );
        assert_eq!( w.contents(), &[ (1, 10.0) ] );
    }

    #[test]
    fn test_write_back_no_mask() {
        let z       =   vec![ (0, 9.0) ];
        let mut w   =   Vector::from_dense( vec![ 1.0, 2.0 ] );
        write_with_mask_vector( &mut w, z.clone(), &NoMask::new(), false );
        assert_eq!( w.contents(), &z[..] );
    }
}
