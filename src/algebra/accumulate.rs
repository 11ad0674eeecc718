//! The accumulate stage of the write-back pipeline.
//!
//! Every operation computes a sparse intermediate `T` and then produces
//! `Z` from `T` and the current output contents `C`:
//!
//! * with [`NoAccumulate`], `Z := T`: the intermediate replaces whatever the
//!   output held;
//! * with a binary operator in the accumulator slot, `Z` is the *union* of
//!   the two structures, with `accum(c, t)` at positions stored in both and
//!   the single stored value carried through elsewhere.
//!
//! Every stock binary operator implements [`Accumulator`].  For a
//! user-defined operator the implementation is one call to
//! [`accumulate_with`]:
//!
//! ```
//! use garnet::algebra::accumulate::{accumulate_with, Accumulator};
//! use garnet::algebra::binary_operator::BinaryOp;
//! use garnet::index::Index;
//!
//! #[derive(Clone)]
//! struct SaturatingPlus;
//!
//! impl BinaryOp<u8> for SaturatingPlus {
//!     fn apply( &self, x: u8, y: u8 ) -> u8 { x.saturating_add( y ) }
//! }
//!
//! impl Accumulator<u8> for SaturatingPlus {
//!     fn accumulate( &self, current: &[(Index, u8)], computed: Vec<(Index, u8)> )
//!         -> Vec<(Index, u8)>
//!     {
//!         accumulate_with( self, current, computed )
//!     }
//!     fn accumulate_scalar( &self, current: u8, computed: u8 ) -> u8 {
//!         self.apply( current, computed )
//!     }
//! }
//!
//! let acc = SaturatingPlus;
//! assert_eq!(
//!     acc.accumulate( &[ (0, 250), (2, 1) ], vec![ (0, 10), (1, 4) ] ),
//!     vec![ (0, 255), (1, 4), (2, 1) ],
//! );
//! ```

use crate::algebra::binary_operator::{
    BinaryOp, Divide, First, LogicalAnd, LogicalOr, LogicalXor, Max, Min, Minus, Plus, Second,
    Times,
};
use crate::index::Index;
use itertools::{merge_join_by, EitherOrBoth};


//  ---------------------------------------------------------------------------
//  THE ACCUMULATOR TRAIT
//  ---------------------------------------------------------------------------


/// How a computed intermediate combines with the current output contents.
///
/// Both entry lists are sorted ascending by index; implementations must
/// return a sorted list.
pub trait Accumulator< D > {

    /// Produce `Z` from the current output entries `current` and the
    /// computed intermediate `computed`.
    fn accumulate( &self, current: &[(Index, D)], computed: Vec<(Index, D)> )
        -> Vec<(Index, D)>;

    /// The scalar analogue, used by `reduce`.
    fn accumulate_scalar( &self, current: D, computed: D ) -> D;
}


//  ---------------------------------------------------------------------------
//  NO ACCUMULATE
//  ---------------------------------------------------------------------------


/// Sentinel selecting replacement at the accumulate stage: `Z := T`.
#[derive(Debug, Clone, Default)]
pub struct NoAccumulate;

impl NoAccumulate {
    pub fn new() -> Self { NoAccumulate }
}

impl < D > Accumulator < D > for NoAccumulate {

    fn accumulate( &self, _current: &[(Index, D)], computed: Vec<(Index, D)> )
        -> Vec<(Index, D)>
    {
        computed
    }

    fn accumulate_scalar( &self, _current: D, computed: D ) -> D { computed }
}


//  ---------------------------------------------------------------------------
//  ACCUMULATION WITH A BINARY OPERATOR
//  ---------------------------------------------------------------------------


/// Sorted union of `current` and `computed`; `op(c, t)` where both store an
/// entry, the stored side carried through unchanged where only one does.
pub fn accumulate_with< Op, D >(
    op:         &Op,
    current:    &[(Index, D)],
    computed:   Vec<(Index, D)>,
) -> Vec<(Index, D)>
    where   Op: BinaryOp< D, D, D >,
            D:  Clone,
{
    merge_join_by(
        current.iter().cloned(),
        computed,
        | c, t | c.0.cmp( &t.0 ),
    )
    .map( | pair | match pair {
        EitherOrBoth::Both( c, t )  => ( c.0, op.apply( c.1, t.1 ) ),
        EitherOrBoth::Left( c )     => c,
        EitherOrBoth::Right( t )    => t,
    })
    .collect()
}

// Every stock operator that can sit in the accumulator slot gets the union
// semantics above.
macro_rules! accumulator_from_binary_op {
    ( $( $op:ident ),* $(,)? ) => { $(

        impl < D > Accumulator < D > for $op < D >
            where   Self:   BinaryOp< D, D, D >,
                    D:      Clone,
        {
            fn accumulate( &self, current: &[(Index, D)], computed: Vec<(Index, D)> )
                -> Vec<(Index, D)>
            {
                accumulate_with( self, current, computed )
            }

            fn accumulate_scalar( &self, current: D, computed: D ) -> D {
                self.apply( current, computed )
            }
        }

    )* };
}

accumulator_from_binary_op!( First, Second, Plus, Minus, Times, Divide, Min, Max );

macro_rules! accumulator_from_boolean_op {
    ( $( $op:ident ),* $(,)? ) => { $(

        impl Accumulator < bool > for $op {
            fn accumulate( &self, current: &[(Index, bool)], computed: Vec<(Index, bool)> )
                -> Vec<(Index, bool)>
            {
                accumulate_with( self, current, computed )
            }

            fn accumulate_scalar( &self, current: bool, computed: bool ) -> bool {
                self.apply( current, computed )
            }
        }

    )* };
}

accumulator_from_boolean_op!( LogicalOr, LogicalAnd, LogicalXor );
