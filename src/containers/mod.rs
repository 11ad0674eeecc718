//! Sparse containers and the row-oracle trait the matrix kernels consume.

pub mod matrix;
pub mod vector;

use crate::index::Index;
use std::borrow::Cow;


//  ---------------------------------------------------------------------------
//  THE ROW ORACLE TRAIT
//  ---------------------------------------------------------------------------

//  DESIGN NOTES
//  ------------
//
//  * Every matrix kernel reads its matrix operands one row at a time, in
//  ascending column order.  This trait is the only thing a kernel knows
//  about a matrix operand, which is what lets a transpose view stand in for
//  an owning matrix anywhere.
//
//  * `Cow` lets the owning container hand out borrowed slices while the
//  transpose view hands out columns materialized on read, behind one
//  signature.


/// Read access to a matrix, one row at a time.
pub trait MatrixRows {

    type Scalar: Clone;

    /// Number of rows.
    fn nrows( &self ) -> Index;

    /// Number of columns.
    fn ncols( &self ) -> Index;

    /// Number of stored entries.
    fn nvals( &self ) -> usize;

    /// The entries of row `row`, ascending by column index.
    fn view_row( &self, row: Index ) -> Cow<'_, [(Index, Self::Scalar)]>;
}
