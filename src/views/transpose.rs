//! The transpose of a matrix, as a view.
//!
//! `transpose(&a)` swaps the roles of rows and columns without copying or
//! mutating anything: asking the view for row `j` gathers column `j` of the
//! subject on the fly.  Because the view implements
//! [`MatrixRows`](crate::containers::MatrixRows), it can stand in for an
//! owning matrix in any kernel; to *store* a transpose, feed the view to the
//! materializing [`transpose`](crate::operations::transpose::transpose)
//! operation instead.
//!
//! # Examples
//!
//! ```
//! use garnet::containers::matrix::Matrix;
//! use garnet::containers::MatrixRows;
//! use garnet::views::transpose::transpose;
//!
//! let a = Matrix::from_tuples( 2, 3, vec![ (0, 2, 5), (1, 0, 3) ] ).unwrap();
//! let t = transpose( &a );
//!
//! assert_eq!( ( 3, 2 ), ( t.nrows(), t.ncols() ) );
//! assert_eq!( t.view_row( 2 ).as_ref(), &[ (0, 5) ] );
//! assert_eq!( t.view_row( 0 ).as_ref(), &[ (1, 3) ] );
//! ```

use crate::containers::MatrixRows;
use crate::index::Index;
use std::borrow::Cow;


/// A read-only view presenting its subject with rows and columns swapped.
#[derive(Debug, Clone)]
pub struct TransposeView< 'a, M > {
    subject: &'a M,
}

impl < 'a, M > TransposeView < 'a, M > {
    pub fn new( subject: &'a M ) -> Self { TransposeView { subject } }
}

/// View a matrix transposed.  Nests; transposing twice is observationally
/// the original matrix.
pub fn transpose< M: MatrixRows >( subject: &M ) -> TransposeView<'_, M> {
    TransposeView::new( subject )
}

impl < 'a, M >
    MatrixRows for TransposeView
    < 'a, M >
    where M: MatrixRows
{
    type Scalar = M::Scalar;

    fn nrows( &self ) -> Index { self.subject.ncols() }

    fn ncols( &self ) -> Index { self.subject.nrows() }

    fn nvals( &self ) -> usize { self.subject.nvals() }

    /// Row `row` of the view is column `row` of the subject, materialized on
    /// read by scanning the subject's rows in order.
    fn view_row( &self, row: Index ) -> Cow<'_, [(Index, M::Scalar)]> {
        let mut column  =   Vec::new();
        for subject_row in 0 .. self.subject.nrows() {
            let entries =   self.subject.view_row( subject_row );
            if let Ok( pos ) = entries.binary_search_by( | entry | entry.0.cmp( &row ) ) {
                column.push( ( subject_row, entries[ pos ].1.clone() ) );
            }
        }
        Cow::Owned( column )
    }
}
