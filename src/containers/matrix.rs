//! A sparse matrix stored as a list of sorted rows.
//!
//! Storage is row-major: one entry list per row, ascending by column index.
//! The stored-zero rules of [`Vector`](crate::containers::vector::Vector)
//! apply unchanged: dense loads with an implicit zero drop matching values,
//! dense loads without one keep every value as part of the structure.

use crate::containers::MatrixRows;
use crate::error::Error;
use crate::index::Index;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;


/// A sparse matrix: `nrows × ncols` with per-row entry lists in strictly
/// ascending column order.
///
/// Two matrices are equal iff they have the same shape, the same stored
/// index sets, and pointwise-equal stored values.
///
/// # Examples
///
/// ```
/// use garnet::containers::matrix::Matrix;
///
/// let a = Matrix::from_dense_with_zero(
///     vec![ vec![ 0, 0 ],
///           vec![ 1, 1 ] ],
///     0,
/// ).unwrap();
///
/// assert_eq!( ( 2, 2 ), ( a.nrows(), a.ncols() ) );
/// assert_eq!( 2, a.nvals() );
/// assert_eq!( a.row( 1 ), &[ (0, 1), (1, 1) ] );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix< T > {
    nrows: Index,
    ncols: Index,
    rows:  Vec< Vec<(Index, T)> >,
}


impl < T > Matrix < T > {

    //  CONSTRUCTORS
    //  -----------------------------------------------------------------------

    /// An empty matrix of shape `nrows × ncols`.
    pub fn new( nrows: Index, ncols: Index ) -> Self {
        Matrix {
            nrows,
            ncols,
            rows: ( 0 .. nrows ).map( | _ | Vec::new() ).collect(),
        }
    }

    /// Store every element of a dense row-of-rows, zeros included.
    ///
    /// Fails with `InvalidState` on ragged input.
    pub fn from_dense( dense: Vec< Vec< T > > ) -> Result< Self, Error > {
        let nrows   =   dense.len();
        let ncols   =   dense.first().map_or( 0, | row | row.len() );
        let mut rows    =   Vec::with_capacity( nrows );
        for dense_row in dense {
            if dense_row.len() != ncols {
                return Err( Error::InvalidState( "ragged dense matrix".to_string() ) );
            }
            rows.push( dense_row.into_iter().enumerate().collect() );
        }
        Ok( Matrix { nrows, ncols, rows } )
    }

    /// Store the elements of a dense row-of-rows, dropping those equal to
    /// `implicit_zero`.
    pub fn from_dense_with_zero( dense: Vec< Vec< T > >, implicit_zero: T )
        -> Result< Self, Error >
        where T: PartialEq
    {
        let nrows   =   dense.len();
        let ncols   =   dense.first().map_or( 0, | row | row.len() );
        let mut rows    =   Vec::with_capacity( nrows );
        for dense_row in dense {
            if dense_row.len() != ncols {
                return Err( Error::InvalidState( "ragged dense matrix".to_string() ) );
            }
            rows.push(
                dense_row.into_iter()
                    .enumerate()
                    .filter( | ( _, value ) | *value != implicit_zero )
                    .collect()
            );
        }
        Ok( Matrix { nrows, ncols, rows } )
    }

    /// Build from coordinate tuples `(row, col, value)` in any order.
    ///
    /// Fails with `IndexOutOfBounds` if a coordinate is out of range, and
    /// with `InvalidState` if two tuples name the same position.
    pub fn from_tuples( nrows: Index, ncols: Index, tuples: Vec<(Index, Index, T)> )
        -> Result< Self, Error >
    {
        let mut matrix  =   Matrix::new( nrows, ncols );
        for &( row, col, _ ) in tuples.iter() {
            if row >= nrows {
                return Err( Error::IndexOutOfBounds { index: row, bound: nrows } );
            }
            if col >= ncols {
                return Err( Error::IndexOutOfBounds { index: col, bound: ncols } );
            }
        }
        for ( row, col, value ) in tuples {
            matrix.rows[ row ].push( ( col, value ) );
        }
        for row in matrix.rows.iter_mut() {
            row.sort_by( | a, b | a.0.cmp( &b.0 ) );
            if row.windows( 2 ).any( | pair | pair[0].0 == pair[1].0 ) {
                return Err( Error::InvalidState(
                    "duplicate coordinate in tuple build".to_string()
                ) );
            }
        }
        Ok( matrix )
    }

    //  ACCESSORS
    //  -----------------------------------------------------------------------

    /// Number of rows.
    pub fn nrows( &self ) -> Index { self.nrows }

    /// Number of columns.
    pub fn ncols( &self ) -> Index { self.ncols }

    /// The number of stored entries.
    pub fn nvals( &self ) -> usize {
        self.rows.iter().map( | row | row.len() ).sum()
    }

    /// True iff a value is stored at `(row, col)`.
    pub fn has_element( &self, row: Index, col: Index ) -> bool {
        self.get( row, col ).is_some()
    }

    /// A reference to the stored value at `(row, col)`, if any.
    pub fn get( &self, row: Index, col: Index ) -> Option< &T > {
        if row >= self.nrows { return None; }
        self.position( row, col ).ok().map( | pos | &self.rows[ row ][ pos ].1 )
    }

    /// The entries of row `row`, ascending by column index.
    ///
    /// Panics if `row >= nrows`.
    pub fn row( &self, row: Index ) -> &[ (Index, T) ] { &self.rows[ row ] }

    /// Iterate over stored entries in row-major, ascending-column order.
    pub fn iter( &self ) -> impl Iterator< Item = (Index, Index, &T) > {
        self.rows.iter().enumerate().flat_map( | ( row, entries ) |
            entries.iter().map( move | ( col, value ) | ( row, *col, value ) )
        )
    }

    //  MUTATORS
    //  -----------------------------------------------------------------------

    /// Store `value` at `(row, col)`, overwriting any existing entry.
    pub fn set_element( &mut self, row: Index, col: Index, value: T ) -> Result< (), Error > {
        if row >= self.nrows {
            return Err( Error::IndexOutOfBounds { index: row, bound: self.nrows } );
        }
        if col >= self.ncols {
            return Err( Error::IndexOutOfBounds { index: col, bound: self.ncols } );
        }
        match self.position( row, col ) {
            Ok( pos )  => self.rows[ row ][ pos ].1 = value,
            Err( pos ) => self.rows[ row ].insert( pos, ( col, value ) ),
        }
        Ok(())
    }

    /// Remove the entry at `(row, col)`; removing an absent entry is a no-op.
    pub fn remove_element( &mut self, row: Index, col: Index ) -> Result< (), Error > {
        if row >= self.nrows {
            return Err( Error::IndexOutOfBounds { index: row, bound: self.nrows } );
        }
        if col >= self.ncols {
            return Err( Error::IndexOutOfBounds { index: col, bound: self.ncols } );
        }
        if let Ok( pos ) = self.position( row, col ) {
            self.rows[ row ].remove( pos );
        }
        Ok(())
    }

    /// Remove every stored entry; the shape is unchanged.
    pub fn clear( &mut self ) {
        for row in self.rows.iter_mut() { row.clear(); }
    }

    //  CRATE-INTERNAL
    //  -----------------------------------------------------------------------

    // The write-back stage installs fully-formed rows; entries must be
    // ascending, unique, and within bounds.
    pub(crate) fn set_row_contents( &mut self, row: Index, entries: Vec<(Index, T)> ) {
        debug_assert!( entries.windows( 2 ).all( | w | w[0].0 < w[1].0 ) );
        debug_assert!( entries.last().map_or( true, | last | last.0 < self.ncols ) );
        self.rows[ row ] = entries;
    }

    fn position( &self, row: Index, col: Index ) -> Result< usize, usize > {
        self.rows[ row ].binary_search_by( | entry | entry.0.cmp( &col ) )
    }
}

impl < T: Clone > Matrix < T > {

    /// The stored value at `(row, col)`, or `NoValue` / `IndexOutOfBounds`.
    pub fn extract_element( &self, row: Index, col: Index ) -> Result< T, Error > {
        if row >= self.nrows {
            return Err( Error::IndexOutOfBounds { index: row, bound: self.nrows } );
        }
        if col >= self.ncols {
            return Err( Error::IndexOutOfBounds { index: col, bound: self.ncols } );
        }
        self.get( row, col ).cloned().ok_or( Error::NoValue )
    }
}

impl < T: Clone > MatrixRows for Matrix < T > {

    type Scalar = T;

    fn nrows( &self ) -> Index { self.nrows }

    fn ncols( &self ) -> Index { self.ncols }

    fn nvals( &self ) -> usize { Matrix::nvals( self ) }

    fn view_row( &self, row: Index ) -> Cow<'_, [(Index, T)]> {
        Cow::Borrowed( &self.rows[ row ] )
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_dense_constructors() {
        let a   =   Matrix::from_dense_with_zero(
                        vec![ vec![ 0.0, 1.0 ], vec![ 0.0, 0.0 ] ],
                        0.0,
                    ).unwrap();
        assert_eq!( 1, a.nvals() );
        assert_eq!( a.row( 0 ), &[ (1, 1.0) ] );
        assert!( a.row( 1 ).is_empty() );

        let b   =   Matrix::from_dense( vec![ vec![ 0.0, 1.0 ], vec![ 0.0, 0.0 ] ] ).unwrap();
        assert_eq!( 4, b.nvals() );
        assert!( b.has_element( 1, 0 ) );

        assert!( Matrix::from_dense( vec![ vec![ 1.0 ], vec![] ] ).is_err() );
    }

    #[test]
    fn test_from_tuples_sorts_rows() {
        let a   =   Matrix::from_tuples( 2, 3, vec![ (0, 2, 5), (0, 0, 3), (1, 1, 4) ] ).unwrap();
        assert_eq!( a.row( 0 ), &[ (0, 3), (2, 5) ] );
        assert_eq!( a.row( 1 ), &[ (1, 4) ] );

        assert!( Matrix::from_tuples( 2, 3, vec![ (0, 3, 5) ] ).is_err() );
        assert!( Matrix::from_tuples( 2, 3, vec![ (0, 1, 5), (0, 1, 6) ] ).is_err() );
    }

    #[test]
    fn test_element_access() {
        let mut a   =   Matrix::new( 2, 2 );
        a.set_element( 0, 1, 7 ).unwrap();
        a.set_element( 0, 0, 1 ).unwrap();
        a.set_element( 0, 1, 8 ).unwrap();
        assert_eq!( a.row( 0 ), &[ (0, 1), (1, 8) ] );
        assert_eq!( Ok( 8 ), a.extract_element( 0, 1 ) );
        assert_eq!( Err( Error::NoValue ), a.extract_element( 1, 1 ) );

        a.remove_element( 0, 1 ).unwrap();
        assert!( ! a.has_element( 0, 1 ) );

        a.clear();
        assert_eq!( 0, a.nvals() );
        assert_eq!( 2, a.nrows() );
    }

    #[test]
    fn test_iter_is_row_major() {
        let a   =   Matrix::from_tuples( 2, 2, vec![ (1, 0, 30), (0, 1, 20), (0, 0, 10) ] ).unwrap();
        let entries: Vec<_> = a.iter().map( | ( r, c, v ) | ( r, c, *v ) ).collect();
        assert_eq!( entries, vec![ (0, 0, 10), (0, 1, 20), (1, 0, 30) ] );
    }

    #[test]
    fn test_serde_round_trip() {
        let a   =   Matrix::from_dense( vec![ vec![ 0, 2 ], vec![ 3, 0 ] ] ).unwrap();
        let json    =   serde_json::to_string( &a ).unwrap();
        let back: Matrix<i32> = serde_json::from_str( &json ).unwrap();
        assert_eq!( a, back );
    }
}
