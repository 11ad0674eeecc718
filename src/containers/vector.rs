//! A sparse vector with explicit-storage semantics.
//!
//! A [`Vector`] distinguishes *absent* positions from positions holding a
//! stored value (a stored zero included).  Loading from a dense slice with
//! an implicit zero drops entries equal to that zero; loading without one
//! stores everything, so explicit zeros stay part of the structure: they
//! count toward `nvals` and compute with their numeric value, and a mask
//! treats them as present but false.
//!
//! # Examples
//!
//! ```
//! use garnet::containers::vector::Vector;
//!
//! // [0, 0, 12, 7] with implicit zero 0 stores two entries
//! let u = Vector::from_dense_with_zero( vec![ 0.0, 0.0, 12.0, 7.0 ], 0.0 );
//! assert_eq!( 4, u.size() );
//! assert_eq!( 2, u.nvals() );
//! assert!( ! u.has_element( 0 ) );
//! assert_eq!( Ok( 12.0 ), u.extract_element( 2 ) );
//!
//! // the same dense data stored verbatim keeps all four entries
//! let v = Vector::from_dense( vec![ 0.0, 0.0, 12.0, 7.0 ] );
//! assert_eq!( 4, v.nvals() );
//! assert!( v.has_element( 0 ) );   // a stored zero
//! assert_ne!( u, v );              // equality sees the structural difference
//! ```

use crate::error::Error;
use crate::index::Index;
use serde::{Deserialize, Serialize};


/// A sparse vector: a logical size plus stored `(index, value)` entries in
/// strictly ascending index order.
///
/// Two vectors are equal iff they have the same size, the same stored index
/// set, and pointwise-equal stored values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector< T > {
    size:    Index,
    entries: Vec<(Index, T)>,
}


impl < T > Vector < T > {

    //  CONSTRUCTORS
    //  -----------------------------------------------------------------------

    /// An empty vector of logical size `size`.
    pub fn new( size: Index ) -> Self {
        Vector { size, entries: Vec::new() }
    }

    /// Store every element of a dense slice, zeros included.
    pub fn from_dense( dense: Vec< T > ) -> Self {
        let size    =   dense.len();
        let entries =   dense.into_iter().enumerate().collect();
        Vector { size, entries }
    }

    /// Store the elements of a dense slice, dropping those equal to
    /// `implicit_zero`.
    pub fn from_dense_with_zero( dense: Vec< T >, implicit_zero: T ) -> Self
        where T: PartialEq
    {
        let size    =   dense.len();
        let entries =   dense.into_iter()
                            .enumerate()
                            .filter( | ( _, value ) | *value != implicit_zero )
                            .collect();
        Vector { size, entries }
    }

    /// Build from coordinate tuples in any order.
    ///
    /// Fails with `IndexOutOfBounds` if a tuple index reaches `size`, and
    /// with `InvalidState` if two tuples name the same position.
    pub fn from_tuples( size: Index, mut tuples: Vec<(Index, T)> ) -> Result< Self, Error > {
        for &( index, _ ) in tuples.iter() {
            if index >= size {
                return Err( Error::IndexOutOfBounds { index, bound: size } );
            }
        }
        tuples.sort_by( | a, b | a.0.cmp( &b.0 ) );
        if tuples.windows( 2 ).any( | pair | pair[0].0 == pair[1].0 ) {
            return Err( Error::InvalidState( "duplicate index in tuple build".to_string() ) );
        }
        Ok( Vector { size, entries: tuples } )
    }

    //  ACCESSORS
    //  -----------------------------------------------------------------------

    /// The logical size (number of positions, stored or not).
    pub fn size( &self ) -> Index { self.size }

    /// The number of stored entries.
    pub fn nvals( &self ) -> usize { self.entries.len() }

    /// True iff no entry is stored.
    pub fn is_empty( &self ) -> bool { self.entries.is_empty() }

    /// True iff a value is stored at `index`.
    pub fn has_element( &self, index: Index ) -> bool {
        self.position( index ).is_ok()
    }

    /// A reference to the stored value at `index`, if any.
    pub fn get( &self, index: Index ) -> Option< &T > {
        self.position( index ).ok().map( | pos | &self.entries[ pos ].1 )
    }

    /// The stored entries, ascending by index.
    pub fn contents( &self ) -> &[ (Index, T) ] { &self.entries }

    /// Iterate over stored entries in ascending index order.
    pub fn iter( &self ) -> std::slice::Iter<'_, (Index, T)> { self.entries.iter() }

    //  MUTATORS
    //  -----------------------------------------------------------------------

    /// Store `value` at `index`, overwriting any existing entry.
    pub fn set_element( &mut self, index: Index, value: T ) -> Result< (), Error > {
        if index >= self.size {
            return Err( Error::IndexOutOfBounds { index, bound: self.size } );
        }
        match self.position( index ) {
            Ok( pos )  => self.entries[ pos ].1 = value,
            Err( pos ) => self.entries.insert( pos, ( index, value ) ),
        }
        Ok(())
    }

    /// Remove the entry at `index`; removing an absent entry is a no-op.
    pub fn remove_element( &mut self, index: Index ) -> Result< (), Error > {
        if index >= self.size {
            return Err( Error::IndexOutOfBounds { index, bound: self.size } );
        }
        if let Ok( pos ) = self.position( index ) {
            self.entries.remove( pos );
        }
        Ok(())
    }

    /// Remove every stored entry; the logical size is unchanged.
    pub fn clear( &mut self ) {
        self.entries.clear();
    }

    //  CRATE-INTERNAL
    //  -----------------------------------------------------------------------

    // The write-back stage installs fully-formed entry lists; entries must be
    // ascending, unique, and within bounds.
    pub(crate) fn set_contents( &mut self, entries: Vec<(Index, T)> ) {
        debug_assert!( entries.windows( 2 ).all( | w | w[0].0 < w[1].0 ) );
        debug_assert!( entries.last().map_or( true, | last | last.0 < self.size ) );
        self.entries = entries;
    }

    fn position( &self, index: Index ) -> Result< usize, usize > {
        self.entries.binary_search_by( | entry | entry.0.cmp( &index ) )
    }
}

impl < T: Clone > Vector < T > {

    /// The stored value at `index`, or `NoValue` / `IndexOutOfBounds`.
    pub fn extract_element( &self, index: Index ) -> Result< T, Error > {
        if index >= self.size {
            return Err( Error::IndexOutOfBounds { index, bound: self.size } );
        }
        self.get( index ).cloned().ok_or( Error::NoValue )
    }
}
