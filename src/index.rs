//! Index primitives shared by every container and operation.

//  DESIGN NOTES
//  ------------
//
//  * An alias (rather than a newtype) keeps stored entries as plain tuples,
//  which the standard library can sort, search, and compare without adapter
//  code.  The price is that row and column indices are not distinguished by
//  the type system; the container constructors validate bounds instead.


/// The type used to index vector positions and matrix rows/columns.
pub type Index = usize;

/// A list of indices, e.g. the gather/scatter argument of `extract`/`assign`.
pub type IndexArray = Vec<Index>;
