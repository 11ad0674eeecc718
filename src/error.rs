//! The error taxonomy shared by all containers and operations.
//!
//! Every operation validates its operands before touching its output, so a
//! returned error guarantees the output container is unchanged.

use crate::index::Index;
use thiserror::Error;


/// Errors surfaced by container accessors and by the primitive operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {

    /// Operand shapes are inconsistent with the operation's contract.
    ///
    /// The payload names the check that failed, e.g.
    /// `"mxv: failed size(w) == nrows(A) check"`.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// `extract_element` was called on a position with no stored entry.
    #[error("no stored value at the requested position")]
    NoValue,

    /// A caller-supplied index lies outside `[0, bound)`.
    #[error("index {index} out of bounds for dimension {bound}")]
    IndexOutOfBounds { index: Index, bound: Index },

    /// A user-supplied operator panicked.
    ///
    /// Operators are assumed total; operations compute their full
    /// intermediate before mutating the output, so an unwinding operator
    /// leaves the output unchanged.  This variant is the conversion target
    /// for callers that `catch_unwind` at an FFI or service boundary.
    #[error("user-supplied operator panicked")]
    OperatorPanic,

    /// A container or view failed an internal consistency check, e.g. a
    /// ragged dense matrix or duplicate coordinates in a tuple build.
    #[error("container is in an inconsistent state: {0}")]
    InvalidState(String),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::DimensionMismatch(
            "mxv: failed size(w) == nrows(A) check".to_string()
        );
        assert_eq!(
            err.to_string(),
            "dimension mismatch: mxv: failed size(w) == nrows(A) check"
        );

        let err = Error::IndexOutOfBounds { index: 7, bound: 4 };
        assert_eq!( err.to_string(), "index 7 out of bounds for dimension 4" );

        assert_eq!(
            Error::OperatorPanic.to_string(),
            "user-supplied operator panicked"
        );
    }
}
