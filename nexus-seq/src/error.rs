//! Error type for list and cursor operations.

use thiserror::Error;

/// Failure of a [`SeqList`](crate::SeqList) or [`Cursor`](crate::Cursor)
/// operation.
///
/// Every variant is reported before the list is touched, so a failed call
/// leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The list has no elements, or the cursor is past the last one.
    #[error("no element available")]
    Empty,

    /// No element compares equal to the given value.
    #[error("element not found")]
    NotFound,

    /// Index outside `0..len` (access, removal) or `0..=len` (insertion).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// List length at the time of the call.
        len: usize,
    },

    /// Cursor removal without a preceding successful `next`, or a second
    /// removal of the same element.
    #[error("no element to remove: call next() first")]
    IllegalState,

    /// The list was structurally modified after the cursor was created, by
    /// something other than the cursor itself.
    #[error("list was structurally modified during iteration")]
    ModifiedDuringIteration,
}

/// Result alias for list and cursor operations.
pub type Result<T> = core::result::Result<T, Error>;
