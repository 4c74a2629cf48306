//! Error types for [`SequenceList`](crate::sequence::SequenceList).
//!
//! Every fallible operation reports its failure synchronously through
//! [`SequenceListError`]. A failed call never modifies the list.

use std::fmt;

/// Errors raised by operations whose precondition does not hold.
///
/// Each variant records the name of the operation that rejected the call so
/// that the message is useful without a backtrace.
///
/// # Examples
///
/// ```rust
/// use sequence_list::{SequenceList, SequenceListError};
///
/// let mut list: SequenceList<i32> = SequenceList::new();
/// assert_eq!(
///     list.pop_first(),
///     Err(SequenceListError::EmptyContainer { operation: "pop_first" })
/// );
///
/// let list: SequenceList<i32> = (1..=3).collect();
/// let error = list.at(5).unwrap_err();
/// assert_eq!(format!("{error}"), "at: index 5 is out of range for length 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceListError {
    /// A removal was attempted on an empty list.
    ///
    /// Raised by `pop_first` and `pop_last`.
    EmptyContainer {
        /// The operation that was rejected.
        operation: &'static str,
    },

    /// An indexed operation addressed a position with no element.
    ///
    /// Raised by `at`, `at_mut`, `insert_after`, `remove_at` and `take_at`
    /// whenever `index >= length`.
    IndexOutOfRange {
        /// The operation that was rejected.
        operation: &'static str,
        /// The index that was requested.
        index: usize,
        /// The length of the list at the time of the call.
        length: usize,
    },
}

impl SequenceListError {
    /// Returns the name of the operation that produced this error.
    #[inline]
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::EmptyContainer { operation } | Self::IndexOutOfRange { operation, .. } => {
                operation
            }
        }
    }
}

impl fmt::Display for SequenceListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer { operation } => {
                write!(formatter, "{operation}: the list is empty")
            }
            Self::IndexOutOfRange {
                operation,
                index,
                length,
            } => {
                write!(
                    formatter,
                    "{operation}: index {index} is out of range for length {length}"
                )
            }
        }
    }
}

impl std::error::Error for SequenceListError {}

/// Result type returned by fallible [`SequenceList`](crate::sequence::SequenceList) operations.
pub type Result<T> = std::result::Result<T, SequenceListError>;
