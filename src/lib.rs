//! # sequence-list
//!
//! A mutable, ordered sequence container backed by a chain of singly-linked
//! nodes.
//!
//! ## Overview
//!
//! [`SequenceList`] provides:
//!
//! - O(1) `append`, `prepend` and `pop_first`
//! - O(n) `pop_last`, indexed access, insertion after an index and removal
//! - Functional traversal: `traverse`, `transform`, `fold`, `index_of`
//! - Standard iteration, collection and comparison traits
//!
//! Operations whose precondition does not hold return a
//! [`SequenceListError`] and leave the list unchanged.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `TRACE` events for structural mutations and `DEBUG`
//!   events for rejected operations through the `tracing` crate
//!
//! ## Example
//!
//! ```rust
//! use sequence_list::prelude::*;
//!
//! let mut list = SequenceList::new();
//! list.append(1).append(2).prepend(0);
//! assert_eq!(list.to_vec(), vec![0, 1, 2]);
//!
//! assert_eq!(
//!     list.at(3),
//!     Err(SequenceListError::IndexOutOfRange { operation: "at", index: 3, length: 3 })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sequence_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceListError;
    pub use crate::sequence::*;
}

mod trace;

pub mod error;
pub mod sequence;

pub use error::SequenceListError;
pub use sequence::SequenceList;
