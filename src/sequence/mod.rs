//! Mutable singly-linked sequence container.
//!
//! - [`SequenceList`]: ordered list with O(1) insertion at both ends
//! - [`SequenceListIterator`]: borrowing iterator, front to back
//! - [`SequenceListIntoIterator`]: owning iterator, front to back
//!
//! # Examples
//!
//! ```rust
//! use sequence_list::sequence::SequenceList;
//!
//! let mut list: SequenceList<i32> = (1..=3).collect();
//! list.prepend(0).append(4);
//! assert_eq!(list.fold(0, |total, element, _| total + element), 10);
//!
//! let doubled = list.transform(|element, _| element * 2);
//! assert_eq!(doubled.to_vec(), vec![0, 2, 4, 6, 8]);
//! assert_eq!(list.index_of(&3), 3);
//! ```

mod iter;
mod list;
mod node;

pub use iter::SequenceListIntoIterator;
pub use iter::SequenceListIterator;
pub use list::SequenceList;
