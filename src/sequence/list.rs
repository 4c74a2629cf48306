//! Mutable singly-linked sequence.
//!
//! This module provides [`SequenceList`], an ordered container built from a
//! chain of singly-linked nodes.
//!
//! # Overview
//!
//! `SequenceList` keeps a link to both ends of the chain together with a
//! cached length. It provides:
//!
//! - O(1) `append`, `prepend` and `pop_first`
//! - O(1) access to the first and last element
//! - O(n) `pop_last` (the predecessor of the last node has to be found)
//! - O(n) indexed access, insertion and removal
//!
//! Indexed operations report failures through [`SequenceListError`] and
//! never leave the list half-modified.
//!
//! # Examples
//!
//! ```rust
//! use sequence_list::SequenceList;
//!
//! let mut list = SequenceList::new();
//! list.append(1).append(2).prepend(0);
//! assert_eq!(list.to_vec(), vec![0, 1, 2]);
//!
//! list.insert_after(1, 99)?;
//! assert_eq!(list.to_vec(), vec![0, 1, 99, 2]);
//!
//! assert_eq!(list.pop_last()?, 2);
//! assert_eq!(list.pop_first()?, 0);
//! assert_eq!(list.to_vec(), vec![1, 99]);
//! # Ok::<(), sequence_list::SequenceListError>(())
//! ```
//!
//! # Node Layout
//!
//! Nodes are stored in an arena owned by the list and linked by slot index:
//!
//! ```text
//! first ──► [0 | next] ──► [1 | next] ──► [2 | none] ◄── last
//! ```
//!
//! `last` is a plain index that is rewired on every mutation touching the end
//! of the chain, so appending never walks the list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

use super::iter::{SequenceListIntoIterator, SequenceListIterator};
use super::node::{NodeArena, NodeIndex};
use crate::error::{Result, SequenceListError};
use crate::trace::{trace_mutation, trace_rejection};

/// A mutable, ordered sequence backed by a singly-linked chain of nodes.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `append`       | O(1)       |
/// | `prepend`      | O(1)       |
/// | `pop_first`    | O(1)       |
/// | `pop_last`     | O(n)       |
/// | `first`/`last` | O(1)       |
/// | `len`          | O(1)       |
/// | `at`           | O(n)       |
/// | `insert_after` | O(n)       |
/// | `remove_at`    | O(n)       |
/// | `index_of`     | O(n)       |
/// | `clear`        | O(n)       |
/// | `shrink_to_fit`| O(n)       |
///
/// # Equality
///
/// [`index_of`](Self::index_of) and [`contains`](Self::contains) use the
/// element type's [`PartialEq`]: integers and strings compare by value,
/// composite types by whatever their `PartialEq` implementation says. To
/// search by identity, store references and use
/// [`find_index`](Self::find_index) with [`std::ptr::eq`].
///
/// # Memory
///
/// Removing an element vacates its node slot for reuse by the next insertion
/// but does not return memory to the allocator, so storage stays at the
/// list's peak length until it becomes empty. Call
/// [`shrink_to_fit`](Self::shrink_to_fit) to compact it earlier.
///
/// # Examples
///
/// ```rust
/// use sequence_list::SequenceList;
///
/// let list = SequenceList::singleton(42);
/// assert_eq!(list.first(), Some(&42));
/// assert_eq!(list.last(), Some(&42));
/// ```
pub struct SequenceList<T> {
    /// Owner of every node in the chain.
    nodes: NodeArena<T>,
    /// Head of the chain.
    first: Option<NodeIndex>,
    /// Tail of the chain, for O(1) append.
    last: Option<NodeIndex>,
    /// Cached length for O(1) access.
    length: usize,
}

static_assertions::assert_impl_all!(SequenceList<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(SequenceList<std::rc::Rc<i32>>: Send, Sync);

impl<T> SequenceList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = SequenceList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.first(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            first: None,
            last: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list = SequenceList::singleton("only");
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.first(), list.last());
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut list = Self::new();
        list.append(element);
        list
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Adds an element to the end of the list.
    ///
    /// Returns `&mut Self` so insertions can be chained.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list = SequenceList::new();
    /// list.append(1).append(2).append(3);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn append(&mut self, element: T) -> &mut Self {
        let inserted = self.nodes.allocate(element, None);
        match self.last {
            Some(last) => self.nodes[last].next = Some(inserted),
            None => self.first = Some(inserted),
        }
        self.last = Some(inserted);
        self.length += 1;
        trace_mutation!(length = self.length, "append");
        self
    }

    /// Adds an element to the front of the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list = SequenceList::new();
    /// list.prepend(3).prepend(2).prepend(1);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn prepend(&mut self, element: T) -> &mut Self {
        let inserted = self.nodes.allocate(element, self.first);
        if self.last.is_none() {
            self.last = Some(inserted);
        }
        self.first = Some(inserted);
        self.length += 1;
        trace_mutation!(length = self.length, "prepend");
        self
    }

    /// Inserts an element directly after the node at `index`.
    ///
    /// The new node takes over the anchor's former successor. Inserting after
    /// the last element makes the new element the last one.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceListError::IndexOutOfRange`] if `index >= len()`.
    /// Nothing is allocated in that case.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<i32> = [0, 1, 2].into();
    /// list.insert_after(1, 99)?;
    /// assert_eq!(list.to_vec(), vec![0, 1, 99, 2]);
    ///
    /// assert!(list.insert_after(4, 5).is_err());
    /// # Ok::<(), sequence_list::SequenceListError>(())
    /// ```
    pub fn insert_after(&mut self, index: usize, element: T) -> Result<&mut Self> {
        let anchor = self
            .locate(index)
            .ok_or_else(|| self.out_of_range("insert_after", index))?;

        let successor = self.nodes[anchor].next;
        let inserted = self.nodes.allocate(element, successor);
        self.nodes[anchor].next = Some(inserted);
        if self.last == Some(anchor) {
            self.last = Some(inserted);
        }
        self.length += 1;
        trace_mutation!(index, length = self.length, "insert_after");
        Ok(self)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes and returns the first element.
    ///
    /// `first` advances to the former second node; the list becomes empty
    /// only when the removed node was the last one.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceListError::EmptyContainer`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::{SequenceList, SequenceListError};
    ///
    /// let mut list: SequenceList<i32> = [1, 2].into();
    /// assert_eq!(list.pop_first(), Ok(1));
    /// assert_eq!(list.pop_first(), Ok(2));
    /// assert_eq!(
    ///     list.pop_first(),
    ///     Err(SequenceListError::EmptyContainer { operation: "pop_first" })
    /// );
    /// ```
    pub fn pop_first(&mut self) -> Result<T> {
        match self.detach_first() {
            Some(element) => {
                trace_mutation!(length = self.length, "pop_first");
                Ok(element)
            }
            None => Err(Self::reject(SequenceListError::EmptyContainer {
                operation: "pop_first",
            })),
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceListError::EmptyContainer`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(n), since the node before the last one has to be located by walking
    /// from the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<i32> = [1, 2, 3].into();
    /// assert_eq!(list.pop_last(), Ok(3));
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn pop_last(&mut self) -> Result<T> {
        let Some(last) = self.last else {
            return Err(Self::reject(SequenceListError::EmptyContainer {
                operation: "pop_last",
            }));
        };

        let predecessor = self
            .length
            .checked_sub(2)
            .and_then(|index| self.locate(index));
        let removed = self.nodes.release(last);
        match predecessor {
            Some(predecessor) => {
                self.nodes[predecessor].next = None;
                self.last = Some(predecessor);
            }
            None => {
                self.first = None;
                self.last = None;
            }
        }
        self.length -= 1;
        self.release_storage_if_empty();
        trace_mutation!(length = self.length, "pop_last");
        Ok(removed.element)
    }

    /// Removes the element at `index`.
    ///
    /// Returns `&mut Self` for chaining; use [`take_at`](Self::take_at) to
    /// get the removed value back.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<i32> = [0, 1, 99, 2].into();
    /// list.remove_at(0)?.remove_at(1)?;
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// # Ok::<(), sequence_list::SequenceListError>(())
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<&mut Self> {
        self.unlink_at("remove_at", index)?;
        Ok(self)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<char> = "abc".chars().collect();
    /// assert_eq!(list.take_at(1), Ok('b'));
    /// assert_eq!(list.to_vec(), vec!['a', 'c']);
    /// ```
    pub fn take_at(&mut self, index: usize) -> Result<T> {
        self.unlink_at("take_at", index)
    }

    /// Removes every element, dropping them in chain order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<i32> = (0..10).collect();
    /// list.clear().append(42);
    /// assert_eq!(list.to_vec(), vec![42]);
    /// ```
    pub fn clear(&mut self) -> &mut Self {
        let mut cursor = self.first.take();
        while let Some(index) = cursor {
            let removed = self.nodes.release(index);
            cursor = removed.next;
        }
        self.last = None;
        self.length = 0;
        self.nodes.reset();
        trace_mutation!("clear");
        self
    }

    /// Repacks the nodes in chain order and frees the slots left behind by
    /// earlier removals.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<i32> = (0..1000).collect();
    /// while list.len() > 2 {
    ///     list.pop_first()?;
    /// }
    /// list.shrink_to_fit();
    /// assert_eq!(list.to_vec(), vec![998, 999]);
    /// # Ok::<(), sequence_list::SequenceListError>(())
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let mut packed = NodeArena::new();
        let mut cursor = self.first.take();
        let mut previous: Option<NodeIndex> = None;
        while let Some(index) = cursor {
            let removed = self.nodes.release(index);
            cursor = removed.next;
            let inserted = packed.allocate(removed.element, None);
            match previous {
                Some(previous) => packed[previous].next = Some(inserted),
                None => self.first = Some(inserted),
            }
            previous = Some(inserted);
        }
        packed.shrink_to_fit();
        self.nodes = packed;
        self.last = previous;
        trace_mutation!(length = self.length, "shrink_to_fit");
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = [10, 20, 30].into();
    /// assert_eq!(list.at(2), Ok(&30));
    /// assert!(list.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or_else(|| self.out_of_range("at", index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceListError::IndexOutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        match self.locate(index) {
            Some(found) => Ok(&mut self.nodes[found].element),
            None => Err(self.out_of_range("at_mut", index)),
        }
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = [1, 2, 3].into();
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.locate(index).map(|found| &self.nodes[found].element)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.locate(index).map(|found| &mut self.nodes[found].element)
    }

    /// Returns the first element, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.first.map(|index| &self.nodes[index].element)
    }

    /// Returns the last element, or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = (1..=100).collect();
    /// assert_eq!(list.last(), Some(&100));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.last.map(|index| &self.nodes[index].element)
    }

    /// Returns a mutable reference to the first element.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.first.map(|index| &mut self.nodes[index].element)
    }

    /// Returns a mutable reference to the last element.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.last.map(|index| &mut self.nodes[index].element)
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// Every call starts again from the first element. The list cannot be
    /// modified while the iterator is alive:
    ///
    /// ```rust,compile_fail
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<i32> = [1, 2, 3].into();
    /// for element in list.iter() {
    ///     list.append(*element);
    /// }
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = [1, 2, 3].into();
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// assert_eq!(list.iter().count(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> SequenceListIterator<'_, T> {
        SequenceListIterator::new(&self.nodes, self.first, self.length)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Calls `visitor` with every element and its position, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<&str> = ["a", "b"].into();
    /// let mut seen = Vec::new();
    /// list.traverse(|element, position| seen.push(format!("{position}:{element}")));
    /// assert_eq!(seen, vec!["0:a", "1:b"]);
    /// ```
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, usize),
    {
        for (position, element) in self.iter().enumerate() {
            visitor(element, position);
        }
    }

    /// Calls `visitor` with a mutable reference to every element and its
    /// position, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let mut list: SequenceList<i32> = [10, 10, 10].into();
    /// list.traverse_mut(|element, position| *element += position as i32);
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    pub fn traverse_mut<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut T, usize),
    {
        let mut cursor = self.first;
        let mut position = 0;
        while let Some(index) = cursor {
            let node = &mut self.nodes[index];
            visitor(&mut node.element, position);
            cursor = node.next;
            position += 1;
        }
    }

    /// Builds a new list by applying `mapper` to every element and its
    /// position. The source list is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = [1, 2, 3].into();
    /// let scaled = list.transform(|element, position| element * 10 + position as i32);
    /// assert_eq!(scaled.to_vec(), vec![10, 21, 32]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn transform<U, F>(&self, mut mapper: F) -> SequenceList<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        let mut result = SequenceList::new();
        for (position, element) in self.iter().enumerate() {
            result.append(mapper(element, position));
        }
        result
    }

    /// Folds the elements from front to back, threading an accumulator seeded
    /// with `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = [1, 2, 3].into();
    /// let weighted = list.fold(0, |accumulator, element, position| {
    ///     accumulator + element * position as i32
    /// });
    /// assert_eq!(weighted, 8);
    /// ```
    pub fn fold<K, F>(&self, initial: K, mut combiner: F) -> K
    where
        F: FnMut(K, &T, usize) -> K,
    {
        self.iter()
            .enumerate()
            .fold(initial, |accumulator, (position, element)| {
                combiner(accumulator, element, position)
            })
    }

    /// Finds the index of the first element that satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = (1..=5).collect();
    /// assert_eq!(list.find_index(|element| *element > 3), Some(3));
    /// assert_eq!(list.find_index(|element| *element > 10), None);
    /// ```
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Walks `index` successors from `first`.
    fn locate(&self, index: usize) -> Option<NodeIndex> {
        if index >= self.length {
            return None;
        }
        let mut cursor = self.first?;
        for _ in 0..index {
            cursor = self.nodes[cursor].next?;
        }
        Some(cursor)
    }

    /// Unlinks the first node and returns its element.
    pub(super) fn detach_first(&mut self) -> Option<T> {
        let first = self.first?;
        let removed = self.nodes.release(first);
        self.first = removed.next;
        if self.first.is_none() {
            self.last = None;
        }
        self.length -= 1;
        self.release_storage_if_empty();
        Some(removed.element)
    }

    fn unlink_at(&mut self, operation: &'static str, index: usize) -> Result<T> {
        if index >= self.length {
            return Err(self.out_of_range(operation, index));
        }
        if index == 0 {
            let element = self
                .detach_first()
                .ok_or_else(|| self.out_of_range(operation, index))?;
            trace_mutation!(operation, index, length = self.length, "unlink");
            return Ok(element);
        }

        let predecessor = self
            .locate(index - 1)
            .ok_or_else(|| self.out_of_range(operation, index))?;
        let target = self.nodes[predecessor]
            .next
            .ok_or_else(|| self.out_of_range(operation, index))?;

        let removed = self.nodes.release(target);
        self.nodes[predecessor].next = removed.next;
        if self.last == Some(target) {
            self.last = Some(predecessor);
        }
        self.length -= 1;
        trace_mutation!(operation, index, length = self.length, "unlink");
        Ok(removed.element)
    }

    fn release_storage_if_empty(&mut self) {
        debug_assert_eq!(self.nodes.occupied(), self.length);
        if self.length == 0 {
            self.nodes.reset();
        }
    }

    fn out_of_range(&self, operation: &'static str, index: usize) -> SequenceListError {
        Self::reject(SequenceListError::IndexOutOfRange {
            operation,
            index,
            length: self.length,
        })
    }

    fn reject(error: SequenceListError) -> SequenceListError {
        trace_rejection!(error);
        error
    }

    /// Checks the structural invariants of the chain and the arena.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.length == 0, self.first.is_none());
        assert_eq!(self.length == 0, self.last.is_none());
        assert_eq!(self.nodes.occupied(), self.length);

        let mut reached = 0;
        let mut cursor = self.first;
        let mut tail = None;
        while let Some(index) = cursor {
            reached += 1;
            assert!(reached <= self.length, "chain is longer than length");
            tail = Some(index);
            cursor = self.nodes[index].next;
        }
        assert_eq!(reached, self.length);
        assert_eq!(tail, self.last);
        assert_eq!(
            self.nodes.vacant() + self.nodes.occupied(),
            self.nodes.slot_count()
        );
    }
}

impl<T: Clone> SequenceList<T> {
    /// Copies the elements into a new `Vec`, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<&str> = ["a", "b", "c"].into();
    /// assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> SequenceList<T> {
    /// Returns the position of the first element equal to `element`.
    ///
    /// When no element matches, the list's length is returned instead of a
    /// negative or optional value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequence_list::SequenceList;
    ///
    /// let list: SequenceList<i32> = [5, 7, 5].into();
    /// assert_eq!(list.index_of(&5), 0);
    /// assert_eq!(list.index_of(&7), 1);
    /// assert_eq!(list.index_of(&9), list.len());
    /// ```
    pub fn index_of(&self, element: &T) -> usize {
        self.find_index(|candidate| candidate == element).unwrap_or(self.length)
    }

    /// Returns `true` if some element equals `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|candidate| candidate == element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SequenceList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SequenceList<T> {
    /// Copies the chain into a freshly packed arena.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for SequenceList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SequenceList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for SequenceList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for SequenceList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for SequenceList<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for SequenceList<T> {
    type Item = T;
    type IntoIter = SequenceListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SequenceListIntoIterator::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SequenceList<T> {
    type Item = &'a T;
    type IntoIter = SequenceListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for SequenceList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index {index} is out of range for SequenceList of length {}",
                self.length
            ),
        }
    }
}

impl<T: PartialEq> PartialEq for SequenceList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SequenceList<T> {}

/// Hashes the length first, then every element in order, so equal lists
/// hash equally.
impl<T: Hash> Hash for SequenceList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SequenceList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
