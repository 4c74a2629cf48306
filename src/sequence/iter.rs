//! Iterators over [`SequenceList`].

use std::iter::FusedIterator;

use super::list::SequenceList;
use super::node::{NodeArena, NodeIndex};

/// An iterator over references to elements of a [`SequenceList`].
///
/// Created by [`SequenceList::iter`]. Yields elements from the first node to
/// the last one.
pub struct SequenceListIterator<'a, T> {
    nodes: &'a NodeArena<T>,
    current: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> SequenceListIterator<'a, T> {
    pub(super) const fn new(
        nodes: &'a NodeArena<T>,
        current: Option<NodeIndex>,
        remaining: usize,
    ) -> Self {
        Self {
            nodes,
            current,
            remaining,
        }
    }
}

impl<'a, T> Iterator for SequenceListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let nodes = self.nodes;
        let node = &nodes[index];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SequenceListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for SequenceListIterator<'_, T> {}

impl<T> Clone for SequenceListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over elements of a [`SequenceList`].
///
/// Each step detaches the first node, so elements are moved out without
/// cloning.
pub struct SequenceListIntoIterator<T> {
    list: SequenceList<T>,
}

impl<T> SequenceListIntoIterator<T> {
    pub(super) fn new(list: SequenceList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for SequenceListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.detach_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for SequenceListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for SequenceListIntoIterator<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_iter_is_exact_size() {
        let list: SequenceList<i32> = (0..5).collect();
        let mut iterator = list.iter();
        assert_eq!(iterator.len(), 5);
        iterator.next();
        iterator.next();
        assert_eq!(iterator.size_hint(), (3, Some(3)));
    }

    #[rstest]
    fn test_iter_restarts_from_first() {
        let list: SequenceList<i32> = (1..=3).collect();
        let first_pass: Vec<i32> = list.iter().copied().collect();
        let second_pass: Vec<i32> = list.iter().copied().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[rstest]
    fn test_iter_is_fused() {
        let list = SequenceList::singleton(1);
        let mut iterator = list.iter();
        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_iter_clone_continues_independently() {
        let list: SequenceList<i32> = (1..=3).collect();
        let mut iterator = list.iter();
        iterator.next();
        let cloned = iterator.clone();
        assert_eq!(iterator.collect::<Vec<_>>(), vec![&2, &3]);
        assert_eq!(cloned.collect::<Vec<_>>(), vec![&2, &3]);
    }

    #[rstest]
    fn test_iter_follows_chain_after_front_edits() {
        let mut list: SequenceList<i32> = (1..=3).collect();
        list.prepend(0);
        list.remove_at(2).unwrap();
        let collected: Vec<&i32> = list.iter().collect();
        assert_eq!(collected, vec![&0, &1, &3]);
    }

    #[rstest]
    fn test_into_iter_moves_elements_out() {
        let list: SequenceList<String> = ["x", "y"].into_iter().map(String::from).collect();
        let mut iterator = list.into_iter();
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.next(), Some(String::from("x")));
        assert_eq!(iterator.len(), 1);
        assert_eq!(iterator.next(), Some(String::from("y")));
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_for_loop_over_reference() {
        let list: SequenceList<i32> = (1..=4).collect();
        let mut total = 0;
        for element in &list {
            total += element;
        }
        assert_eq!(total, 10);
    }
}
