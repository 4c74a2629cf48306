//! Node storage backing [`SequenceList`](super::SequenceList).
//!
//! Nodes live in a slot arena and refer to their successor by slot index.
//! A node is reachable from exactly one predecessor link (or from the list's
//! `first` index), so the arena never holds shared ownership. Vacated slots
//! are threaded onto a free list and reused by the next allocation.

use std::ops::{Index, IndexMut};

/// Position of a node inside the arena.
pub(super) type NodeIndex = usize;

/// A single link of the chain.
pub(super) struct Node<T> {
    /// The element stored in this node.
    pub(super) element: T,
    /// Successor in chain order, `None` for the last node.
    pub(super) next: Option<NodeIndex>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}

/// Slot arena owning every node of one list.
pub(super) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeIndex>,
    occupied: usize,
}

impl<T> NodeArena<T> {
    pub(super) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    /// Stores a new node and returns its index, reusing a vacant slot when
    /// one is available.
    pub(super) fn allocate(&mut self, element: T, next: Option<NodeIndex>) -> NodeIndex {
        let node = Slot::Occupied(Node { element, next });
        self.occupied += 1;

        match self.free_head {
            Some(index) => {
                let previous = std::mem::replace(&mut self.slots[index], node);
                match previous {
                    Slot::Vacant { next_free } => self.free_head = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                index
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    /// Vacates the slot at `index` and hands back the node it held.
    pub(super) fn release(&mut self, index: NodeIndex) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    /// Drops all slots and returns the backing allocation.
    pub(super) fn reset(&mut self) {
        self.slots = Vec::new();
        self.free_head = None;
        self.occupied = 0;
    }

    /// Releases spare capacity of the slot vector.
    pub(super) fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }

    /// Number of occupied slots.
    pub(super) const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Number of slots currently threaded on the free list.
    #[cfg(test)]
    pub(super) fn vacant(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.free_head;
        while let Some(index) = cursor {
            match &self.slots[index] {
                Slot::Vacant { next_free } => cursor = *next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            }
            count += 1;
        }
        count
    }

    /// Total number of slots, occupied or not.
    #[cfg(test)]
    pub(super) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Index<NodeIndex> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {index}"),
        }
    }
}

impl<T> IndexMut<NodeIndex> for NodeArena<T> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {index}"),
        }
    }
}
