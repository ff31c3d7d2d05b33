//! Arena-backed doubly linked list.
//!
//! Nodes live in a vector of slots. Links in both directions are slot
//! indices, and vacated slots are chained into a free list for reuse.
//! Callers address nodes through a [`Handle`], which pairs the slot index
//! with the slot's generation so that a handle to a removed node is
//! rejected instead of silently addressing whatever reused the slot.
//! Handles also carry the id of the list that issued them, so a handle
//! from another list (or from before a [`OrderedList::remove_all`]) never
//! resolves.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Opaque reference to a node of an [`OrderedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    list: u64,
    index: usize,
    generation: u32,
}

impl Handle {
    /// Slot index inside the owning list's arena.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Generation of the slot when the handle was issued.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    Vacant { generation: u32, next_free: Option<usize> },
}

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A generic doubly linked ordered container.
///
/// `append`, `remove` and `remove_all` are O(1); positional operations walk
/// from the head.
pub struct OrderedList<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> OrderedList<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: next_list_id(),
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the first node.
    #[must_use]
    pub fn head(&self) -> Option<Handle> {
        self.head.map(|index| self.handle_for(index))
    }

    /// Handle of the last node.
    #[must_use]
    pub fn tail(&self) -> Option<Handle> {
        self.tail.map(|index| self.handle_for(index))
    }

    /// Append `value` after the current tail.
    pub fn append(&mut self, value: T) -> Handle {
        let index = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        self.handle_for(index)
    }

    /// Handle of the node at `index`, or `None` past the end.
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<Handle> {
        self.index_at(index).map(|slot| self.handle_for(slot))
    }

    /// Value behind `handle`, or `None` if the handle is stale.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.resolve(handle).ok().map(|index| &self.node(index).value)
    }

    /// Mutable value behind `handle`, or `None` if the handle is stale.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let index = self.resolve(handle).ok()?;
        Some(&mut self.node_mut(index).value)
    }

    /// Unlink the node behind `handle` and return its value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidHandle`] if the handle was not issued by
    /// this list or its node has already been removed.
    pub fn remove(&mut self, handle: Handle) -> Result<T, DomainError> {
        let index = self.resolve(handle)?;
        let (prev, next) = self.links(index);

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;

        Ok(self.release(index))
    }

    /// Drop every node. All outstanding handles become invalid.
    ///
    /// The list takes a fresh id instead of touching each slot, so handle
    /// invalidation is O(1). The arena keeps its capacity.
    pub fn remove_all(&mut self) {
        self.id = next_list_id();
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Exchange the nodes at positions `i` and `j` by relinking them.
    ///
    /// Handles keep addressing the same values after the swap.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IndexOutOfBounds`] if either index is past the
    /// end of the list.
    pub fn swap_at(&mut self, i: usize, j: usize) -> Result<(), DomainError> {
        for index in [i, j] {
            if index >= self.len {
                return Err(DomainError::IndexOutOfBounds {
                    index,
                    len: self.len,
                });
            }
        }
        if i == j {
            return Ok(());
        }

        let (lo, hi) = (i.min(j), i.max(j));
        let a = self.index_at(lo).ok_or_else(|| broken_walk(lo))?;
        let b = self.index_at(hi).ok_or_else(|| broken_walk(hi))?;
        let (a_prev, a_next) = self.links(a);
        let (b_prev, b_next) = self.links(b);

        if a_next == Some(b) {
            // a_prev <-> b <-> a <-> b_next
            self.set_links(b, a_prev, Some(a));
            self.set_links(a, Some(b), b_next);
            match a_prev {
                Some(prev) => self.node_mut(prev).next = Some(b),
                None => self.head = Some(b),
            }
            match b_next {
                Some(next) => self.node_mut(next).prev = Some(a),
                None => self.tail = Some(a),
            }
        } else {
            self.set_links(a, b_prev, b_next);
            self.set_links(b, a_prev, a_next);
            match a_prev {
                Some(prev) => self.node_mut(prev).next = Some(b),
                None => self.head = Some(b),
            }
            if let Some(next) = a_next {
                self.node_mut(next).prev = Some(b);
            }
            if let Some(prev) = b_prev {
                self.node_mut(prev).next = Some(a);
            }
            match b_next {
                Some(next) => self.node_mut(next).prev = Some(a),
                None => self.tail = Some(a),
            }
        }

        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Reverse the list in place.
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node_mut(index);
            std::mem::swap(&mut node.prev, &mut node.next);
            cursor = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Clear the list, then append every item in order.
    pub fn replace_from<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.remove_all();
        for item in items {
            self.append(item);
        }
    }

    /// Iterate over values from head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Iterate over node handles from head to tail.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.indices().map(|index| self.handle_for(index))
    }

    /// Verify the link structure.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvariantViolation`] describing the first
    /// broken invariant found.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        let violation = |msg: String| Err(DomainError::InvariantViolation(msg));

        if self.head.is_none() != self.tail.is_none() {
            return violation("exactly one of head and tail is set".into());
        }
        if self.head.is_none() != (self.len == 0) {
            return violation(format!("head presence disagrees with len {}", self.len));
        }

        let mut steps = 0;
        let mut expected_prev = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            steps += 1;
            if steps > self.len {
                return violation(format!("walk exceeded len {} (cycle?)", self.len));
            }
            let Some(node) = self.try_node(index) else {
                return violation(format!("link to vacant slot {index}"));
            };
            if node.prev != expected_prev {
                return violation(format!(
                    "slot {index} has prev {:?}, expected {expected_prev:?}",
                    node.prev
                ));
            }
            expected_prev = Some(index);
            cursor = node.next;
        }

        if steps != self.len {
            return violation(format!("walk visited {steps} nodes, len is {}", self.len));
        }
        if expected_prev != self.tail {
            return violation("walk did not end at tail".into());
        }
        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied { .. }))
            .count();
        if occupied != self.len {
            return violation(format!("{occupied} occupied slots, len is {}", self.len));
        }

        Ok(())
    }

    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, |&index| self.node(index).next).take(self.len)
    }

    fn index_at(&self, position: usize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        self.indices().nth(position)
    }

    fn resolve(&self, handle: Handle) -> Result<usize, DomainError> {
        if handle.list != self.id {
            return Err(DomainError::InvalidHandle {
                index: handle.index,
                generation: handle.generation,
            });
        }
        match self.slots.get(handle.index) {
            Some(Slot::Occupied { generation, .. }) if *generation == handle.generation => {
                Ok(handle.index)
            }
            _ => Err(DomainError::InvalidHandle {
                index: handle.index,
                generation: handle.generation,
            }),
        }
    }

    fn handle_for(&self, index: usize) -> Handle {
        let generation = match &self.slots[index] {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation, .. } => *generation,
        };
        Handle {
            list: self.id,
            index,
            generation,
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(index) => {
                let generation = match self.slots[index] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free = next_free;
                        generation
                    }
                    Slot::Occupied { .. } => unreachable!("free list points at occupied slot"),
                };
                self.slots[index] = Slot::Occupied { generation, node };
                index
            }
            None => {
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    node,
                });
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> T {
        let generation = match &self.slots[index] {
            Slot::Occupied { generation, .. } => generation.wrapping_add(1),
            Slot::Vacant { .. } => unreachable!("released slot {index} is vacant"),
        };
        let vacant = Slot::Vacant {
            generation,
            next_free: self.free,
        };
        self.free = Some(index);

        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { node, .. } => node.value,
            Slot::Vacant { .. } => unreachable!("released slot {index} is vacant"),
        }
    }

    fn try_node(&self, index: usize) -> Option<&Node<T>> {
        match self.slots.get(index)? {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("linked slot {index} is vacant"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("linked slot {index} is vacant"),
        }
    }

    fn links(&self, index: usize) -> (Option<usize>, Option<usize>) {
        let node = self.node(index);
        (node.prev, node.next)
    }

    fn set_links(&mut self, index: usize, prev: Option<usize>, next: Option<usize>) {
        let node = self.node_mut(index);
        node.prev = prev;
        node.next = next;
    }
}

impl<T: PartialEq> OrderedList<T> {
    /// Append `value` unless an equal value is already present.
    ///
    /// Returns the new node's handle, or `None` if nothing was appended.
    pub fn append_unique(&mut self, value: T) -> Option<Handle> {
        if self.contains(&value) {
            return None;
        }
        Some(self.append(value))
    }

    /// Returns true if any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Handle of the first element equal to `value`.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<Handle> {
        self.indices()
            .find(|&index| self.node(index).value == *value)
            .map(|index| self.handle_for(index))
    }
}

impl<T: Clone> OrderedList<T> {
    /// Copy the values into a vector, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

fn broken_walk(position: usize) -> DomainError {
    DomainError::InvariantViolation(format!("walk ended before position {position}"))
}

/// A clone is a separate list: handles issued by the source do not resolve
/// against it.
impl<T: Clone> Clone for OrderedList<T> {
    fn clone(&self) -> Self {
        Self {
            id: next_list_id(),
            slots: self.slots.clone(),
            free: self.free,
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for OrderedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Borrowing iterator over an [`OrderedList`].
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (OrderedList<char>, Vec<Handle>) {
        let mut list = OrderedList::new();
        let handles = ['A', 'B', 'C'].map(|c| list.append(c)).to_vec();
        (list, handles)
    }

    #[test]
    fn empty_list_has_no_endpoints() {
        let list: OrderedList<u8> = OrderedList::new();
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert!(list.check_invariants().is_ok());
    }

    #[test]
    fn append_links_new_tail() {
        let (list, handles) = abc();
        assert_eq!(list.len(), 3);
        assert_eq!(list.head(), Some(handles[0]));
        assert_eq!(list.tail(), Some(handles[2]));
        assert_eq!(list.to_vec(), vec!['A', 'B', 'C']);
        assert!(list.check_invariants().is_ok());
    }

    #[test]
    fn append_unique_skips_equal_values() {
        let (mut list, _) = abc();
        assert!(list.append_unique('B').is_none());
        assert!(list.append_unique('D').is_some());
        assert_eq!(list.to_vec(), vec!['A', 'B', 'C', 'D']);
    }

    #[test]
    fn node_at_stops_at_tail() {
        let (list, handles) = abc();
        assert_eq!(list.node_at(0), Some(handles[0]));
        assert_eq!(list.node_at(2), Some(handles[2]));
        assert_eq!(list.node_at(3), None);
        assert_eq!(list.node_at(usize::MAX), None);
    }

    #[test]
    fn remove_middle_relinks_neighbors() {
        let (mut list, handles) = abc();
        assert_eq!(list.remove(handles[1]), Ok('B'));
        assert_eq!(list.to_vec(), vec!['A', 'C']);
        assert!(list.check_invariants().is_ok());
    }

    #[test]
    fn remove_endpoints_updates_head_and_tail() {
        let (mut list, handles) = abc();
        list.remove(handles[0]).unwrap();
        assert_eq!(list.head(), Some(handles[1]));
        list.remove(handles[2]).unwrap();
        assert_eq!(list.tail(), Some(handles[1]));
        list.remove(handles[1]).unwrap();
        assert!(list.is_empty());
        assert!(list.check_invariants().is_ok());
    }

    #[test]
    fn stale_handle_is_rejected_after_slot_reuse() {
        let (mut list, handles) = abc();
        list.remove(handles[1]).unwrap();
        let reused = list.append('D');
        assert_eq!(reused.index(), handles[1].index());
        assert_ne!(reused.generation(), handles[1].generation());

        assert!(matches!(
            list.remove(handles[1]),
            Err(DomainError::InvalidHandle { .. })
        ));
        assert_eq!(list.get(handles[1]), None);
        assert_eq!(list.get(reused), Some(&'D'));
        assert_eq!(list.to_vec(), vec!['A', 'C', 'D']);
    }

    #[test]
    fn handle_from_other_list_is_rejected() {
        let (mut list, _) = abc();
        let other: OrderedList<char> = ['X', 'Y', 'Z'].into_iter().collect();
        let foreign = other.node_at(1).unwrap();
        assert_eq!(foreign.index(), list.node_at(1).unwrap().index());
        assert_eq!(foreign.generation(), list.node_at(1).unwrap().generation());

        assert!(matches!(
            list.remove(foreign),
            Err(DomainError::InvalidHandle { .. })
        ));
        assert_eq!(list.get(foreign), None);
        assert_eq!(list.to_vec(), vec!['A', 'B', 'C']);
        assert!(list.check_invariants().is_ok());
    }

    #[test]
    fn clone_does_not_accept_source_handles() {
        let (list, handles) = abc();
        let mut copy = list.clone();
        assert_eq!(copy.to_vec(), list.to_vec());
        assert!(copy.remove(handles[1]).is_err());
        assert_eq!(copy.len(), 3);

        let own = copy.node_at(1).unwrap();
        assert_eq!(copy.remove(own), Ok('B'));
        assert_eq!(list.to_vec(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn remove_all_invalidates_handles() {
        let (mut list, handles) = abc();
        list.remove_all();
        assert!(list.is_empty());
        assert!(list.check_invariants().is_ok());
        for handle in &handles {
            assert!(list.get(*handle).is_none());
        }

        // The first slot is reused with the same index and generation.
        let fresh = list.append('Q');
        assert_eq!(fresh.index(), handles[0].index());
        assert_eq!(fresh.generation(), handles[0].generation());
        assert_eq!(list.get(handles[0]), None);
        assert!(list.remove(handles[0]).is_err());
        assert_eq!(list.to_vec(), vec!['Q']);
        assert_eq!(list.get(fresh), Some(&'Q'));
    }

    #[test]
    fn contains_uses_value_equality() {
        let (list, _) = abc();
        assert!(list.contains(&'C'));
        assert!(!list.contains(&'Z'));
        assert_eq!(list.position(&'C'), list.tail());
    }

    #[test]
    fn swap_far_apart_then_remove() {
        let (mut list, handles) = abc();
        list.swap_at(0, 2).unwrap();
        assert_eq!(list.to_vec(), vec!['C', 'B', 'A']);
        assert_eq!(list.head(), Some(handles[2]));
        assert_eq!(list.tail(), Some(handles[0]));

        list.remove(handles[1]).unwrap();
        assert_eq!(list.to_vec(), vec!['C', 'A']);
        assert_eq!(list.len(), 2);
        assert!(list.check_invariants().is_ok());
    }

    #[test]
    fn swap_adjacent_in_either_order() {
        let mut list: OrderedList<u32> = (0..4).collect();
        list.swap_at(1, 2).unwrap();
        assert_eq!(list.to_vec(), vec![0, 2, 1, 3]);
        list.swap_at(2, 1).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
        list.swap_at(3, 2).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 3, 2]);
        list.swap_at(0, 1).unwrap();
        assert_eq!(list.to_vec(), vec![1, 0, 3, 2]);
        assert!(list.check_invariants().is_ok());
    }

    #[test]
    fn swap_same_index_is_noop() {
        let (mut list, _) = abc();
        list.swap_at(1, 1).unwrap();
        assert_eq!(list.to_vec(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn swap_out_of_bounds_is_error() {
        let (mut list, _) = abc();
        assert_eq!(
            list.swap_at(0, 3),
            Err(DomainError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(list.to_vec(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn swap_twice_restores_order() {
        let original: Vec<u32> = (0..7).collect();
        for i in 0..original.len() {
            for j in 0..original.len() {
                let mut list = OrderedList::from(original.clone());
                list.swap_at(i, j).unwrap();
                list.swap_at(i, j).unwrap();
                assert_eq!(list.to_vec(), original, "swap_at({i}, {j})");
                assert!(list.check_invariants().is_ok());
            }
        }
    }

    #[test]
    fn reverse_twice_restores_order() {
        let mut list: OrderedList<u32> = (0..5).collect();
        list.reverse();
        assert_eq!(list.to_vec(), vec![4, 3, 2, 1, 0]);
        assert!(list.check_invariants().is_ok());
        list.reverse();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn reverse_small_lists_is_noop() {
        let mut empty: OrderedList<u8> = OrderedList::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut single = OrderedList::from(vec![9]);
        single.reverse();
        assert_eq!(single.to_vec(), vec![9]);
        assert!(single.check_invariants().is_ok());
    }

    #[test]
    fn replace_from_clears_receiver() {
        let (mut list, handles) = abc();
        list.replace_from(['X', 'Y']);
        assert_eq!(list.to_vec(), vec!['X', 'Y']);
        assert!(list.get(handles[0]).is_none());
    }

    #[test]
    fn array_round_trip_is_identity() {
        let list = OrderedList::from(vec![3, 1, 4, 1, 5]);
        let mut copy = OrderedList::new();
        copy.replace_from(list.to_vec());
        assert_eq!(copy.to_vec(), list.to_vec());
    }

    #[test]
    fn iter_runs_both_directions() {
        let (list, _) = abc();
        let backwards: Vec<char> = list.iter().rev().copied().collect();
        assert_eq!(backwards, vec!['C', 'B', 'A']);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn serializes_as_plain_sequence() {
        let list = OrderedList::from(vec![1, 2, 3]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: OrderedList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
