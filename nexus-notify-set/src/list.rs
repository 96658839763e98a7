//! Doubly-linked list over slab storage.
//!
//! Nodes live in a [`slab::Slab`], with the list managing the links
//! internally. Slab keys stay valid until the node is removed, so the set can
//! hold on to a node's key and splice next to it in O(1).
//!
//! ```text
//! Slab (storage)   - owns nodes, provides stable keys
//! List (structure) - head/tail + prev/next links between keys
//! ```

use core::iter::FusedIterator;

use slab::Slab;

/// Stable key of a node in the list's slab.
pub(crate) type NodeKey = usize;

/// Sentinel for "no node". Slab keys never reach `usize::MAX`.
const NONE: NodeKey = usize::MAX;

#[derive(Debug)]
struct ListNode<T> {
    data: T,
    prev: NodeKey,
    next: NodeKey,
}

impl<T> ListNode<T> {
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            prev: NONE,
            next: NONE,
        }
    }
}

/// A doubly-linked list that owns its slab storage.
#[derive(Debug)]
pub(crate) struct List<T> {
    nodes: Slab<ListNode<T>>,
    head: NodeKey,
    tail: NodeKey,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: NONE,
            tail: NONE,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: NONE,
            tail: NONE,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head == NONE
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub(crate) fn front_key(&self) -> Option<NodeKey> {
        (self.head != NONE).then_some(self.head)
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub(crate) fn back_key(&self) -> Option<NodeKey> {
        (self.tail != NONE).then_some(self.tail)
    }

    /// Returns a reference to the element at `key`.
    #[inline]
    pub(crate) fn get(&self, key: NodeKey) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.data)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub(crate) fn front(&self) -> Option<&T> {
        self.front_key().and_then(|key| self.get(key))
    }

    /// Returns a reference to the back element.
    #[inline]
    pub(crate) fn back(&self) -> Option<&T> {
        self.back_key().and_then(|key| self.get(key))
    }

    // ========================================================================
    // Insert operations (allocate + link)
    // ========================================================================

    /// Pushes a value to the front of the list, returning its key.
    pub(crate) fn push_front(&mut self, value: T) -> NodeKey {
        let key = self.nodes.insert(ListNode::new(value));
        let old_head = self.head;
        self.nodes[key].next = old_head;

        if old_head != NONE {
            self.nodes[old_head].prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        key
    }

    /// Pushes a value to the back of the list, returning its key.
    pub(crate) fn push_back(&mut self, value: T) -> NodeKey {
        let key = self.nodes.insert(ListNode::new(value));
        let old_tail = self.tail;
        self.nodes[key].prev = old_tail;

        if old_tail != NONE {
            self.nodes[old_tail].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        key
    }

    /// Inserts a value after an existing node, returning its key.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a live key.
    pub(crate) fn insert_after(&mut self, after: NodeKey, value: T) -> NodeKey {
        let next = self.nodes[after].next;
        let key = self.nodes.insert(ListNode::new(value));

        let node = &mut self.nodes[key];
        node.prev = after;
        node.next = next;

        self.nodes[after].next = key;
        if next != NONE {
            self.nodes[next].prev = key;
        } else {
            self.tail = key;
        }

        key
    }

    /// Inserts a value before an existing node, returning its key.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not a live key.
    pub(crate) fn insert_before(&mut self, before: NodeKey, value: T) -> NodeKey {
        let prev = self.nodes[before].prev;
        let key = self.nodes.insert(ListNode::new(value));

        let node = &mut self.nodes[key];
        node.next = before;
        node.prev = prev;

        self.nodes[before].prev = key;
        if prev != NONE {
            self.nodes[prev].next = key;
        } else {
            self.head = key;
        }

        key
    }

    // ========================================================================
    // Remove operations (unlink + deallocate)
    // ========================================================================

    /// Unlinks and removes the node at `key`.
    ///
    /// Returns `None` if the key is not live.
    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<T> {
        let ListNode { data, prev, next } = self.nodes.try_remove(key)?;

        if prev != NONE {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NONE {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        Some(data)
    }

    /// Removes every node. Capacity is kept.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = NONE;
        self.tail = NONE;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over elements, front to back.
    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }
}

/// Iterator over the elements of an ordered set, first to last.
///
/// Created by [`OrderedNotifySet::iter`](crate::OrderedNotifySet::iter).
pub struct Iter<'a, T> {
    nodes: &'a Slab<ListNode<T>>,
    front: NodeKey,
    back: NodeKey,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &List<u64>) -> Vec<u64> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: List<u64> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front_key().is_none());
        assert!(list.back_key().is_none());
        assert!(list.front().is_none());
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn push_front_multiple() {
        let mut list = List::new();
        let a = list.push_front(1);
        list.push_front(2);
        let c = list.push_front(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front_key(), Some(c));
        assert_eq!(list.back_key(), Some(a));
        assert_eq!(collect(&list), vec![3, 2, 1]);
    }

    #[test]
    fn push_back_multiple() {
        let mut list = List::new();
        let a = list.push_back(1);
        list.push_back(2);
        let c = list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front_key(), Some(a));
        assert_eq!(list.back_key(), Some(c));
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn insert_after_tail_moves_tail() {
        let mut list = List::new();
        let a = list.push_front(1);
        let b = list.insert_after(a, 2);

        assert_eq!(list.back_key(), Some(b));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(collect(&list), vec![1, 2]);
    }

    #[test]
    fn insert_before_head_moves_head() {
        let mut list = List::new();
        let a = list.push_front(1);
        let b = list.insert_before(a, 0);

        assert_eq!(list.front_key(), Some(b));
        assert_eq!(list.front(), Some(&0));
        assert_eq!(collect(&list), vec![0, 1]);
    }

    #[test]
    fn insert_in_middle() {
        let mut list = List::new();
        let a = list.push_front(1);
        let c = list.insert_after(a, 3);
        list.insert_after(a, 2);
        list.insert_before(c, 25);

        assert_eq!(collect(&list), vec![1, 2, 25, 3]);
        let back: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(back, vec![3, 25, 2, 1]);
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut list = List::new();
        let a = list.push_front(1);
        let b = list.insert_after(a, 2);
        let c = list.insert_after(b, 3);
        let d = list.insert_after(c, 4);

        assert_eq!(list.remove(b), Some(2));
        assert_eq!(collect(&list), vec![1, 3, 4]);

        assert_eq!(list.remove(a), Some(1));
        assert_eq!(list.front_key(), Some(c));
        assert_eq!(collect(&list), vec![3, 4]);

        assert_eq!(list.remove(d), Some(4));
        assert_eq!(list.back_key(), Some(c));
        assert_eq!(collect(&list), vec![3]);

        assert_eq!(list.remove(c), Some(3));
        assert!(list.is_empty());
        assert!(list.front_key().is_none());
        assert!(list.back_key().is_none());
    }

    #[test]
    fn remove_stale_key() {
        let mut list = List::new();
        let a = list.push_front(1);
        assert_eq!(list.remove(a), Some(1));
        assert_eq!(list.remove(a), None);
    }

    #[test]
    fn keys_stay_stable_across_removal() {
        let mut list = List::new();
        let a = list.push_front(1);
        let b = list.insert_after(a, 2);
        let c = list.insert_after(b, 3);

        list.remove(b);
        assert_eq!(list.get(a), Some(&1));
        assert_eq!(list.get(c), Some(&3));
        assert_eq!(list.get(b), None);
    }

    #[test]
    fn slots_are_reused() {
        let mut list = List::with_capacity(4);
        let a = list.push_front(1);
        list.remove(a);
        let b = list.push_front(2);
        assert_eq!(a, b);
        assert!(list.capacity() >= 4);
    }

    #[test]
    fn clear_resets_links() {
        let mut list = List::new();
        let a = list.push_front(1);
        list.insert_after(a, 2);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);

        list.push_front(9);
        assert_eq!(collect(&list), vec![9]);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let mut list = List::new();
        let a = list.push_front(1);
        let b = list.insert_after(a, 2);
        list.insert_after(b, 3);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
