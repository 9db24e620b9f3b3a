//! Forward-only linked list with head and tail tracking.
//!
//! Nodes live in a slot arena and chain through `next` indices, so pushes at
//! either end are O(1); popping the back requires an O(n) predecessor scan
//! because nodes carry no back link.

use crate::arena::{Arena, NIL};
use core::fmt;

struct Node<T> {
    value: T,
    next: u32,
}

/// A singly-linked list.
///
/// # Example
///
/// ```
/// use trellis_collections::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.len(), 1);
/// ```
pub struct SinglyLinkedList<T> {
    arena: Arena<Node<T>>,
    head: u32,
    tail: u32,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    /// Prepends a value. O(1).
    pub fn push_front(&mut self, value: T) {
        let idx = self.arena.insert(Node {
            value,
            next: self.head,
        });
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    /// Appends a value. O(1).
    pub fn push_back(&mut self, value: T) {
        let idx = self.arena.insert(Node { value, next: NIL });
        if self.tail == NIL {
            self.head = idx;
        } else {
            self.arena.node_mut(self.tail).next = idx;
        }
        self.tail = idx;
    }

    /// Removes and returns the first element, or `None` if empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        let node = self.arena.remove(self.head)?;
        self.head = node.next;
        if self.head == NIL {
            self.tail = NIL;
        }
        Some(node.value)
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// O(n): walks the chain to find the tail's predecessor.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        if self.head == self.tail {
            return self.pop_front();
        }
        let mut current = self.head;
        while self.arena.node(current).next != self.tail {
            current = self.arena.node(current).next;
        }
        let node = self.arena.remove(self.tail)?;
        self.arena.node_mut(current).next = NIL;
        self.tail = current;
        Some(node.value)
    }

    /// Removes the first element equal to `value`. O(n).
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.head == NIL {
            return false;
        }
        if self.arena.node(self.head).value == *value {
            self.pop_front();
            return true;
        }
        let mut current = self.head;
        loop {
            let next = self.arena.node(current).next;
            if next == NIL {
                return false;
            }
            if self.arena.node(next).value == *value {
                let removed = self.arena.remove(next).expect("chain index live");
                self.arena.node_mut(current).next = removed.next;
                if next == self.tail {
                    self.tail = current;
                }
                return true;
            }
            current = next;
        }
    }

    /// Returns `true` if any element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.arena.get(self.head).map(|n| &n.value)
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.arena.get(self.tail).map(|n| &n.value)
    }

    /// Drops all elements.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    /// Returns an iterator over references, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.head,
            remaining: self.len(),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`], front to back.
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    current: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.current == NIL {
            return None;
        }
        let node = self.arena.node(self.current);
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`SinglyLinkedList`], front to back.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let list: SinglyLinkedList<u64> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
    }

    #[test]
    fn push_front_orders_lifo() {
        let mut list = SinglyLinkedList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn push_back_orders_fifo() {
        let mut list = SinglyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn pop_front_empties_both_ends() {
        let mut list = SinglyLinkedList::new();
        list.push_back(1);

        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        assert!(list.back().is_none());

        // Reusable after draining
        list.push_back(2);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn pop_back_repoints_tail() {
        let mut list = SinglyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.front().is_none());
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut list: SinglyLinkedList<u64> = (1..=4).collect();

        assert!(list.remove(&1));
        assert_eq!(list.front(), Some(&2));

        assert!(list.remove(&3));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![2, 4]);

        // Removing the tail must re-point tail
        assert!(list.remove(&4));
        assert_eq!(list.back(), Some(&2));
        list.push_back(9);
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![2, 9]);
    }

    #[test]
    fn remove_sole_element_resets() {
        let mut list = SinglyLinkedList::new();
        list.push_back(7);
        assert!(list.remove(&7));
        assert!(list.is_empty());
        assert!(list.front().is_none());
        assert!(list.back().is_none());
    }

    #[test]
    fn remove_missing_is_false() {
        let mut list: SinglyLinkedList<u64> = (1..=3).collect();
        assert!(!list.remove(&9));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn contains() {
        let list: SinglyLinkedList<&str> = ["a", "b"].into_iter().collect();
        assert!(list.contains(&"a"));
        assert!(!list.contains(&"c"));
    }

    #[test]
    fn clear() {
        let mut list: SinglyLinkedList<u64> = (1..=3).collect();
        list.clear();
        assert!(list.is_empty());
        list.push_back(1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn into_iter_owned() {
        let list: SinglyLinkedList<u64> = (1..=3).collect();
        let values: Vec<_> = list.into_iter().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn size_matches_inserts_minus_removes() {
        let mut list = SinglyLinkedList::new();
        for i in 0..10 {
            list.push_back(i);
        }
        for _ in 0..4 {
            list.pop_front();
        }
        list.remove(&7);
        assert_eq!(list.len(), 5);
    }
}
