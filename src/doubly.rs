//! Bidirectional linked list with O(1) operations at both ends.
//!
//! Arena-backed: nodes reference neighbors by index, and removal anywhere is
//! a uniform unlink once the node's index is known.

use crate::arena::{Arena, NIL};
use core::fmt;

struct Node<T> {
    value: T,
    next: u32,
    prev: u32,
}

/// A doubly-linked list.
///
/// # Example
///
/// ```
/// use trellis_collections::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(3);
///
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.len(), 1);
/// ```
pub struct DoublyLinkedList<T> {
    arena: Arena<Node<T>>,
    head: u32,
    tail: u32,
}

impl<T> DoublyLinkedList<T> {
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
            prev: NIL,
        });
        if self.head == NIL {
            self.tail = idx;
        } else {
            self.arena.node_mut(self.head).prev = idx;
        }
        self.head = idx;
    }

    /// Appends a value. O(1).
    pub fn push_back(&mut self, value: T) {
        let idx = self.arena.insert(Node {
            value,
            next: NIL,
            prev: self.tail,
        });
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
        Some(self.unlink(self.head))
    }

    /// Removes and returns the last element, or `None` if empty. O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    /// Removes the first element equal to `value`. O(n).
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while current != NIL {
            let node = self.arena.node(current);
            if node.value == *value {
                self.unlink(current);
                return true;
            }
            current = node.next;
        }
        false
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

    /// Detaches the node at `idx`, patching both neighbors, and returns its value.
    fn unlink(&mut self, idx: u32) -> T {
        let node = self.arena.remove(idx).expect("unlink of live node");
        if node.prev == NIL {
            self.head = node.next;
        } else {
            self.arena.node_mut(node.prev).next = node.next;
        }
        if node.next == NIL {
            self.tail = node.prev;
        } else {
            self.arena.node_mut(node.next).prev = node.prev;
        }
        node.value
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`], front to back.
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

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`DoublyLinkedList`], front to back.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
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

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
