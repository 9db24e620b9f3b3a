//! Circular doubly-linked list anchored by a permanent sentinel node.
//!
//! The sentinel occupies arena slot 0 from construction until drop. It never
//! carries an element (a dedicated payload variant makes that unrepresentable)
//! and both traversal directions wrap through it, so every insert and remove
//! is a uniform link-between / unlink with no head or tail special cases.
//! The empty state is exactly "the sentinel points at itself both ways".

use crate::arena::Arena;
use core::fmt;

/// The sentinel's fixed slot. It is inserted first and never removed.
const SENTINEL: u32 = 0;

enum Payload<T> {
    Sentinel,
    Value(T),
}

struct Node<T> {
    payload: Payload<T>,
    next: u32,
    prev: u32,
}

impl<T> Node<T> {
    fn value(&self) -> &T {
        match &self.payload {
            Payload::Value(v) => v,
            Payload::Sentinel => unreachable!("sentinel payload is never read"),
        }
    }
}

/// A circular doubly-linked list.
///
/// # Example
///
/// ```
/// use trellis_collections::CircularList;
///
/// let mut ring = CircularList::new();
/// ring.push_back(2);
/// ring.push_front(1);
/// ring.push_back(3);
///
/// let values: Vec<_> = ring.iter().copied().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// assert_eq!(ring.pop_back(), Some(3));
/// ```
pub struct CircularList<T> {
    arena: Arena<Node<T>>,
}

impl<T> CircularList<T> {
    /// Creates an empty list (just the sentinel, linked to itself).
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let idx = arena.insert(Node {
            payload: Payload::Sentinel,
            next: SENTINEL,
            prev: SENTINEL,
        });
        debug_assert_eq!(idx, SENTINEL);
        Self { arena }
    }

    /// Returns the number of elements (the sentinel is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len() - 1
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.node(SENTINEL).next == SENTINEL
    }

    /// Prepends a value. O(1).
    pub fn push_front(&mut self, value: T) {
        let first = self.arena.node(SENTINEL).next;
        self.link_between(value, SENTINEL, first);
    }

    /// Appends a value. O(1).
    pub fn push_back(&mut self, value: T) {
        let last = self.arena.node(SENTINEL).prev;
        self.link_between(value, last, SENTINEL);
    }

    /// Removes and returns the first element, or `None` if empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.arena.node(SENTINEL).next;
        Some(self.unlink(first))
    }

    /// Removes and returns the last element, or `None` if empty. O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.arena.node(SENTINEL).prev;
        Some(self.unlink(last))
    }

    /// Removes the first element equal to `value`. O(n).
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.arena.node(SENTINEL).next;
        while current != SENTINEL {
            let node = self.arena.node(current);
            if node.value() == value {
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
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.arena.node(self.arena.node(SENTINEL).next).value())
    }

    /// Returns a reference to the last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.arena.node(self.arena.node(SENTINEL).prev).value())
    }

    /// Drops all elements, restoring the sentinel's self-links.
    pub fn clear(&mut self) {
        self.arena.clear();
        let idx = self.arena.insert(Node {
            payload: Payload::Sentinel,
            next: SENTINEL,
            prev: SENTINEL,
        });
        debug_assert_eq!(idx, SENTINEL);
    }

    /// Returns an iterator over references, front to back.
    ///
    /// Traversal starts at the sentinel's successor and stops upon returning
    /// to the sentinel; the sentinel itself is never yielded.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.arena.node(SENTINEL).next,
            remaining: self.len(),
        }
    }

    /// Links a new node carrying `value` between two existing nodes.
    fn link_between(&mut self, value: T, prev: u32, next: u32) {
        let idx = self.arena.insert(Node {
            payload: Payload::Value(value),
            next,
            prev,
        });
        self.arena.node_mut(prev).next = idx;
        self.arena.node_mut(next).prev = idx;
    }

    /// Detaches the node at `idx` and returns its value.
    fn unlink(&mut self, idx: u32) -> T {
        debug_assert_ne!(idx, SENTINEL, "sentinel is never unlinked");
        let node = self.arena.remove(idx).expect("unlink of live node");
        self.arena.node_mut(node.prev).next = node.next;
        self.arena.node_mut(node.next).prev = node.prev;
        match node.payload {
            Payload::Value(v) => v,
            Payload::Sentinel => unreachable!(),
        }
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`CircularList`], front to back.
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    current: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.current == SENTINEL {
            return None;
        }
        let node = self.arena.node(self.current);
        self.current = node.next;
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`CircularList`], front to back.
pub struct IntoIter<T> {
    list: CircularList<T>,
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

impl<T> IntoIterator for CircularList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
