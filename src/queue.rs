//! FIFO adapter over [`DoublyLinkedList`].

use crate::DoublyLinkedList;
use core::fmt;

/// A first-in, first-out queue.
///
/// Enqueue and dequeue are both O(1).
///
/// # Example
///
/// ```
/// use trellis_collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.peek(), Some(&"a"));
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(queue.dequeue(), Some("b"));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct Queue<T> {
    elements: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            elements: DoublyLinkedList::new(),
        }
    }

    /// Appends a value to the back.
    pub fn enqueue(&mut self, value: T) {
        self.elements.push_back(value);
    }

    /// Removes and returns the front value, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Returns a reference to the front value, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drops all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator from front to back (dequeue order).
    pub fn iter(&self) -> crate::doubly::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
