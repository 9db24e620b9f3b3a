//! LIFO adapter over [`DynArray`].

use crate::DynArray;
use core::fmt;

/// A last-in, first-out stack.
///
/// All accessed-end operations are O(1) (amortized for `push`).
///
/// # Example
///
/// ```
/// use trellis_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    elements: DynArray<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            elements: DynArray::new(),
        }
    }

    /// Pushes a value onto the top.
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Removes and returns the top value, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Returns a reference to the top value, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns a mutable reference to the top value, or `None` if empty.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let len = self.elements.len();
        len.checked_sub(1).and_then(|i| self.elements.get_mut(i))
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drops all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator from top to bottom (pop order).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
