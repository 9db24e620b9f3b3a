//! Array-backed binary min-heap priority queue.
//!
//! The backing array is read as a complete binary tree by index arithmetic:
//! `parent = (i - 1) / 2`, children at `2i + 1` and `2i + 2`. Invariant: every
//! element orders less-than-or-equal to both children, so the minimum is
//! always at index 0. Insertion sifts up; removal sifts down. Equal elements
//! pop in arbitrary relative order (the heap is not stable).

use core::fmt;

const DEFAULT_CAPACITY: usize = 16;

/// A min-heap priority queue over a total order.
///
/// # Example
///
/// ```
/// use trellis_collections::PriorityQueue;
///
/// let mut pq = PriorityQueue::new();
/// pq.offer(5);
/// pq.offer(3);
/// pq.offer(8);
/// pq.offer(1);
///
/// assert_eq!(pq.peek(), Some(&1));
/// assert_eq!(pq.poll(), Some(1));
/// assert_eq!(pq.poll(), Some(3));
/// assert_eq!(pq.poll(), Some(5));
/// assert_eq!(pq.poll(), Some(8));
/// assert_eq!(pq.poll(), None);
/// ```
pub struct PriorityQueue<T: Ord> {
    heap: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with at least `capacity` slots pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the current slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Inserts a value. O(log n).
    pub fn offer(&mut self, value: T) {
        self.ensure_capacity();
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the minimum element, or `None` if empty. O(log n).
    pub fn poll(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let root = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Returns a reference to the minimum element, or `None` if empty. O(1).
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Drops all elements. Capacity is retained.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Grows the backing array by ~1.5x when full.
    fn ensure_capacity(&mut self) {
        let capacity = self.heap.capacity();
        if self.heap.len() == capacity {
            self.heap.reserve_exact((capacity / 2).max(1));
        }
    }

    /// Moves the element at `index` up until its parent no longer orders after it.
    fn sift_up(&mut self, index: usize) {
        let mut current = index;
        while current > 0 {
            let parent = (current - 1) / 2;
            if self.heap[current] >= self.heap[parent] {
                break;
            }
            self.heap.swap(current, parent);
            current = parent;
        }
    }

    /// Moves the element at `index` down, swapping with its smaller child
    /// while that child orders before it.
    fn sift_down(&mut self, index: usize) {
        let len = self.heap.len();
        let mut current = index;
        // Nodes at or past the halfway point are leaves
        let half = len / 2;
        while current < half {
            let left = 2 * current + 1;
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.heap[right] < self.heap[left] {
                smallest = right;
            }
            if self.heap[current] <= self.heap[smallest] {
                break;
            }
            self.heap.swap(current, smallest);
            current = smallest;
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Backing-array order, not sorted order
        f.debug_list().entries(self.heap.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}
