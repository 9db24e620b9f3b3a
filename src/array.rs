//! Resizable contiguous array with amortized O(1) append.
//!
//! The buffer is a boxed slice of uninitialized slots with a length watermark:
//! slots below `len` are initialized, slots at or above it are not. Growth
//! reallocates to `max(capacity * 2, required)` and moves elements in order.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;

const DEFAULT_CAPACITY: usize = 10;

/// A growable array of `T` with index-based access.
///
/// # Example
///
/// ```
/// use trellis_collections::DynArray;
///
/// let mut arr: DynArray<u64> = DynArray::new();
/// arr.push(1);
/// arr.push(3);
/// arr.insert(1, 2);
///
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.get(1), Some(&2));
/// assert_eq!(arr.remove(0), 1);
/// assert_eq!(arr.first(), Some(&2));
/// ```
pub struct DynArray<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an array with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an array with at least `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            buf: uninit_slice(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Appends a value to the end.
    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.len + 1);
        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Inserts a value at `index`, shifting later elements right.
    ///
    /// `index` may equal `len`, in which case this is equivalent to [`push`](Self::push).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insertion index {index} out of range (len {})",
            self.len
        );
        self.ensure_capacity(self.len + 1);
        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
        }
        self.buf[index].write(value);
        self.len += 1;
    }

    /// Returns a reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // Slots below len are initialized
            Some(unsafe { self.buf[index].assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(unsafe { self.buf[index].assume_init_mut() })
        } else {
            None
        }
    }

    /// Replaces the element at `index`, returning the displaced value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> T {
        assert!(
            index < self.len,
            "index {index} out of range (len {})",
            self.len
        );
        let slot = unsafe { self.buf[index].assume_init_mut() };
        std::mem::replace(slot, value)
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "index {index} out of range (len {})",
            self.len
        );
        unsafe {
            let base = self.buf.as_mut_ptr();
            let value = self.buf[index].assume_init_read();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Drops all elements. Capacity is retained.
    pub fn clear(&mut self) {
        let len = self.len;
        // Defuse first so a panicking Drop impl cannot cause a double drop
        self.len = 0;
        for slot in &mut self.buf[..len] {
            unsafe { slot.assume_init_drop() };
        }
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns an iterator over references, in index order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references, in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn ensure_capacity(&mut self, required: usize) {
        let capacity = self.buf.len();
        if required <= capacity {
            return;
        }
        let new_capacity = required.max(capacity * 2);
        let mut new_buf = uninit_slice(new_capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }
        // MaybeUninit slots never drop their contents, so replacing the old
        // buffer frees only the allocation; the moved elements live on.
        self.buf = new_buf;
    }
}

fn uninit_slice<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    (0..capacity).map(|_| MaybeUninit::uninit()).collect()
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut array = Self::with_capacity(lower.max(DEFAULT_CAPACITY));
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let buf = std::mem::take(&mut self.buf);
        let len = self.len;
        self.len = 0;
        IntoIter { buf, len, next: 0 }
    }
}

/// Owning iterator over a [`DynArray`].
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
    next: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.len {
            return None;
        }
        let value = unsafe { self.buf[self.next].assume_init_read() };
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.next..self.len] {
            unsafe { slot.assume_init_drop() };
        }
        self.len = 0;
        self.next = 0;
    }
}
