//! Separate-chaining hash set with doubling resize.
//!
//! Buckets hold singly-linked chains of boxed entries; new entries are
//! prepended. The bucket count is always a power of two so the hash maps to a
//! bucket by masking. Membership is structural equality, never hash equality
//! alone. Load factor 3/4: an `add` that would push `len` past
//! `bucket_count * 3 / 4` first doubles the bucket array and rehashes every
//! element (a single O(n) pause, by design).

use core::fmt;
use core::hash::{BuildHasher, Hash};
use rustc_hash::FxBuildHasher;

const DEFAULT_BUCKETS: usize = 16;

struct Entry<T> {
    value: T,
    next: Option<Box<Entry<T>>>,
}

/// A hash set over structural equality.
///
/// Iteration order is bucket order and therefore unspecified.
///
/// # Example
///
/// ```
/// use trellis_collections::HashSet;
///
/// let mut set = HashSet::new();
/// assert!(set.add("a"));
/// assert!(!set.add("a"));
/// assert!(set.contains(&"a"));
/// assert!(set.remove(&"a"));
/// assert!(!set.contains(&"a"));
/// ```
pub struct HashSet<T, S = FxBuildHasher> {
    buckets: Box<[Option<Box<Entry<T>>>]>,
    len: usize,
    hasher: S,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates an empty set with the default bucket count and hasher.
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }
}

impl<T: Hash + Eq, S: BuildHasher> HashSet<T, S> {
    /// Creates an empty set using the given hasher factory.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_BUCKETS),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current bucket count (always a power of two).
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts a value.
    ///
    /// Returns `true` if the value was newly inserted, `false` if an equal
    /// value was already present (the set is unchanged).
    pub fn add(&mut self, value: T) -> bool {
        if self.len + 1 > self.threshold() {
            self.resize();
        }
        let index = self.bucket_index(&value);
        let mut current = self.buckets[index].as_deref();
        while let Some(entry) = current {
            if entry.value == value {
                return false;
            }
            current = entry.next.as_deref();
        }
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry { value, next }));
        self.len += 1;
        true
    }

    /// Returns `true` if an equal value is present.
    pub fn contains(&self, value: &T) -> bool {
        let index = self.bucket_index(value);
        let mut current = self.buckets[index].as_deref();
        while let Some(entry) = current {
            if entry.value == *value {
                return true;
            }
            current = entry.next.as_deref();
        }
        false
    }

    /// Removes the equal value if present.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let index = self.bucket_index(value);
        if Self::remove_from_chain(&mut self.buckets[index], value) {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Drops all elements. The bucket array keeps its current length.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over references, in bucket order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: &self.buckets,
            bucket: 0,
            entry: None,
            remaining: self.len,
        }
    }

    #[inline]
    fn bucket_index(&self, value: &T) -> usize {
        // Bucket count is a power of two, so masking replaces modulo
        (self.hasher.hash_one(value) as usize) & (self.buckets.len() - 1)
    }

    #[inline]
    fn threshold(&self) -> usize {
        self.buckets.len() * 3 / 4
    }

    fn remove_from_chain(chain: &mut Option<Box<Entry<T>>>, value: &T) -> bool {
        match chain {
            None => false,
            Some(entry) if entry.value == *value => {
                let next = entry.next.take();
                *chain = next;
                true
            }
            Some(entry) => Self::remove_from_chain(&mut entry.next, value),
        }
    }

    /// Doubles the bucket array and reinserts every entry under the new mask.
    fn resize(&mut self) {
        let new_count = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_count));
        let mask = new_count - 1;
        for slot in old.into_vec() {
            let mut current = slot;
            while let Some(mut entry) = current {
                current = entry.next.take();
                let index = (self.hasher.hash_one(&entry.value) as usize) & mask;
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
            }
        }
    }
}

fn empty_buckets<T>(count: usize) -> Box<[Option<Box<Entry<T>>>]> {
    (0..count).map(|_| None).collect()
}

impl<T: Hash + Eq> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + fmt::Debug, S: BuildHasher> fmt::Debug for HashSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Borrowing iterator over a [`HashSet`], in bucket order.
pub struct Iter<'a, T> {
    buckets: &'a [Option<Box<Entry<T>>>],
    bucket: usize,
    entry: Option<&'a Entry<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(entry) = self.entry {
                self.entry = entry.next.as_deref();
                self.remaining -= 1;
                return Some(&entry.value);
            }
            if self.bucket >= self.buckets.len() {
                return None;
            }
            self.entry = self.buckets[self.bucket].as_deref();
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Hash + Eq, S: BuildHasher> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
