//! Slot arena backing the linked-list variants.
//!
//! Nodes live in a `Vec` and reference each other by `u32` index instead of
//! pointer, with `NIL` as the reserved "no node" sentinel. Removed slots go
//! onto an intrusive free list and are reused by later inserts, so a
//! long-lived list does not leak slots.

/// Reserved index meaning "no node".
pub(crate) const NIL: u32 = u32::MAX;

enum Slot<N> {
    Occupied(N),
    Vacant { next_free: u32 },
}

/// Vec-backed slot storage with stable indices and slot reuse.
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: u32,
    len: usize,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: NIL,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Inserts a node, reusing a vacant slot when one exists.
    pub(crate) fn insert(&mut self, node: N) -> u32 {
        self.len += 1;
        if self.free != NIL {
            let idx = self.free;
            match self.slots[idx as usize] {
                Slot::Vacant { next_free } => self.free = next_free,
                Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
            }
            self.slots[idx as usize] = Slot::Occupied(node);
            idx
        } else {
            let idx = self.slots.len();
            assert!(idx < NIL as usize, "arena exceeds index range");
            self.slots.push(Slot::Occupied(node));
            idx as u32
        }
    }

    /// Removes the node at `idx`, returning it and retiring the slot.
    pub(crate) fn remove(&mut self, idx: u32) -> Option<N> {
        let slot = self.slots.get_mut(idx as usize)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let old = std::mem::replace(slot, Slot::Vacant { next_free: self.free });
        self.free = idx;
        self.len -= 1;
        match old {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, idx: u32) -> Option<&N> {
        match self.slots.get(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        match self.slots.get_mut(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Panicking accessor for indices the caller knows are live.
    #[inline]
    pub(crate) fn node(&self, idx: u32) -> &N {
        self.get(idx).expect("stale arena index")
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut N {
        self.get_mut(idx).expect("stale arena index")
    }

    /// Drops every node and resets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = NIL;
        self.len = 0;
    }
}
