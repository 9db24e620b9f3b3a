//! General (N-ary) rooted tree with breadth-first traversal.
//!
//! Nodes live in a generational slot arena owned by the tree; parent and
//! child relations are slot indices, so back-references cannot dangle.
//! A [`NodeId`] records the tree it was minted by, its slot, and the slot's
//! generation at mint time. Every node-taking operation validates all three
//! and rejects mismatches with [`ForeignNode`], so a handle that was detached
//! by [`Tree::remove_subtree`] (or that came from another tree entirely) can
//! never corrupt the structure — the provenance check replaces the original's
//! O(depth) walk up the parent chain.

use crate::arena::NIL;
use core::fmt;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// Mint source for tree identities. Touched only at construction.
static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node in a [`Tree`].
///
/// Copyable and cheap; stays valid until the node is detached. A stale or
/// foreign handle is detected, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: u64,
    index: u32,
    generation: u32,
}

/// A node handle was used against a tree it does not currently belong to.
///
/// Raised when the handle was minted by a different tree, or when its node
/// has since been detached by [`Tree::remove_subtree`] (or a whole-tree
/// operation like [`Tree::set_root`] or [`Tree::clear`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignNode;

impl fmt::Display for ForeignNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node does not belong to this tree")
    }
}

impl std::error::Error for ForeignNode {}

struct NodeData<T> {
    value: T,
    /// `NIL` for the root.
    parent: u32,
    children: SmallVec<[u32; 4]>,
}

enum SlotState<T> {
    Occupied(NodeData<T>),
    Vacant { next_free: u32 },
}

struct Slot<T> {
    /// Bumped every time the slot is retired, invalidating old handles.
    generation: u32,
    state: SlotState<T>,
}

/// A rooted tree with arbitrary fan-out.
///
/// # Example
///
/// ```
/// use trellis_collections::Tree;
///
/// let mut tree = Tree::new();
/// let root = tree.set_root("R");
/// let a = tree.add_child(root, "A").unwrap();
/// tree.add_child(root, "B").unwrap();
/// tree.add_child(a, "C").unwrap();
///
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.height(), 3);
///
/// // Breadth-first: all of depth d before any of depth d + 1
/// let order: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(order, vec!["R", "A", "B", "C"]);
/// ```
pub struct Tree<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free: u32,
    root: u32,
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: NIL,
            root: NIL,
        }
    }

    /// Returns `true` if the tree has no root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Returns the node count, by full traversal.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Replaces the entire tree with a single root node.
    ///
    /// Handles into the previous tree become foreign.
    pub fn set_root(&mut self, value: T) -> NodeId {
        self.clear();
        let index = self.alloc(NodeData {
            value,
            parent: NIL,
            children: SmallVec::new(),
        });
        self.root = index;
        self.id_for(index)
    }

    /// Returns the root's handle, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        if self.root == NIL {
            None
        } else {
            Some(self.id_for(self.root))
        }
    }

    /// Appends a new child to `parent`'s child list and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns `Err(ForeignNode)` if `parent` does not currently belong to
    /// this tree.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> Result<NodeId, ForeignNode> {
        let parent_index = self.resolve(parent)?;
        let child = self.alloc(NodeData {
            value,
            parent: parent_index,
            children: SmallVec::new(),
        });
        self.data_mut(parent_index).children.push(child);
        Ok(self.id_for(child))
    }

    /// Detaches `node` and all its descendants.
    ///
    /// Handles into the removed subtree become foreign.
    ///
    /// # Errors
    ///
    /// Returns `Err(ForeignNode)` if `node` does not currently belong to
    /// this tree. The tree is unchanged on error.
    pub fn remove_subtree(&mut self, node: NodeId) -> Result<(), ForeignNode> {
        let index = self.resolve(node)?;
        if index == self.root {
            self.root = NIL;
        } else {
            let parent = self.data(index).parent;
            self.data_mut(parent).children.retain(|&mut c| c != index);
        }
        // Retire the whole subtree iteratively
        let mut pending = vec![index];
        while let Some(current) = pending.pop() {
            let data = match std::mem::replace(
                &mut self.slots[current as usize].state,
                SlotState::Vacant {
                    next_free: self.free,
                },
            ) {
                SlotState::Occupied(data) => data,
                SlotState::Vacant { .. } => unreachable!("subtree slot already vacant"),
            };
            self.slots[current as usize].generation =
                self.slots[current as usize].generation.wrapping_add(1);
            self.free = current;
            pending.extend(data.children);
        }
        Ok(())
    }

    /// Returns a reference to a node's value, or `None` for a foreign handle.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        let index = self.resolve(node).ok()?;
        Some(&self.data(index).value)
    }

    /// Returns a mutable reference to a node's value, or `None` for a
    /// foreign handle.
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        let index = self.resolve(node).ok()?;
        Some(&mut self.data_mut(index).value)
    }

    /// Returns a node's parent handle.
    ///
    /// `None` for the root and for foreign handles.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let index = self.resolve(node).ok()?;
        let parent = self.data(index).parent;
        if parent == NIL {
            None
        } else {
            Some(self.id_for(parent))
        }
    }

    /// Returns an iterator over a node's direct children, in insertion order.
    ///
    /// Empty for foreign handles.
    pub fn children(&self, node: NodeId) -> Children<'_, T> {
        let slice: &[u32] = match self.resolve(node) {
            Ok(index) => &self.data(index).children,
            Err(ForeignNode) => &[],
        };
        Children {
            tree: self,
            inner: slice.iter(),
        }
    }

    /// Returns `true` if the node currently belongs to this tree and has no
    /// children.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.resolve(node)
            .map(|index| self.data(index).children.is_empty())
            .unwrap_or(false)
    }

    /// Returns the longest root-to-leaf path length in nodes.
    ///
    /// 0 for an empty tree, 1 for a tree with only a root.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Returns the first node in breadth-first order whose value satisfies
    /// the predicate.
    pub fn find_first(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<NodeId> {
        self.nodes().find(|&id| {
            let index = id.index;
            predicate(&self.data(index).value)
        })
    }

    /// Returns a lazy breadth-first traversal of node handles.
    ///
    /// Each call starts a fresh traversal from the root.
    pub fn nodes(&self) -> BreadthFirst<'_, T> {
        let mut queue = VecDeque::new();
        if self.root != NIL {
            queue.push_back(self.root);
        }
        BreadthFirst { tree: self, queue }
    }

    /// Returns an iterator over values in breadth-first order.
    pub fn iter(&self) -> Values<'_, T> {
        Values {
            inner: self.nodes(),
        }
    }

    /// Removes every node. Handles into the previous tree become foreign.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            let slot = &mut self.slots[index];
            if matches!(slot.state, SlotState::Occupied(_)) {
                slot.generation = slot.generation.wrapping_add(1);
                slot.state = SlotState::Vacant {
                    next_free: self.free,
                };
                self.free = index as u32;
            }
        }
        self.root = NIL;
    }

    /// Validates a handle's provenance: minted by this tree, slot occupied,
    /// generation current.
    fn resolve(&self, node: NodeId) -> Result<u32, ForeignNode> {
        if node.tree != self.id {
            return Err(ForeignNode);
        }
        match self.slots.get(node.index as usize) {
            Some(slot)
                if slot.generation == node.generation
                    && matches!(slot.state, SlotState::Occupied(_)) =>
            {
                Ok(node.index)
            }
            _ => Err(ForeignNode),
        }
    }

    fn id_for(&self, index: u32) -> NodeId {
        NodeId {
            tree: self.id,
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    fn alloc(&mut self, data: NodeData<T>) -> u32 {
        if self.free != NIL {
            let index = self.free;
            let slot = &mut self.slots[index as usize];
            match slot.state {
                SlotState::Vacant { next_free } => self.free = next_free,
                SlotState::Occupied(_) => unreachable!("free list points at occupied slot"),
            }
            slot.state = SlotState::Occupied(data);
            index
        } else {
            let index = self.slots.len();
            assert!(index < NIL as usize, "tree exceeds index range");
            self.slots.push(Slot {
                generation: 0,
                state: SlotState::Occupied(data),
            });
            index as u32
        }
    }

    fn data(&self, index: u32) -> &NodeData<T> {
        match &self.slots[index as usize].state {
            SlotState::Occupied(data) => data,
            SlotState::Vacant { .. } => unreachable!("stale tree index"),
        }
    }

    fn data_mut(&mut self, index: u32) -> &mut NodeData<T> {
        match &mut self.slots[index as usize].state {
            SlotState::Occupied(data) => data,
            SlotState::Vacant { .. } => unreachable!("stale tree index"),
        }
    }

    fn height_of(&self, index: u32) -> usize {
        if index == NIL {
            return 0;
        }
        let mut max_child = 0;
        for &child in &self.data(index).children {
            max_child = max_child.max(self.height_of(child));
        }
        max_child + 1
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Breadth-first iterator over node handles. Created by [`Tree::nodes`].
pub struct BreadthFirst<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<u32>,
}

impl<T> Iterator for BreadthFirst<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let index = self.queue.pop_front()?;
        self.queue.extend(self.tree.data(index).children.iter().copied());
        Some(self.tree.id_for(index))
    }
}

/// Breadth-first iterator over values. Created by [`Tree::iter`].
pub struct Values<'a, T> {
    inner: BreadthFirst<'a, T>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.inner.next()?;
        Some(&self.inner.tree.data(id.index).value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a node's direct children. Created by [`Tree::children`].
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    inner: core::slice::Iter<'a, u32>,
}

impl<T> Iterator for Children<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.inner.next().map(|&index| self.tree.id_for(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Children<'_, T> {}
