//! Self-contained generic collections: sequences, adapters, a priority
//! queue, a hash set, a directed graph, and a rooted tree.
//!
//! Every structure here is built from first principles over owned storage.
//! The linked structures keep their nodes in an internal slot arena and link
//! them by index, so there are no raw pointers and no unsafe node surgery;
//! a node index never outlives its list because the arena travels with the
//! structure.
//!
//! # Design Philosophy
//!
//! - **Ownership over sharing.** Each collection owns its elements outright.
//!   Accessors hand out references; removal hands the value back.
//! - **Indices over pointers.** Linked lists and the tree store nodes in a
//!   contiguous arena and wire them together with `u32` indices. Freed slots
//!   go on a free list and are reused.
//! - **`Option` over sentinels.** Reading or removing from an empty
//!   collection returns `None`; out-of-range positional access panics with a
//!   documented message; fallible structural operations (like using a node
//!   handle against the wrong tree) return `Result`.
//! - **Iteration borrows.** Every borrowing iterator holds `&self`, so the
//!   borrow checker rules out mutation mid-iteration at compile time.
//!
//! # Quick Start
//!
//! ```
//! use trellis_collections::{DynArray, PriorityQueue, HashSet};
//!
//! let mut array = DynArray::new();
//! array.push("a");
//! array.insert(0, "b");
//! assert_eq!(array.as_slice(), &["b", "a"]);
//!
//! let mut pq = PriorityQueue::new();
//! pq.extend([5, 3, 8, 1]);
//! assert_eq!(pq.poll(), Some(1));
//!
//! let set: HashSet<_> = ["x", "y", "x"].into_iter().collect();
//! assert_eq!(set.len(), 2);
//! ```
//!
//! # Data Structures
//!
//! | Structure | Backing | Key Operations |
//! |-----------|---------|----------------|
//! | [`DynArray`] | Growable array (2x) | O(1) amortized push, O(1) indexed access |
//! | [`SinglyLinkedList`] | Arena, forward links | O(1) push front/back, O(1) pop front |
//! | [`DoublyLinkedList`] | Arena, both links | O(1) push/pop at both ends |
//! | [`CircularList`] | Arena with sentinel | O(1) push/pop at both ends, wrap-around |
//! | [`Stack`] | [`DynArray`] | O(1) push/pop/peek (LIFO) |
//! | [`Queue`] | [`DoublyLinkedList`] | O(1) enqueue/dequeue (FIFO) |
//! | [`PriorityQueue`] | Array-read-as-tree (1.5x) | O(log n) offer/poll, O(1) peek |
//! | [`HashSet`] | Chained buckets (2x at 3/4 load) | O(1) expected add/contains/remove |
//! | [`DiGraph`] | Adjacency sets | O(1) expected edge ops |
//! | [`Tree`] | Generational arena | O(1) child append, breadth-first traversal |

#![warn(missing_docs)]

mod arena;

pub mod array;
pub mod circular;
pub mod doubly;
pub mod graph;
pub mod heap;
pub mod queue;
pub mod set;
pub mod singly;
pub mod stack;
pub mod tree;

pub use array::DynArray;
pub use circular::CircularList;
pub use doubly::DoublyLinkedList;
pub use graph::DiGraph;
pub use heap::PriorityQueue;
pub use queue::Queue;
pub use set::HashSet;
pub use singly::SinglyLinkedList;
pub use stack::Stack;
pub use tree::{ForeignNode, NodeId, Tree};
