//! Property-based tests over randomized operation sequences.

use proptest::prelude::*;
use trellis_collections::{
    DiGraph, DoublyLinkedList, DynArray, HashSet, PriorityQueue, SinglyLinkedList, Stack, Tree,
};

// =============================================================================
// Priority queue
// =============================================================================

proptest! {
    /// Draining the heap yields a nondecreasing sequence that is a
    /// permutation of the input.
    #[test]
    fn heap_drain_is_sorted_permutation(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut pq: PriorityQueue<i64> = values.iter().copied().collect();
        let drained: Vec<_> = std::iter::from_fn(|| pq.poll()).collect();

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    /// peek always reports what the next poll returns.
    #[test]
    fn heap_peek_matches_poll(values in prop::collection::vec(any::<i32>(), 1..100)) {
        let mut pq: PriorityQueue<i32> = values.into_iter().collect();
        while !pq.is_empty() {
            let peeked = pq.peek().copied();
            prop_assert_eq!(peeked, pq.poll());
        }
    }
}

// =============================================================================
// Hash set
// =============================================================================

proptest! {
    /// The set agrees with the standard library's set on membership and size,
    /// across interleaved adds and removes.
    #[test]
    fn set_matches_std_model(
        ops in prop::collection::vec((any::<bool>(), 0u16..500), 0..300)
    ) {
        let mut set = HashSet::new();
        let mut model = std::collections::HashSet::new();

        for (is_add, value) in ops {
            if is_add {
                prop_assert_eq!(set.add(value), model.insert(value));
            } else {
                prop_assert_eq!(set.remove(&value), model.remove(&value));
            }
        }

        prop_assert_eq!(set.len(), model.len());
        for value in 0u16..500 {
            prop_assert_eq!(set.contains(&value), model.contains(&value));
        }
    }

    /// Iteration yields every element exactly once.
    #[test]
    fn set_iteration_is_exact(values in prop::collection::hash_set(any::<u32>(), 0..100)) {
        let set: HashSet<u32> = values.iter().copied().collect();
        let mut seen: Vec<_> = set.iter().copied().collect();
        seen.sort_unstable();

        let mut expected: Vec<_> = values.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }
}

// =============================================================================
// Sequences
// =============================================================================

proptest! {
    /// All sequence types preserve push-back order under iteration.
    #[test]
    fn sequences_preserve_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let array: DynArray<i32> = values.iter().copied().collect();
        let singly: SinglyLinkedList<i32> = values.iter().copied().collect();
        let doubly: DoublyLinkedList<i32> = values.iter().copied().collect();

        prop_assert_eq!(array.as_slice(), &values[..]);
        prop_assert_eq!(singly.iter().copied().collect::<Vec<_>>(), values.clone());
        prop_assert_eq!(doubly.iter().copied().collect::<Vec<_>>(), values);
    }

    /// Popping the doubly linked list from the back reverses push order.
    #[test]
    fn doubly_pop_back_reverses(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut list: DoublyLinkedList<i32> = values.iter().copied().collect();
        let mut reversed: Vec<_> = std::iter::from_fn(|| list.pop_back()).collect();
        reversed.reverse();
        prop_assert_eq!(reversed, values);
    }

    /// A stack drains in exact reverse of push order.
    #[test]
    fn stack_is_lifo(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut stack: Stack<i32> = values.iter().copied().collect();
        let drained: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();

        let mut expected = values;
        expected.reverse();
        prop_assert_eq!(drained, expected);
    }

    /// DynArray removal at a valid index matches Vec::remove.
    #[test]
    fn dyn_array_remove_matches_vec(
        values in prop::collection::vec(any::<i32>(), 1..50),
        index_seed in any::<prop::sample::Index>(),
    ) {
        let mut array: DynArray<i32> = values.iter().copied().collect();
        let mut model = values;
        let index = index_seed.index(model.len());

        prop_assert_eq!(array.remove(index), model.remove(index));
        prop_assert_eq!(array.as_slice(), &model[..]);
    }
}

// =============================================================================
// Graph
// =============================================================================

proptest! {
    /// edge_count always equals the sum of adjacency-set sizes, and every
    /// edge endpoint is a registered vertex.
    #[test]
    fn graph_counts_stay_consistent(
        ops in prop::collection::vec((0u8..4, 0u8..12, 0u8..12), 0..200)
    ) {
        let mut graph = DiGraph::new();
        for (op, a, b) in ops {
            match op {
                0 => {
                    graph.add_edge(a, b);
                }
                1 => {
                    graph.remove_edge(&a, &b);
                }
                2 => {
                    graph.add_vertex(a);
                }
                _ => {
                    graph.remove_vertex(&a);
                }
            }
        }

        let sum: usize = graph.vertices().map(|v| graph.degree(v)).sum();
        prop_assert_eq!(graph.edge_count(), sum);
        for vertex in graph.vertices() {
            for neighbor in graph.neighbors(vertex) {
                prop_assert!(graph.contains_vertex(neighbor));
            }
        }
    }
}

// =============================================================================
// Tree
// =============================================================================

proptest! {
    /// Random trees report a size equal to their traversal length, a height
    /// bounded by their size, and a breadth-first order where depths never
    /// decrease.
    #[test]
    fn tree_invariants_hold(parent_seeds in prop::collection::vec(any::<prop::sample::Index>(), 0..60)) {
        let mut tree = Tree::new();
        let root = tree.set_root(0usize);
        let mut handles = vec![root];

        for (value, seed) in parent_seeds.into_iter().enumerate() {
            let parent = handles[seed.index(handles.len())];
            let child = tree.add_child(parent, value + 1).unwrap();
            handles.push(child);
        }

        prop_assert_eq!(tree.len(), handles.len());
        prop_assert!(tree.height() >= 1);
        prop_assert!(tree.height() <= tree.len());

        let depths: Vec<usize> = tree
            .nodes()
            .map(|id| {
                let mut depth = 0;
                let mut current = id;
                while let Some(parent) = tree.parent(current) {
                    depth += 1;
                    current = parent;
                }
                depth
            })
            .collect();
        prop_assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
