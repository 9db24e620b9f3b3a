//! Directed adjacency-set graph with an undirected convenience layer.
//!
//! Each vertex maps to the set of its direct successors. Edge endpoints are
//! always vertices (`add_edge` auto-registers both), and `edge_count` is
//! maintained incrementally so it always equals the sum of adjacency-set
//! sizes.

use core::fmt;
use core::hash::Hash;
use rustc_hash::{FxHashMap, FxHashSet};

/// A directed graph over hashable vertex values.
///
/// Vertex and neighbor iteration order is unspecified.
///
/// # Example
///
/// ```
/// use trellis_collections::DiGraph;
///
/// let mut graph = DiGraph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
///
/// assert!(graph.contains_edge(&1, &2));
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
///
/// graph.remove_vertex(&2);
/// assert_eq!(graph.edge_count(), 0);
/// ```
pub struct DiGraph<T> {
    adjacency: FxHashMap<T, FxHashSet<T>>,
    edge_count: usize,
}

impl<T: Hash + Eq + Clone> DiGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds a vertex with no edges.
    ///
    /// Returns `true` if the vertex was new.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        match self.adjacency.entry(vertex) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(FxHashSet::default());
                true
            }
        }
    }

    /// Adds a directed edge, registering both endpoints as vertices.
    ///
    /// Returns `true` if the edge was new.
    pub fn add_edge(&mut self, source: T, target: T) -> bool {
        self.add_vertex(target.clone());
        let neighbors = self.adjacency.entry(source).or_default();
        if neighbors.insert(target) {
            self.edge_count += 1;
            true
        } else {
            false
        }
    }

    /// Adds edges in both directions.
    ///
    /// Returns `true` if either direction was new.
    pub fn add_undirected_edge(&mut self, first: T, second: T) -> bool {
        let forward = self.add_edge(first.clone(), second.clone());
        let backward = self.add_edge(second, first);
        forward || backward
    }

    /// Returns `true` if the vertex is present.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if the directed edge is present.
    pub fn contains_edge(&self, source: &T, target: &T) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|neighbors| neighbors.contains(target))
    }

    /// Returns an iterator over a vertex's direct successors.
    ///
    /// Empty for an unknown vertex.
    pub fn neighbors<'a>(&'a self, vertex: &T) -> impl Iterator<Item = &'a T> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter())
    }

    /// Returns the out-degree of a vertex, or 0 if unknown.
    pub fn degree(&self, vertex: &T) -> usize {
        self.adjacency.get(vertex).map_or(0, |n| n.len())
    }

    /// Returns an iterator over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Removes a directed edge.
    ///
    /// Returns `true` if the edge was present.
    pub fn remove_edge(&mut self, source: &T, target: &T) -> bool {
        let removed = self
            .adjacency
            .get_mut(source)
            .is_some_and(|neighbors| neighbors.remove(target));
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// Removes both directions of an edge.
    ///
    /// Returns `true` if either direction was present.
    pub fn remove_undirected_edge(&mut self, first: &T, second: &T) -> bool {
        let forward = self.remove_edge(first, second);
        let backward = self.remove_edge(second, first);
        forward || backward
    }

    /// Removes a vertex along with every edge referencing it, inbound and
    /// outbound.
    ///
    /// Returns `true` if the vertex was present.
    pub fn remove_vertex(&mut self, vertex: &T) -> bool {
        let Some(outbound) = self.adjacency.remove(vertex) else {
            return false;
        };
        self.edge_count -= outbound.len();
        for neighbors in self.adjacency.values_mut() {
            if neighbors.remove(vertex) {
                self.edge_count -= 1;
            }
        }
        true
    }

    /// Drops all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_count = 0;
    }
}

impl<T: Hash + Eq + Clone> Default for DiGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone + fmt::Debug> fmt::Debug for DiGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.adjacency.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let graph: DiGraph<u64> = DiGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_vertex() {
        let mut graph = DiGraph::new();
        assert!(graph.add_vertex(1));
        assert!(!graph.add_vertex(1));
        assert!(graph.contains_vertex(&1));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_registers_endpoints() {
        let mut graph = DiGraph::new();
        assert!(graph.add_edge("a", "b"));

        assert!(graph.contains_vertex(&"a"));
        assert!(graph.contains_vertex(&"b"));
        assert!(graph.contains_edge(&"a", &"b"));
        // Directed: no reverse edge
        assert!(!graph.contains_edge(&"b", &"a"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_duplicate_returns_false() {
        let mut graph = DiGraph::new();
        assert!(graph.add_edge(1, 2));
        assert!(!graph.add_edge(1, 2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn self_loop() {
        let mut graph = DiGraph::new();
        assert!(graph.add_edge(1, 1));
        assert!(graph.contains_edge(&1, &1));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);

        assert!(graph.remove_vertex(&1));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn undirected_edge_is_two_directed() {
        let mut graph = DiGraph::new();
        assert!(graph.add_undirected_edge(1, 2));
        assert!(graph.contains_edge(&1, &2));
        assert!(graph.contains_edge(&2, &1));
        assert_eq!(graph.edge_count(), 2);

        // One direction already present still reports true for the other
        graph.add_edge(2, 3);
        assert!(graph.add_undirected_edge(2, 3));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn neighbors() {
        let mut graph = DiGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);

        let mut neighbors: Vec<_> = graph.neighbors(&1).copied().collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![2, 3]);
        assert_eq!(graph.degree(&1), 2);

        assert_eq!(graph.neighbors(&99).count(), 0);
        assert_eq!(graph.degree(&99), 0);
    }

    #[test]
    fn remove_edge() {
        let mut graph = DiGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        assert!(graph.remove_edge(&1, &2));
        assert!(!graph.remove_edge(&1, &2));
        assert!(graph.contains_edge(&2, &1));
        assert_eq!(graph.edge_count(), 1);

        // Vertices survive edge removal
        assert!(graph.contains_vertex(&1));
        assert!(graph.contains_vertex(&2));
    }

    #[test]
    fn remove_undirected_edge() {
        let mut graph = DiGraph::new();
        graph.add_undirected_edge(1, 2);
        assert!(graph.remove_undirected_edge(&1, &2));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.remove_undirected_edge(&1, &2));
    }

    #[test]
    fn remove_vertex_drops_inbound_and_outbound() {
        let mut graph = DiGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        assert!(graph.remove_vertex(&2));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_edge(&1, &2));
        assert!(!graph.contains_edge(&2, &3));

        // No remaining vertex lists 2 as a neighbor
        for vertex in [1, 3] {
            assert!(graph.neighbors(&vertex).all(|n| *n != 2));
        }
    }

    #[test]
    fn remove_vertex_counts_exactly_touching_edges() {
        let mut graph = DiGraph::new();
        graph.add_edge("a", "x");
        graph.add_edge("x", "b");
        graph.add_edge("c", "x");
        graph.add_edge("a", "b");

        assert_eq!(graph.edge_count(), 4);
        assert!(graph.remove_vertex(&"x"));
        // Only a->b survives
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&"a", &"b"));
    }

    #[test]
    fn remove_missing_vertex_is_false() {
        let mut graph: DiGraph<u64> = DiGraph::new();
        assert!(!graph.remove_vertex(&1));
    }

    #[test]
    fn vertices_iteration() {
        let mut graph = DiGraph::new();
        graph.add_edge(1, 2);
        graph.add_vertex(3);

        let mut vertices: Vec<_> = graph.vertices().copied().collect();
        vertices.sort_unstable();
        assert_eq!(vertices, vec![1, 2, 3]);
    }

    #[test]
    fn clear() {
        let mut graph = DiGraph::new();
        graph.add_undirected_edge(1, 2);
        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.add_vertex(1));
    }

    #[test]
    fn edge_count_matches_adjacency_sum() {
        let mut graph = DiGraph::new();
        for i in 0..10u64 {
            for j in 0..10 {
                if i != j && (i + j) % 3 == 0 {
                    graph.add_edge(i, j);
                }
            }
        }
        graph.remove_vertex(&3);
        graph.remove_edge(&1, &2);

        let sum: usize = graph.vertices().map(|v| graph.degree(v)).sum();
        assert_eq!(graph.edge_count(), sum);
    }
}
