//! # Core Type Definitions
//!
//! This module contains the core types for the Graphsmith generation engine:
//! - The vertex identifier (`VertexId`)
//! - The undirected simple graph (`Graph`)
//! - Error types (`GraphsmithError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Store adjacency in `BTreeMap`/`BTreeSet` for deterministic ordering
//! - Implement `Ord` on identifiers so iteration order is stable
//! - Take no randomness of their own; the growth procedure threads an
//!   explicit RNG through the builder instead

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use thiserror::Error;

// =============================================================================
// VERTEX IDENTIFIER
// =============================================================================

/// Unique identifier for a vertex in a generated graph.
///
/// Vertices are labeled consecutively from 0 in the order the growth
/// procedure adds them; the GML codec writes this value as both `id`
/// and `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

// =============================================================================
// GRAPH
// =============================================================================

/// An undirected simple graph.
///
/// No self-loops, no parallel edges. Adjacency is stored symmetrically:
/// `b` appears in the neighbor set of `a` exactly when `a` appears in the
/// neighbor set of `b`. Uses `BTreeMap` exclusively so that vertex and
/// edge iteration is fully deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Adjacency: vertex -> set of neighbors. An isolated vertex maps to
    /// an empty set.
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex with no edges. Returns `true` if the vertex was new.
    pub fn add_vertex(&mut self, vertex: VertexId) -> bool {
        match self.adjacency.entry(vertex) {
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(BTreeSet::new());
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Insert an undirected edge, creating both endpoints if absent.
    ///
    /// Returns `true` if the edge was new. Self-loops are rejected and
    /// return `false` without modifying the graph.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b {
            return false;
        }
        self.add_vertex(a);
        self.add_vertex(b);
        let inserted = self
            .adjacency
            .entry(a)
            .or_default()
            .insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    /// Check whether a vertex exists in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Check whether an undirected edge exists between two vertices.
    #[must_use]
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Degree of a vertex. Returns 0 for unknown vertices.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(&vertex).map_or(0, BTreeSet::len)
    }

    /// Neighbors of a vertex in ascending order.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().copied())
    }

    /// Total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of undirected edges, each counted once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All undirected edges in deterministic order.
    ///
    /// Each edge is reported exactly once as `(source, target)` with
    /// `source < target`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency.iter().flat_map(|(&vertex, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&other| vertex < other)
                .map(move |other| (vertex, other))
        })
    }

    /// Check whether every vertex is reachable from every other.
    ///
    /// The empty graph is considered connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.adjacency.keys().next() else {
            return true;
        };

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited.len() == self.adjacency.len()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Graphsmith system.
///
/// - No silent failures
/// - Use `Result<T, GraphsmithError>` for fallible operations
/// - The engine should never panic; all errors must be recoverable
#[derive(Debug, Error)]
pub enum GraphsmithError {
    /// The requested vertex count is out of the accepted range.
    #[error("invalid vertex count {0}: must be a positive integer within the configured limit")]
    InvalidVertexCount(i64),

    /// The artifact filename does not match the generated-name shape.
    #[error("invalid artifact filename: {0}")]
    InvalidFilename(String),

    /// The requested artifact does not exist in the store.
    #[error("artifact not found: {0}")]
    ArtifactNotFound(String),

    /// The GML document could not be parsed.
    #[error("GML parse error at line {line}: {message}")]
    Gml {
        /// 1-based line number of the offending input line.
        line: usize,
        /// Description of what was wrong with it.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        assert!(graph.add_vertex(VertexId(1)));
        assert!(!graph.add_vertex(VertexId(1)));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_is_symmetric() {
        let mut graph = Graph::new();
        assert!(graph.add_edge(VertexId(0), VertexId(1)));

        assert!(graph.has_edge(VertexId(0), VertexId(1)));
        assert!(graph.has_edge(VertexId(1), VertexId(0)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge(VertexId(3), VertexId(7));

        assert!(graph.contains_vertex(VertexId(3)));
        assert!(graph.contains_vertex(VertexId(7)));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn duplicate_edge_not_counted_twice() {
        let mut graph = Graph::new();
        assert!(graph.add_edge(VertexId(0), VertexId(1)));
        assert!(!graph.add_edge(VertexId(1), VertexId(0)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn self_loop_rejected() {
        let mut graph = Graph::new();
        assert!(!graph.add_edge(VertexId(5), VertexId(5)));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_vertex(VertexId(5)));
    }

    #[test]
    fn edges_reported_once_in_order() {
        let mut graph = Graph::new();
        graph.add_edge(VertexId(2), VertexId(0));
        graph.add_edge(VertexId(1), VertexId(2));
        graph.add_edge(VertexId(0), VertexId(1));

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(
            edges,
            vec![
                (VertexId(0), VertexId(1)),
                (VertexId(0), VertexId(2)),
                (VertexId(1), VertexId(2)),
            ]
        );
    }

    #[test]
    fn degree_counts_neighbors() {
        let mut graph = Graph::new();
        graph.add_edge(VertexId(0), VertexId(1));
        graph.add_edge(VertexId(0), VertexId(2));

        assert_eq!(graph.degree(VertexId(0)), 2);
        assert_eq!(graph.degree(VertexId(1)), 1);
        assert_eq!(graph.degree(VertexId(99)), 0);
    }

    #[test]
    fn empty_graph_is_connected() {
        assert!(Graph::new().is_connected());
    }

    #[test]
    fn disconnected_components_detected() {
        let mut graph = Graph::new();
        graph.add_edge(VertexId(0), VertexId(1));
        graph.add_edge(VertexId(2), VertexId(3));

        assert!(!graph.is_connected());

        graph.add_edge(VertexId(1), VertexId(2));
        assert!(graph.is_connected());
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        let mut graph = Graph::new();
        graph.add_edge(VertexId(0), VertexId(1));
        graph.add_vertex(VertexId(2));

        assert!(!graph.is_connected());
    }
}
