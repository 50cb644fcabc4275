//! # Randomized Growth
//!
//! The graph construction procedure: seed a small initial structure, then
//! grow one vertex at a time, attaching each new vertex to a handful of
//! uniformly chosen existing vertices.
//!
//! This is a plain random-attachment process. It produces connected,
//! sparse instances of a requested size; it makes no hardness claims
//! about the output.
//!
//! All randomness flows through the caller-supplied `rand::Rng`, so the
//! same seed and target always produce the same graph.

use crate::primitives::MAX_ATTACHMENTS;
use crate::types::{Graph, VertexId};
use rand::Rng;

/// Grow a graph with exactly `target` vertices.
///
/// - `target == 0` produces the empty graph.
/// - `target >= 1` starts from a single vertex 0.
/// - `target >= 3` starts from a triangle on vertices {0, 1, 2}.
/// - Each further vertex `n` attempts between 1 and `min(3, n)` edges,
///   each to a uniformly random existing vertex. Duplicate picks are
///   skipped rather than retried, so the realized attachment degree of a
///   new vertex is between 1 and 3.
///
/// Vertices are labeled consecutively from 0 in insertion order. The
/// result is connected for every `target >= 1`: each grown vertex
/// attaches to at least one earlier vertex.
pub fn grow<R: Rng>(target: u64, rng: &mut R) -> Graph {
    let mut graph = Graph::new();

    let mut grown = if target >= 3 {
        seed_triangle(&mut graph);
        3
    } else if target >= 1 {
        graph.add_vertex(VertexId(0));
        1
    } else {
        return graph;
    };

    while grown < target {
        attach_vertex(&mut graph, grown, rng);
        grown += 1;
    }

    graph
}

/// Seed the initial 3-cycle on vertices {0, 1, 2}.
fn seed_triangle(graph: &mut Graph) {
    graph.add_edge(VertexId(0), VertexId(1));
    graph.add_edge(VertexId(1), VertexId(2));
    graph.add_edge(VertexId(2), VertexId(0));
}

/// Add vertex `n` and attach it to randomly chosen earlier vertices.
///
/// `existing` is the number of vertices already in the graph, which is
/// also the label of the vertex being added.
fn attach_vertex<R: Rng>(graph: &mut Graph, existing: u64, rng: &mut R) {
    let new_vertex = VertexId(existing);
    graph.add_vertex(new_vertex);

    let attachments = rng.gen_range(1..=MAX_ATTACHMENTS.min(existing));
    for _ in 0..attachments {
        let pick = VertexId(rng.gen_range(0..existing));
        // Duplicate picks are a no-op in a simple graph.
        graph.add_edge(new_vertex, pick);
    }
}

// =============================================================================
// TESTS
// =============================================================================
