//! # GML Codec
//!
//! Text serialization for generated graphs in the GML dialect emitted by
//! common graph tooling:
//!
//! ```text
//! graph [
//!   node [
//!     id 0
//!     label "0"
//!   ]
//!   edge [
//!     source 0
//!     target 1
//!   ]
//! ]
//! ```
//!
//! The writer is deterministic: nodes in ascending id order, then edges in
//! ascending `(source, target)` order with `source < target`. The reader is
//! a tolerant line-oriented parser for the same dialect; keys it does not
//! understand inside a block are skipped, structural problems are reported
//! as [`GraphsmithError::Gml`] with a line number.

use crate::types::{Graph, GraphsmithError, VertexId};
use std::fmt::Write as _;

// =============================================================================
// WRITER
// =============================================================================

/// Render a graph as a GML document.
///
/// This is a pure transformation - no file I/O.
#[must_use]
pub fn render(graph: &Graph) -> String {
    let mut out = String::from("graph [\n");

    for vertex in graph.vertices() {
        let _ = write!(
            out,
            "  node [\n    id {id}\n    label \"{id}\"\n  ]\n",
            id = vertex.0
        );
    }

    for (source, target) in graph.edges() {
        let _ = write!(
            out,
            "  edge [\n    source {}\n    target {}\n  ]\n",
            source.0, target.0
        );
    }

    out.push_str("]\n");
    out
}

// =============================================================================
// READER
// =============================================================================

/// Parser state: which block the current line sits in.
enum Block {
    /// Before `graph [`.
    Top,
    /// Inside `graph [`, outside any node/edge block.
    Graph,
    /// Inside a `node [` block.
    Node { id: Option<u64> },
    /// Inside an `edge [` block.
    Edge {
        source: Option<u64>,
        target: Option<u64>,
    },
}

/// Parse a GML document into a graph.
///
/// Accepts the dialect produced by [`render`]: one key per line, node
/// blocks before use of their ids in edges. Unknown keys inside node and
/// edge blocks are ignored so that documents with extra annotations
/// (weights, coordinates) still load.
pub fn parse(input: &str) -> Result<Graph, GraphsmithError> {
    let mut graph = Graph::new();
    let mut block = Block::Top;

    for (index, raw_line) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        block = match block {
            Block::Top => parse_top_line(trimmed, line)?,
            Block::Graph => parse_graph_line(trimmed, line)?,
            Block::Node { id } => parse_node_line(&mut graph, id, trimmed, line)?,
            Block::Edge { source, target } => {
                parse_edge_line(&mut graph, source, target, trimmed, line)?
            }
        };
    }

    match block {
        Block::Top => Ok(graph),
        _ => Err(GraphsmithError::Gml {
            line: input.lines().count(),
            message: "unexpected end of input: unclosed block".to_string(),
        }),
    }
}

fn parse_top_line(trimmed: &str, line: usize) -> Result<Block, GraphsmithError> {
    if trimmed == "graph [" {
        Ok(Block::Graph)
    } else {
        Err(GraphsmithError::Gml {
            line,
            message: format!("expected 'graph [', found '{trimmed}'"),
        })
    }
}

fn parse_graph_line(trimmed: &str, line: usize) -> Result<Block, GraphsmithError> {
    match trimmed {
        "node [" => Ok(Block::Node { id: None }),
        "edge [" => Ok(Block::Edge {
            source: None,
            target: None,
        }),
        "]" => Ok(Block::Top),
        other => {
            // Graph-level scalar attributes (e.g. "directed 0") carry no
            // structure we keep; a directed flag is the one we must refuse.
            if let Some(flag) = other.strip_prefix("directed ") {
                if flag.trim() != "0" {
                    return Err(GraphsmithError::Gml {
                        line,
                        message: "directed graphs are not supported".to_string(),
                    });
                }
            }
            Ok(Block::Graph)
        }
    }
}

fn parse_node_line(
    graph: &mut Graph,
    id: Option<u64>,
    trimmed: &str,
    line: usize,
) -> Result<Block, GraphsmithError> {
    if trimmed == "]" {
        let id = id.ok_or_else(|| GraphsmithError::Gml {
            line,
            message: "node block without an id".to_string(),
        })?;
        if !graph.add_vertex(VertexId(id)) {
            return Err(GraphsmithError::Gml {
                line,
                message: format!("duplicate node id {id}"),
            });
        }
        return Ok(Block::Graph);
    }

    if let Some(value) = trimmed.strip_prefix("id ") {
        let parsed = parse_u64(value, "node id", line)?;
        if id.is_some() {
            return Err(GraphsmithError::Gml {
                line,
                message: "node block with more than one id".to_string(),
            });
        }
        return Ok(Block::Node { id: Some(parsed) });
    }

    // label and any other node attributes are ignored
    Ok(Block::Node { id })
}

fn parse_edge_line(
    graph: &mut Graph,
    source: Option<u64>,
    target: Option<u64>,
    trimmed: &str,
    line: usize,
) -> Result<Block, GraphsmithError> {
    if trimmed == "]" {
        let source = source.ok_or_else(|| GraphsmithError::Gml {
            line,
            message: "edge block without a source".to_string(),
        })?;
        let target = target.ok_or_else(|| GraphsmithError::Gml {
            line,
            message: "edge block without a target".to_string(),
        })?;

        for endpoint in [source, target] {
            if !graph.contains_vertex(VertexId(endpoint)) {
                return Err(GraphsmithError::Gml {
                    line,
                    message: format!("edge references undeclared node {endpoint}"),
                });
            }
        }
        if source == target {
            return Err(GraphsmithError::Gml {
                line,
                message: format!("self-loop on node {source} is not supported"),
            });
        }

        // Duplicate edges collapse silently in a simple graph.
        graph.add_edge(VertexId(source), VertexId(target));
        return Ok(Block::Graph);
    }

    if let Some(value) = trimmed.strip_prefix("source ") {
        let parsed = parse_u64(value, "edge source", line)?;
        return Ok(Block::Edge {
            source: Some(parsed),
            target,
        });
    }
    if let Some(value) = trimmed.strip_prefix("target ") {
        let parsed = parse_u64(value, "edge target", line)?;
        return Ok(Block::Edge {
            source,
            target: Some(parsed),
        });
    }

    // weight and any other edge attributes are ignored
    Ok(Block::Edge { source, target })
}

fn parse_u64(value: &str, what: &str, line: usize) -> Result<u64, GraphsmithError> {
    value.trim().parse().map_err(|_| GraphsmithError::Gml {
        line,
        message: format!("invalid {what}: '{}'", value.trim()),
    })
}

// =============================================================================
// TESTS
// =============================================================================
