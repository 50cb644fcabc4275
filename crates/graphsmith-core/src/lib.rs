//! # graphsmith-core
//!
//! The graph generation engine for Graphsmith - THE LOGIC.
//!
//! This crate implements everything below the HTTP/CLI surface:
//! growing a randomly-connected graph of a requested size, rendering and
//! parsing it as GML text, and storing the rendered artifacts in a
//! directory keyed by generated filenames.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network dependencies
//! - Deterministic given an RNG: all randomness flows through a
//!   caller-supplied `rand::Rng`; collections are `BTreeMap`/`BTreeSet`
//! - The growth procedure is a plain random-attachment process; it makes
//!   no hardness claims about its output

// =============================================================================
// MODULES
// =============================================================================

pub mod gml;
pub mod growth;
pub mod primitives;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use growth::grow;
pub use store::{ArtifactStore, validate_filename};
pub use types::{Graph, GraphsmithError, VertexId};
