//! # Engine Constants
//!
//! Hardcoded runtime constants for the Graphsmith engine.
//!
//! These values are compiled into the binary and are immutable at runtime.
//! Callers that need different bounds must change them here, not work
//! around them at the API boundary.

/// Default vertex target when a request omits `max_vertices`.
pub const DEFAULT_VERTEX_TARGET: u64 = 50;

/// Upper bound on the vertex target accepted at any boundary.
///
/// The growth procedure is linear in the target, but the rendered GML
/// artifact is not: an unbounded target turns one request into an
/// arbitrarily large allocation and disk write. Requests above this
/// bound are rejected before any work happens.
pub const MAX_VERTEX_TARGET: u64 = 100_000;

/// Maximum number of attachment attempts for each newly grown vertex.
///
/// Each new vertex attempts between 1 and `min(MAX_ATTACHMENTS, n)`
/// edges back into the existing graph, where `n` is the number of
/// vertices already present.
pub const MAX_ATTACHMENTS: u64 = 3;

/// Filename prefix for stored artifacts.
pub const ARTIFACT_PREFIX: &str = "graph_";

/// Filename extension for stored artifacts.
pub const ARTIFACT_SUFFIX: &str = ".gml";

/// Length of the random hex token in artifact filenames.
///
/// 128 random bits rendered as lowercase hex. Together with the fixed
/// prefix and suffix this fully determines the accepted filename shape;
/// anything else is rejected by the store.
pub const ARTIFACT_TOKEN_LEN: usize = 32;

/// Maximum size of a GML artifact accepted for parsing (16 MB).
///
/// Prevents memory exhaustion when inspecting files of unknown origin.
pub const MAX_ARTIFACT_FILE_SIZE: u64 = 16 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_length_covers_128_bits() {
        // 32 hex chars = 16 bytes = 128 bits
        assert_eq!(ARTIFACT_TOKEN_LEN, 32);
    }

    #[test]
    fn default_target_within_limit() {
        assert!(DEFAULT_VERTEX_TARGET <= MAX_VERTEX_TARGET);
    }
}
