//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Error bodies are always `{"message": ...}` with the detail kept
//! generic; specifics go to the log, not the client.

use graphsmith_core::GraphsmithError;
use graphsmith_core::primitives::{DEFAULT_VERTEX_TARGET, MAX_VERTEX_TARGET};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// GENERATE REQUEST/RESPONSE
// =============================================================================

/// Graph generation request.
///
/// `max_vertices` is optional; omitting it falls back to the default
/// target of 50.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub max_vertices: Option<i64>,
}

impl GenerateRequest {
    /// Validate the requested size and resolve the effective vertex target.
    ///
    /// Rejects zero, negative values, and anything above
    /// `MAX_VERTEX_TARGET`. Validation happens here at the API boundary,
    /// before any generation work is scheduled.
    pub fn vertex_target(&self) -> Result<u64, GraphsmithError> {
        let requested = self.max_vertices.unwrap_or(DEFAULT_VERTEX_TARGET as i64);
        if requested <= 0 {
            return Err(GraphsmithError::InvalidVertexCount(requested));
        }
        let target = requested as u64;
        if target > MAX_VERTEX_TARGET {
            return Err(GraphsmithError::InvalidVertexCount(requested));
        }
        Ok(target)
    }
}

/// Graph generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// URL the artifact can be fetched from.
    pub download_url: String,
    pub message: String,
    pub vertex_count: usize,
    pub edge_count: usize,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Error body shared by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_max_vertices_uses_default() {
        let request = GenerateRequest { max_vertices: None };
        assert_eq!(request.vertex_target().expect("valid"), DEFAULT_VERTEX_TARGET);
    }

    #[test]
    fn explicit_max_vertices_respected() {
        let request = GenerateRequest {
            max_vertices: Some(7),
        };
        assert_eq!(request.vertex_target().expect("valid"), 7);
    }

    #[test]
    fn zero_rejected() {
        let request = GenerateRequest {
            max_vertices: Some(0),
        };
        assert!(request.vertex_target().is_err());
    }

    #[test]
    fn negative_rejected() {
        let request = GenerateRequest {
            max_vertices: Some(-5),
        };
        assert!(request.vertex_target().is_err());
    }

    #[test]
    fn over_limit_rejected() {
        let request = GenerateRequest {
            max_vertices: Some(MAX_VERTEX_TARGET as i64 + 1),
        };
        assert!(request.vertex_target().is_err());
    }

    #[test]
    fn limit_itself_accepted() {
        let request = GenerateRequest {
            max_vertices: Some(MAX_VERTEX_TARGET as i64),
        };
        assert_eq!(request.vertex_target().expect("valid"), MAX_VERTEX_TARGET);
    }
}
