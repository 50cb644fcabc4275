//! Serialization tests for the HTTP API types.
//!
//! These pin the wire shapes: what the frontend sends and what it gets
//! back must not drift.

#![allow(clippy::unwrap_used, clippy::panic)]

use graphsmith::api::{ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse};
use serde_json::json;

// =============================================================================
// GENERATE REQUEST
// =============================================================================

#[test]
fn generate_request_parses_explicit_value() {
    let request: GenerateRequest = serde_json::from_value(json!({"max_vertices": 25})).unwrap();
    assert_eq!(request.max_vertices, Some(25));
}

#[test]
fn generate_request_accepts_empty_object() {
    let request: GenerateRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(request.max_vertices, None);
    assert_eq!(request.vertex_target().unwrap(), 50);
}

#[test]
fn generate_request_accepts_explicit_null() {
    let request: GenerateRequest =
        serde_json::from_value(json!({"max_vertices": null})).unwrap();
    assert_eq!(request.max_vertices, None);
}

#[test]
fn generate_request_rejects_non_integer() {
    assert!(serde_json::from_value::<GenerateRequest>(json!({"max_vertices": "fifty"})).is_err());
    assert!(serde_json::from_value::<GenerateRequest>(json!({"max_vertices": 3.5})).is_err());
}

// =============================================================================
// GENERATE RESPONSE
// =============================================================================

#[test]
fn generate_response_wire_shape() {
    let response = GenerateResponse {
        download_url: "http://localhost:8080/download-graph/graph_00ff.gml".to_string(),
        message: "Graph generated successfully!".to_string(),
        vertex_count: 12,
        edge_count: 19,
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "download_url": "http://localhost:8080/download-graph/graph_00ff.gml",
            "message": "Graph generated successfully!",
            "vertex_count": 12,
            "edge_count": 19,
        })
    );
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[test]
fn error_response_wire_shape() {
    let error = ErrorResponse::new("File not found.");
    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(value, json!({"message": "File not found."}));
}

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

#[test]
fn health_response_defaults() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn health_response_roundtrips() {
    let health = HealthResponse::default();
    let text = serde_json::to_string(&health).unwrap();
    let restored: HealthResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(restored.status, health.status);
    assert_eq!(restored.version, health.version);
}
