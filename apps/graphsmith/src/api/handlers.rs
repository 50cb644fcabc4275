//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse},
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use graphsmith_core::{GraphsmithError, grow};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// MIME type the artifacts are served with.
const GML_CONTENT_TYPE: &str = "application/gml";

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// GENERATE HANDLER
// =============================================================================

/// Generate a graph artifact and return its download URL.
///
/// Validates `max_vertices`, grows the graph, writes it into the artifact
/// store under a fresh random filename, and answers with the URL of the
/// download endpoint for that filename.
pub async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let target = match request.vertex_target() {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(error = %e, "rejected generation request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "Invalid 'max_vertices' provided. Must be a positive integer.",
                )),
            )
                .into_response();
        }
    };

    let mut rng = SmallRng::from_entropy();
    let graph = grow(target, &mut rng);

    let filename = match state.store.save(&graph, &mut rng) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, "failed to persist generated graph");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "An internal server error occurred during graph generation.",
                )),
            )
                .into_response();
        }
    };

    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        %filename,
        "generated graph artifact"
    );

    let response = GenerateResponse {
        download_url: state.download_url(&headers, &filename),
        message: "Graph generated successfully!".to_string(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

// =============================================================================
// DOWNLOAD HANDLER
// =============================================================================

/// Serve a previously generated artifact as a file download.
///
/// The filename is validated against the generated-name shape before any
/// disk access; anything else is refused outright.
pub async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    match state.store.read(&filename) {
        Ok(bytes) => {
            let disposition = format!("attachment; filename=\"{}\"", filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, GML_CONTENT_TYPE.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(GraphsmithError::InvalidFilename(name)) => {
            tracing::warn!(filename = %name, "refused artifact request");
            (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::new("Access denied to this file.")),
            )
                .into_response()
        }
        Err(GraphsmithError::ArtifactNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("File not found.")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to read artifact");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("An internal server error occurred.")),
            )
                .into_response()
        }
    }
}
