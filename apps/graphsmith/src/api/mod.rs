//! # Graphsmith HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `POST /generate-graph` - Generate a graph artifact, answer with its download URL
//! - `GET /download-graph/{filename}` - Serve a generated artifact as a file download
//! - `GET /health` - Health check
//!
//! ## Configuration (Environment Variables)
//!
//! - `GRAPHSMITH_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `GRAPHSMITH_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `GRAPHSMITH_PUBLIC_URL`: Base URL used when building download URLs (default: derived from the Host header)

mod handlers;
mod middleware;
mod types;

// Re-export handlers and types for integration tests (via `graphsmith::api::*`)
#[allow(unused_imports)]
pub use handlers::{download_handler, generate_handler, health_handler};
#[allow(unused_imports)]
pub use types::{ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse};

use axum::{
    Router,
    http::{HeaderMap, HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use graphsmith_core::{ArtifactStore, GraphsmithError};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are one small JSON object; anything bigger is noise.
const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// The artifact store the handlers write to and read from.
    pub store: Arc<ArtifactStore>,
    /// Optional externally visible base URL for download links.
    pub public_url: Option<String>,
}

impl AppState {
    /// Create new app state around an opened artifact store.
    #[must_use]
    pub fn new(store: ArtifactStore, public_url: Option<String>) -> Self {
        Self {
            store: Arc::new(store),
            public_url,
        }
    }

    /// Build the download URL for an artifact filename.
    ///
    /// Preference order: configured public base URL, then the request's
    /// Host header, then a path-relative URL as the last resort.
    #[must_use]
    pub fn download_url(&self, headers: &HeaderMap, filename: &str) -> String {
        if let Some(base) = &self.public_url {
            return format!("{}/download-graph/{}", base.trim_end_matches('/'), filename);
        }
        if let Some(host) = headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
            return format!("http://{}/download-graph/{}", host, filename);
        }
        format!("/download-graph/{}", filename)
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `GRAPHSMITH_CORS_ORIGINS` environment variable:
/// - If "*": allows all origins (development mode - use with caution!)
/// - If not set: defaults to localhost only (restrictive default)
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("GRAPHSMITH_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins (GRAPHSMITH_CORS_ORIGINS=*). This is insecure for production!"
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in GRAPHSMITH_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
        None => {
            tracing::info!("CORS: No GRAPHSMITH_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let localhost_origins = vec![
        "http://localhost:3000".parse::<HeaderValue>().ok(),
        "http://localhost:8080".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:3000".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:8080".parse::<HeaderValue>().ok(),
    ];
    let origins: Vec<HeaderValue> = localhost_origins.into_iter().flatten().collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate limiting - protects against DoS (if enabled)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/generate-graph", post(handlers::generate_handler))
        .route("/download-graph/{filename}", get(handlers::download_handler));

    if let Some(limiter) = middleware::rate_limiter_from_env() {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), GraphsmithError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| GraphsmithError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Graphsmith HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| GraphsmithError::Io(format!("Server error: {}", e)))
}
