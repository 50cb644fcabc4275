//! # Graphsmith - Graph Instance Generator
//!
//! The main binary for the Graphsmith generation service.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for offline generation and artifact inspection
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              apps/graphsmith (THE BINARY)              │
//! │                                                        │
//! │   ┌─────────────┐            ┌─────────────┐           │
//! │   │   CLI       │            │   HTTP API  │           │
//! │   │  (clap)     │            │   (axum)    │           │
//! │   └──────┬──────┘            └──────┬──────┘           │
//! │          │                          │                  │
//! │          └────────────┬─────────────┘                  │
//! │                       ▼                                │
//! │             ┌──────────────────┐                       │
//! │             │ graphsmith-core  │                       │
//! │             │   (THE LOGIC)    │                       │
//! │             └──────────────────┘                       │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! graphsmith server --host 0.0.0.0 --port 8080
//!
//! # Offline operations
//! graphsmith generate -n 200 --seed 7
//! graphsmith inspect -f generated_graphs/graph_<token>.gml
//! graphsmith list
//! ```

use clap::Parser;
use graphsmith::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — GRAPHSMITH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("GRAPHSMITH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "graphsmith=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Graphsmith startup banner.
fn print_banner() {
    println!(
        r#"
  graphsmith v{}

  Randomized Graph Instance Generator
"#,
        env!("CARGO_PKG_VERSION")
    );
}
