//! # Graphsmith CLI Module
//!
//! This module implements the CLI interface for Graphsmith.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `generate` - Generate a graph artifact offline
//! - `inspect` - Parse a GML artifact and print its shape
//! - `list` - List artifacts in the store directory

mod commands;

use clap::{Parser, Subcommand};
use graphsmith_core::GraphsmithError;
use graphsmith_core::primitives::DEFAULT_VERTEX_TARGET;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Graphsmith - randomized graph instance generator.
///
/// Generates randomly-connected graphs of a requested size, stores them
/// as GML artifacts, and serves them for download over HTTP.
#[derive(Parser, Debug)]
#[command(name = "graphsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory where generated graph artifacts are stored
    #[arg(short = 'o', long, global = true, default_value = "generated_graphs")]
    pub output_dir: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Externally visible base URL for download links
        /// (falls back to GRAPHSMITH_PUBLIC_URL, then the request's Host header)
        #[arg(long)]
        public_url: Option<String>,
    },

    /// Generate a graph artifact without starting the server
    Generate {
        /// Number of vertices to grow
        #[arg(short = 'n', long, default_value_t = DEFAULT_VERTEX_TARGET)]
        vertices: u64,

        /// RNG seed for reproducible output (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write to this exact path instead of the artifact store
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Parse a GML artifact and print vertex/edge statistics
    Inspect {
        /// Path to the GML file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List artifacts in the store directory
    List,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), GraphsmithError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server {
            host,
            port,
            public_url,
        }) => cmd_server(&cli.output_dir, &host, port, public_url).await,
        Some(Commands::Generate {
            vertices,
            seed,
            output,
        }) => cmd_generate(&cli.output_dir, vertices, seed, output.as_deref(), json_mode),
        Some(Commands::Inspect { file }) => cmd_inspect(&file, json_mode),
        Some(Commands::List) => cmd_list(&cli.output_dir, json_mode),
        None => {
            // No subcommand - list stored artifacts by default
            cmd_list(&cli.output_dir, json_mode)
        }
    }
}
