//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use graphsmith_core::{
    ArtifactStore, Graph, GraphsmithError, gml, grow,
    primitives::{MAX_ARTIFACT_FILE_SIZE, MAX_VERTEX_TARGET},
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::{Path, PathBuf};

// =============================================================================
// PATH VALIDATION
// =============================================================================

/// Validate an input file path.
///
/// Canonicalizes the path (resolving symlinks and ".."), requires it to
/// exist, be a regular file, and stay under the artifact size limit.
fn validate_input_path(path: &Path) -> Result<PathBuf, GraphsmithError> {
    let canonical = path.canonicalize().map_err(|e| {
        GraphsmithError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(GraphsmithError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| GraphsmithError::Io(format!("Cannot read file metadata: {}", e)))?;
    if metadata.len() > MAX_ARTIFACT_FILE_SIZE {
        return Err(GraphsmithError::Io(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_ARTIFACT_FILE_SIZE
        )));
    }

    Ok(canonical)
}

/// Validate an output file path.
///
/// The parent directory must exist; the filename is kept as given.
fn validate_output_path(path: &Path) -> Result<PathBuf, GraphsmithError> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        GraphsmithError::Io(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    let filename = path
        .file_name()
        .ok_or_else(|| GraphsmithError::Io("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    output_dir: &Path,
    host: &str,
    port: u16,
    public_url: Option<String>,
) -> Result<(), GraphsmithError> {
    let store = ArtifactStore::open(output_dir)?;
    let public_url = public_url.or_else(|| std::env::var("GRAPHSMITH_PUBLIC_URL").ok());

    println!("Graphsmith Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:      {}", host);
    println!("  Port:      {}", port);
    println!("  Artifacts: {}", store.root().display());
    if let Some(url) = &public_url {
        println!("  Public:    {}", url);
    }
    println!();
    println!("Endpoints:");
    println!("  POST /generate-graph             - Generate a graph artifact");
    println!("  GET  /download-graph/{{filename}}  - Download a generated artifact");
    println!("  GET  /health                     - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    let state = api::AppState::new(store, public_url);
    api::run_server(&addr, state).await
}

// =============================================================================
// GENERATE COMMAND
// =============================================================================

/// Generate a graph artifact offline.
pub fn cmd_generate(
    output_dir: &Path,
    vertices: u64,
    seed: Option<u64>,
    output: Option<&Path>,
    json_mode: bool,
) -> Result<(), GraphsmithError> {
    if vertices == 0 || vertices > MAX_VERTEX_TARGET {
        return Err(GraphsmithError::InvalidVertexCount(vertices as i64));
    }

    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };
    let graph = grow(vertices, &mut rng);

    let written = match output {
        Some(path) => {
            let path = validate_output_path(path)?;
            std::fs::write(&path, gml::render(&graph)).map_err(|e| {
                GraphsmithError::Io(format!("cannot write '{}': {}", path.display(), e))
            })?;
            path.display().to_string()
        }
        None => {
            let store = ArtifactStore::open(output_dir)?;
            let filename = store.save(&graph, &mut rng)?;
            store.root().join(filename).display().to_string()
        }
    };

    if json_mode {
        let out = serde_json::json!({
            "path": written,
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "seed": seed,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    println!("Generated graph artifact");
    println!("  Path:     {}", written);
    println!("  Vertices: {}", graph.vertex_count());
    println!("  Edges:    {}", graph.edge_count());
    if let Some(s) = seed {
        println!("  Seed:     {}", s);
    }

    Ok(())
}

// =============================================================================
// INSPECT COMMAND
// =============================================================================

/// Parse a GML artifact and print its shape.
pub fn cmd_inspect(file: &Path, json_mode: bool) -> Result<(), GraphsmithError> {
    let path = validate_input_path(file)?;
    let text = std::fs::read_to_string(&path)
        .map_err(|e| GraphsmithError::Io(format!("cannot read '{}': {}", path.display(), e)))?;
    let graph = gml::parse(&text)?;

    let (min_degree, max_degree) = degree_range(&graph);

    if json_mode {
        let out = serde_json::json!({
            "file": path.display().to_string(),
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "min_degree": min_degree,
            "max_degree": max_degree,
            "connected": graph.is_connected(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    println!("Graph Artifact");
    println!("==============");
    println!("File:       {}", path.display());
    println!();
    println!("Vertices:   {}", graph.vertex_count());
    println!("Edges:      {}", graph.edge_count());
    println!("Degree:     {} .. {}", min_degree, max_degree);
    println!("Connected:  {}", if graph.is_connected() { "yes" } else { "no" });

    Ok(())
}

/// Minimum and maximum vertex degree; (0, 0) for the empty graph.
fn degree_range(graph: &Graph) -> (usize, usize) {
    let mut lo = usize::MAX;
    let mut hi = 0;
    for vertex in graph.vertices() {
        let d = graph.degree(vertex);
        lo = lo.min(d);
        hi = hi.max(d);
    }
    if graph.vertex_count() == 0 { (0, 0) } else { (lo, hi) }
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List artifacts in the store directory.
pub fn cmd_list(output_dir: &Path, json_mode: bool) -> Result<(), GraphsmithError> {
    let store = ArtifactStore::open(output_dir)?;
    let artifacts = store.list()?;

    if json_mode {
        let out = serde_json::json!({
            "directory": store.root().display().to_string(),
            "artifacts": artifacts,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    println!("Artifacts in {}", store.root().display());
    if artifacts.is_empty() {
        println!("  (none)");
    }
    for name in artifacts {
        println!("  {}", name);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generate_rejects_zero_vertices() {
        let dir = TempDir::new().expect("tempdir");
        let result = cmd_generate(dir.path(), 0, None, None, false);
        assert!(matches!(
            result,
            Err(GraphsmithError::InvalidVertexCount(0))
        ));
    }

    #[test]
    fn generate_rejects_over_limit() {
        let dir = TempDir::new().expect("tempdir");
        let result = cmd_generate(dir.path(), MAX_VERTEX_TARGET + 1, None, None, false);
        assert!(result.is_err());
    }

    #[test]
    fn generate_writes_into_store() {
        let dir = TempDir::new().expect("tempdir");
        cmd_generate(dir.path(), 10, Some(3), None, true).expect("generate");

        let store = ArtifactStore::open(dir.path()).expect("open");
        let artifacts = store.list().expect("list");
        assert_eq!(artifacts.len(), 1);

        let bytes = store.read(&artifacts[0]).expect("read");
        let graph = gml::parse(&String::from_utf8(bytes).expect("utf8")).expect("parse");
        assert_eq!(graph.vertex_count(), 10);
    }

    #[test]
    fn generate_with_explicit_output_path() {
        let dir = TempDir::new().expect("tempdir");
        let target = dir.path().join("out.gml");
        cmd_generate(dir.path(), 5, Some(1), Some(&target), true).expect("generate");

        let text = std::fs::read_to_string(&target).expect("read");
        let graph = gml::parse(&text).expect("parse");
        assert_eq!(graph.vertex_count(), 5);
    }

    #[test]
    fn generate_same_seed_same_artifact_bytes() {
        let dir = TempDir::new().expect("tempdir");
        let a = dir.path().join("a.gml");
        let b = dir.path().join("b.gml");
        cmd_generate(dir.path(), 25, Some(42), Some(&a), true).expect("generate");
        cmd_generate(dir.path(), 25, Some(42), Some(&b), true).expect("generate");

        let bytes_a = std::fs::read(&a).expect("read a");
        let bytes_b = std::fs::read(&b).expect("read b");
        assert_eq!(bytes_a, bytes_b);
    }

    #[test]
    fn inspect_rejects_missing_file() {
        let dir = TempDir::new().expect("tempdir");
        let result = cmd_inspect(&dir.path().join("absent.gml"), true);
        assert!(result.is_err());
    }

    #[test]
    fn list_on_fresh_directory_is_empty() {
        let dir = TempDir::new().expect("tempdir");
        cmd_list(dir.path(), true).expect("list");
        let store = ArtifactStore::open(dir.path()).expect("open");
        assert!(store.list().expect("list").is_empty());
    }
}
