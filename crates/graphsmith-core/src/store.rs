//! # Artifact Store
//!
//! Filesystem-backed storage for generated graph artifacts.
//!
//! Every artifact lives directly under a single store directory with a
//! generated name of the form `graph_<32 lowercase hex chars>.gml`. Reads
//! are keyed by that filename. The name shape is a strict whitelist, so a
//! request-supplied name can never escape the store directory; a
//! canonicalized containment check backs that up for reads.

use crate::primitives::{ARTIFACT_PREFIX, ARTIFACT_SUFFIX, ARTIFACT_TOKEN_LEN};
use crate::types::{Graph, GraphsmithError};
use crate::gml;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// ARTIFACT STORE
// =============================================================================

/// A directory of generated graph artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, GraphsmithError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            GraphsmithError::Io(format!(
                "cannot create artifact directory '{}': {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    /// The store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render a graph to GML and write it under a fresh random filename.
    ///
    /// Returns the filename (not the full path); the caller builds the
    /// download URL from it.
    pub fn save<R: Rng>(&self, graph: &Graph, rng: &mut R) -> Result<String, GraphsmithError> {
        let filename = format!(
            "{}{:0width$x}{}",
            ARTIFACT_PREFIX,
            rng.r#gen::<u128>(),
            ARTIFACT_SUFFIX,
            width = ARTIFACT_TOKEN_LEN
        );
        let path = self.root.join(&filename);

        fs::write(&path, gml::render(graph)).map_err(|e| {
            GraphsmithError::Io(format!("cannot write artifact '{}': {}", path.display(), e))
        })?;

        Ok(filename)
    }

    /// Resolve an artifact filename to its on-disk path.
    ///
    /// Fails with [`GraphsmithError::InvalidFilename`] if the name does not
    /// match the generated shape or resolves outside the store directory,
    /// and with [`GraphsmithError::ArtifactNotFound`] if the file is absent.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, GraphsmithError> {
        validate_filename(filename)?;

        let path = self.root.join(filename);
        if !path.is_file() {
            return Err(GraphsmithError::ArtifactNotFound(filename.to_string()));
        }

        // The whitelist above already excludes separators and dot segments;
        // the canonicalized containment check guards against surprises like
        // a symlinked store entry pointing elsewhere.
        let canonical_root = self.root.canonicalize().map_err(|e| {
            GraphsmithError::Io(format!(
                "cannot canonicalize store directory '{}': {}",
                self.root.display(),
                e
            ))
        })?;
        let canonical = path.canonicalize().map_err(|e| {
            GraphsmithError::Io(format!("cannot canonicalize '{}': {}", path.display(), e))
        })?;
        if !canonical.starts_with(&canonical_root) {
            return Err(GraphsmithError::InvalidFilename(filename.to_string()));
        }

        Ok(canonical)
    }

    /// Read an artifact's raw bytes by filename.
    pub fn read(&self, filename: &str) -> Result<Vec<u8>, GraphsmithError> {
        let path = self.resolve(filename)?;
        fs::read(&path).map_err(|e| {
            GraphsmithError::Io(format!("cannot read artifact '{}': {}", path.display(), e))
        })
    }

    /// List artifact filenames in sorted order.
    ///
    /// Directory entries that do not match the generated-name shape are
    /// skipped, not reported as errors.
    pub fn list(&self) -> Result<Vec<String>, GraphsmithError> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            GraphsmithError::Io(format!(
                "cannot read artifact directory '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| validate_filename(name).is_ok())
            .collect();
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// FILENAME VALIDATION
// =============================================================================

/// Validate that a filename has the generated artifact shape:
/// `graph_` + 32 lowercase hex characters + `.gml`.
///
/// Nothing else is accepted, which rules out path traversal by
/// construction: the accepted alphabet contains no separators, no dots
/// outside the fixed suffix, and no parent references.
pub fn validate_filename(filename: &str) -> Result<(), GraphsmithError> {
    let invalid = || GraphsmithError::InvalidFilename(filename.to_string());

    let token = filename
        .strip_prefix(ARTIFACT_PREFIX)
        .and_then(|rest| rest.strip_suffix(ARTIFACT_SUFFIX))
        .ok_or_else(invalid)?;

    if token.len() != ARTIFACT_TOKEN_LEN {
        return Err(invalid());
    }
    if !token
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(invalid());
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::grow;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tempfile::TempDir;

    fn test_store() -> (ArtifactStore, TempDir) {
        let dir = TempDir::new().expect("tempdir");
        let store = ArtifactStore::open(dir.path().join("artifacts")).expect("open store");
        (store, dir)
    }

    #[test]
    fn open_creates_directory() {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path().join("nested").join("artifacts");
        assert!(!root.exists());

        let store = ArtifactStore::open(&root).expect("open store");
        assert!(store.root().is_dir());
    }

    #[test]
    fn save_then_read_roundtrips() {
        let (store, _dir) = test_store();
        let mut rng = SmallRng::seed_from_u64(5);

        let graph = grow(12, &mut rng);
        let filename = store.save(&graph, &mut rng).expect("save");

        let bytes = store.read(&filename).expect("read");
        let text = String::from_utf8(bytes).expect("utf8");
        let restored = gml::parse(&text).expect("parse");
        assert_eq!(restored, graph);
    }

    #[test]
    fn saved_filenames_have_the_generated_shape() {
        let (store, _dir) = test_store();
        let mut rng = SmallRng::seed_from_u64(5);

        let graph = grow(4, &mut rng);
        let filename = store.save(&graph, &mut rng).expect("save");

        validate_filename(&filename).expect("generated names must validate");
    }

    #[test]
    fn validate_rejects_traversal_attempts() {
        for name in [
            "../etc/passwd",
            "..",
            "graph_/../../x.gml",
            "graph_0123456789abcdef0123456789abcdef.gml/..",
            "/etc/passwd",
            "subdir/graph_0123456789abcdef0123456789abcdef.gml",
        ] {
            assert!(validate_filename(name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn validate_rejects_wrong_shapes() {
        for name in [
            "",
            "graph_.gml",
            "graph_0123456789abcdef.gml",                       // token too short
            "graph_0123456789abcdef0123456789abcdef00.gml",     // token too long
            "graph_0123456789ABCDEF0123456789ABCDEF.gml",       // uppercase hex
            "graph_0123456789abcdeg0123456789abcdef.gml",       // non-hex char
            "graph_0123456789abcdef0123456789abcdef.txt",       // wrong suffix
            "chart_0123456789abcdef0123456789abcdef.gml",       // wrong prefix
            "graph_0123456789abcdef0123456789abcdef.gml.bak",
        ] {
            assert!(validate_filename(name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn validate_accepts_generated_shape() {
        validate_filename("graph_0123456789abcdef0123456789abcdef.gml").expect("valid name");
    }

    #[test]
    fn read_missing_artifact_is_not_found() {
        let (store, _dir) = test_store();
        let err = store
            .read("graph_0123456789abcdef0123456789abcdef.gml")
            .expect_err("must fail");
        assert!(matches!(err, GraphsmithError::ArtifactNotFound(_)));
    }

    #[test]
    fn read_invalid_name_is_rejected_before_disk_access() {
        let (store, _dir) = test_store();
        let err = store.read("../secret").expect_err("must fail");
        assert!(matches!(err, GraphsmithError::InvalidFilename(_)));
    }

    #[test]
    fn list_returns_sorted_artifacts_only() {
        let (store, _dir) = test_store();
        let mut rng = SmallRng::seed_from_u64(5);
        let graph = grow(3, &mut rng);

        let mut saved = vec![
            store.save(&graph, &mut rng).expect("save"),
            store.save(&graph, &mut rng).expect("save"),
            store.save(&graph, &mut rng).expect("save"),
        ];
        saved.sort();

        // A stray file in the directory must not be listed.
        fs::write(store.root().join("notes.txt"), "x").expect("write stray");

        assert_eq!(store.list().expect("list"), saved);
    }
}
