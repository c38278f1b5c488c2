//! Source path validation.
//!
//! Every ingestion call starts here: the raw path string is screened for
//! parent-directory traversal markers, then resolved to a canonical absolute
//! path and confirmed to be an existing regular file.

use std::path::{Component, Path, PathBuf};

use fusion_core::error::{FusionError, Result};

/// A source path that has passed traversal and existence checks.
///
/// Carries the fully resolved, canonical form of the path. Constructed only
/// by [`validate`]; never from a raw string containing `..`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSource {
    path: PathBuf,
}

impl ValidatedSource {
    /// The canonical path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the source, returning the canonical path.
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Validate `source` for reading.
///
/// The traversal check runs on the raw string *before* any resolution:
/// canonicalisation would normalise `..` components away and mask the
/// attempt. Fails with [`FusionError::SecurityViolation`] when any path
/// component is `..`, and with [`FusionError::NotFound`] when the resolved
/// path is not an existing regular file.
pub fn validate(source: &str) -> Result<ValidatedSource> {
    let raw = Path::new(source);
    if raw
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(FusionError::SecurityViolation(source.to_string()));
    }

    let canonical = std::fs::canonicalize(raw)
        .map_err(|_| FusionError::NotFound(raw.to_path_buf()))?;

    if !canonical.is_file() {
        return Err(FusionError::NotFound(canonical));
    }

    Ok(ValidatedSource { path: canonical })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
