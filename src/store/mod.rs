//! Catalog persistence.
//!
//! The catalog lives in a single JSON document, `movies.json`, in the
//! working directory. The document is a top-level object mapping titles
//! to `{ "rating": <number>, "year": <integer> }`; pretty-printing is
//! cosmetic.
//!
//! Loading is deliberately tolerant and that tolerance is the contract:
//! an absent, unreadable, or malformed document yields an empty catalog,
//! reported through diagnostics rather than an error the caller has to
//! handle. Saving rewrites the whole document through a temp-file rename.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

/// Name of the persisted catalog document. Fixed, not configurable.
pub const STORE_FILE: &str = "movies.json";

/// Load the catalog from `path`.
///
/// Every failure path returns an empty catalog:
/// - absent file (a first run) - logged at info,
/// - unreadable file (permissions, hardware) - logged at warn,
/// - content that is not JSON, is JSON but not a top-level object, or is
///   an object whose values are not movie entries - logged at warn.
pub fn load(path: &Path) -> Catalog {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No movie file yet, starting empty");
            return Catalog::new();
        }
        Err(e) => {
            // Permission-denied and friends are not "absent"; say so.
            tracing::warn!(path = %path.display(), error = %e, "Failed to read movie file, starting empty");
            return Catalog::new();
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Movie file is not valid JSON, starting empty");
            return Catalog::new();
        }
    };

    if !value.is_object() {
        tracing::warn!(path = %path.display(), "Movie file is not a top-level mapping, starting empty");
        return Catalog::new();
    }

    match serde_json::from_value(value) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Movie entries are malformed, starting empty");
            Catalog::new()
        }
    }
}

/// Save the full catalog to `path`, replacing whatever was there.
///
/// Writes to a temp file next to the target and renames it into place, so
/// a failed write never leaves a half-written document behind.
pub fn save(path: &Path, catalog: &Catalog) -> Result<(), StoreError> {
    let contents = serde_json::to_string_pretty(catalog)?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &contents).map_err(|e| StoreError::Write(temp_path.clone(), e))?;
    fs::rename(&temp_path, path)
        .map_err(|e| StoreError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::debug!(path = %path.display(), movies = catalog.len(), "Saved catalog");
    Ok(())
}

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize movie data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}
