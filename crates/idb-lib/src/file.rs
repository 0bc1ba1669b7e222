//! JSON file I/O for the idea store.
//!
//! The store file is a single pretty-printed JSON array of ideas.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{IdbError, Result};
use crate::model::Idea;

/// Load every idea from the store file.
///
/// # Errors
///
/// Returns `StoreMissing` if the file (or its directory) does not exist,
/// `StoreCorrupt` if it is not a JSON array of ideas, or `Io` otherwise.
pub fn load(path: &Path) -> Result<Vec<Idea>> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IdbError::StoreMissing {
                path: path.to_path_buf(),
            }
        } else {
            IdbError::Io(e)
        }
    })?;

    let ideas: Vec<Idea> = serde_json::from_slice(&bytes).map_err(|e| IdbError::StoreCorrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), count = ideas.len(), "Loaded ideas");
    Ok(ideas)
}

/// Save ideas to the store file with atomic write.
///
/// The array is written to a uniquely named temp file in the same directory
/// and renamed over the store file, so readers see either the old array or
/// the new one.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save(path: &Path, ideas: &[Idea]) -> Result<()> {
    let json = serde_json::to_string_pretty(ideas)?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| IdbError::Io(e.error))?;

    debug!(path = %path.display(), count = ideas.len(), "Saved ideas");
    Ok(())
}
