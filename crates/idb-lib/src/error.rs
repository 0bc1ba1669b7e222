//! Error types for `idb-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for idea store operations.
#[derive(Error, Debug)]
pub enum IdbError {
    // === Store Errors ===
    /// The store directory or file does not exist yet.
    #[error("Idea store not found at {}. Run 'idb init'", path.display())]
    StoreMissing { path: PathBuf },

    /// The store file exists but is not a valid array of ideas.
    #[error("Idea store at {} is corrupt: {reason}", path.display())]
    StoreCorrupt { path: PathBuf, reason: String },

    /// The store holds no ideas at all.
    #[error("No ideas available")]
    EmptyStore,

    // === Input Errors ===
    /// Reference is neither a 7-char short hash nor a 64-char full hash.
    #[error("Invalid hash provided: '{reference}' (expected 7 or 64 hex characters)")]
    InvalidReference { reference: String },

    /// Attempted to add an idea without a title.
    #[error("No idea provided: title cannot be empty")]
    TitleRequired,

    /// The request carries nothing to apply.
    #[error("Nothing to do: {reason}")]
    NothingToDo { reason: String },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IdbError {
    #[must_use]
    pub fn invalid_reference(reference: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
        }
    }

    #[must_use]
    pub fn nothing_to_do(reason: impl Into<String>) -> Self {
        Self::NothingToDo {
            reason: reason.into(),
        }
    }
}

/// Result type using `IdbError`.
pub type Result<T> = std::result::Result<T, IdbError>;
