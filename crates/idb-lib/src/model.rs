//! Core data types for idb.
//!
//! The serde layout is the on-disk format: a JSON array of objects with
//! `hash`, `idea`, `description` and `marked` keys.

use serde::{Deserialize, Serialize};

use crate::id;

/// A single stored idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Idea {
    /// Content-derived identifier (64 lowercase hex characters).
    pub hash: String,
    /// The idea itself.
    #[serde(rename = "idea")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Completion flag.
    #[serde(default)]
    pub marked: bool,
}

impl Idea {
    /// Build a fresh, unmarked idea with its identifier derived from content.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let title = title.into();
        let description = description.into();
        Self {
            hash: id::derive_hash(&title, &description),
            title,
            description,
            marked: false,
        }
    }

    /// First 7 characters of the identifier.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        id::short_hash(&self.hash)
    }
}
