//! Content-derived identifiers for ideas.
//!
//! An identifier is the SHA-256 of a canonical `idea:`/`description:` body,
//! rendered as 64 lowercase hex characters. Users address ideas either by the
//! full identifier or by its first 7 characters.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{IdbError, Result};
use crate::model::Idea;

/// Length of the short (display) form of an identifier.
pub const SHORT_LEN: usize = 7;

/// Length of a full identifier.
pub const FULL_LEN: usize = 64;

/// Stand-in used in the hash body when an idea has no description.
pub const NO_DESCRIPTION: &str = "no description";

/// Build the canonical text that an identifier is computed over.
#[must_use]
pub fn canonical_body(title: &str, description: &str) -> String {
    let description = if description.is_empty() {
        NO_DESCRIPTION
    } else {
        description
    };
    format!("idea: {title}\ndescription: {description}")
}

/// Derive the identifier for a title/description pair.
#[must_use]
pub fn derive_hash(title: &str, description: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_body(title, description).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Short display form of an identifier.
///
/// Identifiers read from a hand-edited file may be shorter than 7 characters;
/// those are returned whole.
#[must_use]
pub fn short_hash(hash: &str) -> &str {
    hash.get(..SHORT_LEN).unwrap_or(hash)
}

/// A parsed user reference to one or more ideas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// 7 hex characters, compared against identifier prefixes.
    Short(String),
    /// 64 hex characters, compared for equality.
    Full(String),
}

impl Reference {
    /// Parse a user-supplied reference.
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the input is not 7 or 64 hex characters.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdbError::invalid_reference(input));
        }

        match normalized.len() {
            SHORT_LEN => Ok(Self::Short(normalized)),
            FULL_LEN => Ok(Self::Full(normalized)),
            _ => Err(IdbError::invalid_reference(input)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Short(s) | Self::Full(s) => s,
        }
    }

    /// Does this reference address the given identifier?
    #[must_use]
    pub fn matches(&self, hash: &str) -> bool {
        match self {
            Self::Short(prefix) => hash.get(..SHORT_LEN) == Some(prefix.as_str()),
            Self::Full(full) => hash == full,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every idea the reference addresses, in store order.
///
/// A short reference can match several ideas; all of them are returned.
#[must_use]
pub fn resolve<'a>(reference: &Reference, ideas: &'a [Idea]) -> Vec<&'a Idea> {
    ideas
        .iter()
        .filter(|idea| reference.matches(&idea.hash))
        .collect()
}
