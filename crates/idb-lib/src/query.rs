//! Filter and update types for idea operations.

use crate::model::Idea;

/// Fields to update on an idea.
///
/// A field is applied only when present and non-blank after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl IdeaUpdate {
    /// Build an update from raw CLI values, dropping blank ones.
    #[must_use]
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            title: non_blank(title),
            description: non_blank(description),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Apply present fields to `idea`. The identifier is left as is.
    pub fn apply(&self, idea: &mut Idea) {
        if let Some(title) = non_blank(self.title.as_deref()) {
            idea.title = title;
        }
        if let Some(description) = non_blank(self.description.as_deref()) {
            idea.description = description;
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Which ideas a listing shows.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ListFilter {
    #[default]
    All,
    Marked,
    Unmarked,
}

impl ListFilter {
    /// Build a filter from the `--marked` / `--unmarked` flags.
    ///
    /// `--marked` wins if both are set.
    #[must_use]
    pub const fn from_flags(marked: bool, unmarked: bool) -> Self {
        if marked {
            Self::Marked
        } else if unmarked {
            Self::Unmarked
        } else {
            Self::All
        }
    }

    #[must_use]
    pub const fn matches(self, idea: &Idea) -> bool {
        match self {
            Self::All => true,
            Self::Marked => idea.marked,
            Self::Unmarked => !idea.marked,
        }
    }

    /// Pure in-memory filter; storage is untouched.
    #[must_use]
    pub fn apply<'a>(self, ideas: &'a [Idea]) -> Vec<&'a Idea> {
        ideas.iter().filter(|idea| self.matches(idea)).collect()
    }
}
