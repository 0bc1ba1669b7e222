//! File-backed idea store.
//!
//! Every operation loads the whole array, computes the new array in memory
//! and writes it back. Nothing is cached between calls, so two processes
//! writing at once race and the last rename wins.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{IdbError, Result};
use crate::file;
use crate::id::{Reference, resolve};
use crate::model::Idea;
use crate::query::{IdeaUpdate, ListFilter};

/// Name of the store file inside the store directory.
pub const STORE_FILE_NAME: &str = "ideas.json";

/// Idea store rooted at a directory.
#[derive(Debug, Clone)]
pub struct IdeaStore {
    dir: PathBuf,
    path: PathBuf,
}

impl IdeaStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a handle for the store in `dir`. Nothing is touched on disk.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(STORE_FILE_NAME);
        Self { dir, path }
    }

    /// Store directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reset the store to an empty array.
    ///
    /// Creates the directory first. A failure there is logged and the file
    /// write is attempted anyway. Any existing ideas are discarded.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the store file cannot be written.
    pub fn initialize(&self) -> Result<()> {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "Could not create store directory");
        }

        file::save(&self.path, &[])?;
        info!(path = %self.path.display(), "Initialized idea store");
        Ok(())
    }

    /// Load every idea in store order.
    ///
    /// # Errors
    ///
    /// Returns `StoreMissing` or `StoreCorrupt`.
    pub fn load_all(&self) -> Result<Vec<Idea>> {
        if !self.dir.is_dir() {
            return Err(IdbError::StoreMissing {
                path: self.path.clone(),
            });
        }
        file::load(&self.path)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Load ideas and keep those matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStore` if the store holds no ideas at all, before the
    /// filter is applied. A filter that matches nothing is not an error.
    pub fn list(&self, filter: ListFilter) -> Result<Vec<Idea>> {
        let ideas = self.load_all()?;
        if ideas.is_empty() {
            return Err(IdbError::EmptyStore);
        }
        Ok(filter.apply(&ideas).into_iter().cloned().collect())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new idea.
    ///
    /// # Errors
    ///
    /// Returns `TitleRequired` if the title is blank, or a load/save error.
    pub fn add(&self, title: &str, description: Option<&str>) -> Result<Idea> {
        if title.trim().is_empty() {
            return Err(IdbError::TitleRequired);
        }

        let mut ideas = self.load_all()?;
        let idea = Idea::new(title, description.map(str::trim).unwrap_or_default());

        if ideas.iter().any(|i| i.hash == idea.hash) {
            warn!(hash = %idea.hash, "An idea with identical content already exists");
        }

        ideas.push(idea.clone());
        file::save(&self.path, &ideas)?;

        info!(hash = %idea.hash, "Added idea");
        Ok(idea)
    }

    /// Apply `update` to every idea the reference matches.
    ///
    /// Identifiers are not re-derived. Returns the updated ideas.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` before touching the store, or a load/save
    /// error.
    pub fn update(&self, reference: &str, update: &IdeaUpdate) -> Result<Vec<Idea>> {
        self.modify(reference, |idea| update.apply(idea))
    }

    /// Set the `marked` flag on every idea the reference matches.
    ///
    /// # Errors
    ///
    /// Same as [`IdeaStore::update`].
    pub fn set_marked(&self, reference: &str, marked: bool) -> Result<Vec<Idea>> {
        self.modify(reference, |idea| idea.marked = marked)
    }

    /// Drop every idea the reference matches. Returns the removed ideas.
    ///
    /// # Errors
    ///
    /// Same as [`IdeaStore::update`].
    pub fn remove(&self, reference: &str) -> Result<Vec<Idea>> {
        let reference = Reference::parse(reference)?;
        let ideas = self.load_all()?;

        let targets = matched_hashes(&reference, &ideas);
        let (removed, kept): (Vec<Idea>, Vec<Idea>) = ideas
            .into_iter()
            .partition(|idea| targets.contains(&idea.hash));

        if removed.is_empty() {
            info!(reference = %reference, "No ideas matched");
            return Ok(removed);
        }
        Self::warn_if_ambiguous(&reference, &removed);

        file::save(&self.path, &kept)?;
        info!(reference = %reference, count = removed.len(), "Removed ideas");
        Ok(removed)
    }

    fn modify<F>(&self, reference: &str, mut change: F) -> Result<Vec<Idea>>
    where
        F: FnMut(&mut Idea),
    {
        let reference = Reference::parse(reference)?;
        let mut ideas = self.load_all()?;

        let targets = matched_hashes(&reference, &ideas);
        let mut changed = Vec::new();
        for idea in ideas.iter_mut().filter(|i| targets.contains(&i.hash)) {
            change(idea);
            changed.push(idea.clone());
        }

        if changed.is_empty() {
            info!(reference = %reference, "No ideas matched");
            return Ok(changed);
        }
        Self::warn_if_ambiguous(&reference, &changed);

        file::save(&self.path, &ideas)?;
        info!(reference = %reference, count = changed.len(), "Updated ideas");
        Ok(changed)
    }

    fn warn_if_ambiguous(reference: &Reference, matched: &[Idea]) {
        if matched.len() > 1 {
            let hashes: Vec<&str> = matched.iter().map(|i| i.hash.as_str()).collect();
            warn!(
                reference = %reference,
                count = matched.len(),
                ?hashes,
                "Short hash matched several ideas; applying to all of them"
            );
        }
    }
}

/// Identifiers of every idea the reference resolves to.
fn matched_hashes(reference: &Reference, ideas: &[Idea]) -> HashSet<String> {
    resolve(reference, ideas)
        .into_iter()
        .map(|idea| idea.hash.clone())
        .collect()
}
