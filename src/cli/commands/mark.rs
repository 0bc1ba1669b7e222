//! Mark/unmark command implementation.

use idb_lib::{IdeaStore, Result};

use super::report_mutation;
use crate::cli::HashArgs;

/// Execute the mark (`marked = true`) or unmark (`marked = false`) command.
///
/// # Errors
///
/// Returns `InvalidReference` for a malformed hash, or a store error.
pub fn execute(args: &HashArgs, store: &IdeaStore, marked: bool, json: bool) -> Result<()> {
    let changed = store.set_marked(&args.hash, marked)?;
    let (action, verb) = if marked {
        ("mark", "Marked")
    } else {
        ("unmark", "Unmarked")
    };
    report_mutation(action, &args.hash, &changed, json, |idea| {
        format!("{verb} {}: {}", idea.short_hash(), idea.title)
    })
}
