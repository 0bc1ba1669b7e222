//! Edit command implementation.
//!
//! The hash of an edited idea does not change.

use idb_lib::{IdbError, IdeaStore, IdeaUpdate, Result};

use super::report_mutation;
use crate::cli::EditArgs;

/// Execute the edit command.
///
/// # Errors
///
/// Returns `NothingToDo` when neither a title nor a description is given,
/// `InvalidReference` for a malformed hash, or a store error.
pub fn execute(args: &EditArgs, store: &IdeaStore, json: bool) -> Result<()> {
    let update = IdeaUpdate::new(args.title.as_deref(), args.description.as_deref());
    if update.is_empty() {
        return Err(IdbError::nothing_to_do(
            "pass a non-empty --title and/or --description",
        ));
    }

    let updated = store.update(&args.hash, &update)?;
    report_mutation("edit", &args.hash, &updated, json, |idea| {
        format!("Updated {}: {}", idea.short_hash(), idea.title)
    })
}
