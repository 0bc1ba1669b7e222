//! Remove (rm/delete) command implementation.

use idb_lib::id::FULL_LEN;
use idb_lib::{Idea, IdeaStore, Result};

use super::report_mutation;
use crate::cli::HashArgs;

/// Execute the rm command.
///
/// # Errors
///
/// Returns `InvalidReference` for a malformed hash, or a store error.
pub fn execute(args: &HashArgs, store: &IdeaStore, json: bool) -> Result<()> {
    let removed = store.remove(&args.hash)?;
    report_mutation("rm", &args.hash, &removed, json, |idea| {
        removed_line(idea, &args.hash)
    })
}

/// Confirmation line, echoing the hash in the form the user typed it.
fn removed_line(idea: &Idea, reference: &str) -> String {
    let shown = if reference.trim().len() == FULL_LEN {
        idea.hash.as_str()
    } else {
        idea.short_hash()
    };
    format!("Removed idea hashed {shown}")
}
