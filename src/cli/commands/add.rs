//! Add command implementation.

use idb_lib::{IdeaStore, Result};

use crate::cli::AddArgs;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the title is empty or the store cannot be read or
/// written.
pub fn execute(args: &AddArgs, store: &IdeaStore, json: bool) -> Result<()> {
    let idea = store.add(&args.idea, args.description.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&idea)?);
    } else {
        println!("Added {}: {}", idea.short_hash(), idea.title);
    }
    Ok(())
}
