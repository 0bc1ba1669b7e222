//! Init command implementation.

use idb_lib::{IdeaStore, Result};

use crate::format::InitReport;

/// Execute the init command.
///
/// Existing ideas are discarded.
///
/// # Errors
///
/// Returns an error if the store file cannot be written.
pub fn execute(store: &IdeaStore, json: bool) -> Result<()> {
    store.initialize()?;

    if json {
        let path = store.path().display().to_string();
        let report = InitReport {
            path: &path,
            initialized: true,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Initialized idea store in {}", store.dir().display());
    }
    Ok(())
}
