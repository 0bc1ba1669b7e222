//! Command implementations. Each `execute` returns `idb_lib::Result`.

pub mod add;
pub mod edit;
pub mod init;
pub mod list;
pub mod mark;
pub mod remove;

use idb_lib::{Idea, Result};

use crate::format::MutationSummary;

/// Print the outcome of a mutating command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn report_mutation(
    action: &str,
    reference: &str,
    ideas: &[Idea],
    json: bool,
    describe: impl Fn(&Idea) -> String,
) -> Result<()> {
    if json {
        let summary = MutationSummary {
            action,
            reference,
            count: ideas.len(),
            ideas,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if ideas.is_empty() {
        println!("No ideas matched {reference}");
        return Ok(());
    }
    for idea in ideas {
        println!("{}", describe(idea));
    }
    if ideas.len() > 1 {
        eprintln!(
            "Note: '{reference}' matched {} ideas; all of them were affected.",
            ideas.len()
        );
    }
    Ok(())
}
