//! List command implementation.
//!
//! `--hash` prints `{short-hash}  {idea}` lines; otherwise ideas go to the
//! viewer. `--json` bypasses the presenter.

use idb_lib::{IdeaStore, ListFilter, Result};

use crate::cli::ListArgs;
use crate::format::HashEntry;
use crate::presenter::{HashLine, IdeaView, Presenter};

/// Execute the list command.
///
/// # Errors
///
/// Returns `EmptyStore` if there are no ideas at all, a store error, or an
/// I/O error from the presenter.
pub fn execute(
    args: &ListArgs,
    store: &IdeaStore,
    json: bool,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let filter = ListFilter::from_flags(args.marked, args.unmarked);
    let ideas = store.list(filter)?;
    tracing::debug!(?filter, count = ideas.len(), "Listing ideas");

    if json {
        let output = if args.hash {
            let entries: Vec<HashEntry<'_>> = ideas.iter().map(HashEntry::from).collect();
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string_pretty(&ideas)?
        };
        println!("{output}");
        return Ok(());
    }

    if args.hash {
        let lines: Vec<HashLine<'_>> = ideas.iter().map(HashLine::from).collect();
        presenter.render_hash_list(&lines)?;
    } else {
        let views: Vec<IdeaView<'_>> = ideas.iter().map(IdeaView::from).collect();
        presenter.render(&views)?;
    }
    Ok(())
}
