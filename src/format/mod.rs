//! Output formatting for idb.
//!
//! Supports both human-readable text output and machine-parseable JSON
//! (`--json`). Diagnostics always go to stderr.

mod output;
mod text;

pub use output::{HashEntry, InitReport, MutationSummary};
pub use text::{ACCENT, ColorSupport, format_hash_line, format_idea_name};
