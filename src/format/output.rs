use idb_lib::Idea;
use serde::Serialize;

/// Result of a mutating command (edit/mark/unmark/rm) for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct MutationSummary<'a> {
    pub action: &'a str,
    pub reference: &'a str,
    pub count: usize,
    pub ideas: &'a [Idea],
}

/// Hash listing entry for `list --hash --json`.
#[derive(Debug, Clone, Serialize)]
pub struct HashEntry<'a> {
    pub hash: &'a str,
    pub short_hash: &'a str,
    pub idea: &'a str,
    pub marked: bool,
}

impl<'a> From<&'a Idea> for HashEntry<'a> {
    fn from(idea: &'a Idea) -> Self {
        Self {
            hash: &idea.hash,
            short_hash: idea.short_hash(),
            idea: &idea.title,
            marked: idea.marked,
        }
    }
}

/// Store location report for `init --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport<'a> {
    pub path: &'a str,
    pub initialized: bool,
}
