//! Terminal presentation of ideas.
//!
//! Presenters only render; they never touch the store.

mod viewer;

use std::io::{self, IsTerminal, Write};

use idb_lib::Idea;

use crate::format::{ColorSupport, format_hash_line, format_idea_name};

/// What the idea viewer shows for one idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdeaView<'a> {
    pub idea: &'a str,
    pub description: &'a str,
    pub marked: bool,
}

impl<'a> From<&'a Idea> for IdeaView<'a> {
    fn from(idea: &'a Idea) -> Self {
        Self {
            idea: &idea.title,
            description: &idea.description,
            marked: idea.marked,
        }
    }
}

/// What the hash listing shows for one idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashLine<'a> {
    pub hash: &'a str,
    pub idea: &'a str,
    pub marked: bool,
}

impl<'a> From<&'a Idea> for HashLine<'a> {
    fn from(idea: &'a Idea) -> Self {
        Self {
            hash: &idea.hash,
            idea: &idea.title,
            marked: idea.marked,
        }
    }
}

/// Renders idea listings.
pub trait Presenter {
    /// Show ideas with their descriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render(&mut self, ideas: &[IdeaView<'_>]) -> io::Result<()>;

    /// Show one `{short-hash}  {idea}` line per idea.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render_hash_list(&mut self, items: &[HashLine<'_>]) -> io::Result<()>;
}

/// Line-oriented presenter writing to any stream.
pub struct PlainPresenter<W: Write> {
    out: W,
    color: ColorSupport,
}

impl<W: Write> PlainPresenter<W> {
    pub const fn new(out: W, color: ColorSupport) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for PlainPresenter<W> {
    fn render(&mut self, ideas: &[IdeaView<'_>]) -> io::Result<()> {
        for (i, view) in ideas.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            writeln!(self.out, "{}", format_idea_name(view.idea, view.marked))?;
            if !view.description.is_empty() {
                writeln!(self.out, "    {}", view.description)?;
            }
        }
        self.out.flush()
    }

    fn render_hash_list(&mut self, items: &[HashLine<'_>]) -> io::Result<()> {
        for item in items {
            writeln!(
                self.out,
                "{}",
                format_hash_line(item.hash, item.idea, item.marked, self.color)
            )?;
        }
        self.out.flush()
    }
}

/// Presenter for the real terminal.
///
/// `render` opens the interactive viewer when stdout is a terminal and falls
/// back to plain output otherwise.
pub struct TerminalPresenter {
    color: ColorSupport,
    interactive: bool,
}

impl TerminalPresenter {
    #[must_use]
    pub fn detect() -> Self {
        Self {
            color: ColorSupport::detect(),
            interactive: io::stdout().is_terminal() && io::stdin().is_terminal(),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, ideas: &[IdeaView<'_>]) -> io::Result<()> {
        if self.interactive {
            viewer::run(ideas)
        } else {
            PlainPresenter::new(io::stdout().lock(), self.color).render(ideas)
        }
    }

    fn render_hash_list(&mut self, items: &[HashLine<'_>]) -> io::Result<()> {
        PlainPresenter::new(io::stdout().lock(), self.color).render_hash_list(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(ideas: &[Idea], hashes: bool) -> String {
        let mut presenter = PlainPresenter::new(Vec::new(), ColorSupport::Plain);
        if hashes {
            let lines: Vec<HashLine<'_>> = ideas.iter().map(HashLine::from).collect();
            presenter.render_hash_list(&lines).unwrap();
        } else {
            let views: Vec<IdeaView<'_>> = ideas.iter().map(IdeaView::from).collect();
            presenter.render(&views).unwrap();
        }
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_render() {
        let mut done = Idea::new("Build a better lamp", "uses LEDs");
        done.marked = true;
        let ideas = vec![done, Idea::new("Write a novel", "")];

        assert_eq!(
            render_to_string(&ideas, false),
            "✅ Build a better lamp\n    uses LEDs\n\nWrite a novel\n"
        );
    }

    #[test]
    fn test_plain_hash_list() {
        let ideas = vec![Idea::new("Build a better lamp", "uses LEDs")];
        assert_eq!(
            render_to_string(&ideas, true),
            "54caac1  Build a better lamp\n"
        );
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render_to_string(&[], true), "");
        assert_eq!(render_to_string(&[], false), "");
    }
}
