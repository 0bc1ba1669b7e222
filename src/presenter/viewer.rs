//! Interactive idea viewer.
//!
//! A full-screen selectable list: title on one row, description below it,
//! one blank row between items. Arrow keys or j/k move, q/Esc/Enter quit.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use unicode_width::UnicodeWidthChar;

use super::IdeaView;
use crate::format::{ACCENT, format_idea_name};

const MARGIN: u16 = 3;
const ROWS_PER_ITEM: u16 = 3;
const POINTER: &str = "▶ ";
const HELP: &str = "↑/↓ move  q quit";

/// Cursor and scroll state of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    selected: usize,
    offset: usize,
    len: usize,
}

impl Selection {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub const fn first(&mut self) {
        self.selected = 0;
    }

    pub const fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    /// Adjust the scroll offset so the selected item is one of `visible`.
    pub fn scroll_to_fit(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }

    /// Apply a key press. Returns true when the viewer should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.up();
                false
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.down();
                false
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.first();
                false
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.last();
                false
            }
            _ => false,
        }
    }
}

/// Number of items that fit on a screen of `height` rows.
#[must_use]
pub fn visible_items(height: u16) -> usize {
    // The last item does not need its trailing blank row; one row is the footer.
    let usable = height.saturating_sub(MARGIN * 2 + 1) + 1;
    usize::from((usable / ROWS_PER_ITEM).max(1))
}

/// Truncate `text` so it occupies at most `max_width` terminal columns.
#[must_use]
pub fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Restores the terminal when dropped, even on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the viewer until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured or read.
pub fn run(ideas: &[IdeaView<'_>]) -> io::Result<()> {
    if ideas.is_empty() {
        return Ok(());
    }

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    let mut selection = Selection::new(ideas.len());

    loop {
        let (width, height) = terminal::size()?;
        selection.scroll_to_fit(visible_items(height));
        draw(&mut stdout, ideas, &selection, width, height)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if selection.handle_key(key) {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
}

fn draw(
    out: &mut impl Write,
    ideas: &[IdeaView<'_>],
    selection: &Selection,
    width: u16,
    height: u16,
) -> io::Result<()> {
    let text_width = usize::from(width.saturating_sub(MARGIN * 2));
    queue!(out, Clear(ClearType::All))?;

    let visible = visible_items(height);
    let window = ideas
        .iter()
        .enumerate()
        .skip(selection.offset())
        .take(visible);

    let mut row = MARGIN;
    for (index, view) in window {
        let is_selected = index == selection.selected();
        let pointer = if is_selected { POINTER } else { "  " };
        let name = format!("{pointer}{}", format_idea_name(view.idea, view.marked));

        queue!(out, MoveTo(MARGIN, row))?;
        if is_selected {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(ACCENT)
            )?;
        }
        queue!(
            out,
            Print(clip_to_width(&name, text_width)),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;

        if !view.description.is_empty() {
            queue!(
                out,
                MoveTo(MARGIN + 2, row + 1),
                SetForegroundColor(Color::DarkGrey),
                Print(clip_to_width(view.description, text_width.saturating_sub(2))),
                ResetColor
            )?;
        }
        row += ROWS_PER_ITEM;
    }

    queue!(
        out,
        MoveTo(MARGIN, height.saturating_sub(1)),
        SetForegroundColor(Color::DarkGrey),
        Print(format!(
            "{}/{}  {HELP}",
            selection.selected() + 1,
            ideas.len()
        )),
        ResetColor
    )?;
    out.flush()
}
