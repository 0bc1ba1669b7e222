//! Text formatting functions for idb.
//!
//! Hash lines are `{short-hash}  {idea}`. Colour depends on the terminal:
//! - marked ideas: green hash and title
//! - unmarked on truecolor terminals: orange (#f67400) hash
//! - unmarked elsewhere: yellow hash
//! - not a terminal: no escape codes at all

use std::io::IsTerminal;

use crossterm::style::{Color, Stylize, style};
use idb_lib::id::short_hash;

/// Accent colour for unmarked hashes on truecolor terminals.
pub const ACCENT: Color = Color::Rgb {
    r: 246,
    g: 116,
    b: 0,
};

/// Prefix shown before marked ideas.
pub const MARKED_ICON: &str = "✅ ";

/// What the output stream can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Plain,
    Basic,
    TrueColor,
}

impl ColorSupport {
    /// Detect support for stdout.
    #[must_use]
    pub fn detect() -> Self {
        let colorterm = std::env::var("COLORTERM").ok();
        Self::from_env(std::io::stdout().is_terminal(), colorterm.as_deref())
    }

    #[must_use]
    pub fn from_env(is_terminal: bool, colorterm: Option<&str>) -> Self {
        if !is_terminal {
            return Self::Plain;
        }
        let truecolor = colorterm.is_some_and(|v| {
            let v = v.to_ascii_lowercase();
            v.contains("truecolor") || v.contains("24bit")
        });
        if truecolor {
            Self::TrueColor
        } else {
            Self::Basic
        }
    }

    const fn unmarked_color(self) -> Option<Color> {
        match self {
            Self::Plain => None,
            Self::Basic => Some(Color::Yellow),
            Self::TrueColor => Some(ACCENT),
        }
    }
}

/// Short hash, coloured by marked state.
#[must_use]
pub fn format_hash(hash: &str, marked: bool, color: ColorSupport) -> String {
    let short = short_hash(hash);
    if color == ColorSupport::Plain {
        return short.to_string();
    }
    if marked {
        return style(short).with(Color::Green).to_string();
    }
    color
        .unmarked_color()
        .map_or_else(|| short.to_string(), |c| style(short).with(c).to_string())
}

/// One `{short-hash}  {idea}` line (no trailing newline).
#[must_use]
pub fn format_hash_line(hash: &str, idea: &str, marked: bool, color: ColorSupport) -> String {
    let title = if marked && color != ColorSupport::Plain {
        style(idea).with(Color::Green).to_string()
    } else {
        idea.to_string()
    };
    format!("{}  {title}", format_hash(hash, marked, color))
}

/// Display name of an idea in the viewer.
#[must_use]
pub fn format_idea_name(idea: &str, marked: bool) -> String {
    if marked {
        format!("{MARKED_ICON}{idea}")
    } else {
        idea.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "54caac13addf3a939d2cc3025c798a46a38a81bb042d0f8c7a97ed06b76191d5";

    #[test]
    fn test_detect_from_env() {
        assert_eq!(
            ColorSupport::from_env(false, Some("truecolor")),
            ColorSupport::Plain
        );
        assert_eq!(ColorSupport::from_env(true, None), ColorSupport::Basic);
        assert_eq!(
            ColorSupport::from_env(true, Some("xterm")),
            ColorSupport::Basic
        );
        assert_eq!(
            ColorSupport::from_env(true, Some("TrueColor")),
            ColorSupport::TrueColor
        );
        assert_eq!(
            ColorSupport::from_env(true, Some("24bit")),
            ColorSupport::TrueColor
        );
    }

    #[test]
    fn test_plain_hash_line() {
        assert_eq!(
            format_hash_line(HASH, "Build a better lamp", false, ColorSupport::Plain),
            "54caac1  Build a better lamp"
        );
        assert_eq!(
            format_hash_line(HASH, "Build a better lamp", true, ColorSupport::Plain),
            "54caac1  Build a better lamp"
        );
    }

    #[test]
    fn test_colored_hash_line_keeps_content() {
        for color in [ColorSupport::Basic, ColorSupport::TrueColor] {
            for marked in [true, false] {
                let line = format_hash_line(HASH, "lamp", marked, color);
                assert!(line.contains("54caac1"));
                assert!(line.contains("lamp"));
                assert!(!line.contains(HASH));
            }
        }
    }

    #[test]
    fn test_format_idea_name() {
        assert_eq!(format_idea_name("lamp", false), "lamp");
        assert_eq!(format_idea_name("lamp", true), "✅ lamp");
    }
}
