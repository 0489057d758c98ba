//! Consolidated styling for terminal output.
//!
//! Built on the anstyle ecosystem: anstream auto-detects color support
//! (respecting `NO_COLOR` and friends), anstyle provides composable styles.
//! Use the re-exported `println!`/`eprintln!` so every message goes through
//! the auto-detecting streams.

use anstyle::{AnsiColor, Color, Style};

pub use anstream::{eprint, eprintln, print, println};

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Success style (green)
pub const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Warning style (yellow)
pub const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Hint style (dimmed)
pub const HINT: Style = Style::new().dimmed();

/// Branch / ref accent (cyan)
pub const BRANCH: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Current-worktree accent (magenta + bold)
pub const CURRENT: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::Magenta)));

pub fn format_error(msg: &str) -> String {
    format!("{ERROR}✗ {msg}{ERROR:#}")
}

pub fn format_success(msg: &str) -> String {
    format!("{SUCCESS}✓ {msg}{SUCCESS:#}")
}

pub fn format_warning(msg: &str) -> String {
    format!("{WARNING}! {msg}{WARNING:#}")
}

pub fn format_hint(msg: &str) -> String {
    format!("{HINT}{msg}{HINT:#}")
}
