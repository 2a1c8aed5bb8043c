// src/core/console.rs

use colored::{ColoredString, Colorize};
use std::fmt::Display;

/// The kind of an operator-facing line. Each kind has its own symbol and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Neutral notice, such as the resolved project path.
    Info,
    /// Something looks off but the run continues.
    Warn,
    /// A command or the whole run finished.
    Success,
    /// A command is about to start.
    Step,
    /// A command or the run failed.
    Error,
}

impl LineKind {
    /// The prefix printed before the message.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warn => "⚠",
            Self::Success => "✅",
            Self::Step => "▶",
            Self::Error => "❌",
        }
    }

    fn styled_symbol(self) -> ColoredString {
        let symbol = self.symbol();
        match self {
            Self::Info => symbol.cyan(),
            Self::Warn => symbol.yellow(),
            Self::Success => symbol.green(),
            Self::Step => symbol.bold(),
            Self::Error => symbol.red(),
        }
    }
}

/// Turns ANSI decoration on or off for the whole process.
///
/// Without an explicit override `colored` follows the terminal and `NO_COLOR`.
pub fn set_colors(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Whether console lines are currently decorated.
pub fn colors_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

fn render(kind: LineKind, msg: impl Display) -> String {
    format!("{} {}", kind.styled_symbol(), msg)
}

/// Prints an informational line.
pub fn info(msg: impl Display) {
    println!("{}", render(LineKind::Info, msg));
}

/// Prints a warning line.
pub fn warn(msg: impl Display) {
    println!("{}", render(LineKind::Warn, msg));
}

/// Prints a success line.
pub fn success(msg: impl Display) {
    println!("{}", render(LineKind::Success, msg));
}

/// Prints the line announcing a command.
pub fn step(msg: impl Display) {
    println!("{}", render(LineKind::Step, msg));
}

/// Prints an error line. Does not exit.
pub fn error(msg: impl Display) {
    println!("{}", render(LineKind::Error, msg));
}
