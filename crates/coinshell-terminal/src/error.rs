//! Failure reasons reported at the dispatch boundary.

use coinshell_types::error::Result;
use coinshell_types::style::Style;

use crate::console::Console;

/// Why an input line did not reach a handler.
///
/// None of these end the session. The dispatcher reports them on the
/// console and keeps running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Blank input. Reported silently.
    #[error("empty input")]
    EmptyInput,

    /// Numeric input outside `1..=available`.
    #[error("expected a command name, or number from 1 to {available}")]
    NumericOutOfRange { available: usize },

    /// No command has this exact name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Known command that a view-only wallet cannot run.
    #[error("{0} is not available in a view only wallet")]
    ForbiddenInViewOnlyMode(String),

    /// Registered command with no handler behind it.
    #[error("command was defined but not hooked up: {0}")]
    HandlerNotWired(String),
}

impl DispatchError {
    /// Write the user-facing diagnostic for this error.
    pub fn report(&self, console: &mut Console<'_>) -> Result<()> {
        match self {
            Self::EmptyInput => Ok(()),
            Self::NumericOutOfRange { available } => {
                let line = format!(
                    "{}{}{}{}",
                    console.paint(
                        Style::Warning,
                        "Bad input: Expected a command name, or number from "
                    ),
                    console.paint(Style::Information, "1"),
                    console.paint(Style::Warning, " to "),
                    console.paint(Style::Information, &available.to_string()),
                );
                console.line(&line)
            },
            Self::UnknownCommand(name) => {
                let line = format!(
                    "Unknown command: {}, use {} command to list all possible commands.",
                    console.paint(Style::Warning, name),
                    console.paint(Style::Suggestion, "help"),
                );
                console.line(&line)
            },
            Self::ForbiddenInViewOnlyMode(_) => console.styled_line(
                Style::Warning,
                "This command is not available in a view only wallet...",
            ),
            Self::HandlerNotWired(name) => {
                let line = format!(
                    "{}{}",
                    console.paint(Style::Warning, "Command was defined but not hooked up: "),
                    console.paint(Style::Information, name),
                );
                console.line(&line)?;
                console.styled_line(Style::Information, "Please report this bug!")
            },
        }
    }
}
