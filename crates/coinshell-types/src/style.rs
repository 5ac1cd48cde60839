//! Message styles and the painters that render them.
//!
//! The terminal core never writes escape codes itself. It tags each piece
//! of text with a [`Style`] and hands it to whatever [`Painter`] the caller
//! injected, so tests can use [`PlainPainter`] and see bare text.

use colored::Colorize;

/// Semantic class of a piece of console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Neutral detail: indices, counts, names inside a message.
    Information,
    /// Positive result or a highlighted value.
    Success,
    /// Something the user should notice.
    Warning,
    /// A command the user could type next.
    Suggestion,
}

/// Renders styled text for the output channel.
pub trait Painter {
    /// Return `text` decorated for `style`.
    fn paint(&self, style: Style, text: &str) -> String;
}

/// Painter that returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }
}

/// Painter that emits ANSI colours.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, style: Style, text: &str) -> String {
        let painted = match style {
            Style::Information => text.yellow(),
            Style::Success => text.green(),
            Style::Warning => text.red(),
            Style::Suggestion => text.bright_blue(),
        };
        painted.to_string()
    }
}

/// Pick a painter for the given colour setting.
pub fn painter_for(color: bool) -> Box<dyn Painter> {
    if color {
        Box::new(AnsiPainter)
    } else {
        Box::new(PlainPainter)
    }
}
