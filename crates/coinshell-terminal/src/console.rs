//! The user-facing text channel.

use std::io::Write;

use coinshell_types::error::Result;
use coinshell_types::style::{Painter, Style};

/// Default column width of command names in listings.
const DEFAULT_NAME_PADDING: usize = 25;

/// Output channel shared by the dispatcher, the listing and the handlers.
///
/// Wraps a single writer and an injected [`Painter`], so the same code
/// produces coloured text on a terminal and bare text under test.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    painter: &'a dyn Painter,
    name_padding: usize,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, painter: &'a dyn Painter) -> Self {
        Self {
            out,
            painter,
            name_padding: DEFAULT_NAME_PADDING,
        }
    }

    /// Override the listing column width.
    pub fn with_name_padding(mut self, name_padding: usize) -> Self {
        self.name_padding = name_padding;
        self
    }

    pub fn name_padding(&self) -> usize {
        self.name_padding
    }

    /// Render `text` in `style` without writing it.
    pub fn paint(&self, style: Style, text: &str) -> String {
        self.painter.paint(style, text)
    }

    /// Write a line of already-rendered text.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Write a line painted entirely in one style.
    pub fn styled_line(&mut self, style: Style, text: &str) -> Result<()> {
        let painted = self.paint(style, text);
        self.line(&painted)
    }

    /// Write text without a newline and flush (used for the prompt).
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinshell_types::style::PlainPainter;

    #[test]
    fn line_appends_newline() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, &PlainPainter);
        console.line("hello").unwrap();
        console.styled_line(Style::Success, "world").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn prompt_has_no_newline() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, &PlainPainter);
        console.prompt("> ").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "> ");
    }

    #[test]
    fn padding_defaults_and_overrides() {
        let mut buf = Vec::new();
        let console = Console::new(&mut buf, &PlainPainter);
        assert_eq!(console.name_padding(), 25);
        let console = console.with_name_padding(12);
        assert_eq!(console.name_padding(), 12);
    }
}
