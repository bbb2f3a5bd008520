//! Minimal styled-text seam between formatting logic and the terminal.
//!
//! Formatting code is generic over [`Styler`] so tests can assert on plain
//! content instead of raw escape codes.

use colored::Colorize;

/// The styles the summary renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Dim,
    Green,
    Blue,
    Cyan,
    Yellow,
    Red,
    BrightRed,
}

/// Renders a piece of text in a given style.
pub trait Styler {
    fn paint(&self, style: Style, text: &str) -> String;
}

/// ANSI escape-code styler for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, style: Style, text: &str) -> String {
        match style {
            Style::Bold => text.bold().to_string(),
            Style::Dim => text.dimmed().to_string(),
            Style::Green => text.green().to_string(),
            Style::Blue => text.blue().to_string(),
            Style::Cyan => text.cyan().to_string(),
            Style::Yellow => text.yellow().to_string(),
            Style::Red => text.red().to_string(),
            Style::BrightRed => text.bright_red().to_string(),
        }
    }
}

/// Pass-through styler; output contains no escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }
}
