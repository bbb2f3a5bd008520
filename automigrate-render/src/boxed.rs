//! Bordered terminal box with a rounded border and an embedded title.

use crate::style::{Style, Styler};

/// Appearance of a rendered box.
#[derive(Debug, Clone)]
pub struct BoxOptions {
    /// Title embedded in the top border.
    pub title: Option<String>,
    /// Style applied to every border character.
    pub border: Style,
    /// Blank lines above/below the content and spaces on each side.
    pub padding: usize,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            title: None,
            border: Style::Green,
            padding: 1,
        }
    }
}

/// Display width of a line, ignoring ANSI escape sequences.
///
/// Styled content must not widen the box, so escape sequences (ESC `[` ...
/// final letter) count as zero columns.
pub fn display_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Wrap `content` in a rounded-border box.
pub fn boxed<S: Styler>(content: &str, options: &BoxOptions, styler: &S) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let content_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);

    // Inner width must fit the widest content line plus horizontal padding,
    // and the title with its surrounding dashes and spaces.
    let title_span = options
        .title
        .as_deref()
        .map(|t| display_width(t) + 4)
        .unwrap_or(0);
    let inner = (content_width + 2 * options.padding).max(title_span);

    let vertical = styler.paint(options.border, "│");
    let mut out = String::new();

    match options.title.as_deref() {
        Some(title) => {
            let fill = inner.saturating_sub(display_width(title) + 3);
            out.push_str(&styler.paint(
                options.border,
                &format!("╭─ {} {}╮", title, "─".repeat(fill)),
            ));
        }
        None => {
            out.push_str(&styler.paint(options.border, &format!("╭{}╮", "─".repeat(inner))));
        }
    }
    out.push('\n');

    let blank = format!("{}{}{}", vertical, " ".repeat(inner), vertical);
    for _ in 0..options.padding {
        out.push_str(&blank);
        out.push('\n');
    }

    for line in &lines {
        let fill = inner.saturating_sub(options.padding + display_width(line));
        out.push_str(&format!(
            "{}{}{}{}{}",
            vertical,
            " ".repeat(options.padding),
            line,
            " ".repeat(fill),
            vertical
        ));
        out.push('\n');
    }

    for _ in 0..options.padding {
        out.push_str(&blank);
        out.push('\n');
    }

    out.push_str(&styler.paint(options.border, &format!("╰{}╯", "─".repeat(inner))));
    out
}
