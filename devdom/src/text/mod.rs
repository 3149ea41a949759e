//! Plain-text rendering of an element tree.
//!
//! Columns stack their children vertically, rows place them side by side
//! padded to each child's widest line. `gap` is blank lines for columns and
//! spaces for rows. Trailing whitespace is trimmed from every line.

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::Direction;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pad `s` with spaces up to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    let mut out = s.to_string();
    if current < width {
        out.push_str(&" ".repeat(width - current));
    }
    out
}

/// Render an element tree into lines of text.
pub fn render_lines(element: &Element) -> Vec<String> {
    let lines = match &element.content {
        Content::None => Vec::new(),
        Content::Text(text) if text.is_empty() => vec![String::new()],
        Content::Text(text) => text.lines().map(str::to_string).collect(),
        Content::Children(children) => match element.direction {
            Direction::Column => stack(children, element.gap),
            Direction::Row => side_by_side(children, element.gap),
        },
    };

    lines
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Render an element tree into a single newline-joined string.
pub fn render_text(element: &Element) -> String {
    render_lines(element).join("\n")
}

fn stack(children: &[Element], gap: u16) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            lines.extend(std::iter::repeat_n(String::new(), gap as usize));
        }
        lines.extend(render_lines(child));
    }
    lines
}

fn side_by_side(children: &[Element], gap: u16) -> Vec<String> {
    let blocks: Vec<Vec<String>> = children.iter().map(render_lines).collect();
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| block.iter().map(|l| display_width(l)).max().unwrap_or(0))
        .collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let spacer = " ".repeat(gap as usize);

    (0..height)
        .map(|row| {
            blocks
                .iter()
                .zip(&widths)
                .map(|(block, &width)| {
                    pad_to_width(block.get(row).map(String::as_str).unwrap_or(""), width)
                })
                .collect::<Vec<_>>()
                .join(&spacer)
        })
        .collect()
}
