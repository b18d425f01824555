//! Shared rendering utilities.
//!
//! Components write ANSI output into a frame `String` instead of printing
//! directly, so a whole frame can be inspected in tests and emitted with a
//! single `print!`.
//!
//! # Example
//!
//! ```rust
//! use formshell::ui::helpers::{fit, position_cursor};
//!
//! let mut frame = String::new();
//! position_cursor(&mut frame, 5, 1);
//! frame.push_str(&fit("Content at row 5", 10));
//! assert!(frame.ends_with("Content a…"));
//! ```

use std::fmt::Write;

/// Appends the cursor positioning sequence for a 1-indexed `row`/`col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies, counting one per char.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `width` cells, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Truncates or right-pads `text` to exactly `width` cells.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut fitted = truncate(text, width);
    let used = display_width(&fitted);
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

/// Centers `text` in `width` cells; the left side gets the smaller half.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let padding = width.saturating_sub(display_width(&text)) / 2;
    fit(&format!("{}{text}", " ".repeat(padding)), width)
}
