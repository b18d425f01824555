//! Navigation bar: view tabs on the left, theme picker on the right.
//!
//! ```text
//!  Builder  Preview                 1 Minimal  2 Modern  3 Classic
//! ```
//!
//! The active tab and active theme are drawn with the accent colors.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TabInfo, ThemeChip};

pub fn render_navbar(
    out: &mut String,
    row: usize,
    tabs: &[TabInfo],
    themes: &[ThemeChip],
    theme: &Theme,
    cols: usize,
) -> usize {
    let tab_cells: Vec<(String, bool)> = tabs
        .iter()
        .map(|tab| (format!(" {} ", tab.label), tab.is_active))
        .collect();
    let chip_cells: Vec<(String, bool)> = themes
        .iter()
        .map(|chip| (format!(" {} {} ", chip.hotkey, chip.name), chip.is_active))
        .collect();

    let used: usize = tab_cells
        .iter()
        .chain(chip_cells.iter())
        .map(|(text, _)| display_width(text))
        .sum();
    let gap = cols.saturating_sub(used);

    position_cursor(out, row, 1);
    let mut remaining = cols;
    for (text, active) in &tab_cells {
        remaining = push_cell(out, text, *active, theme, remaining);
    }
    let spacer = " ".repeat(gap.min(remaining));
    remaining -= display_width(&spacer);
    out.push_str(&spacer);
    for (text, active) in &chip_cells {
        remaining = push_cell(out, text, *active, theme, remaining);
    }
    out.push_str(&" ".repeat(remaining));
    row + 1
}

/// Writes one cell clipped to `remaining` columns and returns what is left.
fn push_cell(out: &mut String, text: &str, active: bool, theme: &Theme, remaining: usize) -> usize {
    let text = truncate(text, remaining);
    if active {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.accent_fg));
        out.push_str(&Theme::bg(&theme.colors.accent_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&text);
    out.push_str(Theme::reset());
    remaining - display_width(&text)
}
