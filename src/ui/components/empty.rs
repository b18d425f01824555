//! Empty state component shown before a form definition is available.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and subtitle centered in the body area.
///
/// `top` and `bottom` bound the body rows (inclusive).
pub fn render_empty_state(
    out: &mut String,
    top: usize,
    bottom: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) {
    let middle = top + bottom.saturating_sub(top) / 2;

    position_cursor(out, middle, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.label_fg));
    out.push_str(&center(&empty.message, cols));
    out.push_str(Theme::reset());

    if middle < bottom {
        position_cursor(out, middle + 1, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&center(&empty.subtitle, cols));
        out.push_str(Theme::reset());
    }
}
