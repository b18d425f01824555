//! Preview body: the interactive form.
//!
//! ```text
//!  Signup
//!  Create your account
//!  ▶ Username *  [ ada_______________ ]
//!    Email    *  [ you@example.com    ]  ! Email is required
//!
//!    [ Submit ]
//! ```

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldRow, PreviewBody};

const LABEL_WIDTH: usize = 22;
const INPUT_WIDTH: usize = 28;

/// Renders the form between `top` and `bottom` (inclusive).
pub fn render_preview(
    out: &mut String,
    top: usize,
    bottom: usize,
    body: &PreviewBody,
    theme: &Theme,
    cols: usize,
) {
    let mut row = top;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.label_fg));
    out.push_str(&fit(&format!(" {}", body.title), cols));
    out.push_str(Theme::reset());
    row += 1;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let subtitle = match (body.hidden_above, &body.description) {
        (0, Some(description)) => format!(" {description}"),
        (0, None) => String::new(),
        (hidden, _) => format!(" ↑ {hidden} more"),
    };
    out.push_str(&fit(&subtitle, cols));
    out.push_str(Theme::reset());
    row += 1;

    for field in &body.fields {
        if row > bottom {
            return;
        }
        position_cursor(out, row, 1);
        render_field(out, field, theme, cols);
        row += 1;
    }

    if row <= bottom {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        let more = if body.hidden_below > 0 {
            format!("   ↓ {} more", body.hidden_below)
        } else {
            String::new()
        };
        out.push_str(&fit(&more, cols));
        out.push_str(Theme::reset());
        row += 1;
    }

    if row <= bottom {
        position_cursor(out, row, 1);
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.accent_fg));
        out.push_str(&Theme::bg(&theme.colors.accent_bg));
        let button = format!(" [ {} ] ", body.submit_label);
        out.push_str(&button);
        out.push_str(Theme::reset());
        out.push_str(&" ".repeat(cols.saturating_sub(button.chars().count())));
    }
}

fn render_field(out: &mut String, field: &FieldRow, theme: &Theme, cols: usize) {
    let marker = if field.is_focused { " ▶ " } else { "   " };
    let required = if field.is_required { " *" } else { "" };
    let label = fit(&format!("{}{required}", field.label), LABEL_WIDTH);

    out.push_str(&Theme::fg(&theme.colors.label_fg));
    out.push_str(marker);
    out.push_str(&label);
    out.push_str(Theme::reset());

    let (text, is_placeholder) = match (&field.placeholder, field.value.is_empty()) {
        (Some(placeholder), true) => (placeholder.as_str(), true),
        _ => (field.value.as_str(), false),
    };

    if field.is_focused {
        out.push_str(&Theme::fg(&theme.colors.focus_fg));
        out.push_str(&Theme::bg(&theme.colors.focus_bg));
    } else if is_placeholder {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&format!("[ {} ]", fit(text, INPUT_WIDTH)));
    out.push_str(Theme::reset());

    let used = marker.chars().count() + LABEL_WIDTH + INPUT_WIDTH + 4;
    let rest = cols.saturating_sub(used);
    match &field.error {
        Some(error) => {
            out.push_str(&Theme::fg(&theme.colors.error_fg));
            out.push_str(&fit(&format!("  ! {error}"), rest));
            out.push_str(Theme::reset());
        }
        None => out.push_str(&" ".repeat(rest)),
    }
}
