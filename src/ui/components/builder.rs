//! Builder body: outline of the current form definition.
//!
//! ```text
//!  Signup                                     /home/me/forms/signup.json
//!  ▸ Account (2 fields)
//!      Username   username   text      required
//!      Newsletter newsletter checkbox
//! ```

use crate::app::builder::OutlineRow;
use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BuilderBody;

const LABEL_WIDTH: usize = 24;
const NAME_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 10;

/// Renders the outline between `top` and `bottom` (inclusive).
///
/// Rows that do not fit are summarized on the last line.
pub fn render_builder(
    out: &mut String,
    top: usize,
    bottom: usize,
    body: &BuilderBody,
    theme: &Theme,
    cols: usize,
) {
    let mut row = top;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.label_fg));
    let source = body.source.as_deref().unwrap_or("");
    let title_width = cols.saturating_sub(source.chars().count() + 1);
    out.push_str(&fit(&format!(" {}", body.form_title), title_width));
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&truncate(source, cols.saturating_sub(title_width)));
    out.push(' ');
    out.push_str(Theme::reset());
    row += 1;

    if let Some(notice) = &body.notice {
        if row <= bottom {
            position_cursor(out, row, 1);
            out.push_str(&Theme::fg(&theme.colors.error_fg));
            out.push_str(&fit(&format!(" ! {notice}"), cols));
            out.push_str(Theme::reset());
            row += 1;
        }
    }

    let capacity = (bottom + 1).saturating_sub(row);
    let overflow = body.rows.len() > capacity;
    let shown = if overflow { capacity.saturating_sub(1) } else { body.rows.len() };

    for outline_row in &body.rows[..shown] {
        position_cursor(out, row, 1);
        render_outline_row(out, outline_row, theme, cols);
        row += 1;
    }

    if overflow && capacity > 0 {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&fit(&format!("   … {} more", body.rows.len() - shown), cols));
        out.push_str(Theme::reset());
    }
}

fn render_outline_row(out: &mut String, row: &OutlineRow, theme: &Theme, cols: usize) {
    match row {
        OutlineRow::Section { title, field_count } => {
            let plural = if *field_count == 1 { "" } else { "s" };
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.label_fg));
            out.push_str(&fit(&format!(" ▸ {title} ({field_count} field{plural})"), cols));
        }
        OutlineRow::Field {
            label,
            name,
            field_type,
            required,
            rule_count,
        } => {
            let flags = match (*required, *rule_count) {
                (true, 1) => "required".to_string(),
                (true, n) => format!("required +{} rules", n - 1),
                (false, 0) => String::new(),
                (false, n) => format!("{n} rules"),
            };
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            let line = format!(
                "     {}{}{}{flags}",
                fit(label, LABEL_WIDTH),
                fit(name, NAME_WIDTH),
                fit(field_type, TYPE_WIDTH),
            );
            out.push_str(&fit(&line, cols));
        }
    }
    out.push_str(Theme::reset());
}
