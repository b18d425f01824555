//! Submission banner component.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

/// Renders each banner line starting at `row` with the success colors.
pub fn render_banner(
    out: &mut String,
    row: usize,
    banner: &BannerInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current = row;
    for line in &banner.lines {
        position_cursor(out, current, 1);
        out.push_str(&Theme::fg(&theme.colors.success_fg));
        if let Some(bg) = &theme.colors.success_bg {
            out.push_str(&Theme::bg(bg));
        }
        out.push_str(&fit(&format!(" {line}"), cols));
        out.push_str(Theme::reset());
        current += 1;
    }
    current
}
