//! Composable UI component renderers.
//!
//! Each component writes one region of the frame and returns the next free
//! row where that is meaningful.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`navbar`]: View tabs and theme picker
//! - [`builder`]: Form definition outline
//! - [`preview`]: Interactive form
//! - [`empty`]: Placeholder before a definition is loaded
//! - [`banner`]: Submission confirmation
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Navbar]
//! [Border]
//! [Body: builder | preview | empty]
//! [Border + Banner lines]   (only while a submission message is showing)
//! [Border]
//! [Footer]
//! ```

mod banner;
mod builder;
mod empty;
mod footer;
mod header;
mod navbar;
mod preview;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use banner::render_banner;
use builder::render_builder;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use navbar::render_navbar;
use preview::render_preview;

/// Renders a horizontal rule at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a complete frame into `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;
    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_navbar(out, current_row, &vm.header.tabs, &vm.themes, theme, cols);
    let body_top = render_border(out, current_row, &theme.colors.border, cols);

    let footer_row = rows;
    let bottom_border = footer_row.saturating_sub(1);
    let banner_rows = vm.banner.as_ref().map_or(0, |b| b.lines.len() + 1);
    let body_bottom = bottom_border.saturating_sub(banner_rows + 1);

    if body_bottom >= body_top {
        match &vm.body {
            Body::Builder(body) => render_builder(out, body_top, body_bottom, body, theme, cols),
            Body::Preview(body) => render_preview(out, body_top, body_bottom, body, theme, cols),
            Body::Empty(empty) => {
                render_empty_state(out, body_top, body_bottom, empty, theme, cols);
            }
        }
    }

    if let Some(banner) = &vm.banner {
        let banner_border = bottom_border.saturating_sub(banner_rows);
        if banner_border > body_top {
            let first_line = render_border(out, banner_border, &theme.colors.border, cols);
            render_banner(out, first_line, banner, theme, cols);
        }
    }

    render_border(out, bottom_border, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
