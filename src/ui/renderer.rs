//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: compute the [`UIViewModel`] from
//! [`AppState`], then let the components write the frame. [`render_to_string`]
//! returns the frame for inspection; [`render`] prints it for Zellij.
//!
//! # Example
//!
//! ```rust
//! use formshell::app::{AppState, Shell};
//! use formshell::ui::{render_to_string, ThemeSet};
//!
//! let state = AppState::new(Shell::new(), ThemeSet::default(), None);
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("No form loaded"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of ANSI-positioned lines.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel: UIViewModel = state.compute_viewmodel(rows);
    let mut frame = String::with_capacity(rows * cols * 2);
    components::render_frame(&mut frame, &viewmodel, state.theme(), rows, cols);
    frame
}
