//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Region renderers (header, navbar, bodies, banner, footer)
//! - [`helpers`]: Cursor positioning and text fitting
//! - [`theme`]: Palettes and ANSI color sequences
//!
//! # Example
//!
//! ```rust
//! use formshell::app::{AppState, Shell};
//! use formshell::ui::{render, ThemeSet};
//!
//! let state = AppState::new(Shell::new(), ThemeSet::default(), None);
//! render(&state, 24, 80);
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{
    BannerInfo, Body, BuilderBody, EmptyState, FieldRow, FooterInfo, HeaderInfo, PreviewBody,
    TabInfo, ThemeChip, UIViewModel,
};
