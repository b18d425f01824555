//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and carry
//! only display-ready data. Components read them and never reach back into
//! application state.
//!
//! # Example
//!
//! ```rust
//! use formshell::ui::viewmodel::{BannerInfo, FooterInfo};
//!
//! let banner = BannerInfo { lines: vec!["Form submitted successfully!".to_string()] };
//! let footer = FooterInfo { keybindings: "q: quit".to_string() };
//! assert_eq!(banner.lines.len(), 1);
//! assert!(footer.keybindings.starts_with('q'));
//! ```

use crate::app::builder::OutlineRow;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar with view tabs.
    pub header: HeaderInfo,

    /// Theme picker chips in catalog order.
    pub themes: Vec<ThemeChip>,

    /// Main area content for the active view.
    pub body: Body,

    /// Transient submission confirmation, if one is showing.
    pub banner: Option<BannerInfo>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub tabs: Vec<TabInfo>,
}

/// One view tab in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: String,
    pub is_active: bool,
}

/// One entry of the theme picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChip {
    pub hotkey: char,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

/// Main area content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Outline of the current definition.
    Builder(BuilderBody),
    /// Interactive form.
    Preview(PreviewBody),
    /// No definition loaded yet.
    Empty(EmptyState),
}

/// Builder view content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderBody {
    pub form_title: String,
    pub source: Option<String>,
    pub rows: Vec<OutlineRow>,
    /// Last load failure, shown above the outline.
    pub notice: Option<String>,
}

/// Preview view content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewBody {
    pub title: String,
    pub description: Option<String>,
    /// Visible window of fields.
    pub fields: Vec<FieldRow>,
    pub submit_label: String,
    /// Number of fields hidden above the window.
    pub hidden_above: usize,
    /// Number of fields hidden below the window.
    pub hidden_below: usize,
}

/// Display information for a single preview field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
    pub placeholder: Option<String>,
    pub is_focused: bool,
    pub is_required: bool,
    pub error: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Submission banner lines (the message may span several lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub lines: Vec<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
