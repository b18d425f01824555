//! Formshell: a Zellij plugin hosting a form builder and a live form preview.
//!
//! The plugin keeps a small view-state shell around two collaborators:
//! - A builder that loads a form definition (JSON or TOML) and shows its outline
//! - A preview that renders the definition as an interactive form
//! - Three selectable visual themes and a transient submission banner

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - Key mapping, timers, permission handling         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Shell: view, theme, definition, banner signals   │
//! │  - Builder and preview collaborators                │
//! │  - Event handling and view model computation        │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)  │
//! │ - Palettes            │   │ - Form definition model │
//! │ - Components          │   │ - Submission data       │
//! └───────────────────────┘   │ - Error types           │
//!                             └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Rotating log file (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Shell, collaborators and the event/action model
//! - [`domain`]: Form definitions, submission data, errors
//! - [`infrastructure`]: Sandbox path helpers
//! - [`observability`]: Structured logging to a rotating file
//! - [`ui`]: Terminal rendering with theme palettes
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/formshell.wasm" {
//!         form_file "~/forms/contact.json"
//!         theme "classic"
//!         view "preview"
//!         theme_dir "~/.config/formshell/themes"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use formshell::{handle_event, initialize, Action, Config, Event};
//! use formshell::domain::{FieldType, FormConfig, FormField, FormSection};
//!
//! let mut state = initialize(&Config::default());
//!
//! let config = FormConfig {
//!     title: "Contact".to_string(),
//!     sections: vec![FormSection {
//!         id: "main".to_string(),
//!         title: "Main".to_string(),
//!         description: None,
//!         fields: vec![FormField::new("name", "Name", FieldType::Text)],
//!     }],
//!     ..Default::default()
//! };
//!
//! let events = [
//!     Event::ConfigChanged(config),
//!     Event::ToggleView,
//!     Event::Char('A'),
//!     Event::Submit,
//! ];
//! for event in events {
//!     let (_should_render, actions) = handle_event(&mut state, &event)?;
//!     for action in actions {
//!         if let Action::ScheduleClearance(ticket) = action {
//!             handle_event(&mut state, &Event::SubmissionExpired(ticket))?;
//!         }
//!     }
//! }
//! assert_eq!(state.shell.submission_message(), "");
//! # Ok::<(), formshell::FormShellError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Shell, ThemeId, ViewMode};
pub use domain::{FormConfig, FormData, FormShellError, Result, ValidationError};
pub use ui::Theme;

use app::FormSource;
use infrastructure::expand_tilde;
use std::collections::BTreeMap;
use std::path::Path;
use ui::ThemeSet;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/formshell.wasm" {
///     form_file "~/forms/signup.toml"
///     theme "minimal"
///     view "builder"
///     trace_level "info"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Initial theme. Default: `modern`
    pub theme: ThemeId,

    /// Initial view. Default: `builder`
    pub view: ViewMode,

    /// Form definition file; `.toml` files parse as TOML, anything else as JSON.
    pub form_file: Option<String>,

    /// Directory with `<theme>.toml` palette overrides.
    pub theme_dir: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown theme or view names fall back to the defaults. Blank values
    /// count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use formshell::{Config, ThemeId, ViewMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "Classic".to_string());
    /// map.insert("view".to_string(), "sideways".to_string());
    /// map.insert("form_file".to_string(), "~/forms/contact.json".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme, ThemeId::Classic);
    /// assert_eq!(config.view, ViewMode::Builder);
    /// assert_eq!(config.form_file.as_deref(), Some("~/forms/contact.json"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let theme = value("theme").map_or_else(ThemeId::default, |name| {
            name.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "unknown theme, using default");
                ThemeId::default()
            })
        });

        let view = value("view").map_or_else(ViewMode::default, |name| {
            name.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "unknown view, using default");
                ViewMode::default()
            })
        });

        Self {
            theme,
            view,
            form_file: value("form_file"),
            theme_dir: value("theme_dir"),
            trace_level: value("trace_level"),
        }
    }
}

/// Builds the initial application state.
///
/// Palettes start from the built-ins, overridden from `theme_dir` when set.
/// The form file is only recorded here; the shim loads it once the plugin
/// has filesystem access.
///
/// # Example
///
/// ```rust
/// use formshell::{initialize, Config, ThemeId};
///
/// let config = Config {
///     theme: ThemeId::Minimal,
///     form_file: Some("/tmp/form.json".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.shell.theme(), ThemeId::Minimal);
/// assert!(state.shell.config().is_none());
/// assert!(state.form_source.is_some());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(theme = %config.theme, view = %config.view, "initializing formshell plugin");

    let palettes = config.theme_dir.as_deref().map_or_else(ThemeSet::default, |dir| {
        let dir = expand_tilde(dir);
        ThemeSet::default().with_overrides(Path::new(&dir))
    });

    let form_source = config
        .form_file
        .as_deref()
        .map(|path| FormSource::new(expand_tilde(path)));

    AppState::new(
        Shell::with_initial(config.view, config.theme),
        palettes,
        form_source,
    )
}
