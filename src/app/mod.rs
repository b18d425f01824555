//! Application layer coordinating the shell, its collaborators, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and UI
//! layers.
//!
//! ```text
//! Keys / Timers / File loads → Events → handle_event → Shell + Preview → Actions
//!                                  ↑                                       ↓
//!                                  └──────── timer + load results ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`builder`]: Form definition loading and outline (builder collaborator)
//! - [`handler`]: Event processing and state transitions
//! - [`keys`]: Keyboard mapping per view
//! - [`modes`]: View modes, theme ids and the theme catalog
//! - [`preview`]: Interactive form state (renderer collaborator)
//! - [`shell`]: The view-state shell
//! - [`signal`]: Observable state cells
//! - [`state`]: Application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use formshell::app::{handle_event, AppState, Event, Shell, ThemeId};
//! use formshell::ui::ThemeSet;
//!
//! let mut state = AppState::new(Shell::new(), ThemeSet::default(), None);
//! handle_event(&mut state, &Event::SwitchTheme(ThemeId::Classic))?;
//! assert_eq!(state.shell.theme(), ThemeId::Classic);
//! # Ok::<(), formshell::FormShellError>(())
//! ```

pub mod actions;
pub mod builder;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod preview;
pub mod shell;
pub mod signal;
pub mod state;

pub use actions::Action;
pub use builder::FormSource;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::{ThemeDescriptor, ThemeId, ViewMode, THEMES};
pub use preview::PreviewForm;
pub use shell::{ClearanceTicket, Shell, SUBMISSION_MESSAGE_TTL};
pub use signal::{Signal, SubscriptionId};
pub use state::AppState;
