//! View-state shell: the single source of truth for the plugin UI.
//!
//! The shell holds four observable cells (current view, current theme, the
//! latest form definition and the transient submission message) and exposes
//! handler methods that the builder and preview collaborators call. It never
//! interprets form definitions or form data; submissions, saves and
//! validation errors are logged as they arrive.
//!
//! # Submission Message Lifetime
//!
//! [`Shell::handle_submit`] sets a confirmation message and returns a
//! [`ClearanceTicket`]. The runtime schedules the ticket and hands it back to
//! [`Shell::expire_submission_message`] once [`SUBMISSION_MESSAGE_TTL`] has
//! elapsed. Each submit bumps a generation counter and tickets from older
//! generations are ignored, so the message always survives a full window after
//! the most recent submit.
//!
//! # Example
//!
//! ```rust
//! use formshell::app::Shell;
//! use formshell::domain::FormData;
//!
//! let mut shell = Shell::new();
//! let mut data = FormData::new();
//! data.insert("a".to_string(), serde_json::json!(1));
//!
//! let ticket = shell.handle_submit(&data);
//! assert!(shell.submission_message().contains("\"a\": 1"));
//!
//! assert!(shell.expire_submission_message(ticket));
//! assert!(shell.submission_message().is_empty());
//! ```

use super::modes::{ThemeDescriptor, ThemeId, ViewMode, THEMES};
use super::signal::{Signal, SubscriptionId};
use crate::domain::{FormConfig, FormData, ValidationError};
use std::rc::Rc;
use std::time::Duration;

/// How long a submission confirmation stays visible.
pub const SUBMISSION_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Scheduled clearance of the submission message.
///
/// Produced by [`Shell::handle_submit`]; the runtime is expected to return it
/// to [`Shell::expire_submission_message`] after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearanceTicket {
    /// Submit generation this ticket belongs to.
    pub generation: u64,
    /// Delay before the ticket should be redeemed.
    pub delay: Duration,
}

/// Subscriptions created by [`Shell::subscribe_any`], one per state cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSubscriptions {
    pub view: SubscriptionId,
    pub theme: SubscriptionId,
    pub config: SubscriptionId,
    pub message: SubscriptionId,
}

/// The view-state shell.
#[derive(Debug, Default)]
pub struct Shell {
    view: Signal<ViewMode>,
    theme: Signal<ThemeId>,
    config: Signal<Option<FormConfig>>,
    submission_message: Signal<String>,
    generation: u64,
}

impl Shell {
    /// Creates a shell in the builder view with the modern theme, no form
    /// definition and no message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shell with explicit initial view and theme.
    #[must_use]
    pub fn with_initial(view: ViewMode, theme: ThemeId) -> Self {
        Self {
            view: Signal::new(view),
            theme: Signal::new(theme),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn view(&self) -> ViewMode {
        *self.view.get()
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeId {
        *self.theme.get()
    }

    /// The latest form definition, if the builder has provided one.
    #[must_use]
    pub const fn config(&self) -> Option<&FormConfig> {
        self.config.get().as_ref()
    }

    /// Confirmation text for the latest submission, or an empty string.
    #[must_use]
    pub fn submission_message(&self) -> &str {
        self.submission_message.get()
    }

    /// The fixed theme catalog.
    #[must_use]
    pub const fn themes(&self) -> &'static [ThemeDescriptor] {
        &THEMES
    }

    /// Replaces the stored form definition.
    pub fn set_config(&mut self, config: FormConfig) {
        tracing::debug!(
            title = %config.title,
            fields = config.field_count(),
            "form definition changed"
        );
        self.config.set(Some(config));
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        tracing::debug!(theme = %theme, "theme switched");
        self.theme.set(theme);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        tracing::debug!(view = %view, "view switched");
        self.view.set(view);
    }

    /// Switches between builder and preview.
    pub fn toggle_view(&mut self) {
        self.set_view(self.view().toggled());
    }

    /// Moves to the next theme in catalog order.
    pub fn cycle_theme(&mut self) {
        self.set_theme(self.theme().next());
    }

    /// Records a successful submission and shows a confirmation.
    ///
    /// Returns the ticket that clears the message after
    /// [`SUBMISSION_MESSAGE_TTL`]. Any ticket issued earlier becomes stale.
    pub fn handle_submit(&mut self, data: &FormData) -> ClearanceTicket {
        let json = serde_json::Value::Object(data.clone());
        tracing::info!(data = %json, "form submitted");

        self.generation += 1;
        self.submission_message
            .set(format!("Form submitted successfully! Data: {json:#}"));

        ClearanceTicket {
            generation: self.generation,
            delay: SUBMISSION_MESSAGE_TTL,
        }
    }

    /// Records a save. No state changes.
    pub fn handle_save(&self, data: &FormData) {
        let json = serde_json::Value::Object(data.clone());
        tracing::info!(data = %json, "form saved");
    }

    /// Records validation errors reported by the renderer. No state changes.
    pub fn handle_validation_errors(&self, errors: &[ValidationError]) {
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        tracing::info!(count = errors.len(), errors = ?rendered, "validation errors");
    }

    /// Clears the submission message if `ticket` belongs to the latest submit.
    ///
    /// Returns `true` when the message was cleared; stale tickets are ignored.
    pub fn expire_submission_message(&mut self, ticket: ClearanceTicket) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "ignoring stale clearance"
            );
            return false;
        }

        if self.submission_message.get().is_empty() {
            return false;
        }

        self.submission_message.set(String::new());
        true
    }

    /// Calls `listener` whenever any of the four state cells is set.
    pub fn subscribe_any(&mut self, listener: impl Fn() + 'static) -> ShellSubscriptions {
        let listener: Rc<dyn Fn()> = Rc::new(listener);

        let on_view = Rc::clone(&listener);
        let on_theme = Rc::clone(&listener);
        let on_config = Rc::clone(&listener);
        let on_message = listener;

        ShellSubscriptions {
            view: self.view.subscribe(move |_| on_view()),
            theme: self.theme.subscribe(move |_| on_theme()),
            config: self.config.subscribe(move |_| on_config()),
            message: self.submission_message.subscribe(move |_| on_message()),
        }
    }

    /// Removes every subscription created by [`Shell::subscribe_any`].
    pub fn unsubscribe_all(&mut self, subscriptions: ShellSubscriptions) {
        self.view.unsubscribe(subscriptions.view);
        self.theme.unsubscribe(subscriptions.theme);
        self.config.unsubscribe(subscriptions.config);
        self.submission_message.unsubscribe(subscriptions.message);
    }
}
