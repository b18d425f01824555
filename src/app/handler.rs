//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point the plugin shim calls for every
//! user or collaborator event. It mutates [`AppState`], collects [`Action`]s
//! for the shim to execute, and reports whether the UI needs a re-render.
//!
//! # Event Types
//!
//! - **Collaborator**: `ConfigChanged`, `FormSubmitted`, `FormSaved`,
//!   `ValidationFailed`, `FormLoadFailed`
//! - **Shell**: `SwitchView`, `ToggleView`, `SwitchTheme`, `CycleTheme`,
//!   `SubmissionExpired`
//! - **Preview input**: `NextField`, `PrevField`, `Char`, `Backspace`,
//!   `Toggle`, `Submit`, `Save`
//! - **Runtime**: `ReloadForm`, `CloseFocus`
//!
//! Preview input events are ignored unless the preview view is active and a
//! form is loaded.
//!
//! # Example
//!
//! ```rust
//! use formshell::app::{handle_event, AppState, Event, Shell, ViewMode};
//! use formshell::ui::ThemeSet;
//!
//! let mut state = AppState::new(Shell::new(), ThemeSet::default(), None);
//! let (should_render, actions) = handle_event(&mut state, &Event::ToggleView)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.shell.view(), ViewMode::Preview);
//! # Ok::<(), formshell::FormShellError>(())
//! ```

use super::modes::{ThemeId, ViewMode};
use super::preview::PreviewForm;
use super::shell::ClearanceTicket;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{FormConfig, FormData, ValidationError};

/// Events triggered by user input, collaborators, or timers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The builder produced a new form definition.
    ConfigChanged(FormConfig),
    /// Loading the definition file failed.
    FormLoadFailed {
        /// Description of the failure.
        error: String,
    },
    /// Re-reads the definition file.
    ReloadForm,

    SwitchView(ViewMode),
    ToggleView,
    SwitchTheme(ThemeId),
    CycleTheme,

    /// The renderer submitted valid data.
    FormSubmitted(FormData),
    /// The renderer saved its current values.
    FormSaved(FormData),
    /// The renderer rejected a submit.
    ValidationFailed(Vec<ValidationError>),
    /// A clearance timer fired.
    SubmissionExpired(ClearanceTicket),

    /// Focuses the next preview field.
    NextField,
    /// Focuses the previous preview field.
    PrevField,
    /// Types a character into the focused preview field.
    Char(char),
    /// Deletes a character from the focused preview field.
    Backspace,
    /// Toggles the focused checkbox or choice field.
    Toggle,
    /// Submits the preview form.
    Submit,
    /// Saves the preview form without validating.
    Save,

    /// Hides the plugin.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. `should_render` is `true` when a shell
/// signal was set or the preview form changed while handling the event.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature aligned with the
/// shim's error logging.
///
/// # Tracing
///
/// Each call opens a debug span carrying the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    // Discard notifications raised outside of event handling.
    state.take_dirty();

    let actions = match event {
        Event::ConfigChanged(config) => {
            state.preview = Some(PreviewForm::from_config(config));
            state.load_error = None;
            state.shell.set_config(config.clone());
            vec![]
        }
        Event::FormLoadFailed { error } => {
            tracing::warn!(error = %error, "form definition could not be loaded");
            state.load_error = Some(error.clone());
            state.mark_dirty();
            vec![]
        }
        Event::ReloadForm => state.form_source.as_ref().map_or_else(
            || {
                tracing::debug!("no form source configured, nothing to reload");
                vec![]
            },
            |source| {
                vec![Action::LoadForm {
                    path: source.path().to_path_buf(),
                }]
            },
        ),
        Event::SwitchView(view) => {
            state.shell.set_view(*view);
            vec![]
        }
        Event::ToggleView => {
            state.shell.toggle_view();
            vec![]
        }
        Event::SwitchTheme(theme) => {
            state.shell.set_theme(*theme);
            vec![]
        }
        Event::CycleTheme => {
            state.shell.cycle_theme();
            vec![]
        }
        Event::FormSubmitted(data) => submit(state, data),
        Event::FormSaved(data) => {
            state.shell.handle_save(data);
            vec![]
        }
        Event::ValidationFailed(errors) => {
            state.shell.handle_validation_errors(errors);
            vec![]
        }
        Event::SubmissionExpired(ticket) => {
            state.shell.expire_submission_message(*ticket);
            vec![]
        }
        Event::NextField => edit_preview(state, PreviewForm::focus_next),
        Event::PrevField => edit_preview(state, PreviewForm::focus_prev),
        Event::Char(c) => edit_preview(state, |form| form.insert_char(*c)),
        Event::Backspace => edit_preview(state, PreviewForm::backspace),
        Event::Toggle => edit_preview(state, PreviewForm::toggle),
        Event::Submit => {
            let Some(form) = active_preview(state) else {
                return Ok((false, vec![]));
            };
            let had_errors = !form.errors().is_empty();

            match form.submit() {
                Ok(data) => {
                    if had_errors {
                        state.mark_dirty();
                    }
                    submit(state, &data)
                }
                Err(errors) => {
                    tracing::debug!(count = errors.len(), "submit blocked by required fields");
                    state.shell.handle_validation_errors(&errors);
                    state.mark_dirty();
                    vec![]
                }
            }
        }
        Event::Save => {
            let Some(form) = active_preview(state) else {
                return Ok((false, vec![]));
            };
            let data = form.collect();
            state.shell.handle_save(&data);
            vec![]
        }
        Event::CloseFocus => vec![Action::CloseFocus],
    };

    Ok((state.take_dirty(), actions))
}

fn submit(state: &mut AppState, data: &FormData) -> Vec<Action> {
    let ticket = state.shell.handle_submit(data);
    vec![Action::ScheduleClearance(ticket)]
}

fn active_preview(state: &mut AppState) -> Option<&mut PreviewForm> {
    if state.shell.view() != ViewMode::Preview {
        return None;
    }
    state.preview.as_mut()
}

fn edit_preview(state: &mut AppState, edit: impl FnOnce(&mut PreviewForm) -> bool) -> Vec<Action> {
    let changed = active_preview(state).is_some_and(edit);
    if changed {
        state.mark_dirty();
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{FormSource, Shell};
    use crate::domain::{FieldType, FormField, FormSection, RuleKind, ValidationRule};
    use crate::ui::ThemeSet;
    use serde_json::json;
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::new(Shell::new(), ThemeSet::default(), None)
    }

    fn contact_form() -> FormConfig {
        let mut email = FormField::new("email", "Email", FieldType::Email);
        email.validation.push(ValidationRule {
            kind: RuleKind::Required,
            value: None,
            message: Some("Email is mandatory".to_string()),
        });

        FormConfig {
            id: Some("contact".to_string()),
            title: "Contact".to_string(),
            sections: vec![FormSection {
                id: "main".to_string(),
                title: "Main".to_string(),
                description: None,
                fields: vec![FormField::new("name", "Name", FieldType::Text), email],
            }],
            ..Default::default()
        }
    }

    fn data(value: serde_json::Value) -> FormData {
        value.as_object().cloned().unwrap()
    }

    fn ticket_of(actions: &[Action]) -> ClearanceTicket {
        match actions {
            [Action::ScheduleClearance(ticket)] => *ticket,
            other => panic!("expected a single clearance, got {other:?}"),
        }
    }

    #[test]
    fn submission_sets_message_until_its_ticket_expires() {
        let mut state = state();

        let (render, actions) =
            handle_event(&mut state, &Event::FormSubmitted(data(json!({"a": 1})))).unwrap();
        assert!(render);
        assert!(state.shell.submission_message().contains("\"a\": 1"));

        let ticket = ticket_of(&actions);
        let (render, actions) =
            handle_event(&mut state, &Event::SubmissionExpired(ticket)).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.shell.submission_message(), "");
    }

    #[test]
    fn stale_ticket_keeps_newer_message() {
        let mut state = state();

        let (_, first) =
            handle_event(&mut state, &Event::FormSubmitted(data(json!({"n": 1})))).unwrap();
        let (_, second) =
            handle_event(&mut state, &Event::FormSubmitted(data(json!({"n": 2})))).unwrap();

        let (render, _) =
            handle_event(&mut state, &Event::SubmissionExpired(ticket_of(&first))).unwrap();
        assert!(!render);
        assert!(state.shell.submission_message().contains("\"n\": 2"));

        handle_event(&mut state, &Event::SubmissionExpired(ticket_of(&second))).unwrap();
        assert_eq!(state.shell.submission_message(), "");
    }

    #[test]
    fn save_and_validation_errors_change_nothing() {
        let mut state = state();

        let (render, actions) =
            handle_event(&mut state, &Event::FormSaved(data(json!({"x": "y"})))).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        let errors = vec![ValidationError::new("email", "Email is mandatory")];
        let (render, actions) =
            handle_event(&mut state, &Event::ValidationFailed(errors)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.shell.submission_message(), "");
        assert!(state.shell.config().is_none());
    }

    #[test]
    fn config_change_builds_preview() {
        let mut state = state();
        state.load_error = Some("stale".to_string());

        let (render, _) = handle_event(&mut state, &Event::ConfigChanged(contact_form())).unwrap();

        assert!(render);
        assert!(state.load_error.is_none());
        assert_eq!(state.shell.config().map(|c| c.title.as_str()), Some("Contact"));
        assert_eq!(state.preview.as_ref().map(|p| p.inputs().len()), Some(2));
    }

    #[test]
    fn preview_input_is_ignored_in_builder_view() {
        let mut state = state();
        handle_event(&mut state, &Event::ConfigChanged(contact_form())).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_with_missing_required_field_reports_errors() {
        let mut state = state();
        handle_event(&mut state, &Event::ConfigChanged(contact_form())).unwrap();
        handle_event(&mut state, &Event::SwitchView(ViewMode::Preview)).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.shell.submission_message(), "");
        let preview = state.preview.as_ref().unwrap();
        assert_eq!(preview.error_for("email"), Some("Email is mandatory"));
    }

    #[test]
    fn typed_preview_submits_collected_values() {
        let mut state = state();
        handle_event(&mut state, &Event::ConfigChanged(contact_form())).unwrap();
        handle_event(&mut state, &Event::ToggleView).unwrap();

        for c in "Ann".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::NextField).unwrap();
        for c in "a@b.c".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(render);
        ticket_of(&actions);
        let message = state.shell.submission_message();
        assert!(message.contains("\"name\": \"Ann\""));
        assert!(message.contains("\"email\": \"a@b.c\""));
    }

    #[test]
    fn reload_requires_a_source() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ReloadForm).unwrap();
        assert!(actions.is_empty());

        state.form_source = Some(FormSource::new("/host/forms/contact.json"));
        let (render, actions) = handle_event(&mut state, &Event::ReloadForm).unwrap();
        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::LoadForm {
                path: PathBuf::from("/host/forms/contact.json")
            }]
        );
    }

    #[test]
    fn load_failure_is_recorded() {
        let mut state = state();
        let (render, _) = handle_event(
            &mut state,
            &Event::FormLoadFailed {
                error: "missing file".to_string(),
            },
        )
        .unwrap();

        assert!(render);
        assert_eq!(state.load_error.as_deref(), Some("missing file"));
    }

    #[test]
    fn theme_and_view_events_update_shell() {
        let mut state = state();

        handle_event(&mut state, &Event::SwitchTheme(ThemeId::Classic)).unwrap();
        assert_eq!(state.shell.theme(), ThemeId::Classic);
        handle_event(&mut state, &Event::CycleTheme).unwrap();
        assert_eq!(state.shell.theme(), ThemeId::Minimal);

        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn second_submit_survives_the_first_timer() {
        let mut state = state();
        for n in [1, 2] {
            let (_, actions) =
                handle_event(&mut state, &Event::FormSubmitted(data(json!({ "n": n })))).unwrap();
            state.schedule_clearance(ticket_of(&actions));
        }

        let first_timer = state.timer_fired().unwrap();
        let (render, _) = handle_event(&mut state, &first_timer).unwrap();
        assert!(!render);
        assert!(state.shell.submission_message().contains("\"n\": 2"));

        let second_timer = state.timer_fired().unwrap();
        let (render, _) = handle_event(&mut state, &second_timer).unwrap();
        assert!(render);
        assert_eq!(state.shell.submission_message(), "");
        assert!(state.timer_fired().is_none());
    }

    #[test]
    fn banner_lists_fields_in_form_order() {
        let mut state = state();
        let config = FormConfig {
            title: "Ordered".to_string(),
            sections: vec![FormSection {
                id: "main".to_string(),
                title: "Main".to_string(),
                description: None,
                fields: vec![
                    FormField::new("zeta", "Zeta", FieldType::Text),
                    FormField::new("alpha", "Alpha", FieldType::Text),
                ],
            }],
            ..Default::default()
        };
        handle_event(&mut state, &Event::ConfigChanged(config)).unwrap();
        handle_event(&mut state, &Event::SwitchView(ViewMode::Preview)).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        handle_event(&mut state, &Event::Char('a')).unwrap();

        handle_event(&mut state, &Event::Submit).unwrap();

        let message = state.shell.submission_message();
        let zeta = message.find("\"zeta\": \"z\"").unwrap();
        let alpha = message.find("\"alpha\": \"a\"").unwrap();
        assert!(zeta < alpha);
    }
}
