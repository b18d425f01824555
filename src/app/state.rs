//! Application state and view model computation.
//!
//! [`AppState`] wraps the view-state [`Shell`] together with the collaborator
//! state the plugin needs around it: the preview form built from the current
//! definition, the file source the builder reloads from, the theme palettes,
//! and the last load failure.
//!
//! # Render Tracking
//!
//! `AppState` subscribes to every shell signal and raises a dirty flag when
//! one is set. The event handler reads and clears the flag after each event
//! to decide whether Zellij should re-render. Collaborator changes that do not
//! go through the shell (typing into the preview, load failures) raise the
//! flag explicitly with [`AppState::mark_dirty`].
//!
//! # Example
//!
//! ```rust
//! use formshell::app::{AppState, Shell};
//! use formshell::ui::ThemeSet;
//!
//! let mut state = AppState::new(Shell::new(), ThemeSet::default(), None);
//! state.shell.toggle_view();
//! assert!(state.take_dirty());
//! assert!(!state.take_dirty());
//!
//! let viewmodel = state.compute_viewmodel(24);
//! assert_eq!(viewmodel.themes.len(), 3);
//! ```

use super::builder::{outline, FormSource};
use super::handler::Event;
use super::modes::ViewMode;
use super::preview::PreviewForm;
use super::shell::{ClearanceTicket, Shell};
use crate::infrastructure::strip_host_prefix;
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    BannerInfo, Body, BuilderBody, EmptyState, FieldRow, FooterInfo, HeaderInfo, PreviewBody,
    TabInfo, ThemeChip, UIViewModel,
};
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Rows used by chrome: blank line, header, theme bar, two borders, footer.
const CHROME_ROWS: usize = 6;

/// Body rows kept free when the submission banner is clipped.
const MIN_BODY_ROWS: usize = 3;

/// Rows the preview body spends outside the field list: title, description,
/// spacer and submit line.
const PREVIEW_FRAME_ROWS: usize = 4;

const BUILDER_KEYS: &str =
    "p/tab: preview | 1-3: theme | t: next theme | r: reload | q: quit";
const PREVIEW_KEYS: &str = "tab/↓: next | shift+tab/↑: prev | space: toggle | enter: submit | \
     ctrl+s: save | ctrl+b: builder | ctrl+t: theme | esc: quit";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// View, theme, definition and submission message.
    pub shell: Shell,

    /// Preview renderer state, rebuilt whenever the definition changes.
    pub preview: Option<PreviewForm>,

    /// File the builder loads definitions from.
    pub form_source: Option<FormSource>,

    /// Description of the last failed load, cleared by the next success.
    pub load_error: Option<String>,

    /// Color palettes for the three themes.
    pub palettes: ThemeSet,

    dirty: Rc<Cell<bool>>,

    /// Clearance tickets whose timers are running, oldest first.
    pending_clearances: VecDeque<ClearanceTicket>,
}

impl AppState {
    /// Creates application state around `shell` and starts render tracking.
    #[must_use]
    pub fn new(mut shell: Shell, palettes: ThemeSet, form_source: Option<FormSource>) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        shell.subscribe_any(move || flag.set(true));

        Self {
            shell,
            preview: None,
            form_source,
            load_error: None,
            palettes,
            dirty,
            pending_clearances: VecDeque::new(),
        }
    }

    /// Flags the UI for re-render.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether anything changed since the last call, and resets.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Queues a ticket whose timer the runtime has just started.
    pub fn schedule_clearance(&mut self, ticket: ClearanceTicket) {
        self.pending_clearances.push_back(ticket);
    }

    /// Pairs a fired timer with the oldest queued ticket.
    ///
    /// Every clearance uses the same delay, so timers fire in scheduling
    /// order. Returns `None` for a timer nothing was waiting on.
    pub fn timer_fired(&mut self) -> Option<Event> {
        self.pending_clearances
            .pop_front()
            .map(Event::SubmissionExpired)
    }

    /// Number of clearance timers still running.
    #[must_use]
    pub fn pending_clearances(&self) -> usize {
        self.pending_clearances.len()
    }

    /// Palette of the active theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.palettes.get(self.shell.theme())
    }

    /// Builds the view model for a pane `rows` tall.
    ///
    /// Width is handled by the components, which truncate and pad per line.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        let banner = self.compute_banner(rows);
        let banner_rows = banner.as_ref().map_or(0, |b| b.lines.len() + 1);
        let body_rows = rows.saturating_sub(CHROME_ROWS + banner_rows);

        UIViewModel {
            header: self.compute_header(),
            themes: self.compute_theme_chips(),
            body: self.compute_body(body_rows),
            banner,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = self
            .shell
            .config()
            .map_or_else(|| "Form Shell".to_string(), |c| format!("Form Shell · {}", c.title));

        let tabs = [ViewMode::Builder, ViewMode::Preview]
            .into_iter()
            .map(|view| TabInfo {
                label: match view {
                    ViewMode::Builder => "Builder".to_string(),
                    ViewMode::Preview => "Preview".to_string(),
                },
                is_active: view == self.shell.view(),
            })
            .collect();

        HeaderInfo { title, tabs }
    }

    fn compute_theme_chips(&self) -> Vec<ThemeChip> {
        self.shell
            .themes()
            .iter()
            .zip('1'..='9')
            .map(|(descriptor, hotkey)| ThemeChip {
                hotkey,
                name: descriptor.name.to_string(),
                description: descriptor.description.to_string(),
                is_active: descriptor.id == self.shell.theme(),
            })
            .collect()
    }

    fn compute_body(&self, available_rows: usize) -> Body {
        let Some(config) = self.shell.config() else {
            return Body::Empty(EmptyState {
                message: "No form loaded".to_string(),
                subtitle: self.load_error.clone().unwrap_or_else(|| {
                    if self.form_source.is_some() {
                        "Waiting for the form definition (r to reload)".to_string()
                    } else {
                        "Set `form_file` in the plugin configuration".to_string()
                    }
                }),
            });
        };

        match self.shell.view() {
            ViewMode::Builder => Body::Builder(BuilderBody {
                form_title: config.title.clone(),
                source: self
                    .form_source
                    .as_ref()
                    .map(|source| strip_host_prefix(&source.path().to_string_lossy())),
                rows: outline(config),
                notice: self.load_error.clone(),
            }),
            ViewMode::Preview => self.preview.as_ref().map_or_else(
                || {
                    Body::Empty(EmptyState {
                        message: "Nothing to preview".to_string(),
                        subtitle: "The form has no fields".to_string(),
                    })
                },
                |form| Body::Preview(Self::compute_preview(form, available_rows)),
            ),
        }
    }

    fn compute_preview(form: &PreviewForm, available_rows: usize) -> PreviewBody {
        let inputs = form.inputs();
        let window = available_rows.saturating_sub(PREVIEW_FRAME_ROWS).max(1);
        let focused = form.focused_index();
        let start = if focused < window { 0 } else { focused + 1 - window };
        let end = (start + window).min(inputs.len());

        let fields = inputs[start..end]
            .iter()
            .enumerate()
            .map(|(offset, input)| FieldRow {
                label: input.label.clone(),
                value: input.display_value(),
                placeholder: input.placeholder.clone(),
                is_focused: start + offset == focused,
                is_required: input.required,
                error: form.error_for(&input.name).map(ToString::to_string),
            })
            .collect();

        PreviewBody {
            title: form.title.clone(),
            description: form.description.clone(),
            fields,
            submit_label: form.submit_label.clone(),
            hidden_above: start,
            hidden_below: inputs.len() - end,
        }
    }

    /// Splits the submission message into banner lines, clipped so the body
    /// keeps [`MIN_BODY_ROWS`] rows. Clipped lines are summarized on the last
    /// banner line.
    fn compute_banner(&self, rows: usize) -> Option<BannerInfo> {
        let message = self.shell.submission_message();
        if message.is_empty() {
            return None;
        }

        let mut lines: Vec<String> = message.lines().map(ToString::to_string).collect();
        let capacity = rows.saturating_sub(CHROME_ROWS + 1 + MIN_BODY_ROWS).max(1);

        if lines.len() > capacity {
            if capacity == 1 {
                lines.truncate(1);
            } else {
                let hidden = lines.len() - (capacity - 1);
                lines.truncate(capacity - 1);
                lines.push(format!("… ({hidden} more lines)"));
            }
        }

        Some(BannerInfo { lines })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.shell.view() {
            ViewMode::Builder => BUILDER_KEYS,
            ViewMode::Preview => PREVIEW_KEYS,
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldType, FormConfig, FormData, FormField, FormSection};

    fn form(field_count: usize) -> FormConfig {
        FormConfig {
            title: "Survey".to_string(),
            sections: vec![FormSection {
                id: "s".to_string(),
                title: "Questions".to_string(),
                description: None,
                fields: (0..field_count)
                    .map(|i| {
                        FormField::new(format!("q{i}"), format!("Question {i}"), FieldType::Text)
                    })
                    .collect(),
            }],
            ..Default::default()
        }
    }

    fn state_with(config: FormConfig) -> AppState {
        let mut state = AppState::new(Shell::new(), ThemeSet::default(), None);
        state.preview = Some(PreviewForm::from_config(&config));
        state.shell.set_config(config);
        state
    }

    #[test]
    fn empty_state_without_definition() {
        let state = AppState::new(Shell::new(), ThemeSet::default(), None);
        let vm = state.compute_viewmodel(24);

        assert!(matches!(vm.body, Body::Empty(ref e) if e.message == "No form loaded"));
        assert_eq!(vm.header.title, "Form Shell");
        assert!(vm.header.tabs[0].is_active);
        assert!(vm.themes[1].is_active);
        assert!(vm.banner.is_none());
    }

    #[test]
    fn preview_window_follows_focus() {
        let mut state = state_with(form(30));
        state.shell.set_view(ViewMode::Preview);
        let preview = state.preview.as_mut().unwrap();
        for _ in 0..25 {
            preview.focus_next();
        }

        let vm = state.compute_viewmodel(24);
        let Body::Preview(body) = vm.body else {
            panic!("expected preview body");
        };

        // 24 rows - 6 chrome - 4 frame = 14 visible fields.
        assert_eq!(body.fields.len(), 14);
        assert_eq!(body.hidden_above, 12);
        assert_eq!(body.hidden_below, 4);
        assert!(body.fields.last().unwrap().is_focused);
    }

    #[test]
    fn banner_splits_message_lines() {
        let mut state = state_with(form(1));
        let mut data = FormData::new();
        data.insert("q0".to_string(), serde_json::json!("yes"));
        let _ticket = state.shell.handle_submit(&data);

        let vm = state.compute_viewmodel(24);
        let banner = vm.banner.unwrap();

        assert_eq!(banner.lines[0], "Form submitted successfully! Data: {");
        assert_eq!(banner.lines[1], "  \"q0\": \"yes\"");
        assert_eq!(banner.lines.last().unwrap(), "}");
    }

    #[test]
    fn long_banner_is_clipped_to_leave_body_rows() {
        let mut state = state_with(form(15));
        let data: FormData = (0..15)
            .map(|i| (format!("q{i}"), serde_json::json!("answer")))
            .collect();
        let _ticket = state.shell.handle_submit(&data);

        let vm = state.compute_viewmodel(24);
        let banner = vm.banner.unwrap();

        // 24 rows - 6 chrome - 1 banner border - 3 body rows.
        assert_eq!(banner.lines.len(), 14);
        assert_eq!(banner.lines[0], "Form submitted successfully! Data: {");
        assert_eq!(banner.lines[13], "… (4 more lines)");
    }

    #[test]
    fn timers_redeem_tickets_in_scheduling_order() {
        let mut state = state_with(form(1));
        let first = state.shell.handle_submit(&FormData::new());
        state.schedule_clearance(first);
        let second = state.shell.handle_submit(&FormData::new());
        state.schedule_clearance(second);

        assert_eq!(state.pending_clearances(), 2);
        assert_eq!(state.timer_fired(), Some(Event::SubmissionExpired(first)));
        assert_eq!(state.timer_fired(), Some(Event::SubmissionExpired(second)));
        assert_eq!(state.timer_fired(), None);
    }
}
