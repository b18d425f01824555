//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the formshell library and the Zellij
//! plugin system: it maps Zellij events to library events, executes the
//! returned actions, and owns the timers that clear the submission banner.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `Timer`, `PermissionRequestResult`
//! 3. **Permissions granted**: Load the configured form definition
//! 4. **Update**: Handle events, delegate to the library layer
//! 5. **Render**: Call the library render function
//!
//! # Banner Timers
//!
//! `set_timeout` carries no payload. Each scheduled ticket is queued in
//! `AppState` and every `Timer` event redeems the oldest one through
//! `AppState::timer_fired`.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+b`: Builder view
//! - `Ctrl+p`: Preview view
//! - `Ctrl+t`: Next theme
//! - `Esc`: Close plugin
//!
//! Builder view:
//! - `1`/`2`/`3`: Pick theme
//! - `t`: Next theme
//! - `p`/`Tab`: Toggle view
//! - `r`: Reload form definition
//! - `q`: Close plugin
//!
//! Preview view:
//! - `Tab`/`Down`: Next field
//! - `Shift+Tab`/`Up`: Previous field
//! - `Space`/`Left`/`Right`: Toggle checkbox or cycle options
//! - `Enter`: Submit
//! - `Ctrl+s`: Save
//! - `Backspace`: Delete character
//! - Other characters: Type into the focused field

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use formshell::app::{map_key, FormSource};
use formshell::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: formshell::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: formshell::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds application state, requests permissions
    /// and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState`: Receive key and timer events
    /// - `FullHdAccess`: Read form definitions and palettes, write the log file
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        formshell::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = formshell::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::FullHdAccess,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates Zellij events, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                match map_key(self.app.shell.view(), key) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(elapsed) => match self.app.timer_fired() {
                Some(event) => event,
                None => {
                    tracing::debug!(elapsed, "timer fired with no pending clearance");
                    return false;
                }
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        formshell::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the handler and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((mut should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled successfully"
                );
                for action in actions {
                    should_render |= self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Loads the form definition once filesystem access is granted.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading form definition");
                self.dispatch(&Event::ReloadForm)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - form definitions cannot be loaded");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Returns `true` if executing it changed what should be rendered.
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                false
            }
            Action::ScheduleClearance(ticket) => {
                tracing::debug!(generation = ticket.generation, "scheduling banner clearance");
                set_timeout(ticket.delay.as_secs_f64());
                self.app.schedule_clearance(ticket);
                false
            }
            Action::LoadForm { path } => {
                let event = match FormSource::new(path).load() {
                    Ok(config) => Event::ConfigChanged(config),
                    Err(e) => Event::FormLoadFailed {
                        error: e.to_string(),
                    },
                };
                self.dispatch(&event)
            }
        }
    }
}
