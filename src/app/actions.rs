//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches Zellij or the filesystem. It returns a
//! `Vec<Action>` and the plugin shim executes each one in order.
//!
//! # Example
//!
//! ```rust
//! use formshell::app::Action;
//! use std::path::PathBuf;
//!
//! let actions = vec![Action::LoadForm { path: PathBuf::from("/host/form.json") }];
//! assert_eq!(actions.len(), 1);
//! ```

use super::shell::ClearanceTicket;
use std::path::PathBuf;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts a one-shot timer that redeems the ticket after `ticket.delay`.
    ///
    /// The runtime feeds the ticket back as
    /// [`Event::SubmissionExpired`](super::Event::SubmissionExpired).
    ScheduleClearance(ClearanceTicket),

    /// Reads the form definition at `path` and reports the outcome as
    /// `ConfigChanged` or `FormLoadFailed`.
    LoadForm {
        /// Definition file to read.
        path: PathBuf,
    },
}
