//! Form data and validation error descriptors emitted by the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Submitted or saved form values, keyed by field name in form order.
///
/// Backed by `serde_json::Map` so the shell can embed a JSON rendering of the
/// values in its confirmation message without knowing field types.
pub type FormData = serde_json::Map<String, serde_json::Value>;

/// A single validation failure reported by the renderer.
///
/// The shell never inspects these; it only logs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable failure description.
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
