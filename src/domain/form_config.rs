//! Form definition model.
//!
//! A [`FormConfig`] describes a form as an ordered list of sections, each
//! holding fields with their validation rules. The shell stores and forwards
//! definitions without looking inside them; the builder and preview
//! collaborators are the only readers.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "title": "Contact us",
//!   "submit_label": "Send",
//!   "sections": [{
//!     "id": "who",
//!     "title": "About you",
//!     "fields": [
//!       { "name": "email", "label": "Email", "type": "email",
//!         "validation": [{ "type": "required" }] },
//!       { "name": "age", "label": "Age", "type": "number" }
//!     ]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Complete description of a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Optional stable identifier.
    #[serde(default)]
    pub id: Option<String>,

    /// Title shown above the form.
    pub title: String,

    /// Optional introductory text.
    #[serde(default)]
    pub description: Option<String>,

    /// Label for the submit control. Defaults to "Submit" when rendering.
    #[serde(default)]
    pub submit_label: Option<String>,

    /// Ordered sections.
    #[serde(default)]
    pub sections: Vec<FormSection>,
}

/// A titled group of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

/// A single input in a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Key under which the value is submitted. Unique across the form.
    pub name: String,

    /// Label shown next to the input.
    pub label: String,

    /// Kind of input.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub placeholder: Option<String>,

    /// Initial value.
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,

    /// Choices for `select` and `radio` fields.
    #[serde(default)]
    pub options: Vec<FieldOption>,

    /// Validation rules, evaluated by the renderer.
    #[serde(default)]
    pub validation: Vec<ValidationRule>,
}

/// Input kinds understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Number,
    Textarea,
    Date,
    Select,
    Radio,
    Checkbox,
}

impl FieldType {
    /// Lowercase name as it appears in form definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    /// Whether the field picks from `options` instead of taking typed text.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

/// A selectable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

/// A validation rule attached to a field.
///
/// `value` carries the rule parameter (length, bound, regex) when the rule
/// kind takes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Supported rule kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Min,
    Max,
    Pattern,
    Email,
}

impl FormConfig {
    /// Iterates over every field in section order.
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    /// Total number of fields across all sections.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|section| section.fields.len()).sum()
    }

    /// Looks up a field by its submitted name.
    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&FormField> {
        self.fields().find(|field| field.name == name)
    }

    /// Submit button label, falling back to "Submit".
    #[must_use]
    pub fn submit_label(&self) -> &str {
        self.submit_label.as_deref().unwrap_or("Submit")
    }
}

impl FormField {
    /// Creates a field with no placeholder, default, options or rules.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            placeholder: None,
            default_value: None,
            options: Vec::new(),
            validation: Vec::new(),
        }
    }

    /// Whether a `required` rule is attached.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.validation
            .iter()
            .any(|rule| rule.kind == RuleKind::Required)
    }

    /// Message of the `required` rule, or a generic one.
    #[must_use]
    pub fn required_message(&self) -> String {
        self.validation
            .iter()
            .find(|rule| rule.kind == RuleKind::Required)
            .and_then(|rule| rule.message.clone())
            .unwrap_or_else(|| format!("{} is required", self.label))
    }
}
