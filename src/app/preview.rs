//! Renderer collaborator: interactive preview of the current form.
//!
//! [`PreviewForm`] keeps one input per field of a [`FormConfig`], a focus
//! cursor, and the editing operations the key bindings drive. On submit it
//! either yields typed [`FormData`] or the list of missing required fields;
//! the event handler forwards whichever it gets to the shell.
//!
//! Only `required` rules are checked here. Other rule kinds travel with the
//! definition untouched.

use crate::domain::{FieldOption, FieldType, FormConfig, FormData, ValidationError};
use serde_json::Value;

/// Editable state of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInput {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub placeholder: Option<String>,
    pub options: Vec<FieldOption>,
    pub required: bool,
    required_message: String,
    text: String,
    checked: bool,
    choice: usize,
}

impl FieldInput {
    /// Text shown in the input box.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.field_type {
            FieldType::Checkbox => if self.checked { "[x]" } else { "[ ]" }.to_string(),
            FieldType::Select | FieldType::Radio => self
                .options
                .get(self.choice)
                .map_or_else(String::new, |option| format!("< {} >", option.label)),
            FieldType::Password => "*".repeat(self.text.chars().count()),
            _ => self.text.clone(),
        }
    }

    /// Whether the input holds nothing the user entered or picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.field_type {
            FieldType::Checkbox => !self.checked,
            FieldType::Select | FieldType::Radio => self.options.is_empty(),
            _ => self.text.trim().is_empty(),
        }
    }

    const fn is_toggle(&self) -> bool {
        matches!(
            self.field_type,
            FieldType::Checkbox | FieldType::Select | FieldType::Radio
        )
    }

    fn value(&self) -> Value {
        match self.field_type {
            FieldType::Checkbox => Value::Bool(self.checked),
            FieldType::Select | FieldType::Radio => self
                .options
                .get(self.choice)
                .map_or(Value::Null, |option| Value::String(option.value.clone())),
            FieldType::Number => number_value(&self.text),
            _ => Value::String(self.text.clone()),
        }
    }
}

fn number_value(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or_else(|| Value::String(trimmed.to_string()), Value::Number)
}

fn seed_text(default: Option<&Value>) -> String {
    match default {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// The preview renderer's state for one form definition.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewForm {
    pub title: String,
    pub description: Option<String>,
    pub submit_label: String,
    inputs: Vec<FieldInput>,
    focused: usize,
    errors: Vec<ValidationError>,
}

impl PreviewForm {
    /// Builds inputs for every field, seeded from `default_value`.
    #[must_use]
    pub fn from_config(config: &FormConfig) -> Self {
        let inputs = config
            .fields()
            .map(|field| {
                let default = field.default_value.as_ref();
                let choice = match default {
                    Some(Value::String(wanted)) => field
                        .options
                        .iter()
                        .position(|option| &option.value == wanted)
                        .unwrap_or(0),
                    _ => 0,
                };

                FieldInput {
                    name: field.name.clone(),
                    label: field.label.clone(),
                    field_type: field.field_type,
                    placeholder: field.placeholder.clone(),
                    options: field.options.clone(),
                    required: field.is_required(),
                    required_message: field.required_message(),
                    text: if field.field_type.is_choice() {
                        String::new()
                    } else {
                        seed_text(default)
                    },
                    checked: matches!(default, Some(Value::Bool(true))),
                    choice,
                }
            })
            .collect();

        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            submit_label: config.submit_label().to_string(),
            inputs,
            focused: 0,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn inputs(&self) -> &[FieldInput] {
        &self.inputs
    }

    #[must_use]
    pub const fn focused_index(&self) -> usize {
        self.focused
    }

    #[must_use]
    pub fn focused(&self) -> Option<&FieldInput> {
        self.inputs.get(self.focused)
    }

    /// Moves focus down, wrapping to the first field.
    pub fn focus_next(&mut self) -> bool {
        if self.inputs.is_empty() {
            return false;
        }
        self.focused = (self.focused + 1) % self.inputs.len();
        true
    }

    /// Moves focus up, wrapping to the last field.
    pub fn focus_prev(&mut self) -> bool {
        if self.inputs.is_empty() {
            return false;
        }
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.inputs.len() - 1);
        true
    }

    /// Types a character into the focused field.
    ///
    /// A space on a checkbox or choice field toggles it; other characters are
    /// ignored there.
    pub fn insert_char(&mut self, c: char) -> bool {
        let Some(input) = self.inputs.get_mut(self.focused) else {
            return false;
        };

        if input.is_toggle() {
            return c == ' ' && self.toggle();
        }

        input.text.push(c);
        true
    }

    /// Deletes the last character of the focused text field.
    pub fn backspace(&mut self) -> bool {
        self.inputs
            .get_mut(self.focused)
            .filter(|input| !input.is_toggle())
            .and_then(|input| input.text.pop())
            .is_some()
    }

    /// Flips a checkbox or advances a choice field to its next option.
    pub fn toggle(&mut self) -> bool {
        let Some(input) = self.inputs.get_mut(self.focused) else {
            return false;
        };

        match input.field_type {
            FieldType::Checkbox => {
                input.checked = !input.checked;
                true
            }
            FieldType::Select | FieldType::Radio if !input.options.is_empty() => {
                input.choice = (input.choice + 1) % input.options.len();
                true
            }
            _ => false,
        }
    }

    /// Current values keyed by field name, in form order.
    #[must_use]
    pub fn collect(&self) -> FormData {
        self.inputs
            .iter()
            .map(|input| (input.name.clone(), input.value()))
            .collect()
    }

    /// Required fields that are still empty.
    #[must_use]
    pub fn check_required(&self) -> Vec<ValidationError> {
        self.inputs
            .iter()
            .filter(|input| input.required && input.is_empty())
            .map(|input| ValidationError::new(&input.name, &input.required_message))
            .collect()
    }

    /// Errors from the last submit attempt.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Error message for a field from the last submit attempt.
    #[must_use]
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == name)
            .map(|error| error.message.as_str())
    }

    /// Submit outcome: data when every required field is filled, errors
    /// otherwise. The errors are kept for display until the next attempt.
    ///
    /// # Errors
    ///
    /// Returns the unmet `required` rules.
    pub fn submit(&mut self) -> std::result::Result<FormData, Vec<ValidationError>> {
        self.errors = self.check_required();
        if self.errors.is_empty() {
            Ok(self.collect())
        } else {
            Err(self.errors.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FormField, FormSection, RuleKind, ValidationRule};
    use serde_json::json;

    fn required(mut field: FormField) -> FormField {
        field.validation.push(ValidationRule {
            kind: RuleKind::Required,
            value: None,
            message: None,
        });
        field
    }

    fn sample() -> FormConfig {
        let mut plan = FormField::new("plan", "Plan", FieldType::Select);
        plan.options = vec![
            FieldOption {
                label: "Free".into(),
                value: "free".into(),
            },
            FieldOption {
                label: "Pro".into(),
                value: "pro".into(),
            },
        ];
        plan.default_value = Some(json!("pro"));

        let mut age = FormField::new("age", "Age", FieldType::Number);
        age.default_value = Some(json!(30));

        FormConfig {
            title: "Signup".into(),
            sections: vec![FormSection {
                id: "main".into(),
                title: "Main".into(),
                description: None,
                fields: vec![
                    required(FormField::new("name", "Name", FieldType::Text)),
                    age,
                    plan,
                    required(FormField::new("terms", "Terms", FieldType::Checkbox)),
                ],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn seeds_defaults_and_types_values() {
        let form = PreviewForm::from_config(&sample());
        let data = form.collect();

        assert_eq!(data["name"], json!(""));
        assert_eq!(data["age"], json!(30));
        assert_eq!(data["plan"], json!("pro"));
        assert_eq!(data["terms"], json!(false));
        assert_eq!(form.submit_label, "Submit");
    }

    #[test]
    fn submit_reports_missing_required_fields() {
        let mut form = PreviewForm::from_config(&sample());

        let errors = form.submit().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "terms"]);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(form.error_for("terms"), Some("Terms is required"));

        for c in "Ada".chars() {
            form.insert_char(c);
        }
        form.focus_prev();
        assert_eq!(form.focused().unwrap().name, "terms");
        assert!(form.insert_char(' '));

        let data = form.submit().unwrap();
        assert!(form.errors().is_empty());
        assert_eq!(data["name"], json!("Ada"));
        assert_eq!(data["terms"], json!(true));
    }

    #[test]
    fn choice_fields_cycle_and_ignore_typing() {
        let mut form = PreviewForm::from_config(&sample());
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused().unwrap().name, "plan");

        assert!(!form.insert_char('x'));
        assert!(!form.backspace());
        assert!(form.toggle());
        assert_eq!(form.collect()["plan"], json!("free"));
        assert_eq!(form.focused().unwrap().display_value(), "< Free >");
    }

    #[test]
    fn number_fields_fall_back_to_text_or_null() {
        assert_eq!(number_value(""), Value::Null);
        assert_eq!(number_value("2.5"), json!(2.5));
        assert_eq!(number_value("12a"), json!("12a"));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = PreviewForm::from_config(&sample());
        assert!(form.focus_prev());
        assert_eq!(form.focused_index(), 3);
        assert!(form.focus_next());
        assert_eq!(form.focused_index(), 0);

        let mut empty = PreviewForm::from_config(&FormConfig::default());
        assert!(!empty.focus_next());
        assert!(!empty.insert_char('a'));
    }
}
