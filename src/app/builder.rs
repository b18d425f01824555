//! Builder collaborator: loads form definitions and outlines them.
//!
//! The builder view shows the structure of the current [`FormConfig`]; the
//! definition itself comes from a JSON or TOML file named in the plugin
//! configuration. Each successful load becomes a "config changed" event for
//! the shell.

use crate::domain::{FormConfig, FormShellError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed source of form definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSource {
    path: PathBuf,
}

impl FormSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the definition file.
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormShellError::Io`] if the file cannot be read and
    /// [`FormShellError::FormConfig`] if it does not parse, has no fields, or
    /// repeats a field name.
    pub fn load(&self) -> Result<FormConfig> {
        let _span = tracing::debug_span!("load_form", path = %self.path.display()).entered();

        let contents = fs::read_to_string(&self.path)?;
        let config = Self::parse(&contents, &self.path)?;
        validate_structure(&config)?;

        tracing::debug!(
            title = %config.title,
            sections = config.sections.len(),
            fields = config.field_count(),
            "form definition loaded"
        );
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<FormConfig> {
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(contents).map_err(|e| FormShellError::FormConfig(e.to_string()))
        } else {
            serde_json::from_str(contents).map_err(|e| FormShellError::FormConfig(e.to_string()))
        }
    }
}

/// Rejects forms without fields or with duplicate field names.
///
/// # Errors
///
/// Returns [`FormShellError::FormConfig`] describing the first problem found.
pub fn validate_structure(config: &FormConfig) -> Result<()> {
    if config.field_count() == 0 {
        return Err(FormShellError::FormConfig(format!(
            "form `{}` has no fields",
            config.title
        )));
    }

    let mut names = HashSet::new();
    for field in config.fields() {
        if !names.insert(field.name.as_str()) {
            return Err(FormShellError::FormConfig(format!(
                "duplicate field name `{}`",
                field.name
            )));
        }
    }

    Ok(())
}

/// One line of the builder outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineRow {
    Section {
        title: String,
        field_count: usize,
    },
    Field {
        label: String,
        name: String,
        field_type: &'static str,
        required: bool,
        rule_count: usize,
    },
}

/// Flattens a definition into section headers followed by their fields.
#[must_use]
pub fn outline(config: &FormConfig) -> Vec<OutlineRow> {
    let mut rows = Vec::with_capacity(config.sections.len() + config.field_count());

    for section in &config.sections {
        rows.push(OutlineRow::Section {
            title: section.title.clone(),
            field_count: section.fields.len(),
        });
        rows.extend(section.fields.iter().map(|field| OutlineRow::Field {
            label: field.label.clone(),
            name: field.name.clone(),
            field_type: field.field_type.as_str(),
            required: field.is_required(),
            rule_count: field.validation.len(),
        }));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldType, FormField, FormSection};
    use std::io::Write;

    fn section(fields: Vec<FormField>) -> FormSection {
        FormSection {
            id: "s".to_string(),
            title: "Section".to_string(),
            description: None,
            fields,
        }
    }

    #[test]
    fn loads_toml_definition() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
title = "Signup"

[[sections]]
id = "account"
title = "Account"

[[sections.fields]]
name = "username"
label = "Username"
type = "text"

[[sections.fields.validation]]
type = "required"
"#
        )
        .unwrap();

        let config = FormSource::new(file.path()).load().unwrap();

        assert_eq!(config.title, "Signup");
        assert!(config.find_field("username").unwrap().is_required());
    }

    #[test]
    fn reports_parse_errors_as_form_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = FormSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, FormShellError::FormConfig(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FormSource::new(dir.path().join("absent.json")).load().unwrap_err();
        assert!(matches!(err, FormShellError::Io(_)));
    }

    #[test]
    fn rejects_duplicates_and_empty_forms() {
        let empty = FormConfig {
            title: "Empty".to_string(),
            ..Default::default()
        };
        assert!(validate_structure(&empty).is_err());

        let duplicated = FormConfig {
            title: "Dup".to_string(),
            sections: vec![
                section(vec![FormField::new("email", "Email", FieldType::Email)]),
                section(vec![FormField::new("email", "Email again", FieldType::Text)]),
            ],
            ..Default::default()
        };
        let err = validate_structure(&duplicated).unwrap_err();
        assert!(err.to_string().contains("duplicate field name `email`"));
    }

    #[test]
    fn outline_lists_sections_then_fields() {
        let config = FormConfig {
            title: "Form".to_string(),
            sections: vec![section(vec![
                FormField::new("a", "A", FieldType::Text),
                FormField::new("b", "B", FieldType::Checkbox),
            ])],
            ..Default::default()
        };

        let rows = outline(&config);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            OutlineRow::Section {
                title: "Section".to_string(),
                field_count: 2
            }
        );
        assert!(matches!(
            &rows[2],
            OutlineRow::Field { name, field_type: "checkbox", required: false, .. } if name == "b"
        ));
    }
}
