//! Domain layer for the formshell plugin.
//!
//! Contains the data types exchanged between the shell and its collaborators,
//! independent of Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`form_config`]: Form definition model (sections, fields, rules)
//! - [`submission`]: Submitted form data and validation error descriptors
//!
//! # Examples
//!
//! ```
//! use formshell::domain::{FieldType, FormConfig, FormField, FormSection};
//!
//! let config = FormConfig {
//!     title: "Contact".to_string(),
//!     sections: vec![FormSection {
//!         id: "main".to_string(),
//!         title: "Main".to_string(),
//!         description: None,
//!         fields: vec![FormField::new("email", "Email", FieldType::Email)],
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(config.field_count(), 1);
//! ```

pub mod error;
pub mod form_config;
pub mod submission;

pub use error::{FormShellError, Result};
pub use form_config::{
    FieldOption, FieldType, FormConfig, FormField, FormSection, RuleKind, ValidationRule,
};
pub use submission::{FormData, ValidationError};
