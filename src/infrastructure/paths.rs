//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`.
//! These helpers translate user-facing paths (form definition files, palette
//! directories) to sandbox paths and back.

use std::path::PathBuf;

/// Returns the data directory used for plugin logs.
///
/// Resolves to `/host/.local/share/zellij/formshell`, which is
/// `~/.local/share/zellij/formshell` when Zellij was started from the home
/// directory.
///
/// # Examples
///
/// ```
/// use formshell::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/formshell");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("formshell")
}

/// Expands a leading `~` to the sandbox `/host` prefix.
///
/// # Examples
///
/// ```
/// use formshell::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/forms/signup.json"), "/host/forms/signup.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix so paths display as they do on the host.
///
/// # Examples
///
/// ```
/// use formshell::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/forms/signup.json"), "/forms/signup.json");
/// assert_eq!(strip_host_prefix("/tmp/form.json"), "/tmp/form.json");
/// assert_eq!(strip_host_prefix("/hostile/form.json"), "/hostile/form.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}
