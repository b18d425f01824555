//! Theme palettes and ANSI escape sequence generation.
//!
//! Each of the three catalog themes (`minimal`, `modern`, `classic`) has a
//! color palette stored as TOML under `themes/` and embedded at compile time.
//! A palette directory can be configured to override individual themes.
//!
//! # TOML Format
//!
//! ```toml
//! name = "modern"
//!
//! [colors]
//! header_fg = "#f5f5ff"
//! header_bg = "#5b3cc4"
//! accent_fg = "#ffffff"
//! accent_bg = "#7c5cff"
//! text_normal = "#e4e4f0"
//! text_dim = "#8a8aa3"
//! border = "#3d3d5c"
//! label_fg = "#b9a8ff"
//! focus_fg = "#1b1b2f"
//! focus_bg = "#c3b5ff"
//! success_fg = "#0f2e1d"
//! success_bg = "#5ee0a0"
//! error_fg = "#ff6b8a"
//! ```
//!
//! # Example
//!
//! ```rust
//! use formshell::app::ThemeId;
//! use formshell::ui::theme::{Theme, ThemeSet};
//!
//! let palettes = ThemeSet::default();
//! let modern = palettes.get(ThemeId::Modern);
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(modern.name, "modern");
//! ```

use crate::app::modes::ThemeId;
use crate::domain::{FormShellError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active tab and active theme chip.
    pub accent_fg: String,
    pub accent_bg: String,

    pub text_normal: String,
    pub text_dim: String,
    pub border: String,

    /// Field labels and section titles.
    pub label_fg: String,

    /// Focused field input.
    pub focus_fg: String,
    pub focus_bg: String,

    /// Submission banner.
    pub success_fg: String,
    #[serde(default)]
    pub success_bg: Option<String>,

    /// Validation errors and load failures.
    pub error_fg: String,
}

impl Theme {
    /// Loads the built-in palette for a catalog theme.
    ///
    /// # Errors
    ///
    /// Returns [`FormShellError::Theme`] if the embedded TOML fails to parse.
    pub fn builtin(id: ThemeId) -> Result<Self> {
        let toml_str = match id {
            ThemeId::Minimal => include_str!("../../themes/minimal.toml"),
            ThemeId::Modern => include_str!("../../themes/modern.toml"),
            ThemeId::Classic => include_str!("../../themes/classic.toml"),
        };

        Self::parse(toml_str)
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FormShellError::Io`] if the file cannot be read and
    /// [`FormShellError::Theme`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| FormShellError::Theme(e.to_string()))
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// Palettes for all three catalog themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    minimal: Theme,
    modern: Theme,
    classic: Theme,
}

impl ThemeSet {
    /// Loads the three built-in palettes.
    ///
    /// # Errors
    ///
    /// Returns [`FormShellError::Theme`] if an embedded palette fails to parse.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            minimal: Theme::builtin(ThemeId::Minimal)?,
            modern: Theme::builtin(ThemeId::Modern)?,
            classic: Theme::builtin(ThemeId::Classic)?,
        })
    }

    /// Replaces built-in palettes with `<dir>/<id>.toml` where such files exist.
    ///
    /// Files that fail to load are logged and the built-in palette is kept.
    #[must_use]
    pub fn with_overrides(mut self, dir: &Path) -> Self {
        for id in [ThemeId::Minimal, ThemeId::Modern, ThemeId::Classic] {
            let path = dir.join(format!("{id}.toml"));
            if !path.exists() {
                continue;
            }
            match Theme::from_file(&path) {
                Ok(theme) => {
                    tracing::debug!(theme = %id, path = %path.display(), "loaded palette override");
                    *self.get_mut(id) = theme;
                }
                Err(e) => {
                    tracing::debug!(
                        theme = %id,
                        path = %path.display(),
                        error = %e,
                        "failed to load palette override, keeping built-in"
                    );
                }
            }
        }
        self
    }

    #[must_use]
    pub const fn get(&self, id: ThemeId) -> &Theme {
        match id {
            ThemeId::Minimal => &self.minimal,
            ThemeId::Modern => &self.modern,
            ThemeId::Classic => &self.classic,
        }
    }

    fn get_mut(&mut self, id: ThemeId) -> &mut Theme {
        match id {
            ThemeId::Minimal => &mut self.minimal,
            ThemeId::Modern => &mut self.modern,
            ThemeId::Classic => &mut self.classic,
        }
    }
}

impl Default for ThemeSet {
    /// Returns the built-in palettes.
    ///
    /// # Panics
    ///
    /// Panics if an embedded palette fails to parse, which the unit tests rule
    /// out.
    fn default() -> Self {
        Self::builtin().expect("built-in theme palettes should always parse")
    }
}
