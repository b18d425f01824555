//! View and theme selection types.
//!
//! The shell always has exactly one [`ViewMode`] and one [`ThemeId`] active.
//! The theme catalog [`THEMES`] is a fixed, process-wide list that UI controls
//! use to offer theme choices.
//!
//! # Example
//!
//! ```rust
//! use formshell::app::modes::{ThemeId, ViewMode, THEMES};
//!
//! let view: ViewMode = "preview".parse().unwrap();
//! assert_eq!(view, ViewMode::Preview);
//! assert_eq!(THEMES.len(), 3);
//! assert_eq!(ThemeId::Modern.next(), ThemeId::Classic);
//! ```

use std::fmt;
use std::str::FromStr;

/// Which collaborator is currently visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Form definition outline and theme picker.
    #[default]
    Builder,

    /// Interactive rendering of the current form.
    Preview,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builder => "builder",
            Self::Preview => "preview",
        }
    }

    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Builder => Self::Preview,
            Self::Preview => Self::Builder,
        }
    }
}

/// Presentation variant applied uniformly to the active view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    Minimal,
    #[default]
    Modern,
    Classic,
}

impl ThemeId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Modern => "modern",
            Self::Classic => "classic",
        }
    }

    /// Next theme in catalog order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Minimal => Self::Modern,
            Self::Modern => Self::Classic,
            Self::Classic => Self::Minimal,
        }
    }

    /// Catalog entry for this id.
    #[must_use]
    pub fn descriptor(self) -> &'static ThemeDescriptor {
        match self {
            Self::Minimal => &THEMES[0],
            Self::Modern => &THEMES[1],
            Self::Classic => &THEMES[2],
        }
    }
}

/// Immutable catalog record describing one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
}

/// The three available themes, in display order.
pub const THEMES: [ThemeDescriptor; 3] = [
    ThemeDescriptor {
        id: ThemeId::Minimal,
        name: "Minimal",
        description: "Clean and simple",
    },
    ThemeDescriptor {
        id: ThemeId::Modern,
        name: "Modern",
        description: "Vibrant and rounded",
    },
    ThemeDescriptor {
        id: ThemeId::Classic,
        name: "Classic",
        description: "Traditional serif",
    },
];

/// Returned when a view or theme name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode `{}`", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for ViewMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builder" => Ok(Self::Builder),
            "preview" => Ok(Self::Preview),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl FromStr for ThemeId {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "modern" => Ok(Self::Modern),
            "classic" => Ok(Self::Classic),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_fixed() {
        let ids: Vec<ThemeId> = THEMES.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![ThemeId::Minimal, ThemeId::Modern, ThemeId::Classic]);

        for descriptor in &THEMES {
            assert_eq!(descriptor.id.descriptor(), descriptor);
        }
    }

    #[test]
    fn next_cycles_through_catalog() {
        let mut theme = ThemeId::Minimal;
        let mut seen = vec![theme];
        for _ in 0..3 {
            theme = theme.next();
            seen.push(theme);
        }
        assert_eq!(
            seen,
            vec![ThemeId::Minimal, ThemeId::Modern, ThemeId::Classic, ThemeId::Minimal]
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(" Classic ".parse::<ThemeId>(), Ok(ThemeId::Classic));
        assert_eq!("BUILDER".parse::<ViewMode>(), Ok(ViewMode::Builder));
        assert_eq!(
            "neon".parse::<ThemeId>(),
            Err(UnknownMode("neon".to_string()))
        );
    }

    #[test]
    fn defaults_match_initial_shell_state() {
        assert_eq!(ViewMode::default(), ViewMode::Builder);
        assert_eq!(ThemeId::default(), ThemeId::Modern);
        assert_eq!(ViewMode::Builder.toggled(), ViewMode::Preview);
    }
}
