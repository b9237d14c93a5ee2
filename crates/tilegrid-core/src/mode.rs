//! View modes requested by the UI-mode collaborator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Presentation requested for the video grid.
///
/// `Pinned` composes with the vertical family: the pinned tile takes the main
/// surface and the remainder is laid out as a vertical strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Default,
    Vertical,
    VerticalExtended,
    Pinned,
}

impl ViewMode {
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::Vertical,
        Self::VerticalExtended,
        Self::Pinned,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Vertical => "vertical",
            Self::VerticalExtended => "vertical_extended",
            Self::Pinned => "pinned",
        }
    }

    /// Parse a mode name, falling back to [`ViewMode::Default`].
    ///
    /// An unknown name is a contract violation by the caller, not a user
    /// error, so it is logged and absorbed.
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        match name.parse() {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!(
                    target: "tilegrid.viewmode",
                    requested = %name,
                    error = %err,
                    "unrecognized view mode, using default"
                );
                Self::Default
            }
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown view mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewModeError {
    pub name: String,
}

impl fmt::Display for ParseViewModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view mode {:?}", self.name)
    }
}

impl std::error::Error for ParseViewModeError {}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ParseViewModeError { name: s.to_owned() })
    }
}
