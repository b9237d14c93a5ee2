//! Synthetic navigation slots and grid items.
//!
//! A [`NavButton`] occupies one grid slot and stands for the participants
//! hidden on earlier (previous) or later (next) pages. Buttons are built by
//! the pagination controller and never appear in the participant list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Tile;

/// Which way a navigation button turns the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Previous,
    Next,
}

/// Small avatar badge shown on a navigation button.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Badge {
    /// Uppercased initials of a hidden participant.
    Initials(String),
    /// Count of hidden participants not given their own badge.
    Overflow(usize),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initials(s) => f.write_str(s),
            Self::Overflow(n) => write!(f, "+{n}"),
        }
    }
}

/// A "show more" / "go back" grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavButton {
    pub direction: NavDirection,
    /// Page to switch to when activated (1-based).
    pub target_page: usize,
    /// Number of participants this button stands for.
    pub hidden_count: usize,
    /// At most two initials badges, then an optional overflow badge.
    pub badges: Vec<Badge>,
    /// Full-name listing for larger surfaces, e.g. `"Ann, Bo and 3+ others"`.
    pub label: String,
}

/// One slot in a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridItem {
    Tile(Tile),
    Nav(NavButton),
}

impl GridItem {
    #[must_use]
    pub fn as_tile(&self) -> Option<&Tile> {
        match self {
            Self::Tile(tile) => Some(tile),
            Self::Nav(_) => None,
        }
    }

    #[must_use]
    pub fn as_nav(&self) -> Option<&NavButton> {
        match self {
            Self::Nav(nav) => Some(nav),
            Self::Tile(_) => None,
        }
    }

    #[must_use]
    pub fn is_nav(&self) -> bool {
        matches!(self, Self::Nav(_))
    }
}

impl From<Tile> for GridItem {
    fn from(tile: Tile) -> Self {
        Self::Tile(tile)
    }
}

impl From<NavButton> for GridItem {
    fn from(nav: NavButton) -> Self {
        Self::Nav(nav)
    }
}
