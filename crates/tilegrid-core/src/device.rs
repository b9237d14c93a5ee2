//! Device/viewport classification.
//!
//! [`Breakpoints`] turns a viewport width, an orientation, and an optional
//! user-agent hint into a [`DeviceProfile`]. The result also carries the
//! capability flags the UI-mode collaborator needs (the extended vertical
//! view is desktop-only), so classification never mutates shared state.
//!
//! # Invariants
//!
//! 1. A `Mobile` or `Tablet` hint is authoritative for touch-class devices.
//! 2. Without a touch hint, width decides: `< tablet` → Mobile,
//!    `< desktop` → Tablet, otherwise Desktop.
//! 3. Missing inputs never fail: no width means Desktop, no orientation
//!    means Landscape.
//!
//! # Failure Modes
//!
//! Only [`Breakpoints::new`] can fail, when thresholds are zero or inverted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Device class of the viewing client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Touch-class devices (mobile and tablet).
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::Mobile | Self::Tablet)
    }
}

/// Screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Device-type classification supplied directly by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceHint {
    Mobile,
    Tablet,
    Desktop,
}

/// Device class plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub class: DeviceClass,
    pub orientation: Orientation,
}

impl DeviceProfile {
    #[must_use]
    pub const fn new(class: DeviceClass, orientation: Orientation) -> Self {
        Self { class, orientation }
    }

    #[must_use]
    pub const fn desktop() -> Self {
        Self::new(DeviceClass::Desktop, Orientation::Landscape)
    }

    #[must_use]
    pub const fn is_mobile_landscape(self) -> bool {
        matches!(
            (self.class, self.orientation),
            (DeviceClass::Mobile, Orientation::Landscape)
        )
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Landscape when at least as wide as tall.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        if self.width >= self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Result of classifying a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Classification {
    pub profile: DeviceProfile,
    /// Whether the extended vertical view may be offered. Desktop only.
    pub extended_view_available: bool,
}

/// Invalid breakpoint thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointError {
    ZeroTablet,
    Inverted { tablet: u32, desktop: u32 },
}

impl fmt::Display for BreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTablet => write!(f, "tablet breakpoint must be non-zero"),
            Self::Inverted { tablet, desktop } => write!(
                f,
                "tablet breakpoint {tablet} must be below desktop breakpoint {desktop}"
            ),
        }
    }
}

impl std::error::Error for BreakpointError {}

/// Width thresholds separating mobile, tablet, and desktop viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBreakpoints")]
pub struct Breakpoints {
    tablet: u32,
    desktop: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBreakpoints {
    tablet: u32,
    desktop: u32,
}

impl TryFrom<RawBreakpoints> for Breakpoints {
    type Error = BreakpointError;

    fn try_from(raw: RawBreakpoints) -> Result<Self, Self::Error> {
        Self::new(raw.tablet, raw.desktop)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Breakpoints {
    /// Tablet from 768px, desktop from 1024px.
    pub const DEFAULT: Self = Self {
        tablet: 768,
        desktop: 1024,
    };

    /// Create thresholds, rejecting zero or inverted values.
    pub fn new(tablet: u32, desktop: u32) -> Result<Self, BreakpointError> {
        if tablet == 0 {
            return Err(BreakpointError::ZeroTablet);
        }
        if tablet >= desktop {
            return Err(BreakpointError::Inverted { tablet, desktop });
        }
        Ok(Self { tablet, desktop })
    }

    /// Smallest width classified as tablet.
    #[must_use]
    pub const fn tablet(&self) -> u32 {
        self.tablet
    }

    /// Smallest width classified as desktop.
    #[must_use]
    pub const fn desktop(&self) -> u32 {
        self.desktop
    }

    /// Classify a width on its own.
    #[must_use]
    pub const fn class_for_width(&self, width: u32) -> DeviceClass {
        if width < self.tablet {
            DeviceClass::Mobile
        } else if width < self.desktop {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Classify the viewing client.
    #[must_use]
    pub fn classify(
        &self,
        width: Option<u32>,
        orientation: Option<Orientation>,
        hint: Option<DeviceHint>,
    ) -> Classification {
        let class = match (hint, width) {
            (Some(DeviceHint::Mobile), _) => DeviceClass::Mobile,
            (Some(DeviceHint::Tablet), _) => DeviceClass::Tablet,
            (_, Some(w)) => self.class_for_width(w),
            (_, None) => DeviceClass::Desktop,
        };
        Classification {
            profile: DeviceProfile::new(class, orientation.unwrap_or_default()),
            extended_view_available: class == DeviceClass::Desktop,
        }
    }

    /// Classify from a full viewport, deriving orientation from its aspect.
    #[must_use]
    pub fn classify_viewport(&self, viewport: Viewport, hint: Option<DeviceHint>) -> Classification {
        self.classify(Some(viewport.width), Some(viewport.orientation()), hint)
    }
}
