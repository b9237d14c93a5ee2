#![forbid(unsafe_code)]

//! Per-page capacity resolution.
//!
//! [`CapacityTable`] answers "how many slots (tiles plus navigation buttons)
//! fit on one page" for a device profile, a view mode, and whether a pinned
//! participant has claimed the main surface.
//!
//! # Desktop defaults
//!
//! | Mode              | Base | Pinned adjustment |
//! |-------------------|------|-------------------|
//! | Default           | 24   | none              |
//! | Vertical          | 5    | -1                |
//! | VerticalExtended  | 10   | -2                |
//! | Pinned            | Vertical strip, adjusted           |
//!
//! The extended strip shows two tiles per physical row, so the pinned tile
//! costs it two logical slots.
//!
//! # Invariants
//!
//! 1. `resolve()` always returns at least 1.
//! 2. `Default` ignores pinning.
//! 3. `VerticalExtended` on a non-desktop profile resolves as `Vertical`.

use serde::{Deserialize, Serialize};
use tilegrid_core::{DeviceClass, DeviceProfile, ViewMode};

/// Capacity of a strip mode and the slots a pinned tile takes from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeCapacity {
    pub base: usize,
    #[serde(default)]
    pub pinned_adjustment: usize,
}

impl ModeCapacity {
    #[must_use]
    pub const fn new(base: usize, pinned_adjustment: usize) -> Self {
        Self {
            base,
            pinned_adjustment,
        }
    }

    /// Capacity with or without a pinned tile, never below 1.
    #[must_use]
    pub fn resolve(self, has_pinned: bool) -> usize {
        let adjustment = if has_pinned { self.pinned_adjustment } else { 0 };
        self.base.saturating_sub(adjustment).max(1)
    }
}

/// Grid and vertical-strip capacities for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceCapacities {
    pub grid: usize,
    pub vertical: ModeCapacity,
}

/// Capacity table for every device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapacityTable {
    pub mobile: DeviceCapacities,
    pub tablet: DeviceCapacities,
    pub desktop: DeviceCapacities,
    /// Extended vertical strip (desktop only).
    pub extended: ModeCapacity,
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CapacityTable {
    pub const DEFAULT: Self = Self {
        mobile: DeviceCapacities {
            grid: 6,
            vertical: ModeCapacity::new(3, 1),
        },
        tablet: DeviceCapacities {
            grid: 12,
            vertical: ModeCapacity::new(4, 1),
        },
        desktop: DeviceCapacities {
            grid: 24,
            vertical: ModeCapacity::new(5, 1),
        },
        extended: ModeCapacity::new(10, 2),
    };

    #[must_use]
    pub const fn for_class(&self, class: DeviceClass) -> &DeviceCapacities {
        match class {
            DeviceClass::Mobile => &self.mobile,
            DeviceClass::Tablet => &self.tablet,
            DeviceClass::Desktop => &self.desktop,
        }
    }

    /// Slots available on one page.
    #[must_use]
    pub fn resolve(&self, profile: DeviceProfile, mode: ViewMode, has_pinned: bool) -> usize {
        let caps = self.for_class(profile.class);
        match mode {
            ViewMode::Default => caps.grid.max(1),
            ViewMode::Vertical => caps.vertical.resolve(has_pinned),
            ViewMode::VerticalExtended if profile.class == DeviceClass::Desktop => {
                self.extended.resolve(has_pinned)
            }
            ViewMode::VerticalExtended => {
                tracing::debug!(
                    target: "tilegrid.capacity",
                    class = ?profile.class,
                    "extended view unavailable, using vertical strip capacity"
                );
                caps.vertical.resolve(has_pinned)
            }
            ViewMode::Pinned => caps.vertical.resolve(true),
        }
    }

    /// Resolve from a mode name supplied by the UI layer.
    ///
    /// Unknown names fall back to the default grid capacity.
    #[must_use]
    pub fn resolve_named(&self, profile: DeviceProfile, mode: &str, has_pinned: bool) -> usize {
        self.resolve(profile, ViewMode::parse_lenient(mode), has_pinned)
    }

    /// Check every row describes a usable capacity.
    pub fn validate(&self) -> Result<(), String> {
        for (name, caps) in [
            ("mobile", &self.mobile),
            ("tablet", &self.tablet),
            ("desktop", &self.desktop),
        ] {
            if caps.grid == 0 {
                return Err(format!("{name}.grid must be at least 1"));
            }
            validate_mode(&format!("{name}.vertical"), caps.vertical)?;
        }
        validate_mode("extended", self.extended)
    }
}

fn validate_mode(name: &str, mode: ModeCapacity) -> Result<(), String> {
    if mode.base == 0 {
        return Err(format!("{name}.base must be at least 1"));
    }
    if mode.pinned_adjustment >= mode.base {
        return Err(format!(
            "{name}.pinned_adjustment ({}) must be below base ({})",
            mode.pinned_adjustment, mode.base
        ));
    }
    Ok(())
}

/// Resolve against [`CapacityTable::DEFAULT`].
#[must_use]
pub fn resolve_capacity(profile: DeviceProfile, mode: ViewMode, has_pinned: bool) -> usize {
    CapacityTable::DEFAULT.resolve(profile, mode, has_pinned)
}
