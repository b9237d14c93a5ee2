//! Engine configuration.
//!
//! Breakpoints, per-device capacities, and the row-cache size can be
//! overridden from JSON. Missing fields take their defaults; unknown fields
//! are rejected.
//!
//! ```
//! use tilegrid_layout::GridConfig;
//!
//! let config = GridConfig::parse_and_validate(
//!     r#"{ "breakpoints": { "tablet": 600, "desktop": 1200 }, "cache_entries": 16 }"#,
//! )
//! .unwrap();
//! assert_eq!(config.breakpoints.desktop(), 1200);
//! assert_eq!(config.capacities.desktop.grid, 24);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tilegrid_core::Breakpoints;

use crate::capacity::CapacityTable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse grid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid config validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Tunables for a [`GridEngine`](crate::GridEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub breakpoints: Breakpoints,
    pub capacities: CapacityTable,
    /// Row cache size in entries.
    pub cache_entries: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::DEFAULT,
            capacities: CapacityTable::DEFAULT,
            cache_entries: 64,
        }
    }
}

impl GridConfig {
    pub fn parse_and_validate(raw_json: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(raw_json)?;
        parsed.validate()?;
        tracing::debug!(
            target: "tilegrid.config",
            tablet = parsed.breakpoints.tablet(),
            desktop = parsed.breakpoints.desktop(),
            cache_entries = parsed.cache_entries,
            "grid config loaded"
        );
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache_entries == 0 {
            return Err(ConfigError::Validation(
                "cache_entries must be at least 1".to_owned(),
            ));
        }
        self.capacities
            .validate()
            .map_err(|msg| ConfigError::Validation(format!("capacities: {msg}")))
    }
}
