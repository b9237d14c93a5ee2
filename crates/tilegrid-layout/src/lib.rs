#![forbid(unsafe_code)]

//! Capacity, pagination, and row partitioning for the video-tile grid.
//!
//! # Pipeline
//!
//! ```text
//! Classification ─▶ CapacityTable::resolve ─▶ paginate ─▶ partition ─▶ rows
//! ```
//!
//! [`GridEngine`] runs the pipeline once per render for the active
//! [`LayoutState`]. Every stage is a pure function; the engine only adds an
//! instance-owned [`RowCache`].
//!
//! # Example
//!
//! ```
//! use tilegrid_core::{Breakpoints, Tile};
//! use tilegrid_layout::{GridEngine, ModeFlags};
//!
//! let tiles: Vec<Tile> = (0..30)
//!     .map(|i| Tile::new(format!("p{i}"), format!("Person {i}")))
//!     .collect();
//! let classification = Breakpoints::DEFAULT.classify(Some(1440), None, None);
//!
//! let mut engine = GridEngine::new();
//! let layout = engine.layout(&tiles, &classification, &ModeFlags::default(), 1);
//! assert_eq!(layout.slot_count(), 24);
//! assert_eq!(layout.page.count, 2);
//! ```

pub mod cache;
pub mod capacity;
pub mod config;
pub mod pagination;
pub mod partition;
pub mod selector;
pub mod summary;

pub use cache::{RowCache, RowCacheKey, RowCacheStats};
pub use capacity::{CapacityTable, DeviceCapacities, ModeCapacity, resolve_capacity};
pub use config::{ConfigError, GridConfig};
pub use pagination::{Page, page_count, page_start, pages, paginate};
pub use partition::{
    PartitionPolicy, Row, desktop_row_count, partition, partition_extended, partition_into_rows,
    partition_strip, row_sizes,
};
pub use selector::{GridEngine, GridLayout, LayoutState, ModeFlags, PageInfo, PageSink};
