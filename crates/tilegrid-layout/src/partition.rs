//! Row partitioning for grid items.
//!
//! Given the ordered items of one page (tiles and navigation buttons), decide
//! how many rows they occupy and which items go in each row. Each rule set is
//! a [`PartitionPolicy`]; [`row_sizes`] gives the shape and [`partition`]
//! materializes the rows.
//!
//! # Policies
//!
//! | Policy           | Shape                                                   |
//! |------------------|---------------------------------------------------------|
//! | MobileLandscape  | n <= 3: one row; otherwise two rows, `ceil(n/2)` first  |
//! | Compact          | n <= 3: one row; n == 4: 2+2; otherwise `ceil(n/3)` chunks |
//! | Desktop          | 1/2/3/4 rows for n <= 2/6/15/more, earliest rows larger |
//! | Extended         | fixed rows of 2                                         |
//! | Strip            | one item per row                                        |
//!
//! # Invariants
//!
//! 1. Row sizes sum to the item count; no row is empty.
//! 2. Item order is preserved across rows.
//! 3. Desktop row sizes are non-increasing and differ by at most one.

use serde::{Deserialize, Serialize};
use tilegrid_core::{DeviceClass, DeviceProfile, GridItem};

/// Rule set used to split a page into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionPolicy {
    MobileLandscape,
    /// Mobile portrait and tablets.
    Compact,
    Desktop,
    /// Extended vertical view, two per row.
    Extended,
    /// Vertical sidebar, one per row.
    Strip,
}

impl PartitionPolicy {
    /// Grid policy for a device profile.
    #[must_use]
    pub const fn for_profile(profile: DeviceProfile) -> Self {
        match profile.class {
            DeviceClass::Desktop => Self::Desktop,
            DeviceClass::Mobile if profile.is_mobile_landscape() => Self::MobileLandscape,
            DeviceClass::Mobile | DeviceClass::Tablet => Self::Compact,
        }
    }
}

/// One rendered row plus the sizing metadata the styling layer needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    /// Zero-based row position.
    pub index: usize,
    pub items: Vec<GridItem>,
    /// Item count across every row of the group.
    pub group_len: usize,
}

impl Row {
    /// Item count in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Desktop row count for `n` items.
#[must_use]
pub const fn desktop_row_count(n: usize) -> usize {
    match n {
        0 => 0,
        1..=2 => 1,
        3..=6 => 2,
        7..=15 => 3,
        _ => 4,
    }
}

fn chunked(n: usize, chunk: usize) -> Vec<usize> {
    let chunk = chunk.max(1);
    let mut sizes = Vec::with_capacity(n.div_ceil(chunk));
    let mut left = n;
    while left > 0 {
        let size = left.min(chunk);
        sizes.push(size);
        left -= size;
    }
    sizes
}

fn balanced(n: usize, rows: usize) -> Vec<usize> {
    if rows == 0 {
        return Vec::new();
    }
    let base = n / rows;
    let extra = n % rows;
    (0..rows).map(|i| base + usize::from(i < extra)).collect()
}

/// Row sizes for `n` items under `policy`.
#[must_use]
pub fn row_sizes(policy: PartitionPolicy, n: usize) -> Vec<usize> {
    match policy {
        _ if n == 0 => Vec::new(),
        PartitionPolicy::MobileLandscape if n <= 3 => vec![n],
        PartitionPolicy::MobileLandscape => chunked(n, n.div_ceil(2)),
        PartitionPolicy::Compact if n <= 3 => vec![n],
        PartitionPolicy::Compact if n == 4 => chunked(n, n.div_ceil(2)),
        PartitionPolicy::Compact => chunked(n, n.div_ceil(3)),
        PartitionPolicy::Desktop => balanced(n, desktop_row_count(n)),
        PartitionPolicy::Extended => chunked(n, 2),
        PartitionPolicy::Strip => chunked(n, 1),
    }
}

/// Split `items` into rows under `policy`.
#[must_use]
pub fn partition(policy: PartitionPolicy, items: &[GridItem]) -> Vec<Row> {
    let group_len = items.len();
    let mut offset = 0;
    row_sizes(policy, group_len)
        .into_iter()
        .enumerate()
        .map(|(index, size)| {
            let row = Row {
                index,
                items: items[offset..offset + size].to_vec(),
                group_len,
            };
            offset += size;
            row
        })
        .collect()
}

/// Grid rows for a device profile.
#[must_use]
pub fn partition_into_rows(items: &[GridItem], profile: DeviceProfile) -> Vec<Row> {
    partition(PartitionPolicy::for_profile(profile), items)
}

/// Rows of exactly two, for the extended vertical view.
#[must_use]
pub fn partition_extended(items: &[GridItem]) -> Vec<Row> {
    partition(PartitionPolicy::Extended, items)
}

/// One item per row, for the vertical sidebar.
#[must_use]
pub fn partition_strip(items: &[GridItem]) -> Vec<Row> {
    partition(PartitionPolicy::Strip, items)
}
