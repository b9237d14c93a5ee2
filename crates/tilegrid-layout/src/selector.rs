//! Layout selection: the per-render pipeline.
//!
//! [`GridEngine`] picks a [`LayoutState`] from the externally supplied mode
//! flags and runs capacity resolution, pagination, and row partitioning for
//! it. The state is resampled on every call; there are no internal
//! transitions beyond "a pin forces the vertical family for the remainder".
//!
//! # States
//!
//! | State                  | Main surface | Remainder       | Rows          |
//! |------------------------|--------------|-----------------|---------------|
//! | Default                | -            | grid            | device policy |
//! | Vertical               | -            | sidebar strip   | one per row   |
//! | VerticalExtended       | -            | sidebar strip   | two per row   |
//! | PinnedVertical         | pinned tile  | sidebar strip   | one per row   |
//! | PinnedVerticalExtended | pinned tile  | sidebar strip   | two per row   |
//!
//! # Invariants
//!
//! 1. The pinned tile never appears in the paginated rows.
//! 2. A pin whose participant is gone degrades to the unpinned state.
//! 3. Extended variants only occur when the classification allows them.

use serde::{Deserialize, Serialize};
use tilegrid_core::{
    Classification, DeviceProfile, NavButton, ParticipantId, Tile, ViewMode,
};

use crate::cache::{RowCache, RowCacheKey, RowCacheStats};
use crate::capacity::CapacityTable;
use crate::config::GridConfig;
use crate::pagination::paginate;
use crate::partition::{PartitionPolicy, Row, partition};

/// UI-mode flags owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeFlags {
    pub screen_share_active: bool,
    pub whiteboard_active: bool,
    /// The user asked for the sidebar layout without any shared content.
    pub vertical_requested: bool,
    /// Extended (two-per-row) sidebar toggle.
    pub extended_view: bool,
    /// Explicit pin selection.
    pub pinned: Option<ParticipantId>,
}

/// Active presentation for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutState {
    #[default]
    Default,
    Vertical,
    VerticalExtended,
    PinnedVertical,
    PinnedVerticalExtended,
}

impl LayoutState {
    /// Pick the state for the given flags.
    #[must_use]
    pub fn select(flags: &ModeFlags, pin_present: bool, classification: &Classification) -> Self {
        let extended = flags.extended_view && classification.extended_view_available;
        if pin_present {
            return if extended {
                Self::PinnedVerticalExtended
            } else {
                Self::PinnedVertical
            };
        }
        if flags.screen_share_active || flags.whiteboard_active || flags.vertical_requested {
            return if extended {
                Self::VerticalExtended
            } else {
                Self::Vertical
            };
        }
        Self::Default
    }

    #[must_use]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::PinnedVertical | Self::PinnedVerticalExtended)
    }

    #[must_use]
    pub const fn is_extended(self) -> bool {
        matches!(self, Self::VerticalExtended | Self::PinnedVerticalExtended)
    }

    /// View mode used for capacity resolution.
    #[must_use]
    pub const fn view_mode(self) -> ViewMode {
        match self {
            Self::Default => ViewMode::Default,
            Self::Vertical => ViewMode::Vertical,
            Self::PinnedVertical => ViewMode::Pinned,
            Self::VerticalExtended | Self::PinnedVerticalExtended => ViewMode::VerticalExtended,
        }
    }

    /// Row policy for the paginated remainder.
    #[must_use]
    pub const fn partition_policy(self, profile: DeviceProfile) -> PartitionPolicy {
        match self {
            Self::Default => PartitionPolicy::for_profile(profile),
            Self::Vertical | Self::PinnedVertical => PartitionPolicy::Strip,
            Self::VerticalExtended | Self::PinnedVerticalExtended => PartitionPolicy::Extended,
        }
    }
}

/// Page position after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageInfo {
    pub current: usize,
    pub count: usize,
    pub is_paginating: bool,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub state: LayoutState,
    pub profile: DeviceProfile,
    pub capacity: usize,
    /// Large focal tile, outside pagination.
    pub pinned: Option<Tile>,
    pub rows: Vec<Row>,
    pub page: PageInfo,
}

impl GridLayout {
    /// No pinned surface and no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pinned.is_none() && self.rows.is_empty()
    }

    /// Slots used by the paginated rows (tiles and buttons).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Tiles in the paginated rows, in order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows
            .iter()
            .flat_map(|row| row.items.iter())
            .filter_map(|item| item.as_tile())
    }

    pub fn nav_buttons(&self) -> impl Iterator<Item = &NavButton> {
        self.rows
            .iter()
            .flat_map(|row| row.items.iter())
            .filter_map(|item| item.as_nav())
    }
}

/// Receiver of "page changed to N" notifications.
pub trait PageSink {
    fn page_changed(&mut self, page: usize);
}

impl<F: FnMut(usize)> PageSink for F {
    fn page_changed(&mut self, page: usize) {
        self(page)
    }
}

/// Per-session layout engine.
#[derive(Debug, Default)]
pub struct GridEngine {
    capacities: CapacityTable,
    cache: RowCache,
}

impl GridEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacities(capacities: CapacityTable) -> Self {
        Self {
            capacities,
            cache: RowCache::default(),
        }
    }

    /// Engine using a validated configuration.
    #[must_use]
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            capacities: config.capacities,
            cache: RowCache::new(config.cache_entries),
        }
    }

    #[must_use]
    pub fn capacities(&self) -> &CapacityTable {
        &self.capacities
    }

    pub fn cache_stats(&self) -> RowCacheStats {
        self.cache.stats()
    }

    /// Compute the layout for one render.
    pub fn layout(
        &mut self,
        tiles: &[Tile],
        classification: &Classification,
        flags: &ModeFlags,
        page: usize,
    ) -> GridLayout {
        let profile = classification.profile;
        let _span = tracing::debug_span!(
            "tilegrid.layout",
            participants = tiles.len(),
            page,
            class = ?profile.class,
        )
        .entered();

        let pin_id = flags
            .pinned
            .as_ref()
            .or_else(|| tiles.iter().find(|t| t.is_pinned).map(|t| &t.id));
        let pinned = pin_id.and_then(|id| tiles.iter().find(|t| &t.id == id)).cloned();
        if pinned.is_none() && flags.pinned.is_some() {
            tracing::debug!(
                target: "tilegrid.selector",
                pinned = ?flags.pinned,
                "pinned participant not present, ignoring pin"
            );
        }

        let state = LayoutState::select(flags, pinned.is_some(), classification);
        let remainder: Vec<Tile> = match &pinned {
            Some(p) => tiles.iter().filter(|t| t.id != p.id).cloned().collect(),
            None => tiles.to_vec(),
        };

        let capacity = self
            .capacities
            .resolve(profile, state.view_mode(), state.is_pinned());
        let page = paginate(&remainder, capacity, page);

        let policy = state.partition_policy(profile);
        let key = RowCacheKey::new(&page.items, policy);
        let rows = self
            .cache
            .get_or_compute(key, || partition(policy, &page.items));

        tracing::debug!(
            target: "tilegrid.selector",
            ?state,
            capacity,
            page = page.current_page,
            pages = page.page_count,
            rows = rows.len(),
            "layout computed"
        );

        GridLayout {
            state,
            profile,
            capacity,
            pinned,
            rows,
            page: PageInfo {
                current: page.current_page,
                count: page.page_count,
                is_paginating: page.is_paginating,
            },
        }
    }

    /// Notify the caller that a navigation button was activated.
    pub fn activate<S: PageSink + ?Sized>(&self, button: &NavButton, sink: &mut S) {
        tracing::debug!(
            target: "tilegrid.selector",
            direction = ?button.direction,
            target = button.target_page,
            "page change requested"
        );
        sink.page_changed(button.target_page);
    }

    /// Drop cached rows at the end of a conferencing session.
    pub fn end_session(&mut self) {
        self.cache.clear();
        self.cache.reset_stats();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::{Breakpoints, DeviceHint, NavDirection};

    fn people(n: usize) -> Vec<Tile> {
        (0..n)
            .map(|i| Tile::new(format!("p{i}"), format!("Person {i}")))
            .collect()
    }

    fn desktop() -> Classification {
        Breakpoints::DEFAULT.classify(Some(1440), None, None)
    }

    fn mobile() -> Classification {
        Breakpoints::DEFAULT.classify(Some(390), None, Some(DeviceHint::Mobile))
    }

    #[test]
    fn state_selection() {
        let d = desktop();
        let m = mobile();
        let mut flags = ModeFlags::default();
        assert_eq!(LayoutState::select(&flags, false, &d), LayoutState::Default);

        flags.screen_share_active = true;
        assert_eq!(LayoutState::select(&flags, false, &d), LayoutState::Vertical);

        flags.extended_view = true;
        assert_eq!(
            LayoutState::select(&flags, false, &d),
            LayoutState::VerticalExtended
        );
        assert_eq!(LayoutState::select(&flags, false, &m), LayoutState::Vertical);

        flags.screen_share_active = false;
        assert_eq!(
            LayoutState::select(&flags, true, &d),
            LayoutState::PinnedVerticalExtended
        );
        assert_eq!(
            LayoutState::select(&flags, true, &m),
            LayoutState::PinnedVertical
        );
    }

    #[test]
    fn extended_toggle_alone_keeps_default_grid() {
        let flags = ModeFlags {
            extended_view: true,
            ..ModeFlags::default()
        };
        assert_eq!(
            LayoutState::select(&flags, false, &desktop()),
            LayoutState::Default
        );
    }

    #[test]
    fn empty_participants_give_empty_layout() {
        let mut engine = GridEngine::new();
        let layout = engine.layout(&[], &desktop(), &ModeFlags::default(), 1);
        assert!(layout.is_empty());
        assert_eq!(layout.page.count, 1);
    }

    #[test]
    fn pinned_tile_lives_outside_rows() {
        let mut engine = GridEngine::new();
        let tiles = people(6);
        let flags = ModeFlags {
            pinned: Some(ParticipantId::new("p2")),
            ..ModeFlags::default()
        };
        let layout = engine.layout(&tiles, &desktop(), &flags, 1);
        assert_eq!(layout.state, LayoutState::PinnedVertical);
        assert_eq!(layout.pinned.as_ref().map(|t| t.id.as_str()), Some("p2"));
        assert!(layout.tiles().all(|t| t.id.as_str() != "p2"));
        assert_eq!(layout.capacity, 4);
    }

    #[test]
    fn pin_flag_on_tile_is_honored() {
        let mut engine = GridEngine::new();
        let mut tiles = people(3);
        tiles[1].is_pinned = true;
        let layout = engine.layout(&tiles, &desktop(), &ModeFlags::default(), 1);
        assert!(layout.state.is_pinned());
        assert_eq!(layout.pinned.map(|t| t.id.to_string()), Some("p1".into()));
    }

    #[test]
    fn departed_pin_degrades() {
        let mut engine = GridEngine::new();
        let flags = ModeFlags {
            pinned: Some(ParticipantId::new("gone")),
            ..ModeFlags::default()
        };
        let layout = engine.layout(&people(4), &desktop(), &flags, 1);
        assert_eq!(layout.state, LayoutState::Default);
        assert!(layout.pinned.is_none());
        assert_eq!(layout.tiles().count(), 4);
    }

    #[test]
    fn repeated_layout_hits_cache() {
        let mut engine = GridEngine::new();
        let tiles = people(10);
        let flags = ModeFlags::default();
        let a = engine.layout(&tiles, &desktop(), &flags, 1);
        let b = engine.layout(&tiles, &desktop(), &flags, 1);
        assert_eq!(a, b);
        assert_eq!(engine.cache_stats().hits, 1);

        engine.end_session();
        assert_eq!(engine.cache_stats().entries, 0);
    }

    #[test]
    fn activate_reports_target_page() {
        let mut engine = GridEngine::new();
        let tiles = people(30);
        let layout = engine.layout(&tiles, &desktop(), &ModeFlags::default(), 1);
        let next = layout
            .nav_buttons()
            .find(|n| n.direction == NavDirection::Next)
            .expect("next-button")
            .clone();

        let mut seen = Vec::new();
        engine.activate(&next, &mut |page: usize| seen.push(page));
        assert_eq!(seen, [2]);
    }
}
