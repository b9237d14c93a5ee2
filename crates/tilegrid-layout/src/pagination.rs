#![forbid(unsafe_code)]

//! Pagination with in-grid navigation buttons.
//!
//! When more participants are live than a page can hold, the overflow is
//! reached through "previous" and "next" buttons that sit in the grid and
//! consume a slot each. The number of tiles on a page therefore depends on
//! which buttons it shows, and which buttons it shows depends on how many
//! tiles remain.
//!
//! # Page shape
//!
//! With capacity `c`:
//!
//! - page 1 shows `c - 1` tiles and a next-button;
//! - every middle page shows a previous-button, `c - 2` tiles, and a
//!   next-button;
//! - the last page shows a previous-button and up to `c - 1` tiles.
//!
//! The start offset of page `p >= 2` is `(c - 1) + (p - 2) * (c - 2)`.
//!
//! # Invariants
//!
//! 1. Tiles plus buttons on a page never exceed the capacity.
//! 2. Visiting pages `1..=page_count` shows each participant exactly once,
//!    in input order.
//! 3. A page always shows at least one tile. For capacities below 3 the
//!    previous-button is dropped first, then the next-button.
//! 4. `paginate` is pure: identical inputs give identical pages.
//!
//! # Failure Modes
//!
//! None. Capacity 0 is clamped to 1 and page numbers outside
//! `1..=page_count` are clamped into range.

use std::ops::Range;

use tilegrid_core::{GridItem, NavButton, NavDirection, Tile};

use crate::summary::nav_button;

/// One page of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Optional previous-button, tiles, optional next-button.
    pub items: Vec<GridItem>,
    /// `true` once the viewer has moved past the first page.
    pub is_paginating: bool,
    /// Page actually rendered, after clamping.
    pub current_page: usize,
    pub page_count: usize,
    /// Indices into the participant list of the tiles on this page.
    pub visible: Range<usize>,
}

impl Page {
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn previous(&self) -> Option<&NavButton> {
        self.items
            .first()
            .and_then(GridItem::as_nav)
            .filter(|nav| nav.direction == NavDirection::Previous)
    }

    #[must_use]
    pub fn next(&self) -> Option<&NavButton> {
        self.items
            .last()
            .and_then(GridItem::as_nav)
            .filter(|nav| nav.direction == NavDirection::Next)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.items.iter().filter_map(GridItem::as_tile)
    }
}

/// Tiles on the first page of an overflowing list.
#[inline]
fn first_page_len(capacity: usize) -> usize {
    capacity.saturating_sub(1).max(1)
}

/// Tiles on a page that shows both buttons.
#[inline]
fn middle_page_len(capacity: usize) -> usize {
    capacity.saturating_sub(2).max(1)
}

/// Index of the first tile on `page` for an overflowing list.
#[must_use]
pub fn page_start(page: usize, capacity: usize) -> usize {
    let capacity = capacity.max(1);
    match page {
        0 | 1 => 0,
        p => first_page_len(capacity) + (p - 2) * middle_page_len(capacity),
    }
}

/// Number of pages needed for `len` participants.
#[must_use]
pub fn page_count(len: usize, capacity: usize) -> usize {
    let capacity = capacity.max(1);
    if len <= capacity {
        return 1;
    }
    let rest = len - first_page_len(capacity);
    // Tiles that fit next to the previous-button on the last page.
    let last = capacity.saturating_sub(1).max(1);
    if rest <= last {
        return 2;
    }
    2 + (rest - last).div_ceil(middle_page_len(capacity))
}

/// Compute the visible slice and navigation buttons for `current_page`.
#[must_use]
pub fn paginate(participants: &[Tile], capacity: usize, current_page: usize) -> Page {
    let capacity = if capacity == 0 {
        tracing::warn!(
            target: "tilegrid.pagination",
            "capacity below 1, clamping to 1"
        );
        1
    } else {
        capacity
    };
    let len = participants.len();

    if len <= capacity {
        return Page {
            items: participants.iter().cloned().map(GridItem::Tile).collect(),
            is_paginating: false,
            current_page: 1,
            page_count: 1,
            visible: 0..len,
        };
    }

    let pages = page_count(len, capacity);
    let page = current_page.clamp(1, pages);
    if page != current_page {
        tracing::debug!(
            target: "tilegrid.pagination",
            requested = current_page,
            clamped = page,
            pages,
            "page out of range"
        );
    }

    let start = page_start(page, capacity);
    let mut has_prev = page > 1;
    let mut budget = capacity - usize::from(has_prev);

    // A next-button is needed if the tentative slice leaves anything behind;
    // it then takes one of the tentative slots.
    let mut has_next = start + budget.max(1) < len;
    if has_next {
        budget = budget.saturating_sub(1);
    }
    let take = budget.max(1).min(len - start);

    if take + usize::from(has_prev) + usize::from(has_next) > capacity {
        has_prev = false;
    }
    if take + usize::from(has_next) > capacity {
        has_next = false;
    }

    let end = start + take;
    let mut items = Vec::with_capacity(take + 2);
    if has_prev {
        items.push(GridItem::Nav(nav_button(
            NavDirection::Previous,
            page - 1,
            &participants[..start],
        )));
    }
    items.extend(participants[start..end].iter().cloned().map(GridItem::Tile));
    if has_next {
        items.push(GridItem::Nav(nav_button(
            NavDirection::Next,
            page + 1,
            &participants[end..],
        )));
    }

    Page {
        items,
        is_paginating: page > 1,
        current_page: page,
        page_count: pages,
        visible: start..end,
    }
}

/// Every page of `participants`, in order.
pub fn pages(participants: &[Tile], capacity: usize) -> impl Iterator<Item = Page> + '_ {
    let count = page_count(participants.len(), capacity);
    (1..=count).map(move |page| paginate(participants, capacity, page))
}
