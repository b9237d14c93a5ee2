//! Row cache for memoizing partition results.
//!
//! This module provides [`RowCache`], which stores the rows produced by
//! [`partition`](crate::partition::partition) keyed by a structural
//! fingerprint of the page items and the partition policy. Repeated renders
//! with an unchanged page (the common case between participant joins and
//! resizes) skip re-partitioning.
//!
//! # Usage
//!
//! ```
//! use tilegrid_core::{GridItem, Tile};
//! use tilegrid_layout::{PartitionPolicy, RowCache, RowCacheKey, partition};
//!
//! let mut cache = RowCache::new(32);
//! let items = vec![GridItem::Tile(Tile::new("a", "Ann"))];
//! let key = RowCacheKey::new(&items, PartitionPolicy::Desktop);
//!
//! let rows = cache.get_or_compute(key, || partition(PartitionPolicy::Desktop, &items));
//! let again = cache.get_or_compute(key, || unreachable!());
//! assert_eq!(rows, again);
//! ```
//!
//! # Ownership
//!
//! The cache is owned by one [`GridEngine`](crate::GridEngine) and lives as
//! long as the conferencing session. There is no process-wide instance.
//!
//! # Invalidation
//!
//! The key covers everything the rows depend on, so joins, leaves, renames,
//! and resizes never need explicit invalidation. [`RowCache::invalidate_all`]
//! exists for session boundaries.
//!
//! # Eviction
//!
//! Least-used entry (by access count) is evicted at capacity.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};
use tilegrid_core::GridItem;

use crate::partition::{PartitionPolicy, Row};

/// Key for row cache lookups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RowCacheKey {
    /// Structural hash of the item sequence.
    pub items_hash: u64,
    /// Item count, kept separately to cheapen collisions.
    pub len: usize,
    pub policy: PartitionPolicy,
}

impl RowCacheKey {
    /// Create a key from the page items and the partition policy.
    pub fn new(items: &[GridItem], policy: PartitionPolicy) -> Self {
        Self {
            items_hash: Self::hash_items(items),
            len: items.len(),
            policy,
        }
    }

    fn hash_items(items: &[GridItem]) -> u64 {
        let mut hasher = FxHasher::default();
        for item in items {
            item.hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[derive(Clone, Debug)]
struct CachedRows {
    rows: Vec<Row>,
    generation: u64,
    access_count: u32,
}

/// Statistics about row cache performance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowCacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    /// Hit rate as a fraction (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Cache of partition results.
#[derive(Debug)]
pub struct RowCache {
    entries: FxHashMap<RowCacheKey, CachedRows>,
    generation: u64,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl RowCache {
    /// Create a cache holding at most `max_entries` results (minimum 1).
    #[inline]
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: FxHashMap::with_capacity_and_hasher(max_entries, Default::default()),
            generation: 0,
            max_entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Get cached rows or compute and cache them.
    pub fn get_or_compute<F>(&mut self, key: RowCacheKey, compute: F) -> Vec<Row>
    where
        F: FnOnce() -> Vec<Row>,
    {
        if let Some(entry) = self.entries.get_mut(&key)
            && entry.generation == self.generation
        {
            self.hits += 1;
            entry.access_count = entry.access_count.saturating_add(1);
            return entry.rows.clone();
        }

        self.misses += 1;
        let rows = compute();

        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            self.evict_lru();
        }

        self.entries.insert(
            key,
            CachedRows {
                rows: rows.clone(),
                generation: self.generation,
                access_count: 1,
            },
        );

        rows
    }

    /// Invalidate all entries by bumping the generation (O(1)).
    #[inline]
    pub fn invalidate_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn stats(&self) -> RowCacheStats {
        let total = self.hits + self.misses;
        RowCacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
            hit_rate: if total > 0 {
                self.hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    #[inline]
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Drop all entries and free their memory.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    fn evict_lru(&mut self) {
        if let Some(key) = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.access_count)
            .map(|(k, _)| *k)
        {
            self.entries.remove(&key);
        }
    }
}

impl Default for RowCache {
    /// Creates a cache with default capacity of 64 entries.
    fn default() -> Self {
        Self::new(64)
    }
}
