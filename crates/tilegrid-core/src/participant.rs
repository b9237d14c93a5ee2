#![forbid(unsafe_code)]

//! Participant identity and video tiles.
//!
//! A [`Tile`] is the renderable unit for one participant's video surface.
//! Tiles are built by the media collaborator once per render and treated as
//! immutable values for the duration of a layout computation.
//!
//! # Invariants
//!
//! 1. [`collect_tiles`] preserves the collaborator's order exactly.
//! 2. A handle without a video track never becomes a tile.
//! 3. `Hash`/`Eq` on [`Tile`] are structural over every field, so two tiles
//!    compare equal only when every rendered attribute matches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a participant across renders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create an identifier from any string-like value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ParticipantId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// One participant's video surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: ParticipantId,
    pub display_name: String,
    /// This tile is the viewing user's own camera.
    #[serde(default)]
    pub is_local: bool,
    /// The participant carries a pin flag from the session.
    #[serde(default)]
    pub is_pinned: bool,
}

impl Tile {
    /// Create a remote, unpinned tile.
    pub fn new(id: impl Into<ParticipantId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            is_local: false,
            is_pinned: false,
        }
    }

    /// Mark the tile as the local participant (builder pattern).
    #[must_use]
    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }

    /// Mark the tile as pinned (builder pattern).
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }
}

/// What the media/session collaborator exposes for a live participant.
pub trait ParticipantHandle {
    fn id(&self) -> ParticipantId;
    fn display_name(&self) -> &str;
    fn is_local(&self) -> bool;
    fn is_pinned(&self) -> bool;
}

/// Build the ordered participant list from live handles.
///
/// Only handles for which `has_video` returns `true` are eligible to become
/// tiles. Order is preserved.
pub fn collect_tiles<'a, H, I, F>(handles: I, mut has_video: F) -> Vec<Tile>
where
    H: ParticipantHandle + 'a,
    I: IntoIterator<Item = &'a H>,
    F: FnMut(&H) -> bool,
{
    handles
        .into_iter()
        .filter(|h| has_video(h))
        .map(|h| Tile {
            id: h.id(),
            display_name: h.display_name().to_owned(),
            is_local: h.is_local(),
            is_pinned: h.is_pinned(),
        })
        .collect()
}
