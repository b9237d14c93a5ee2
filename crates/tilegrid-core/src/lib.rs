#![forbid(unsafe_code)]

//! Core: participant tiles, device classification, and view modes.
//!
//! # Role in tilegrid
//! `tilegrid-core` is the input layer of the video-tile layout engine. It owns
//! the value types the engine consumes each render (tiles, device profile,
//! view mode) and the synthetic navigation slots it produces.
//!
//! # Primary responsibilities
//! - **Tile / ParticipantId**: immutable per-render participant surfaces.
//! - **Breakpoints**: viewport width + device hint → [`DeviceProfile`].
//! - **ViewMode**: the presentation requested by the UI-mode collaborator.
//! - **NavButton / GridItem**: what a grid slot can hold.
//!
//! # How it fits in the system
//! `tilegrid-layout` resolves capacities, paginates, and partitions rows
//! over these types. Nothing here performs I/O or holds state across renders.

pub mod device;
pub mod mode;
pub mod nav;
pub mod participant;

pub use device::{
    BreakpointError, Breakpoints, Classification, DeviceClass, DeviceHint, DeviceProfile,
    Orientation, Viewport,
};
pub use mode::{ParseViewModeError, ViewMode};
pub use nav::{Badge, GridItem, NavButton, NavDirection};
pub use participant::{ParticipantHandle, ParticipantId, Tile, collect_tiles};
