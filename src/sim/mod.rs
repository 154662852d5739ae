//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws, reads the
//! keyboard or touches the clock:
//! - `dt` comes from the caller
//! - Seeded RNG only
//! - Stable iteration order (collection index)

pub mod avatar;
pub mod collision;
pub mod entity;
pub mod grid;
pub mod placement;
pub mod state;
pub mod tick;

pub use avatar::{Direction, StepOutcome};
pub use collision::{overlaps, overlaps_any, rects_overlap};
pub use entity::{Entity, EntityKind, SpriteId};
pub use grid::Grid;
pub use placement::{place_without_overlap, sample_cell, spawn_cells};
pub use state::{GameEvent, MAX_PENDING_EVENTS, SessionStats, World};
pub use tick::{resolve_collisions, tick};
