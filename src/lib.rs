//! Gem Crossing - a grid-crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation (grid, entities, collisions, placement, scoring)
//! - `settings`: Data-driven board and scoring configuration
//! - `input`: Key code to direction mapping
//! - `renderer`: Sprite drawing seam for whatever backend hosts the game
//! - `error`: Configuration and placement failures

pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::GameError;
pub use settings::{CollectibleSpec, GameConfig};

/// Reference game configuration constants
pub mod consts {
    /// Fixed frame step used by the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Board dimensions in cells
    pub const NUM_COLUMNS: u32 = 9;
    pub const NUM_ROWS: u32 = 7;

    /// Cell dimensions in pixels
    pub const COLUMN_WIDTH: f32 = 101.0;
    pub const ROW_HEIGHT: f32 = 83.0;

    /// Rows 1..=4 hold the bug lanes, gems and rocks
    pub const LANE_FIRST_ROW: u32 = 1;
    pub const LANE_LAST_ROW: u32 = 4;

    /// Sprites are drawn this many pixels above the row baseline so they sit on the tile
    pub const SPRITE_Y_OFFSET: f32 = 20.0;

    /// Entity counts
    pub const MOVER_COUNT: usize = 4;
    pub const OBSTACLE_COUNT: usize = 3;

    /// Bug speed range in pixels/second (max exclusive)
    pub const MOVER_SPEED_MIN: u32 = 50;
    pub const MOVER_SPEED_MAX: u32 = 250;

    /// Score awarded for reaching the water
    pub const WIN_BONUS: u64 = 50;
    /// Score lost when a bug catches the player
    pub const BUG_PENALTY: u64 = 20;

    /// Rejection-sampling attempts before placement falls back to a free-cell scan
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 256;
}

/// Clamp an externally supplied frame delta to a finite, non-negative value
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
