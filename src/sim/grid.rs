//! Board geometry
//!
//! Converts between cell indices and pixel coordinates. Row 0 is the water
//! (goal), the last row is where the player starts, and the lane band in
//! between carries the bugs, gems and rocks.

use std::ops::RangeInclusive;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Grid dimensions and pixel metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
    pub column_width: f32,
    pub row_height: f32,
    /// First row of the lane band (inclusive)
    pub lane_first_row: u32,
    /// Last row of the lane band (inclusive)
    pub lane_last_row: u32,
    /// Upward pixel offset applied to sprites standing on a row
    pub sprite_y_offset: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: NUM_COLUMNS,
            rows: NUM_ROWS,
            column_width: COLUMN_WIDTH,
            row_height: ROW_HEIGHT,
            lane_first_row: LANE_FIRST_ROW,
            lane_last_row: LANE_LAST_ROW,
            sprite_y_offset: SPRITE_Y_OFFSET,
        }
    }
}

impl Grid {
    /// Pixel size of one cell (also the size of every entity)
    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.column_width, self.row_height)
    }

    /// Left edge of a column
    #[inline]
    pub fn column_x(&self, column: u32) -> f32 {
        column as f32 * self.column_width
    }

    /// Baseline of a row
    #[inline]
    pub fn row_y(&self, row: u32) -> f32 {
        row as f32 * self.row_height
    }

    /// Where a sprite standing on `row` is drawn
    #[inline]
    pub fn lane_y(&self, row: u32) -> f32 {
        self.row_y(row) - self.sprite_y_offset
    }

    /// Pixel position of a sprite standing in the given cell
    #[inline]
    pub fn cell_position(&self, column: u32, row: u32) -> Vec2 {
        Vec2::new(self.column_x(column), self.lane_y(row))
    }

    pub fn canvas_width(&self) -> f32 {
        self.columns as f32 * self.column_width
    }

    /// Tiles are drawn square, so the surface height uses the column width
    pub fn canvas_height(&self) -> f32 {
        self.rows as f32 * self.column_width
    }

    /// Rightmost x the player may occupy
    pub fn max_x(&self) -> f32 {
        self.column_x(self.columns - 1)
    }

    /// Lowest y the player may occupy
    pub fn max_y(&self) -> f32 {
        self.row_y(self.rows - 1)
    }

    /// Player start: center column, bottom row, lifted onto the tile
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(
            self.column_x(self.columns / 2),
            self.max_y() - self.sprite_y_offset,
        )
    }

    pub fn lane_rows(&self) -> RangeInclusive<u32> {
        self.lane_first_row..=self.lane_last_row
    }

    pub fn lane_count(&self) -> u32 {
        self.lane_last_row + 1 - self.lane_first_row
    }

    /// Columns items may spawn in (the last column is never used)
    pub fn spawn_columns(&self) -> u32 {
        self.columns - 1
    }

    /// Column index for a pixel x (floored, may be out of range)
    pub fn column_at(&self, x: f32) -> i32 {
        (x / self.column_width).floor() as i32
    }

    /// Row index for a sprite y (undoes the sprite offset, floored)
    pub fn row_at(&self, y: f32) -> i32 {
        ((y + self.sprite_y_offset) / self.row_height).floor() as i32
    }
}
