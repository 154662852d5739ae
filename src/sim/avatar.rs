//! Player movement
//!
//! The player hops one whole cell per command. Rocks are checked first, then
//! the board edges, so a blocked hop is never partially applied.

use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::entity::Entity;
use super::grid::Grid;

/// A mapped movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
    /// Unmapped input; does nothing
    #[default]
    None,
}

/// Result of a single hop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The player landed in a new cell
    Moved,
    /// A rock or the board edge kept the player in place
    Blocked,
    /// The player hopped into the water row; the world must reset them
    ReachedGoal,
    /// No command was given
    Stayed,
}

impl Entity {
    /// Put the player back on the start cell
    pub fn reset_to_start(&mut self, grid: &Grid) {
        self.pos = grid.start_position();
    }

    /// Hop one cell in `direction`
    pub fn step(&mut self, direction: Direction, grid: &Grid, obstacles: &[Entity]) -> StepOutcome {
        let previous = self.pos;

        match direction {
            Direction::Left => self.pos.x -= grid.column_width,
            Direction::Right => self.pos.x += grid.column_width,
            Direction::Up => self.pos.y -= grid.row_height,
            Direction::Down => self.pos.y += grid.row_height,
            Direction::None => return StepOutcome::Stayed,
        }

        if obstacles.iter().any(|rock| overlaps(rock, &*self)) {
            self.pos = previous;
        }

        if self.pos.x < 0.0 || self.pos.x > grid.max_x() {
            self.pos.x = previous.x;
        }

        if self.pos.y < 0.0 {
            return StepOutcome::ReachedGoal;
        } else if self.pos.y > grid.max_y() {
            self.pos.y = previous.y;
        }

        if self.pos == previous {
            StepOutcome::Blocked
        } else {
            StepOutcome::Moved
        }
    }
}
