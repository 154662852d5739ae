//! Randomized placement
//!
//! Bugs get a random column and speed in their fixed lane. Gems and rocks are
//! rejection-sampled over the lane band so they do not land on their
//! exclusion set. Sampling gives up after `max_placement_attempts` tries and
//! picks among the cells that are still free instead, so a crowded board
//! cannot spin forever.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{overlaps_any, rects_overlap};
use super::grid::Grid;
use super::state::World;
use crate::error::GameError;

/// Random cell in the spawn area (lane rows, last column excluded)
pub fn sample_cell(rng: &mut Pcg32, grid: &Grid) -> Vec2 {
    let column = rng.random_range(0..grid.spawn_columns());
    let row = rng.random_range(grid.lane_rows());
    grid.cell_position(column, row)
}

/// Every cell in the spawn area, row by row
pub fn spawn_cells(grid: &Grid) -> impl Iterator<Item = Vec2> + '_ {
    grid.lane_rows().flat_map(move |row| {
        (0..grid.spawn_columns()).map(move |column| grid.cell_position(column, row))
    })
}

/// Choose `count` cell positions, none of which `excluded` rejects.
///
/// `excluded` sees the candidate and the positions accepted so far in this
/// pass.
pub fn place_without_overlap(
    rng: &mut Pcg32,
    grid: &Grid,
    count: usize,
    max_attempts: u32,
    what: &'static str,
    mut excluded: impl FnMut(Vec2, &[Vec2]) -> bool,
) -> Result<Vec<Vec2>, GameError> {
    let mut placed = Vec::with_capacity(count);

    while placed.len() < count {
        let mut accepted = None;
        for _ in 0..max_attempts {
            let candidate = sample_cell(rng, grid);
            if !excluded(candidate, &placed) {
                accepted = Some(candidate);
                break;
            }
        }

        let pos = match accepted {
            Some(pos) => pos,
            None => {
                log::warn!(
                    "Placing {} #{}: no free cell after {} attempts, scanning board",
                    what,
                    placed.len(),
                    max_attempts
                );
                let free: Vec<Vec2> = spawn_cells(grid)
                    .filter(|cell| !excluded(*cell, &placed))
                    .collect();
                if free.is_empty() {
                    return Err(GameError::BoardFull {
                        what,
                        placed: placed.len(),
                        wanted: count,
                    });
                }
                free[rng.random_range(0..free.len())]
            }
        };
        placed.push(pos);
    }

    Ok(placed)
}

impl World {
    /// Random start column and speed for every bug; bug `i` runs in lane `i`
    pub fn reset_movers(&mut self) {
        let grid = &self.grid;
        let (speed_min, speed_max) = (self.config.speed_min, self.config.speed_max);

        for (i, bug) in self.movers.iter_mut().enumerate() {
            let column = self.rng.random_range(0..grid.spawn_columns());
            let lane = grid.lane_first_row + (i as u32 % grid.lane_count());
            bug.pos = grid.cell_position(column, lane);
            bug.set_speed(self.rng.random_range(speed_min..speed_max) as f32);
        }
    }

    /// Scatter gems so no two share a cell and make them all available again
    pub fn reset_collectibles(&mut self) -> Result<(), GameError> {
        let size = self.grid.cell_size();
        let positions = place_without_overlap(
            &mut self.rng,
            &self.grid,
            self.collectibles.len(),
            self.config.max_placement_attempts,
            "collectible",
            |candidate, placed| placed.iter().any(|p| rects_overlap(candidate, size, *p, size)),
        )?;

        for (gem, pos) in self.collectibles.iter_mut().zip(positions) {
            gem.pos = pos;
            gem.set_available(true);
        }
        Ok(())
    }

    /// Scatter rocks off the gems. Rocks may share a cell with each other
    /// unless `obstacles_avoid_each_other` is set.
    pub fn reset_obstacles(&mut self) -> Result<(), GameError> {
        let size = self.grid.cell_size();
        let avoid_each_other = self.config.obstacles_avoid_each_other;
        let gems = &self.collectibles;

        let positions = place_without_overlap(
            &mut self.rng,
            &self.grid,
            self.obstacles.len(),
            self.config.max_placement_attempts,
            "obstacle",
            |candidate, placed| {
                overlaps_any(candidate, size, gems)
                    || (avoid_each_other
                        && placed.iter().any(|p| rects_overlap(candidate, size, *p, size)))
            },
        )?;

        for (rock, pos) in self.obstacles.iter_mut().zip(positions) {
            rock.pos = pos;
        }
        Ok(())
    }
}
