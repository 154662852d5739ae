//! Frame update
//!
//! Each frame the scheduler calls [`tick`]: bugs move, then the player is
//! checked against bugs and gems. Player commands are applied separately
//! through [`World::handle_command`] as they arrive.

use super::avatar::{Direction, StepOutcome};
use super::collision::overlaps;
use super::state::{GameEvent, World};
use crate::sanitize_dt;

impl World {
    /// Apply one player command. Reaching the water resets the board and
    /// awards the win bonus.
    pub fn handle_command(&mut self, direction: Direction) -> StepOutcome {
        let outcome = self.avatar.step(direction, &self.grid, &self.obstacles);

        if outcome == StepOutcome::ReachedGoal {
            self.reset();
            let bonus = self.config.win_bonus;
            self.score = self.score.saturating_add(bonus);
            self.stats.wins += 1;
            self.push_event(GameEvent::Won { bonus });
            log::info!("Reached the water! +{} (score {})", bonus, self.score);
        }

        outcome
    }
}

/// Advance the world by one frame of `dt` seconds
pub fn tick(world: &mut World, dt: f32) {
    let clamped = sanitize_dt(dt);
    if clamped != dt {
        log::warn!("Ignoring invalid frame delta {}", dt);
    }

    let canvas_width = world.grid.canvas_width();
    for bug in &mut world.movers {
        bug.update(clamped, canvas_width);
    }

    resolve_collisions(world);
    world.time_ticks += 1;
}

/// Bugs send the player home with a penalty; available gems are picked up
pub fn resolve_collisions(world: &mut World) {
    let penalty = world.config.bug_penalty;

    for i in 0..world.movers.len() {
        if overlaps(&world.movers[i], &world.avatar) {
            world.avatar.reset_to_start(&world.grid);
            world.score = world.score.saturating_sub(penalty);
            world.stats.bug_hits += 1;
            world.push_event(GameEvent::BugHit { penalty });
            log::debug!("Caught by a bug, score {}", world.score);
        }
    }

    for i in 0..world.collectibles.len() {
        if !overlaps(&world.collectibles[i], &world.avatar) {
            continue;
        }
        let gem = &mut world.collectibles[i];
        if let Some(value) = gem.collect() {
            let sprite = gem.sprite;
            world.score = world.score.saturating_add(value as u64);
            world.stats.collected += 1;
            world.push_event(GameEvent::Collected { sprite, value });
            log::debug!("Collected {:?} for {}, score {}", sprite, value, world.score);
        }
    }
}
