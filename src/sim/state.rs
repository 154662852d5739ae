//! World state
//!
//! The world owns every entity, the score and the seeded RNG. Collections are
//! sized once from the config; later resets only move things around.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, SpriteId};
use super::grid::Grid;
use crate::error::GameError;
use crate::settings::GameConfig;

/// Events kept for a host that stops draining; older ones are dropped first
pub const MAX_PENDING_EVENTS: usize = 256;

/// Something the frontend may want to react to (sound, flash, HUD text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player reached the water
    Won { bonus: u64 },
    /// A bug caught the player
    BugHit { penalty: u64 },
    /// The player picked up a gem
    Collected { sprite: SpriteId, value: u32 },
}

/// Counters for the current session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub wins: u32,
    pub bug_hits: u32,
    pub collected: u32,
}

/// Complete game world
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) config: GameConfig,
    pub(crate) grid: Grid,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Score, carried across wins; only `new_session` zeroes it
    pub score: u64,
    /// Frames simulated this session
    pub time_ticks: u64,
    pub stats: SessionStats,
    pub avatar: Entity,
    pub movers: Vec<Entity>,
    pub collectibles: Vec<Entity>,
    pub obstacles: Vec<Entity>,
    /// Events since the last `drain_events`, at most `MAX_PENDING_EVENTS`
    pub(crate) events: VecDeque<GameEvent>,
}

impl World {
    /// Build a world from a config and run the initial placement
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let grid = config.grid.clone();
        let cell = grid.cell_size();

        let movers = (0..config.mover_count)
            .map(|_| Entity::mover(SpriteId::EnemyBug, cell, config.speed_min as f32))
            .collect();
        let collectibles = config
            .collectibles
            .iter()
            .map(|spec| Entity::collectible(spec.sprite, spec.value, cell))
            .collect();
        let obstacles = (0..config.obstacle_count)
            .map(|_| Entity::obstacle(cell))
            .collect();

        let mut world = Self {
            avatar: Entity::avatar(SpriteId::CatGirl, cell),
            movers,
            collectibles,
            obstacles,
            config,
            grid,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            stats: SessionStats::default(),
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        };
        world.new_session()?;

        Ok(world)
    }

    /// Reference board with the given seed
    pub fn with_seed(seed: u64) -> Result<Self, GameError> {
        Self::new(GameConfig::default(), seed)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score, for the HUD
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Start over: zero the score and re-roll every entity
    pub fn new_session(&mut self) -> Result<(), GameError> {
        self.score = 0;
        self.time_ticks = 0;
        self.stats = SessionStats::default();
        self.events.clear();

        self.avatar.reset_to_start(&self.grid);
        self.reset_movers();
        self.reset_items()?;

        log::info!(
            "New session (seed {}): {} bugs, {} gems, {} rocks",
            self.seed,
            self.movers.len(),
            self.collectibles.len(),
            self.obstacles.len()
        );
        Ok(())
    }

    /// Win reset: player back to start and fresh bugs. Gems and rocks stay
    /// where they are unless the config asks for a reshuffle.
    pub fn reset(&mut self) {
        self.avatar.reset_to_start(&self.grid);
        self.reset_movers();

        if self.config.reshuffle_items_on_win {
            if let Err(e) = self.reset_items() {
                log::error!("Failed to reshuffle items: {}", e);
            }
        }
    }

    /// Gems first, then rocks that keep clear of them
    pub fn reset_items(&mut self) -> Result<(), GameError> {
        self.reset_collectibles()?;
        self.reset_obstacles()
    }

    /// Queue an event, dropping the oldest when the queue is full
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take the queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Collectibles still on the board
    pub fn available_collectibles(&self) -> impl Iterator<Item = &Entity> {
        self.collectibles.iter().filter(|gem| gem.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cardinalities() {
        let world = World::with_seed(12345).expect("default config is valid");
        assert_eq!(world.movers.len(), 4);
        assert_eq!(world.collectibles.len(), 6);
        assert_eq!(world.obstacles.len(), 3);
        assert_eq!(world.score(), 0);
        assert_eq!(world.avatar.pos, world.grid().start_position());
        assert_eq!(world.available_collectibles().count(), 6);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            max_placement_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(
            World::new(config, 1),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = World::with_seed(777).expect("valid");
        let b = World::with_seed(777).expect("valid");
        assert_eq!(a.movers, b.movers);
        assert_eq!(a.collectibles, b.collectibles);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_new_session_zeroes_score() {
        let mut world = World::with_seed(5).expect("valid");
        world.score = 120;
        world.stats.wins = 2;
        world.collectibles[0].set_available(false);
        world.avatar.pos.y = 63.0;

        world.new_session().expect("placement succeeds");
        assert_eq!(world.score, 0);
        assert_eq!(world.stats, SessionStats::default());
        assert!(world.collectibles.iter().all(|gem| gem.is_available()));
        assert_eq!(world.avatar.pos, world.grid().start_position());
    }

    #[test]
    fn test_win_reset_keeps_items_and_score() {
        let mut world = World::with_seed(99).expect("valid");
        world.score = 40;
        world.collectibles[2].set_available(false);
        let gems = world.collectibles.clone();
        let rocks = world.obstacles.clone();
        world.avatar.pos = world.grid().cell_position(0, 1);

        world.reset();
        assert_eq!(world.score, 40);
        assert_eq!(world.collectibles, gems);
        assert_eq!(world.obstacles, rocks);
        assert_eq!(world.avatar.pos, world.grid().start_position());
    }

    #[test]
    fn test_win_reset_can_reshuffle_items() {
        let config = GameConfig {
            reshuffle_items_on_win: true,
            ..Default::default()
        };
        let mut world = World::new(config, 99).expect("valid");
        world.collectibles[2].set_available(false);

        world.reset();
        assert!(world.collectibles.iter().all(|gem| gem.is_available()));
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut world = World::with_seed(1).expect("valid");
        world.push_event(GameEvent::Won { bonus: 50 });
        assert_eq!(world.drain_events(), vec![GameEvent::Won { bonus: 50 }]);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_full_queue_drops_oldest() {
        let mut world = World::with_seed(1).expect("valid");
        for value in 0..MAX_PENDING_EVENTS as u32 + 10 {
            world.push_event(GameEvent::Collected {
                sprite: SpriteId::GemBlue,
                value,
            });
        }

        let events = world.drain_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert_eq!(
            events[0],
            GameEvent::Collected {
                sprite: SpriteId::GemBlue,
                value: 10
            }
        );
    }
}
