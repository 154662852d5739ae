//! Game configuration
//!
//! Board geometry, entity counts and scoring rules. `Default` is the reference
//! board; a JSON file can override any subset of the fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::{Grid, SpriteId};

/// One collectible slot: which sprite it uses and how many points it is worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectibleSpec {
    pub sprite: SpriteId,
    pub value: u32,
}

impl CollectibleSpec {
    pub const fn new(sprite: SpriteId, value: u32) -> Self {
        Self { sprite, value }
    }
}

/// The reference gem table
pub const DEFAULT_COLLECTIBLES: [CollectibleSpec; 6] = [
    CollectibleSpec::new(SpriteId::GemOrange, 15),
    CollectibleSpec::new(SpriteId::GemBlue, 10),
    CollectibleSpec::new(SpriteId::GemGreen, 5),
    CollectibleSpec::new(SpriteId::Star, 30),
    CollectibleSpec::new(SpriteId::Heart, 20),
    CollectibleSpec::new(SpriteId::Key, 25),
];

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board geometry
    pub grid: Grid,

    // === Entities ===
    /// Number of bugs (one per lane, wrapping when there are more bugs than lanes)
    pub mover_count: usize,
    /// Number of rocks
    pub obstacle_count: usize,
    /// Collectible slots, in placement order
    pub collectibles: Vec<CollectibleSpec>,

    // === Bugs ===
    /// Minimum bug speed (pixels/second, inclusive)
    pub speed_min: u32,
    /// Maximum bug speed (pixels/second, exclusive)
    pub speed_max: u32,

    // === Scoring ===
    pub win_bonus: u64,
    pub bug_penalty: u64,

    // === Placement ===
    /// Rejection-sampling attempts per item before scanning for a free cell
    pub max_placement_attempts: u32,
    /// Keep rocks out of each other's cells (the reference board lets them stack)
    pub obstacles_avoid_each_other: bool,
    /// Re-roll gems and rocks when the player reaches the water
    pub reshuffle_items_on_win: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::default(),

            mover_count: MOVER_COUNT,
            obstacle_count: OBSTACLE_COUNT,
            collectibles: DEFAULT_COLLECTIBLES.to_vec(),

            speed_min: MOVER_SPEED_MIN,
            speed_max: MOVER_SPEED_MAX,

            win_bonus: WIN_BONUS,
            bug_penalty: BUG_PENALTY,

            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            obstacles_avoid_each_other: false,
            reshuffle_items_on_win: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (for writing a starter config file)
    pub fn to_json_string(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Number of cells items may be placed in (last column excluded, lane rows only)
    pub fn placement_capacity(&self) -> usize {
        let columns = self.grid.columns.saturating_sub(1) as usize;
        columns * self.grid.lane_count() as usize
    }

    /// Check the config describes a playable board
    pub fn validate(&self) -> Result<(), GameError> {
        let grid = &self.grid;
        let invalid = |msg: String| -> Result<(), GameError> { Err(GameError::InvalidConfig(msg)) };

        if grid.columns < 2 || grid.rows < 3 {
            return invalid(format!(
                "board must be at least 2x3 cells, got {}x{}",
                grid.columns, grid.rows
            ));
        }
        for (name, v) in [("column_width", grid.column_width), ("row_height", grid.row_height)] {
            if !v.is_finite() || v <= 0.0 {
                return invalid(format!("{name} must be positive, got {v}"));
            }
        }
        // With no offset the top lane sits at y = 0 and the water takes two hops
        if !grid.sprite_y_offset.is_finite()
            || grid.sprite_y_offset <= 0.0
            || grid.sprite_y_offset >= grid.row_height
        {
            return invalid(format!(
                "sprite_y_offset must be in (0, row_height), got {}",
                grid.sprite_y_offset
            ));
        }
        // Row 0 is the goal, the last row is the start; lanes live in between
        if grid.lane_first_row < 1
            || grid.lane_first_row > grid.lane_last_row
            || grid.lane_last_row > grid.rows - 2
        {
            return invalid(format!(
                "lane rows {}..={} must lie within 1..={}",
                grid.lane_first_row,
                grid.lane_last_row,
                grid.rows - 2
            ));
        }
        if self.speed_min >= self.speed_max {
            return invalid(format!(
                "speed range [{}, {}) is empty",
                self.speed_min, self.speed_max
            ));
        }
        if self.max_placement_attempts == 0 {
            return invalid("max_placement_attempts must be at least 1".to_string());
        }

        let capacity = self.placement_capacity();
        let collectibles = self.collectibles.len();
        if collectibles > capacity {
            return invalid(format!(
                "{collectibles} collectibles do not fit in {capacity} lane cells"
            ));
        }
        let obstacle_cells_needed = match (self.obstacle_count, self.obstacles_avoid_each_other) {
            (0, _) => 0,
            (n, true) => n,
            (_, false) => 1,
        };
        if collectibles + obstacle_cells_needed > capacity {
            return invalid(format!(
                "{} obstacles do not fit beside {collectibles} collectibles in {capacity} lane cells",
                self.obstacle_count
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.placement_capacity(), 8 * 4);
        assert_eq!(config.collectibles.len(), 6);
        assert_eq!(config.collectibles.iter().map(|c| c.value).sum::<u32>(), 105);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "win_bonus": 75, "obstacle_count": 5 }"#)
            .expect("valid config");
        assert_eq!(config.win_bonus, 75);
        assert_eq!(config.obstacle_count, 5);
        assert_eq!(config.bug_penalty, BUG_PENALTY);
        assert_eq!(config.grid, Grid::default());
    }

    #[test]
    fn test_json_roundtrip_uses_snake_case_sprites() {
        let json = GameConfig::default().to_json_string().expect("serializable");
        assert!(json.contains("\"gem_orange\""));
        let back = GameConfig::from_json_str(&json).expect("valid config");
        assert_eq!(back, GameConfig::default());
    }

    #[test]
    fn test_rejects_empty_speed_range() {
        let config = GameConfig {
            speed_min: 100,
            speed_max: 100,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_lanes_on_start_row() {
        let mut config = GameConfig::default();
        config.grid.lane_last_row = config.grid.rows - 1;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.grid.lane_first_row = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sprite_offset_must_be_inside_the_row() {
        for offset in [0.0, -1.0, 83.0, f32::NAN] {
            let mut config = GameConfig::default();
            config.grid.sprite_y_offset = offset;
            assert!(
                matches!(config.validate(), Err(GameError::InvalidConfig(_))),
                "offset {offset}"
            );
        }

        let mut config = GameConfig::default();
        config.grid.sprite_y_offset = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_overfull_board() {
        let mut config = GameConfig::default();
        // 2 columns -> 1 usable column x 4 lanes = 4 cells, 6 gems
        config.grid.columns = 2;
        assert!(config.validate().is_err());

        // Exactly full of gems leaves no room for a rock
        config.collectibles.truncate(4);
        assert!(config.validate().is_err());

        config.obstacle_count = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_exclusive_obstacles_need_their_own_cells() {
        let mut config = GameConfig::default();
        config.grid.columns = 4; // 3 x 4 = 12 cells
        config.obstacle_count = 7;
        assert!(config.validate().is_ok());

        config.obstacles_avoid_each_other = true;
        assert!(config.validate().is_err());

        config.obstacle_count = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }
}
