//! Entities on the board
//!
//! Every object is the same cell-sized box; what it does is decided by its
//! [`EntityKind`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visual asset for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteId {
    EnemyBug,
    CatGirl,
    Rock,
    GemOrange,
    GemBlue,
    GemGreen,
    Star,
    Heart,
    Key,
}

impl SpriteId {
    /// Every sprite, for asset preloading
    pub const ALL: [SpriteId; 9] = [
        SpriteId::EnemyBug,
        SpriteId::CatGirl,
        SpriteId::Rock,
        SpriteId::GemOrange,
        SpriteId::GemBlue,
        SpriteId::GemGreen,
        SpriteId::Star,
        SpriteId::Heart,
        SpriteId::Key,
    ];

    /// Image path the resource loader should fetch
    pub fn asset_path(&self) -> &'static str {
        match self {
            SpriteId::EnemyBug => "images/enemy-bug.png",
            SpriteId::CatGirl => "images/char-cat-girl.png",
            SpriteId::Rock => "images/Rock.png",
            SpriteId::GemOrange => "images/Gem-Orange.png",
            SpriteId::GemBlue => "images/Gem-Blue.png",
            SpriteId::GemGreen => "images/Gem-Green.png",
            SpriteId::Star => "images/Star.png",
            SpriteId::Heart => "images/Heart.png",
            SpriteId::Key => "images/Key.png",
        }
    }
}

/// What an entity is and the state that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A bug crossing its lane left to right (pixels/second)
    Mover { speed: f32 },
    /// A rock the player cannot walk into
    Obstacle,
    /// A gem worth `value` points while `available`
    Collectible { value: u32, available: bool },
    /// The player
    Avatar,
}

/// A cell-sized box on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner in pixels
    pub pos: Vec2,
    size: Vec2,
    pub sprite: SpriteId,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind, sprite: SpriteId, size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
            sprite,
            kind,
        }
    }

    pub fn mover(sprite: SpriteId, size: Vec2, speed: f32) -> Self {
        Self::new(EntityKind::Mover { speed }, sprite, size)
    }

    pub fn obstacle(size: Vec2) -> Self {
        Self::new(EntityKind::Obstacle, SpriteId::Rock, size)
    }

    pub fn collectible(sprite: SpriteId, value: u32, size: Vec2) -> Self {
        Self::new(
            EntityKind::Collectible {
                value,
                available: true,
            },
            sprite,
            size,
        )
    }

    pub fn avatar(sprite: SpriteId, size: Vec2) -> Self {
        Self::new(EntityKind::Avatar, sprite, size)
    }

    /// Fixed at construction
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Horizontal speed, for movers
    pub fn speed(&self) -> Option<f32> {
        match self.kind {
            EntityKind::Mover { speed } => Some(speed),
            _ => None,
        }
    }

    pub fn set_speed(&mut self, new_speed: f32) {
        if let EntityKind::Mover { speed } = &mut self.kind {
            *speed = new_speed;
        }
    }

    /// Point value, for collectibles
    pub fn value(&self) -> Option<u32> {
        match self.kind {
            EntityKind::Collectible { value, .. } => Some(value),
            _ => None,
        }
    }

    /// True only for collectibles that have not been picked up
    pub fn is_available(&self) -> bool {
        matches!(self.kind, EntityKind::Collectible { available: true, .. })
    }

    pub fn set_available(&mut self, is_available: bool) {
        if let EntityKind::Collectible { available, .. } = &mut self.kind {
            *available = is_available;
        }
    }

    /// Whether the renderer should draw this entity
    pub fn is_visible(&self) -> bool {
        match self.kind {
            EntityKind::Collectible { available, .. } => available,
            _ => true,
        }
    }

    /// Pick up a collectible, returning its value the first time only
    pub fn collect(&mut self) -> Option<u32> {
        match &mut self.kind {
            EntityKind::Collectible { value, available } if *available => {
                *available = false;
                Some(*value)
            }
            _ => None,
        }
    }

    /// Advance a mover by `speed * dt`, jumping back to x = 0 once past the
    /// right edge. Other kinds do not move on their own.
    pub fn update(&mut self, dt: f32, canvas_width: f32) {
        if let EntityKind::Mover { speed } = self.kind {
            self.pos.x += speed * dt;
            if self.pos.x > canvas_width {
                self.pos.x = 0.0;
            }
        }
    }
}
