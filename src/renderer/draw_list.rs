//! Recorded draw calls
//!
//! A [`SpriteCanvas`] that just remembers what it was asked to paint. Hosts
//! that draw on another thread or across an FFI boundary (the web build hands
//! the list to JavaScript as JSON) replay it on their side.

use serde::{Deserialize, Serialize};

use super::SpriteCanvas;
use crate::sim::SpriteId;

/// One paint operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Sprite { sprite: SpriteId, x: f32, y: f32 },
    Score { score: u64 },
}

/// Draw calls for one frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[cfg(test)]
    pub(crate) fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }
}

impl SpriteCanvas for DrawList {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32) {
        self.commands.push(DrawCommand::Sprite { sprite, x, y });
    }

    fn draw_score(&mut self, score: u64) {
        self.commands.push(DrawCommand::Score { score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::default();
        list.draw_sprite(SpriteId::Heart, 101.0, 63.0);
        list.draw_score(20);
        assert_eq!(list.sprite_count(), 1);
        assert_eq!(
            list.commands,
            vec![
                DrawCommand::Sprite {
                    sprite: SpriteId::Heart,
                    x: 101.0,
                    y: 63.0
                },
                DrawCommand::Score { score: 20 },
            ]
        );

        list.clear();
        assert!(list.commands.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut list = DrawList::default();
        list.draw_sprite(SpriteId::EnemyBug, 0.0, 63.0);
        list.draw_score(5);
        let json = list.to_json().expect("serializable");
        assert_eq!(
            json,
            r#"[{"op":"sprite","sprite":"enemy_bug","x":0.0,"y":63.0},{"op":"score","score":5}]"#
        );
    }
}
