//! Rendering seam
//!
//! The game never owns a drawing surface. A host implements [`SpriteCanvas`]
//! (canvas 2D, wgpu, a terminal...) and [`render_world`] walks the world in
//! paint order once per frame.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use crate::sim::{SpriteId, World};

/// Backend that can paint a loaded sprite at a pixel position
pub trait SpriteCanvas {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32);

    /// Draw the score HUD
    fn draw_score(&mut self, score: u64);
}

/// Paint every visible entity, back to front, then the score.
///
/// Rocks and gems sit under the bugs, and the player is always on top.
/// Picked-up gems are skipped.
pub fn render_world(world: &World, canvas: &mut impl SpriteCanvas) {
    let layers = [
        world.obstacles.as_slice(),
        world.collectibles.as_slice(),
        world.movers.as_slice(),
        std::slice::from_ref(&world.avatar),
    ];

    for entity in layers.into_iter().flatten() {
        if entity.is_visible() {
            canvas.draw_sprite(entity.sprite, entity.pos.x, entity.pos.y);
        }
    }

    canvas.draw_score(world.score());
}

/// Format the HUD line
pub fn score_label(score: u64) -> String {
    format!("SCORE: {}", score)
}
