//! Axis-aligned box collision
//!
//! Every entity is a cell-sized rectangle anchored at its top-left position.
//! Overlap uses strict inequalities, so boxes that only share an edge do not
//! collide. That is what lets the player stand in the cell right next to a
//! rock or a bug.

use glam::Vec2;

use super::entity::Entity;

/// Test two rectangles given as (top-left, size) for overlap
#[inline]
pub fn rects_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    pos_a.x < pos_b.x + size_b.x
        && pos_a.x + size_a.x > pos_b.x
        && pos_a.y < pos_b.y + size_b.y
        && pos_a.y + size_a.y > pos_b.y
}

/// Test two entities for overlap
#[inline]
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    rects_overlap(a.pos, a.size(), b.pos, b.size())
}

/// Test whether an entity-sized box at `pos` overlaps any of `others`
pub fn overlaps_any<'a>(
    pos: Vec2,
    size: Vec2,
    others: impl IntoIterator<Item = &'a Entity>,
) -> bool {
    others
        .into_iter()
        .any(|other| rects_overlap(pos, size, other.pos, other.size()))
}
