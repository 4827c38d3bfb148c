//! Collision and scoring predicates
//!
//! Both are pure functions over axis-aligned boxes so they can be tested in
//! isolation from the tick loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Strict overlap test. Boxes that only share an edge do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// True once the entity's left edge is strictly past the obstacle's right edge
#[inline]
pub fn has_passed(entity_x: f32, obstacle: &Rect) -> bool {
    entity_x > obstacle.right()
}
