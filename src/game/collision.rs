//! Axis-aligned bounding boxes
//!
//! Collision in this game is nothing more than rectangle overlap between
//! the player's box and each animal's box, checked once per frame.

/// A rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Overlap test on both axes. Boxes that merely touch along an edge
    /// do not count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
