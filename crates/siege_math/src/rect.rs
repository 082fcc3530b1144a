//! Axis-aligned rectangles
//!
//! Used both as collision boxes and as the primitive the renderer draws.

use crate::Vec2;

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum corner (top-left in screen space)
    pub min: Vec2,
    /// Maximum corner (bottom-right in screen space)
    pub max: Vec2,
}

impl Rect {
    /// Create a new rectangle from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Create a rectangle centered at a position with the given full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Check whether two rectangles overlap
    ///
    /// Ranges are closed, so rectangles that only share an edge or a corner
    /// still count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.max.x < other.min.x || self.min.x > other.max.x {
            return false;
        }
        if self.max.y < other.min.y || self.min.y > other.max.y {
            return false;
        }
        true
    }

    /// Grow the rectangle outward by `amount` on every side
    pub fn expanded(&self, amount: f32) -> Self {
        let grow = Vec2::splat(amount);
        Self {
            min: self.min - grow,
            max: self.max + grow,
        }
    }
}
