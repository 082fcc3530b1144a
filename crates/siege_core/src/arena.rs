//! Arena boundary
//!
//! Four wall rectangles inset from the screen edge, computed once from the
//! window dimensions.

use siege_math::{Rect, Vec2};

/// Which wall
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Margin geometry in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArenaLayout {
    /// Gap between the screen edge and the outer side of each wall
    pub inset: f32,
    /// Thickness of each wall
    pub thickness: f32,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            inset: 10.0,
            thickness: 20.0,
        }
    }
}

/// The playing field and its walls (immutable once built)
#[derive(Clone, Debug)]
pub struct Arena {
    size: Vec2,
    walls: [(WallSide, Rect); 4],
}

impl Arena {
    /// Build the walls for a screen of `width` x `height` pixels
    pub fn new(width: f32, height: f32, layout: ArenaLayout) -> Self {
        let ArenaLayout { inset, thickness } = layout;
        let span_x = width - 2.0 * inset;
        let span_y = height - 2.0 * inset;

        let left = Rect::from_origin_size(Vec2::new(inset, inset), Vec2::new(thickness, span_y));
        let right = Rect::from_origin_size(
            Vec2::new(width - inset - thickness, inset),
            Vec2::new(thickness, span_y),
        );
        let top = Rect::from_origin_size(Vec2::new(inset, inset), Vec2::new(span_x, thickness));
        let bottom = Rect::from_origin_size(
            Vec2::new(inset, height - inset - thickness),
            Vec2::new(span_x, thickness),
        );

        Self {
            size: Vec2::new(width, height),
            walls: [
                (WallSide::Left, left),
                (WallSide::Right, right),
                (WallSide::Top, top),
                (WallSide::Bottom, bottom),
            ],
        }
    }

    /// Arena with the default margins
    pub fn with_default_layout(width: f32, height: f32) -> Self {
        Self::new(width, height, ArenaLayout::default())
    }

    /// Screen width the arena was built for
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// All walls
    pub fn walls(&self) -> &[(WallSide, Rect)] {
        &self.walls
    }

    /// First wall the box touches, if any
    pub fn wall_hit(&self, bounds: &Rect) -> Option<WallSide> {
        self.walls
            .iter()
            .find(|(_, wall)| wall.intersects(bounds))
            .map(|(side, _)| *side)
    }
}
