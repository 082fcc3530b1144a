//! Player headings

use serde::{Deserialize, Serialize};
use siege_math::Vec2;

/// Movement direction of a player
///
/// Heading is sticky: there is no "stopped" state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// The direct reverse of this heading
    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Check whether `other` is the direct reverse of this heading
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit vector in screen space (+y is down)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::X,
            Direction::Left => -Vec2::X,
            Direction::Down => Vec2::Y,
            Direction::Up => -Vec2::Y,
        }
    }

    /// Whether this heading moves along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }
}
