//! Players
//!
//! A player is an axis-aligned square centred on its position. It moves one
//! step per tick along its heading and records every position in its trail.

use serde::{Deserialize, Serialize};
use siege_math::{Rect, Vec2};

use crate::direction::Direction;
use crate::trail::Trail;

/// Side length of a player square in pixels
pub const DEFAULT_PLAYER_SIZE: f32 = 15.0;

/// Which of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players in index order
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Array index of this player
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The opponent
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// Where and facing which way a player starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spawn {
    pub position: Vec2,
    pub heading: Direction,
}

impl Spawn {
    pub fn new(position: Vec2, heading: Direction) -> Self {
        Self { position, heading }
    }
}

/// A moving square leaving a trail
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    position: Vec2,
    size: Vec2,
    heading: Direction,
    trail: Trail,
}

impl Player {
    /// Create a player at its spawn; the spawn position is the first trail entry
    pub fn new(id: PlayerId, spawn: Spawn, size: Vec2) -> Self {
        Self {
            id,
            position: spawn.position,
            size,
            heading: spawn.heading,
            trail: Trail::starting_at(spawn.position),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Current centre position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Try to change heading
    ///
    /// A reversal of the current heading is rejected and returns false.
    pub fn steer(&mut self, heading: Direction) -> bool {
        if self.heading.is_opposite(heading) {
            log::trace!("{} reversal to {:?} rejected", self.id, heading);
            return false;
        }
        self.heading = heading;
        true
    }

    /// Displacement of one tick lasting `dt` seconds
    ///
    /// The step length is the square's size along the travel axis plus `dt`,
    /// which is constant for a fixed tick.
    pub fn step_vector(&self, dt: f32) -> Vec2 {
        let length = if self.heading.is_horizontal() {
            self.size.x + dt
        } else {
            self.size.y + dt
        };
        self.heading.unit() * length
    }

    /// Move one tick along the heading and record the new position
    pub fn advance(&mut self, dt: f32) {
        self.position += self.step_vector(dt);
        self.trail.push(self.position);
    }

    /// Bounding box of the live square
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    /// Bounding box the square had (or would have) at `position`
    pub fn bounds_at(&self, position: Vec2) -> Rect {
        Rect::from_center_size(position, self.size)
    }
}
