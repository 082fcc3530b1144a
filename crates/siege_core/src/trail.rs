//! Trail history
//!
//! Every tick appends the player's new position. The trail is both what gets
//! drawn and what players crash into.

use siege_math::Vec2;

/// Number of most recent trail entries that belong to the moving head
/// and are never treated as a hazard.
pub const TRAIL_GRACE: usize = 2;

/// Append-only position history, oldest first
#[derive(Clone, Debug, Default)]
pub struct Trail {
    positions: Vec<Vec2>,
}

impl Trail {
    /// Create a trail whose first entry is the starting position
    pub fn starting_at(position: Vec2) -> Self {
        Self {
            positions: vec![position],
        }
    }

    /// Append a position
    pub fn push(&mut self, position: Vec2) {
        self.positions.push(position);
    }

    /// All entries, oldest first
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Entries old enough to crash into: everything but the last
    /// [`TRAIL_GRACE`] entries.
    pub fn hazards(&self) -> &[Vec2] {
        let end = self.positions.len().saturating_sub(TRAIL_GRACE);
        &self.positions[..end]
    }
}
