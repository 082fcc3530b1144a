//! Collision detection for the light-cycle model
//!
//! Two checks run after every tick:
//! - Boundary: a player's box against the four walls
//! - Trail: a player's box against the hazard part of both trails
//!
//! Boxes are axis-aligned squares and touching counts as overlapping.

use crate::arena::{Arena, WallSide};
use crate::player::{Player, PlayerId};

/// What a player ran into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrashCause {
    /// One of the boundary walls
    Wall(WallSide),
    /// A trail entry; the value is the trail's owner
    Trail(PlayerId),
}

/// A player that crashed this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crash {
    pub player: PlayerId,
    pub cause: CrashCause,
}

impl Crash {
    pub fn new(player: PlayerId, cause: CrashCause) -> Self {
        Self { player, cause }
    }

    /// Whether the player ran into its own trail
    pub fn is_self_inflicted(&self) -> bool {
        self.cause == CrashCause::Trail(self.player)
    }
}

impl std::fmt::Display for Crash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cause {
            CrashCause::Wall(side) => write!(f, "{} hit the {:?} wall", self.player, side),
            CrashCause::Trail(_) if self.is_self_inflicted() => {
                write!(f, "{} ran into its own trail", self.player)
            }
            CrashCause::Trail(owner) => write!(f, "{} ran into the trail of {}", self.player, owner),
        }
    }
}

/// Test a player's current box against the arena walls
pub fn wall_crash(player: &Player, arena: &Arena) -> Option<Crash> {
    arena
        .wall_hit(&player.bounds())
        .map(|side| Crash::new(player.id(), CrashCause::Wall(side)))
}

/// Test a player's current box against the hazard entries of every trail
///
/// The newest entries of each trail (see [`crate::TRAIL_GRACE`]) are the moving
/// head and never count.
pub fn trail_crash(player: &Player, players: &[Player]) -> Option<Crash> {
    let head = player.bounds();
    players.iter().find_map(|owner| {
        owner
            .trail()
            .hazards()
            .iter()
            .any(|&pos| head.intersects(&owner.bounds_at(pos)))
            .then(|| Crash::new(player.id(), CrashCause::Trail(owner.id())))
    })
}

/// Run both checks for every player
///
/// Each player reports at most one crash; a wall hit takes precedence.
pub fn detect_crashes(players: &[Player], arena: &Arena) -> Vec<Crash> {
    players
        .iter()
        .filter_map(|player| wall_crash(player, arena).or_else(|| trail_crash(player, players)))
        .collect()
}
