//! Core simulation for Siege
//!
//! This crate owns the whole game model and is independent of windowing:
//!
//! - [`Direction`] - Heading of a player, one of four axis directions
//! - [`Player`] / [`PlayerId`] / [`Spawn`] - A moving square and its identity
//! - [`Trail`] - Append-only history of a player's positions
//! - [`Arena`] - The four boundary walls
//! - [`Crash`] / [`CrashCause`] - Collision results for one tick
//! - [`FixedTimestep`] - Frame-time accumulator producing fixed ticks
//! - [`Session`] - The stateful game loop object, ending in [`GameOver`]

mod direction;
mod trail;
mod player;
mod arena;
pub mod collision;
mod timestep;
mod session;

pub use direction::Direction;
pub use trail::{Trail, TRAIL_GRACE};
pub use player::{Player, PlayerId, Spawn, DEFAULT_PLAYER_SIZE};
pub use arena::{Arena, ArenaLayout, WallSide};
pub use collision::{Crash, CrashCause};
pub use timestep::{FixedTimestep, DEFAULT_TICK_RATE};
pub use session::{GameOver, Outcome, Session, SessionConfig, SessionState, StepOutcome};

// Re-export math types for convenience
pub use siege_math::{Rect, Vec2};
