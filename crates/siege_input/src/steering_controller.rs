//! Steering controller for the two players
//!
//! Controls:
//! - Player 1: W/A/S/D
//! - Player 2: Arrow keys
//!
//! A press is applied the moment it arrives. The last accepted press wins and
//! the heading sticks; releases change nothing.

use siege_core::{Direction, PlayerId, Session};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Four keys mapped onto the four headings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlScheme {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl ControlScheme {
    /// W/A/S/D
    pub fn wasd() -> Self {
        Self {
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }

    /// Arrow keys
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// Heading bound to `key`, if any
    pub fn direction_for(&self, key: KeyCode) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else if key == self.left {
            Some(Direction::Left)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Applies steering keys to a [`SteeringTarget`]
pub struct SteeringController {
    schemes: [ControlScheme; 2],
}

impl Default for SteeringController {
    fn default() -> Self {
        Self::new()
    }
}

impl SteeringController {
    /// Player one on W/A/S/D, player two on the arrow keys
    pub fn new() -> Self {
        Self {
            schemes: [ControlScheme::wasd(), ControlScheme::arrows()],
        }
    }

    /// Which player and heading a key stands for
    pub fn map_key(&self, key: KeyCode) -> Option<(PlayerId, Direction)> {
        PlayerId::ALL.into_iter().find_map(|player| {
            self.schemes[player.index()]
                .direction_for(key)
                .map(|heading| (player, heading))
        })
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a steering key (pressed or released).
    pub fn process_keyboard<T: SteeringTarget>(
        &self,
        key: KeyCode,
        state: ElementState,
        target: &mut T,
    ) -> bool {
        let Some((player, heading)) = self.map_key(key) else {
            return false;
        };

        if state == ElementState::Pressed && !target.steer(player, heading) {
            log::trace!("Ignored {:?} for {}", heading, player);
        }
        true
    }
}

/// Trait for steering
/// Allows the controller to drive a session or any stand-in for it
pub trait SteeringTarget {
    /// Request a new heading; returns false if refused
    fn steer(&mut self, player: PlayerId, heading: Direction) -> bool;
}

impl SteeringTarget for Session {
    fn steer(&mut self, player: PlayerId, heading: Direction) -> bool {
        Session::steer(self, player, heading)
    }
}
