//! Input mapping from raw events to application actions
//!
//! Maps the keys that control the application itself (quit, new round).
//! Steering keys are NOT mapped here - they go directly to the SteeringController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special keys (not steering)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Start a new round (Enter or R, only once the round is over)
    Restart,
}

/// Maps raw key events to application actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        round_over: bool,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::KeyR if round_over => {
                Some(InputAction::Restart)
            }
            _ => None,
        }
    }
}
