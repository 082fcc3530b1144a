//! Application systems
//!
//! Window, simulation, and rendering, kept apart from the event handler in main.rs.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
pub use window::{WindowError, WindowSystem};
