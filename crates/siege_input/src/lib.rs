//! Keyboard steering for Siege
//!
//! This crate maps the two players' control schemes onto headings and
//! applies them to anything implementing [`SteeringTarget`].

mod steering_controller;

pub use steering_controller::{ControlScheme, SteeringController, SteeringTarget};
