//! Siege - two-player light-cycle game
//!
//! Library half of the `siege` binary: configuration, input mapping, and the
//! window/simulation/render systems the application handler wires together.

pub mod config;
pub mod input;
pub mod systems;
