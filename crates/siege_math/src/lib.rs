//! 2D Mathematics Library
//!
//! This crate provides the small amount of geometry Siege needs.
//!
//! - [`Vec2`] - 2D vector with x, y components (screen pixels, +y down)
//! - [`Rect`] - Axis-aligned rectangle with a closed overlap test

mod vec2;
pub mod rect;

pub use vec2::Vec2;
pub use rect::Rect;
