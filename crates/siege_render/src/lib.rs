//! 2D Rendering Library
//!
//! This crate provides the wgpu-based renderer that draws the arena, both
//! trails and the walls as flat coloured rectangles.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::RectPipeline`] - Draws screen-space coloured quads
//! - [`renderable::SceneGeometry`] - Converts a Session to vertex data

pub mod context;
pub mod pipeline;
pub mod renderable;

pub use renderable::{Palette, SceneGeometry};
