//! Rendering pipeline components
//!
//! A single render pipeline draws every rectangle of the scene in one pass.

pub mod types;
pub mod rect_pipeline;

// Re-export types
pub use types::{Vertex2D, RectUniforms, QUAD_VERTEX_COUNT, INITIAL_VERTEX_CAPACITY};

// Re-export pipelines
pub use rect_pipeline::RectPipeline;
