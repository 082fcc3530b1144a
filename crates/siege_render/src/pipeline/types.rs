//! GPU-compatible data types for the rectangle pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex in screen space (pixels, origin top-left) with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in pixels
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the rectangle pass
/// Layout: 16 bytes total (must match rect.wgsl Uniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RectUniforms {
    /// Size of the pixel space mapped onto the whole surface
    pub view_size: [f32; 2],
    pub _padding: [f32; 2],
}

impl RectUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view_size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for RectUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Vertices per rectangle (two triangles)
pub const QUAD_VERTEX_COUNT: usize = 6;

/// Vertex buffer size allocated up front, in vertices
pub const INITIAL_VERTEX_CAPACITY: usize = QUAD_VERTEX_COUNT * 4096;
