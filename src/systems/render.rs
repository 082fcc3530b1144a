//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The rectangle pipeline
//! - Rebuilding scene geometry and drawing it each frame

use std::sync::Arc;
use winit::window::Window;
use siege_core::Session;
use siege_render::{
    context::{ContextError, RenderContext},
    pipeline::{RectPipeline, RectUniforms},
    Palette, SceneGeometry,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU could not be initialised
    Init(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Init(e) => write!(f, "Render init failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Init(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Init(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: RectPipeline,
    geometry: SceneGeometry,
    palette: Palette,
}

impl RenderSystem {
    /// Create render system for a window
    ///
    /// `view_size` is the pixel space scene coordinates live in; it is mapped
    /// onto the whole surface.
    pub fn new(
        window: Arc<Window>,
        palette: Palette,
        vsync: bool,
        view_size: (f32, f32),
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = RectPipeline::new(&context.device, context.config.format);
        pipeline.update_uniforms(&context.queue, &RectUniforms::new(view_size.0, view_size.1));

        Ok(Self {
            context,
            pipeline,
            geometry: SceneGeometry::new(),
            palette,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after it was lost)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Render the session as it stands
    pub fn render_frame(&mut self, session: &Session) -> Result<(), RenderError> {
        self.geometry.rebuild(session, &self.palette);
        self.pipeline.upload_vertices(
            &self.context.device,
            &self.context.queue,
            &self.geometry.vertices,
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.palette.background;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_init_error_wraps_context_error() {
        let err = RenderError::from(ContextError::NoAdapter);
        assert_eq!(
            err.to_string(),
            "Render init failed: No suitable GPU adapter found"
        );
        assert!(err.source().is_some());
    }
}
