//! Window management system
//!
//! The window always covers the desktop: it is sized to the primary monitor and,
//! when configured, made borderless fullscreen on it.

use std::sync::Arc;
use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    monitor::MonitorHandle,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Size used when no monitor reports one
pub const FALLBACK_SIZE: (u32, u32) = (1280, 720);

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
    desktop_size: PhysicalSize<u32>,
    fullscreen: bool,
    base_title: String,
}

impl WindowSystem {
    /// Create the window from config, sized to the desktop
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let desktop_size = desktop_size(monitor.as_ref());
        log::info!("Desktop size {}x{}", desktop_size.width, desktop_size.height);

        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(desktop_size)
            .with_resizable(false);

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(monitor)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            desktop_size,
            fullscreen: config.fullscreen,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Pixel space the arena is laid out in
    ///
    /// A fullscreen window may still report its pre-fullscreen inner size
    /// right after creation, so the monitor's size is used instead.
    pub fn arena_size(&self) -> PhysicalSize<u32> {
        arena_size(self.desktop_size, self.window.inner_size(), self.fullscreen)
    }

    /// Show the result of a finished round in the title bar
    pub fn show_status(&self, status: &str) {
        self.window.set_title(&format_title(&self.base_title, Some(status)));
    }

    /// Restore the plain title
    pub fn clear_status(&self) {
        self.window.set_title(&format_title(&self.base_title, None));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Size of a monitor, or [`FALLBACK_SIZE`] if unknown
fn desktop_size(monitor: Option<&MonitorHandle>) -> PhysicalSize<u32> {
    monitor
        .map(|m| m.size())
        .filter(|s| s.width > 0 && s.height > 0)
        .unwrap_or_else(|| PhysicalSize::new(FALLBACK_SIZE.0, FALLBACK_SIZE.1))
}

fn arena_size(
    desktop: PhysicalSize<u32>,
    inner: PhysicalSize<u32>,
    fullscreen: bool,
) -> PhysicalSize<u32> {
    if fullscreen || inner.width == 0 || inner.height == 0 {
        desktop
    } else {
        inner
    }
}

fn format_title(base: &str, status: Option<&str>) -> String {
    match status {
        Some(status) => format!("{} - {}", base, status),
        None => base.to_string(),
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
