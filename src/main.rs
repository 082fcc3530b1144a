//! Siege - two-player light-cycle game
//!
//! Two players steer squares around a walled arena, each leaving a solid
//! trail behind. The round ends when someone hits a wall or a trail.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use siege::config::AppConfig;
use siege::input::{InputAction, InputMapper};
use siege::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use siege_core::{FixedTimestep, Session};
use siege_input::SteeringController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// Current round; created once the window (and so the arena size) exists
    session: Option<Session>,
    simulation: SimulationSystem,
    steering: SteeringController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let timestep = config.simulation.timestep().unwrap_or_else(|e| {
            log::warn!("{}. Using default timing.", e);
            FixedTimestep::default()
        });
        let simulation = SimulationSystem::new(timestep);
        Self {
            config,
            window: None,
            render: None,
            session: None,
            simulation,
            steering: SteeringController::new(),
        }
    }

    /// Bring up the window, the round, and the GPU
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;

        let size = window.arena_size();
        let (width, height) = (size.width as f32, size.height as f32);
        let arena = self.config.build_arena(width, height);
        let session_config = self.config.players.session_config(&arena);
        let session = Session::new(arena, session_config);

        let render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.palette(),
            self.config.window.vsync,
            (width, height),
        )?;

        self.window = Some(window);
        self.render = Some(render);
        self.session = Some(session);
        self.simulation.reset();
        Ok(())
    }

    fn restart(&mut self) {
        if let Some(session) = &mut self.session {
            session.restart();
        }
        self.simulation.reset();
        if let Some(window) = &self.window {
            window.clear_status();
        }
    }

    fn round_over(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_over())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("Startup failed: {}", e);
                event_loop.exit();
                return;
            }
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state, self.round_over()) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                            return;
                        }
                        Some(InputAction::Restart) => {
                            self.restart();
                            return;
                        }
                        None => {}
                    }

                    if let Some(session) = &mut self.session {
                        self.steering.process_keyboard(key, event.state, session);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(session) = &mut self.session else {
                    return;
                };

                let result = self.simulation.update(session);
                if let Some(over) = result.game_over {
                    if self.config.session.close_on_game_over {
                        event_loop.exit();
                        return;
                    }
                    if let Some(window) = &self.window {
                        window.show_status(&format!("{} - Enter to play again", over.outcome()));
                    }
                }

                if let Some(render) = &mut self.render {
                    match render.render_frame(session) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => render.reconfigure(),
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => log::warn!("{}", e),
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Siege");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
