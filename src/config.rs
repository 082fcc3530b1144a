//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SIEGE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use siege_core::{
    Arena, ArenaLayout, Direction, FixedTimestep, PlayerId, SessionConfig, Spawn, Vec2,
    DEFAULT_TICK_RATE,
};
use siege_render::Palette;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Fixed-step simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Arena wall geometry
    #[serde(default)]
    pub arena: ArenaConfig,
    /// Player size and spawns
    #[serde(default)]
    pub players: PlayersConfig,
    /// Round lifecycle
    #[serde(default)]
    pub session: SessionSettings,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SIEGE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SIEGE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SIEGE_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize fine but cannot drive the game
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.timestep().map(|_| ())
    }

    /// Build the arena for a window of the given size
    pub fn build_arena(&self, width: f32, height: f32) -> Arena {
        Arena::new(width, height, self.arena.layout())
    }
}

/// Window configuration
///
/// The window always takes the desktop resolution; there is no width or height.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Borderless fullscreen on the primary monitor
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Siege".to_string(),
            fullscreen: true,
            vsync: true,
        }
    }
}

/// Simulation timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks per second
    pub tick_rate: f64,
    /// Longest frame fed to the accumulator, in seconds
    pub max_frame_time: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            max_frame_time: 0.25,
        }
    }
}

impl SimulationConfig {
    /// Build the fixed-step accumulator
    pub fn timestep(&self) -> Result<FixedTimestep, ConfigError> {
        let timestep = FixedTimestep::from_rate(self.tick_rate).ok_or_else(|| {
            ConfigError::invalid(
                "simulation.tick_rate",
                format!("{} is not a usable tick rate", self.tick_rate),
            )
        })?;
        let max_frame_time = Duration::try_from_secs_f64(self.max_frame_time)
            .map_err(|e| ConfigError::invalid("simulation.max_frame_time", e))?;
        Ok(timestep.with_max_frame_time(max_frame_time))
    }
}

/// Arena wall geometry in pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Gap between the screen edge and each wall
    pub wall_inset: f32,
    /// Thickness of each wall
    pub wall_thickness: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let layout = ArenaLayout::default();
        Self {
            wall_inset: layout.inset,
            wall_thickness: layout.thickness,
        }
    }
}

impl ArenaConfig {
    pub fn layout(&self) -> ArenaLayout {
        ArenaLayout {
            inset: self.wall_inset,
            thickness: self.wall_thickness,
        }
    }
}

/// Player size and spawns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Side length of each player square
    pub size: f32,
    /// Player one's spawn, measured from the top-left corner
    pub first_spawn: Vec2,
    pub first_heading: Direction,
    /// Player two's spawn, measured inward from the bottom-right corner
    pub second_spawn_inset: Vec2,
    pub second_heading: Direction,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            size: 15.0,
            first_spawn: Vec2::new(50.0, 50.0),
            first_heading: Direction::Right,
            second_spawn_inset: Vec2::new(60.0, 60.0),
            second_heading: Direction::Left,
        }
    }
}

impl PlayersConfig {
    /// Resolve the spawns against a concrete arena
    pub fn session_config(&self, arena: &Arena) -> SessionConfig {
        let second = Vec2::new(
            arena.width() - self.second_spawn_inset.x,
            arena.height() - self.second_spawn_inset.y,
        );
        SessionConfig::for_arena(arena)
            .with_player_size(Vec2::splat(self.size))
            .with_spawn(
                PlayerId::One,
                Spawn::new(self.first_spawn, self.first_heading),
            )
            .with_spawn(PlayerId::Two, Spawn::new(second, self.second_heading))
    }
}

/// Round lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Close the window when the round ends; otherwise wait for a restart key
    pub close_on_game_over: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            close_on_game_over: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Wall color
    pub wall_color: [f32; 4],
    /// Interior of player squares
    pub fill_color: [f32; 4],
    /// Player one's outline
    pub first_outline_color: [f32; 4],
    /// Player two's outline
    pub second_outline_color: [f32; 4],
    /// Outline thickness in pixels
    pub outline_thickness: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            background_color: palette.background,
            wall_color: palette.wall,
            fill_color: palette.fill,
            first_outline_color: palette.outlines[0],
            second_outline_color: palette.outlines[1],
            outline_thickness: palette.outline_thickness,
        }
    }
}

impl RenderingConfig {
    pub fn palette(&self) -> Palette {
        Palette {
            background: self.background_color,
            wall: self.wall_color,
            fill: self.fill_color,
            outlines: [self.first_outline_color, self.second_outline_color],
            outline_thickness: self.outline_thickness,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError {
            message: format!("{}: {}", field, reason),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Siege");
        assert!(config.window.fullscreen);
        assert_eq!(config.simulation.tick_rate, 60.0);
        assert_eq!(config.players.size, 15.0);
        assert!(config.session.close_on_game_over);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("tick_rate"));
        assert!(toml.contains("first_heading = \"Right\""));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[players]\nsize = 20.0\n"))
            .extract()
            .unwrap();
        assert_eq!(config.players.size, 20.0);
        assert_eq!(config.players.first_spawn, Vec2::new(50.0, 50.0));
        assert_eq!(config.window.title, "Siege");
    }

    #[test]
    fn test_default_spawns_match_session_defaults() {
        let config = AppConfig::default();
        let arena = config.build_arena(800.0, 600.0);
        let resolved = config.players.session_config(&arena);
        assert_eq!(resolved, SessionConfig::for_arena(&arena));
    }

    #[test]
    fn test_second_spawn_measured_from_far_corner() {
        let mut config = AppConfig::default();
        config.players.second_spawn_inset = Vec2::new(100.0, 40.0);
        let arena = config.build_arena(1000.0, 500.0);
        let resolved = config.players.session_config(&arena);
        assert_eq!(resolved.spawns[1].position, Vec2::new(900.0, 460.0));
        assert_eq!(resolved.spawns[1].heading, Direction::Left);
    }

    #[test]
    fn test_spawn_as_table() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[players]\nfirst_spawn = { x = 30.0, y = 70.0 }\n"))
            .extract()
            .unwrap();
        assert_eq!(config.players.first_spawn, Vec2::new(30.0, 70.0));
        assert_eq!(config.players.second_spawn_inset, Vec2::new(60.0, 60.0));
    }

    #[test]
    fn test_timestep_from_rate() {
        let timestep = SimulationConfig::default().timestep().unwrap();
        assert!((timestep.tick_secs() - 1.0 / 60.0).abs() < 1e-6);
    }

    fn simulation(toml: &str) -> AppConfig {
        Figment::new()
            .merge(Toml::string(toml))
            .extract()
            .unwrap()
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = simulation("[simulation]\ntick_rate = 0.0\n");
        let err = config.simulation.timestep().unwrap_err();
        assert!(err.to_string().contains("simulation.tick_rate"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_tick_rate_rejected() {
        let config = simulation("[simulation]\ntick_rate = -30.0\n");
        assert!(config.simulation.timestep().is_err());
    }

    #[test]
    fn test_huge_max_frame_time_rejected() {
        let config = simulation("[simulation]\nmax_frame_time = 1e300\n");
        let err = config.simulation.timestep().unwrap_err();
        assert!(err.to_string().contains("simulation.max_frame_time"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_max_frame_time_rejected() {
        let config = simulation("[simulation]\nmax_frame_time = -1.0\n");
        assert!(config.simulation.timestep().is_err());
    }

    #[test]
    fn test_zero_max_frame_time_allowed() {
        let config = simulation("[simulation]\nmax_frame_time = 0.0\n");
        assert!(config.simulation.timestep().is_ok());
    }

    #[test]
    fn test_palette_round_trip() {
        assert_eq!(RenderingConfig::default().palette(), Palette::default());
    }

    #[test]
    fn test_config_error_display() {
        let err = Figment::new()
            .merge(Toml::string("[window]\nvsync = \"maybe\"\n"))
            .extract::<AppConfig>()
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
