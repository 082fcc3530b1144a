//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use siege::config::AppConfig;
use serial_test::serial;
use siege_core::Direction;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SIEGE_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SIEGE_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_bool() {
    std::env::set_var("SIEGE_SESSION__CLOSE_ON_GAME_OVER", "false");
    let config = AppConfig::load().unwrap();
    assert!(!config.session.close_on_game_over);
    std::env::remove_var("SIEGE_SESSION__CLOSE_ON_GAME_OVER");
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    std::env::remove_var("SIEGE_WINDOW__TITLE");
    std::env::remove_var("SIEGE_SESSION__CLOSE_ON_GAME_OVER");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    // Only meaningful without local overrides
    if cwd.join("config/user.toml").exists() {
        return;
    }

    let loaded = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(
        toml::to_string(&loaded).unwrap(),
        toml::to_string(&defaults).unwrap()
    );
    assert_eq!(loaded.players.first_heading, Direction::Right);
    assert_eq!(loaded.players.second_heading, Direction::Left);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, "Siege");
    assert_eq!(config.arena.wall_inset, 10.0);
}

#[test]
#[serial]
fn test_zero_tick_rate_from_env_fails_to_load() {
    std::env::set_var("SIEGE_SIMULATION__TICK_RATE", "0");
    let result = AppConfig::load();
    std::env::remove_var("SIEGE_SIMULATION__TICK_RATE");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("simulation.tick_rate"));
}

#[test]
#[serial]
fn test_huge_max_frame_time_in_file_fails_to_load() {
    let dir = std::env::temp_dir().join(format!("siege-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[simulation]\nmax_frame_time = 1e300\n",
    )
    .unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).unwrap();
    assert!(result.is_err());
}
