//! Game session
//!
//! A [`Session`] is one round: two players in one arena, advanced one fixed
//! tick at a time until someone crashes. The end of the round is an explicit
//! state ([`SessionState::Over`]) that the caller checks; nothing here knows
//! about windows.

use std::time::Duration;

use siege_math::Vec2;

use crate::arena::Arena;
use crate::collision::{detect_crashes, Crash};
use crate::direction::Direction;
use crate::player::{Player, PlayerId, Spawn, DEFAULT_PLAYER_SIZE};

/// Starting setup for a round
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Size of both player squares
    pub player_size: Vec2,
    /// Spawn of player one and player two
    pub spawns: [Spawn; 2],
}

impl SessionConfig {
    /// Default setup for an arena: player one near the top-left corner heading
    /// right, player two near the bottom-right corner heading left.
    pub fn for_arena(arena: &Arena) -> Self {
        Self {
            player_size: Vec2::splat(DEFAULT_PLAYER_SIZE),
            spawns: [
                Spawn::new(Vec2::new(50.0, 50.0), Direction::Right),
                Spawn::new(
                    Vec2::new(arena.width() - 60.0, arena.height() - 60.0),
                    Direction::Left,
                ),
            ],
        }
    }

    /// Builder: set the player square size
    pub fn with_player_size(mut self, size: Vec2) -> Self {
        self.player_size = size;
        self
    }

    /// Builder: set one player's spawn
    pub fn with_spawn(mut self, id: PlayerId, spawn: Spawn) -> Self {
        self.spawns[id.index()] = spawn;
        self
    }
}

/// Result of a finished round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(id) => write!(f, "{} wins", id),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Terminal state of a round
#[derive(Clone, Debug, PartialEq)]
pub struct GameOver {
    /// Tick on which the round ended (1-based)
    pub tick: u64,
    /// Every crash detected on that tick
    pub crashes: Vec<Crash>,
}

impl GameOver {
    /// Whether a given player crashed
    pub fn crashed(&self, id: PlayerId) -> bool {
        self.crashes.iter().any(|c| c.player == id)
    }

    /// Winner if exactly one player crashed, otherwise a draw
    pub fn outcome(&self) -> Outcome {
        match (self.crashed(PlayerId::One), self.crashed(PlayerId::Two)) {
            (true, false) => Outcome::Winner(PlayerId::Two),
            (false, true) => Outcome::Winner(PlayerId::One),
            _ => Outcome::Draw,
        }
    }
}

/// Whether the round is still going
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Running,
    Over(GameOver),
}

/// What a call to [`Session::step`] did
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Tick simulated, nobody crashed
    Continue,
    /// Tick simulated and the round ended on it
    Finished(GameOver),
    /// Round was already over; nothing simulated
    Halted,
}

/// One round of the game
pub struct Session {
    config: SessionConfig,
    arena: Arena,
    players: [Player; 2],
    ticks: u64,
    state: SessionState,
}

impl Session {
    /// Start a round in `arena`
    pub fn new(arena: Arena, config: SessionConfig) -> Self {
        let players = Self::spawn_players(&config);
        log::info!(
            "Session started on {}x{} arena",
            arena.width(),
            arena.height()
        );
        Self {
            config,
            arena,
            players,
            ticks: 0,
            state: SessionState::Running,
        }
    }

    /// Start a round with the default spawns for `arena`
    pub fn with_defaults(arena: Arena) -> Self {
        let config = SessionConfig::for_arena(&arena);
        Self::new(arena, config)
    }

    fn spawn_players(config: &SessionConfig) -> [Player; 2] {
        PlayerId::ALL.map(|id| Player::new(id, config.spawns[id.index()], config.player_size))
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::Over(_))
    }

    pub fn game_over(&self) -> Option<&GameOver> {
        match &self.state {
            SessionState::Over(over) => Some(over),
            SessionState::Running => None,
        }
    }

    /// Change a player's heading
    ///
    /// Returns false if the change was rejected (reversal, or round over).
    pub fn steer(&mut self, id: PlayerId, heading: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        self.players[id.index()].steer(heading)
    }

    /// Simulate exactly one tick of length `dt`
    ///
    /// Both players move, then collisions are checked. Once the round is over
    /// further calls do nothing.
    pub fn step(&mut self, dt: Duration) -> StepOutcome {
        if self.is_over() {
            return StepOutcome::Halted;
        }

        let dt = dt.as_secs_f32();
        for player in &mut self.players {
            player.advance(dt);
        }
        self.ticks += 1;

        let crashes = detect_crashes(&self.players, &self.arena);
        if crashes.is_empty() {
            return StepOutcome::Continue;
        }

        for crash in &crashes {
            log::debug!("Tick {}: {}", self.ticks, crash);
        }
        let over = GameOver {
            tick: self.ticks,
            crashes,
        };
        log::info!("Game over after {} ticks: {}", over.tick, over.outcome());
        self.state = SessionState::Over(over.clone());
        StepOutcome::Finished(over)
    }

    /// Start a fresh round in the same arena with the same setup
    pub fn restart(&mut self) {
        self.players = Self::spawn_players(&self.config);
        self.ticks = 0;
        self.state = SessionState::Running;
        log::info!("Session restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CrashCause;
    use crate::arena::WallSide;

    fn tick() -> Duration {
        Duration::from_secs_f64(1.0 / 60.0)
    }

    fn session() -> Session {
        Session::with_defaults(Arena::with_default_layout(800.0, 600.0))
    }

    #[test]
    fn test_default_spawns() {
        let s = session();
        assert_eq!(s.player(PlayerId::One).position(), Vec2::new(50.0, 50.0));
        assert_eq!(s.player(PlayerId::One).heading(), Direction::Right);
        assert_eq!(s.player(PlayerId::Two).position(), Vec2::new(740.0, 540.0));
        assert_eq!(s.player(PlayerId::Two).heading(), Direction::Left);
        assert!(!s.is_over());
    }

    #[test]
    fn test_step_appends_to_both_trails() {
        let mut s = session();
        for n in 1..=10u64 {
            assert_eq!(s.step(tick()), StepOutcome::Continue);
            assert_eq!(s.ticks(), n);
            for p in s.players() {
                assert_eq!(p.trail().positions().len() as u64, n + 1);
            }
        }
    }

    #[test]
    fn test_steer_routes_to_player() {
        let mut s = session();
        assert!(s.steer(PlayerId::Two, Direction::Up));
        assert_eq!(s.player(PlayerId::Two).heading(), Direction::Up);
        assert_eq!(s.player(PlayerId::One).heading(), Direction::Right);
        assert!(!s.steer(PlayerId::One, Direction::Left));
    }

    #[test]
    fn test_steering_into_wall_ends_round() {
        let mut s = session();
        s.steer(PlayerId::One, Direction::Up);
        // (50, 50) moving up touches the top wall (max y 30) on the first tick
        match s.step(tick()) {
            StepOutcome::Finished(over) => {
                assert_eq!(over.tick, 1);
                assert_eq!(
                    over.crashes,
                    vec![Crash::new(PlayerId::One, CrashCause::Wall(WallSide::Top))]
                );
                assert_eq!(over.outcome(), Outcome::Winner(PlayerId::Two));
            }
            other => panic!("expected game over, got {:?}", other),
        }
        assert!(s.is_over());
    }

    #[test]
    fn test_no_ticks_after_game_over() {
        let mut s = session();
        s.steer(PlayerId::One, Direction::Up);
        s.step(tick());
        let trail_len = s.player(PlayerId::One).trail().positions().len();
        assert_eq!(s.step(tick()), StepOutcome::Halted);
        assert_eq!(s.ticks(), 1);
        assert_eq!(s.player(PlayerId::One).trail().positions().len(), trail_len);
        assert!(!s.steer(PlayerId::Two, Direction::Up));
    }

    #[test]
    fn test_outcome_draw_when_both_crash() {
        let over = GameOver {
            tick: 3,
            crashes: vec![
                Crash::new(PlayerId::One, CrashCause::Wall(WallSide::Left)),
                Crash::new(PlayerId::Two, CrashCause::Trail(PlayerId::One)),
            ],
        };
        assert_eq!(over.outcome(), Outcome::Draw);
        assert_eq!(over.outcome().to_string(), "draw");
    }

    #[test]
    fn test_restart_resets_round() {
        let mut s = session();
        s.steer(PlayerId::One, Direction::Up);
        s.step(tick());
        assert!(s.is_over());
        s.restart();
        assert!(!s.is_over());
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.player(PlayerId::One).trail().positions().len(), 1);
        assert_eq!(s.player(PlayerId::One).heading(), Direction::Right);
    }

    #[test]
    fn test_config_builders() {
        let arena = Arena::with_default_layout(800.0, 600.0);
        let config = SessionConfig::for_arena(&arena)
            .with_player_size(Vec2::splat(10.0))
            .with_spawn(PlayerId::Two, Spawn::new(Vec2::new(400.0, 300.0), Direction::Up));
        let s = Session::new(arena, config);
        assert_eq!(s.player(PlayerId::Two).size(), Vec2::splat(10.0));
        assert_eq!(s.player(PlayerId::Two).heading(), Direction::Up);
    }
}
