//! Integration tests for whole rounds
//!
//! These drive a [`Session`] through the fixed timestep the same way the
//! application does and check how rounds end.

use std::time::Duration;

use siege_core::{
    Arena, CrashCause, Direction, FixedTimestep, Outcome, PlayerId, Session, SessionConfig, Spawn,
    StepOutcome, Vec2, WallSide, DEFAULT_PLAYER_SIZE,
};

fn tick() -> Duration {
    FixedTimestep::default().tick()
}

fn step_length() -> f32 {
    DEFAULT_PLAYER_SIZE + tick().as_secs_f32()
}

/// Step until the round ends, returning the number of ticks simulated
fn run_to_end(session: &mut Session, limit: u64) -> u64 {
    for _ in 0..limit {
        if let StepOutcome::Finished(over) = session.step(tick()) {
            return over.tick;
        }
    }
    panic!("round did not end within {} ticks", limit);
}

// ==================== Idle Round ====================

/// No input: player one runs right along the top, player two runs left along
/// the bottom and reaches the left wall first.
#[test]
fn test_idle_round_ends_on_wall() {
    let mut session = Session::with_defaults(Arena::with_default_layout(800.0, 600.0));
    let step = step_length();
    let mut last_x = session.player(PlayerId::One).position().x;

    let mut ticks = 0;
    loop {
        let outcome = session.step(tick());
        ticks += 1;

        let p1 = session.player(PlayerId::One);
        assert_eq!(p1.trail().positions().len(), ticks + 1, "trail includes the spawn entry");
        assert!((p1.position().x - last_x - step).abs() < 1e-3);
        assert_eq!(p1.position().y, 50.0);
        last_x = p1.position().x;

        if let StepOutcome::Finished(over) = outcome {
            assert_eq!(over.tick, ticks as u64);
            break;
        }
        assert!(ticks < 1000, "round never ended");
    }

    // 740 - 47 * 15.0167 = 34.2, box reaches x = 26.7 < 30
    assert_eq!(ticks, 47);
    let over = session.game_over().expect("round is over");
    assert_eq!(over.crashes.len(), 1);
    assert_eq!(over.crashes[0].player, PlayerId::Two);
    assert_eq!(over.crashes[0].cause, CrashCause::Wall(WallSide::Left));
    assert_eq!(over.outcome(), Outcome::Winner(PlayerId::One));

    // Nothing moves after the end
    let frozen = session.player(PlayerId::One).position();
    assert_eq!(session.step(tick()), StepOutcome::Halted);
    assert_eq!(session.player(PlayerId::One).position(), frozen);
    assert_eq!(session.player(PlayerId::One).trail().positions().len(), ticks + 1);
}

// ==================== Driving Through The Timestep ====================

#[test]
fn test_timestep_drives_fixed_ticks() {
    let mut session = Session::with_defaults(Arena::with_default_layout(1920.0, 1080.0));
    let mut timestep = FixedTimestep::default();

    // Uneven frames adding up to just over 8 ticks
    let frames = [7u64, 3, 16, 33, 1, 50, 25];
    for ms in frames {
        timestep.accumulate(Duration::from_millis(ms));
        while timestep.consume_tick() {
            session.step(timestep.tick());
        }
    }

    // 135ms of frames at 16.67ms per tick
    assert_eq!(session.ticks(), 8);
    assert_eq!(session.player(PlayerId::Two).trail().positions().len(), 9);
}

// ==================== Trail Crashes ====================

#[test]
fn test_player_cuts_across_opponent_trail() {
    let arena = Arena::with_default_layout(800.0, 600.0);
    // Player two runs left along y = 300; player one drops down across that line later
    let config = SessionConfig::for_arena(&arena)
        .with_spawn(PlayerId::One, Spawn::new(Vec2::new(100.0, 150.0), Direction::Right))
        .with_spawn(PlayerId::Two, Spawn::new(Vec2::new(700.0, 300.0), Direction::Left));
    let mut session = Session::new(arena, config);

    // Let player two lay trail past x = 300
    for _ in 0..30 {
        assert_eq!(session.step(tick()), StepOutcome::Continue);
    }
    assert!(session.player(PlayerId::Two).position().x < 300.0);
    assert!(session.steer(PlayerId::Two, Direction::Down));
    assert!(session.steer(PlayerId::One, Direction::Down));

    // Player one turns at x = 550.5, right above an old entry of player two's trail
    let end = run_to_end(&mut session, 100);
    assert_eq!(end, 39);
    let over = session.game_over().expect("round is over");
    assert!(over.crashes.iter().any(|c| {
        c.player == PlayerId::One && c.cause == CrashCause::Trail(PlayerId::Two)
    }));
}

#[test]
fn test_head_on_is_a_draw() {
    let arena = Arena::with_default_layout(800.0, 600.0);
    let step = step_length();
    let config = SessionConfig::for_arena(&arena)
        .with_spawn(PlayerId::One, Spawn::new(Vec2::new(300.0, 300.0), Direction::Right))
        .with_spawn(
            PlayerId::Two,
            Spawn::new(Vec2::new(300.0 + 4.0 * step, 300.0), Direction::Left),
        );
    let mut session = Session::new(arena, config);

    let end = run_to_end(&mut session, 10);
    let over = session.game_over().expect("round is over");
    assert_eq!(over.tick, end);
    assert_eq!(over.outcome(), Outcome::Draw);
    assert!(over.crashed(PlayerId::One));
    assert!(over.crashed(PlayerId::Two));
}

#[test]
fn test_reversal_is_ignored_mid_round() {
    let mut session = Session::with_defaults(Arena::with_default_layout(800.0, 600.0));
    session.step(tick());
    assert!(!session.steer(PlayerId::One, Direction::Left));
    session.step(tick());
    assert!(!session.is_over(), "reversal would have crashed into own trail");
    assert_eq!(session.player(PlayerId::One).heading(), Direction::Right);
}
