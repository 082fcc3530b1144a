//! Game simulation system
//!
//! Turns wall-clock frame time into fixed ticks:
//! - Delta time measurement
//! - Accumulation (capped)
//! - Stepping the session until the bank is drained or the round ends

use std::time::{Duration, Instant};
use siege_core::{FixedTimestep, GameOver, Session, StepOutcome};

/// Result of a simulation update
#[derive(Debug, Default)]
pub struct SimulationResult {
    /// Ticks simulated this frame
    pub ticks: u32,
    /// Set on the frame the round ended
    pub game_over: Option<GameOver>,
}

/// Drives a [`Session`] at a fixed tick rate
pub struct SimulationSystem {
    timestep: FixedTimestep,
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new(timestep: FixedTimestep) -> Self {
        log::debug!("Fixed tick of {:.4}s", timestep.tick_secs());
        Self {
            timestep,
            last_frame: Instant::now(),
        }
    }

    /// Run one frame using the time elapsed since the previous call
    pub fn update(&mut self, session: &mut Session) -> SimulationResult {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        self.advance(session, elapsed)
    }

    /// Bank `elapsed` and simulate every whole tick it pays for
    pub fn advance(&mut self, session: &mut Session, elapsed: Duration) -> SimulationResult {
        let mut result = SimulationResult::default();
        self.timestep.accumulate(elapsed);

        let tick = self.timestep.tick();
        while self.timestep.consume_tick() {
            match session.step(tick) {
                StepOutcome::Continue => result.ticks += 1,
                StepOutcome::Finished(over) => {
                    result.ticks += 1;
                    result.game_over = Some(over);
                    self.timestep.reset();
                    break;
                }
                StepOutcome::Halted => {
                    self.timestep.reset();
                    break;
                }
            }
        }

        result
    }

    /// Forget banked time and restart frame timing (used when a round restarts)
    pub fn reset(&mut self) {
        self.timestep.reset();
        self.last_frame = Instant::now();
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(FixedTimestep::default())
    }
}
