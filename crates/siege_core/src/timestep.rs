//! Fixed timestep accumulator
//!
//! Wall-clock frame time is accumulated and drained in fixed-size ticks, so
//! the simulation advances identically no matter how fast frames are drawn.

use std::time::Duration;

/// Logical ticks per second
pub const DEFAULT_TICK_RATE: f64 = 60.0;

/// One tick at [`DEFAULT_TICK_RATE`], rounded to the nearest nanosecond
const DEFAULT_TICK: Duration = Duration::from_nanos(16_666_667);

/// Longest frame time accepted in one go
const DEFAULT_MAX_FRAME_TIME: Duration = Duration::from_millis(250);

/// Frame-time accumulator producing fixed ticks
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    tick: Duration,
    accumulator: Duration,
    max_frame_time: Duration,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl FixedTimestep {
    /// Create an accumulator with the given tick length
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            accumulator: Duration::ZERO,
            max_frame_time: DEFAULT_MAX_FRAME_TIME,
        }
    }

    /// Create an accumulator running `rate` ticks per second
    ///
    /// Returns `None` unless `rate` is finite and positive and its tick is
    /// at least one nanosecond long.
    pub fn from_rate(rate: f64) -> Option<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(rate.recip())
            .ok()
            .filter(|tick| !tick.is_zero())
            .map(Self::new)
    }

    /// Builder: cap on the frame time added by a single [`accumulate`](Self::accumulate)
    pub fn with_max_frame_time(mut self, max_frame_time: Duration) -> Self {
        self.max_frame_time = max_frame_time;
        self
    }

    /// Length of one tick
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Length of one tick in seconds
    pub fn tick_secs(&self) -> f32 {
        self.tick.as_secs_f32()
    }

    /// Time banked but not yet simulated
    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    /// Bank elapsed frame time (capped to avoid a spiral of death after a stall)
    pub fn accumulate(&mut self, elapsed: Duration) {
        let elapsed = elapsed.min(self.max_frame_time);
        self.accumulator += elapsed;
    }

    /// Take one tick out of the bank if more than a full tick is stored
    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator > self.tick {
            self.accumulator -= self.tick;
            true
        } else {
            false
        }
    }

    /// Drop any banked time
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
