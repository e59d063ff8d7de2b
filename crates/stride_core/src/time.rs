//! Deterministic time system
//!
//! Fixed 60Hz tick rate by default, with an accumulator that turns variable
//! frame deltas into whole simulation ticks.

use crate::movement::ConfigError;
use std::time::Duration;

/// Fixed simulation tick rate (60 Hz = 16.666ms per tick)
pub const TICK_RATE_HZ: u32 = 60;
pub const TICK_DURATION_SECS: f32 = 1.0 / TICK_RATE_HZ as f32;

/// Simulation time tracker
pub struct SimulationTime {
    tick_count: u64,
    accumulated_time: Duration,
}

impl SimulationTime {
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            accumulated_time: Duration::ZERO,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn advance_tick(&mut self, delta_time: f32) {
        self.tick_count += 1;
        self.accumulated_time += Duration::from_secs_f32(delta_time);
    }

    pub fn total_time(&self) -> Duration {
        self.accumulated_time
    }
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts variable frame time into a whole number of fixed ticks.
///
/// A slow frame can owe more ticks than `max_ticks_per_frame`; the excess is
/// dropped instead of being carried into the next frame, so one hitch cannot
/// snowball into a run of catch-up frames.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_secs: f32,
    max_ticks_per_frame: u32,
    accumulator: f32,
}

impl FixedTimestep {
    /// Both the tick rate and the per-frame cap must be at least 1.
    pub fn new(tick_rate_hz: u32, max_ticks_per_frame: u32) -> Result<Self, ConfigError> {
        ConfigError::check_count("tick_rate_hz", tick_rate_hz)?;
        ConfigError::check_count("max_ticks_per_frame", max_ticks_per_frame)?;
        Ok(Self {
            tick_secs: 1.0 / tick_rate_hz as f32,
            max_ticks_per_frame,
            accumulator: 0.0,
        })
    }

    /// Length of one tick in seconds.
    pub fn tick_secs(&self) -> f32 {
        self.tick_secs
    }

    /// Adds a frame's elapsed time and returns how many ticks to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut ticks = 0;
        while self.accumulator >= self.tick_secs && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.tick_secs;
            ticks += 1;
        }

        if ticks == self.max_ticks_per_frame && self.accumulator >= self.tick_secs {
            tracing::warn!(
                dropped_secs = self.accumulator,
                "frame owed more than {} ticks, dropping backlog",
                self.max_ticks_per_frame
            );
            self.accumulator %= self.tick_secs;
        }

        ticks
    }

    /// Fraction of a tick left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.tick_secs
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self {
            tick_secs: TICK_DURATION_SECS,
            max_ticks_per_frame: 5,
            accumulator: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_time_counts_ticks() {
        let mut time = SimulationTime::new();
        for _ in 0..60 {
            time.advance_tick(TICK_DURATION_SECS);
        }
        assert_eq!(time.tick_count(), 60);
        assert!((time.total_time().as_secs_f32() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_timestep_carries_remainder() {
        let mut step = FixedTimestep::new(100, 5).unwrap();

        // 0.025s = 2.5 ticks
        assert_eq!(step.accumulate(0.025), 2);
        assert!((step.alpha() - 0.5).abs() < 1e-3);

        // The half tick left over rolls into the next frame
        assert_eq!(step.accumulate(0.01), 1);
        assert!((step.alpha() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_timestep_zero_ticks_on_short_frame() {
        let mut step = FixedTimestep::new(60, 5).unwrap();
        assert_eq!(step.accumulate(0.001), 0);
        assert_eq!(step.accumulate(0.0), 0);
        assert_eq!(step.accumulate(-1.0), 0);
    }

    #[test]
    fn test_fixed_timestep_drops_backlog() {
        let mut step = FixedTimestep::new(60, 3).unwrap();

        // A one second hitch only runs the cap
        assert_eq!(step.accumulate(1.0), 3);
        assert!(step.alpha() < 1.0);

        // And does not bleed into the next frame
        assert_eq!(step.accumulate(0.0), 0);
    }

    #[test]
    fn test_fixed_timestep_rejects_zero_counts() {
        assert_eq!(
            FixedTimestep::new(0, 5).unwrap_err(),
            ConfigError::ZeroCount {
                name: "tick_rate_hz"
            }
        );
        assert_eq!(
            FixedTimestep::new(60, 0).unwrap_err(),
            ConfigError::ZeroCount {
                name: "max_ticks_per_frame"
            }
        );
    }

    #[test]
    fn test_default_timestep_runs_at_tick_rate() {
        let step = FixedTimestep::default();
        assert_eq!(step.tick_secs(), TICK_DURATION_SECS);
    }
}
