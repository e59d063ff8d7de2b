//! Per-body timer state and the tick function that drives it.

use super::MovementConfig;
use serde::{Deserialize, Serialize};

/// What let a granted jump through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpSource {
    /// The body was touching ground this tick.
    Ground,
    /// The body was airborne but still inside the coyote window.
    Coyote,
}

/// Decision produced by one call to [`MovementState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickResult {
    /// A jump fired this tick. The actuator sets vertical velocity to the jump force.
    pub jumped: bool,
    /// Why the jump was allowed. `Some` exactly when `jumped` is set.
    pub source: Option<JumpSource>,
    /// Horizontal velocity for the body, already scaled by the tick's delta time.
    pub target_velocity_x: f32,
}

/// Timer state for one controlled body.
///
/// Created when the body spawns, advanced exactly once per simulation tick,
/// dropped with the body.
#[derive(Debug, Clone)]
pub struct MovementState {
    config: MovementConfig,
    horizontal_input: f32,
    coyote_timer: f32,
    jump_buffer_timer: f32,
}

impl MovementState {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            horizontal_input: 0.0,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Input axis seen on the most recent tick.
    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    /// Seconds left in which a jump is still permitted after leaving the ground.
    pub fn coyote_timer(&self) -> f32 {
        self.coyote_timer
    }

    /// Seconds left in which a pending jump press is still honored.
    pub fn jump_buffer_timer(&self) -> f32 {
        self.jump_buffer_timer
    }

    /// Runs one simulation tick.
    ///
    /// `horizontal_input` is expected in [-1, 1]; clamping is the caller's job
    /// and out-of-range values pass straight through. `jump_pressed` must be the
    /// rising edge of the jump key, not its held state. `delta_time` must be
    /// positive.
    ///
    /// Order matters and is fixed: coyote update, buffer update, jump decision,
    /// horizontal target.
    pub fn advance(
        &mut self,
        delta_time: f32,
        horizontal_input: f32,
        jump_pressed: bool,
        is_grounded: bool,
    ) -> TickResult {
        debug_assert!(delta_time > 0.0, "delta_time must be positive, got {delta_time}");

        self.horizontal_input = horizontal_input;

        if is_grounded {
            self.coyote_timer = self.config.coyote_duration();
        } else {
            self.coyote_timer = (self.coyote_timer - delta_time).max(0.0);
        }

        // A fresh press always refills, even mid-countdown
        let buffered_from_earlier = !jump_pressed && self.jump_buffer_timer > 0.0;
        if jump_pressed {
            self.jump_buffer_timer = self.config.buffer_duration();
        } else {
            self.jump_buffer_timer = (self.jump_buffer_timer - delta_time).max(0.0);
        }

        let eligible = if is_grounded {
            Some(JumpSource::Ground)
        } else if self.coyote_timer > 0.0 {
            Some(JumpSource::Coyote)
        } else {
            None
        };

        let granted = match eligible {
            Some(source) if self.jump_buffer_timer > 0.0 => {
                tracing::debug!(
                    ?source,
                    buffered = buffered_from_earlier,
                    coyote_left = self.coyote_timer,
                    "jump granted"
                );
                // One press buys one jump
                self.coyote_timer = 0.0;
                self.jump_buffer_timer = 0.0;
                Some(source)
            }
            _ => None,
        };
        let jumped = granted.is_some();

        tracing::trace!(
            grounded = is_grounded,
            coyote = self.coyote_timer,
            buffer = self.jump_buffer_timer,
            jumped,
            "movement tick"
        );

        TickResult {
            jumped,
            source: granted,
            target_velocity_x: horizontal_input * self.config.move_force() * delta_time,
        }
    }
}
