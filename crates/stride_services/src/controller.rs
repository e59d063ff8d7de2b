//! Per-tick movement pipeline
//!
//! input → ground probe → movement timing → body. Input and ground are both
//! resolved before the timing core runs, so every decision is made against a
//! single snapshot.

use crate::input::{InputFrame, InputSampler};
use stride_core::actuator::BodyActuator;
use stride_core::feedback::JumpFlash;
use stride_core::movement::{MovementConfig, MovementState, TickResult};
use stride_core::probe::{GroundProbe, ProbeShape};

/// Everything that happened in one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub input: InputFrame,
    pub grounded: bool,
    pub result: TickResult,
    pub flash_active: bool,
}

/// Drives one controlled body.
pub struct PlayerController<S, P> {
    state: MovementState,
    shape: ProbeShape,
    sampler: S,
    probe: P,
    flash: JumpFlash,
}

impl<S: InputSampler, P: GroundProbe> PlayerController<S, P> {
    pub fn new(config: MovementConfig, shape: ProbeShape, sampler: S, probe: P) -> Self {
        Self {
            state: MovementState::new(config),
            shape,
            sampler,
            probe,
            flash: JumpFlash::default(),
        }
    }

    pub fn with_flash(mut self, flash: JumpFlash) -> Self {
        self.flash = flash;
        self
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn shape(&self) -> &ProbeShape {
        &self.shape
    }

    pub fn flash(&self) -> &JumpFlash {
        &self.flash
    }

    /// Runs one fixed tick against `body`.
    pub fn tick<A: BodyActuator + ?Sized>(&mut self, delta_time: f32, body: &mut A) -> TickReport {
        let input = self.sampler.sample();
        let grounded = self.shape.sample(&self.probe, body.position());

        let result = self
            .state
            .advance(delta_time, input.horizontal, input.jump_pressed, grounded);
        body.apply(&result, self.state.config().jump_force());

        // Flashes on every press, granted or not
        self.flash.update(delta_time);
        if input.jump_pressed {
            self.flash.trigger();
        }

        TickReport {
            input,
            grounded,
            result,
            flash_active: self.flash.is_active(),
        }
    }
}
