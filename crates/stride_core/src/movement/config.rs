//! Static tuning for one controlled body.

use super::ConfigError;

/// Movement tuning, validated once and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    move_force: f32,
    jump_force: f32,
    coyote_duration: f32,
    buffer_duration: f32,
}

impl MovementConfig {
    /// Builds a config, rejecting non-finite forces, a negative coyote duration
    /// and a buffer duration that is not strictly positive.
    ///
    /// A zero coyote duration means jumps only fire while grounded. A zero
    /// buffer duration would mean a press never survives to the decision, so
    /// no jump could ever fire.
    pub fn new(
        move_force: f32,
        jump_force: f32,
        coyote_duration: f32,
        buffer_duration: f32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            move_force,
            jump_force,
            coyote_duration,
            buffer_duration,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_finite("move_force", self.move_force)?;
        ConfigError::check_finite("jump_force", self.jump_force)?;
        ConfigError::check_non_negative("coyote_duration", self.coyote_duration)?;
        ConfigError::check_positive("buffer_duration", self.buffer_duration)?;
        Ok(())
    }

    /// Horizontal scale applied to the input axis (per second).
    pub fn move_force(&self) -> f32 {
        self.move_force
    }

    /// Vertical velocity set on the tick a jump fires.
    pub fn jump_force(&self) -> f32 {
        self.jump_force
    }

    /// Seconds after leaving the ground during which a jump is still accepted.
    pub fn coyote_duration(&self) -> f32 {
        self.coyote_duration
    }

    /// Seconds a jump press is remembered while it cannot fire yet.
    pub fn buffer_duration(&self) -> f32 {
        self.buffer_duration
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_force: 10.0,
            jump_force: 10.0,
            coyote_duration: 0.2,
            buffer_duration: 0.2,
        }
    }
}
