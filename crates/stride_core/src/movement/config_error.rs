use thiserror::Error;

/// Errors raised while validating movement, probe, timing or feedback configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be greater than zero, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },

    #[error("{name} must be positive on both axes, got ({x}, {y})")]
    NonPositiveSize { name: &'static str, x: f32, y: f32 },
}

impl ConfigError {
    /// Rejects NaN and infinities.
    pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonFinite { name, value })
        }
    }

    /// Rejects non-finite and negative values.
    pub(crate) fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
        Self::check_finite(name, value)?;
        if value < 0.0 {
            return Err(ConfigError::Negative { name, value });
        }
        Ok(())
    }

    /// Rejects non-finite, negative and zero values.
    pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
        Self::check_finite(name, value)?;
        if value <= 0.0 {
            return Err(ConfigError::NonPositive { name, value });
        }
        Ok(())
    }

    pub(crate) fn check_count(name: &'static str, value: u32) -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::ZeroCount { name });
        }
        Ok(())
    }
}
