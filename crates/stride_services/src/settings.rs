//! Settings management

use serde::{Deserialize, Serialize};
use std::path::Path;
use stride_core::feedback::{JumpFlash, DEFAULT_FLASH_SECS, FLASH_RED};
use stride_core::math::{Vec2, Vec4};
use stride_core::movement::{ConfigError, MovementConfig};
use stride_core::probe::{LayerMask, ProbeShape};
use stride_core::time::{FixedTimestep, TICK_RATE_HZ};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] ConfigError),
}

/// Game settings. Every field has a default, so partial files are fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub movement: MovementSettings,
    pub ground_probe: GroundProbeSettings,
    pub simulation: SimulationSettings,
    pub feedback: FeedbackSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    pub move_force: f32,
    pub jump_force: f32,
    pub coyote_duration: f32,
    pub buffer_duration: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundProbeSettings {
    pub box_size: Vec2,
    pub offset_y: f32,
    pub cast_distance: f32,
    pub layer_mask: LayerMask,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub tick_rate_hz: u32,
    pub max_ticks_per_frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackSettings {
    pub flash_duration: f32,
    pub flash_color: Vec4,
}

impl Default for MovementSettings {
    fn default() -> Self {
        let config = MovementConfig::default();
        Self {
            move_force: config.move_force(),
            jump_force: config.jump_force(),
            coyote_duration: config.coyote_duration(),
            buffer_duration: config.buffer_duration(),
        }
    }
}

impl Default for GroundProbeSettings {
    fn default() -> Self {
        let shape = ProbeShape::default();
        Self {
            box_size: shape.box_size(),
            offset_y: shape.offset_y(),
            cast_distance: shape.cast_distance(),
            layer_mask: LayerMask::GROUND,
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            max_ticks_per_frame: 5,
        }
    }
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            flash_duration: DEFAULT_FLASH_SECS,
            flash_color: FLASH_RED,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json).inspect_err(|err| {
            tracing::warn!(path = %path.display(), "rejected settings file: {err}");
        })?;
        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every section by building the core type it feeds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement_config()?;
        self.probe_shape()?;
        self.fixed_timestep()?;
        self.jump_flash()?;
        Ok(())
    }

    pub fn movement_config(&self) -> Result<MovementConfig, ConfigError> {
        let m = &self.movement;
        MovementConfig::new(m.move_force, m.jump_force, m.coyote_duration, m.buffer_duration)
    }

    pub fn probe_shape(&self) -> Result<ProbeShape, ConfigError> {
        let p = &self.ground_probe;
        ProbeShape::new(p.box_size, p.offset_y, p.cast_distance)
    }

    pub fn fixed_timestep(&self) -> Result<FixedTimestep, ConfigError> {
        FixedTimestep::new(self.simulation.tick_rate_hz, self.simulation.max_ticks_per_frame)
    }

    pub fn jump_flash(&self) -> Result<JumpFlash, ConfigError> {
        JumpFlash::new(self.feedback.flash_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_core() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.movement_config().unwrap(), MovementConfig::default());
        assert_eq!(settings.probe_shape().unwrap(), ProbeShape::default());
        assert_eq!(settings.simulation.tick_rate_hz, 60);
        assert_eq!(settings.feedback.flash_color, FLASH_RED);
        assert_eq!(settings.jump_flash().unwrap(), JumpFlash::default());
        assert_eq!(settings.fixed_timestep().unwrap().tick_secs(), 1.0 / 60.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json_str(
            r#"{ "movement": { "move_force": 400.0 }, "ground_probe": { "box_size": [0.8, 0.1] } }"#,
        )
        .unwrap();

        assert_eq!(settings.movement.move_force, 400.0);
        assert_eq!(settings.movement.jump_force, 10.0);
        assert_eq!(settings.ground_probe.box_size, Vec2::new(0.8, 0.1));
        assert_eq!(settings.ground_probe.offset_y, -0.2);
        assert_eq!(settings.simulation, SimulationSettings::default());
    }

    #[test]
    fn test_layer_mask_is_plain_number() {
        let settings = Settings::from_json_str(r#"{ "ground_probe": { "layer_mask": 12 } }"#).unwrap();
        assert_eq!(settings.ground_probe.layer_mask, LayerMask(12));
    }

    #[test]
    fn test_negative_duration_is_invalid() {
        let err = Settings::from_json_str(r#"{ "movement": { "coyote_duration": -1.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(ConfigError::Negative { name: "coyote_duration", .. })
        ));
    }

    #[test]
    fn test_zero_buffer_is_invalid() {
        let err = Settings::from_json_str(r#"{ "movement": { "buffer_duration": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(ConfigError::NonPositive { name: "buffer_duration", .. })
        ));
    }

    #[test]
    fn test_zero_tick_rate_is_invalid() {
        let err = Settings::from_json_str(r#"{ "simulation": { "tick_rate_hz": 0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(ConfigError::ZeroCount { name: "tick_rate_hz" })
        ));

        let err = Settings::from_json_str(r#"{ "simulation": { "max_ticks_per_frame": 0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(ConfigError::ZeroCount { name: "max_ticks_per_frame" })
        ));
    }

    #[test]
    fn test_negative_flash_is_invalid() {
        let err = Settings::from_json_str(r#"{ "feedback": { "flash_duration": -5.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(ConfigError::Negative { name: "flash_duration", .. })
        ));
    }

    #[test]
    fn test_bad_probe_is_invalid() {
        let err = Settings::from_json_str(r#"{ "ground_probe": { "box_size": [0.0, 0.1] } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(ConfigError::NonPositiveSize { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json_str("{ movement: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "movement": {{ "jump_force": 12.5 }} }}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.movement.jump_force, 12.5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_written_file_loads_back() {
        let mut settings = Settings::default();
        settings.movement.move_force = 250.0;
        settings.simulation.tick_rate_hz = 120;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, settings.to_json_string().unwrap()).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
