//! Stride Services Layer
//!
//! Platform-facing pieces around the movement core: input sampling,
//! settings, and the per-tick controller pipeline.

pub mod controller;
pub mod input;
pub mod settings;

pub use controller::{PlayerController, TickReport};
pub use input::{InputFrame, InputSampler, InputState};
pub use settings::{Settings, SettingsError};
