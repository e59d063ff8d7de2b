//! Platformer movement timing.
//!
//! Coyote time and jump buffering are two countdown timers that gate a single
//! jump decision per tick. Everything in here is engine-agnostic: the caller
//! samples input and probes the ground, then hands the snapshot to
//! [`MovementState::advance`].

mod config;
mod config_error;
mod state;

pub use config::MovementConfig;
pub use config_error::ConfigError;
pub use state::{JumpSource, MovementState, TickResult};
