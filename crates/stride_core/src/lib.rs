//! Stride Core
//!
//! Contains the deterministic platformer movement pieces:
//! - Fixed-tick time
//! - 2D math helpers
//! - Coyote time and jump buffering (movement timing)
//! - Ground probe and body actuator contracts
//! - Cosmetic jump feedback

pub mod actuator;
pub mod feedback;
pub mod math;
pub mod movement;
pub mod probe;
pub mod time;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
