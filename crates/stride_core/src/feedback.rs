//! Cosmetic feedback: a short color flash every time the jump key goes down.
//!
//! Fires on the key press itself, whether or not the jump was granted, so a
//! viewer can see the attempt. It never feeds back into movement.
//!
//! Every press schedules its own restore `duration` seconds later, and the
//! earliest pending restore turns the flash off. Pressing again mid-flash
//! therefore does not extend it.

use crate::math::Vec4;
use crate::movement::ConfigError;
use std::collections::VecDeque;

/// Default flash length in seconds.
pub const DEFAULT_FLASH_SECS: f32 = 0.2;

/// Opaque red.
pub const FLASH_RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct JumpFlash {
    duration: f32,
    lit: bool,
    /// Seconds until each scheduled restore, oldest first.
    pending: VecDeque<f32>,
}

impl JumpFlash {
    /// A zero duration turns the flash off entirely.
    pub fn new(duration: f32) -> Result<Self, ConfigError> {
        ConfigError::check_non_negative("flash_duration", duration)?;
        Ok(Self {
            duration,
            lit: false,
            pending: VecDeque::new(),
        })
    }

    pub fn trigger(&mut self) {
        if self.duration > 0.0 {
            self.lit = true;
            self.pending.push_back(self.duration);
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        for restore in &mut self.pending {
            *restore -= delta_time;
        }
        while self.pending.front().is_some_and(|restore| *restore <= 0.0) {
            self.pending.pop_front();
            self.lit = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.lit
    }

    /// Seconds until the flash goes out, zero when it is not showing.
    pub fn remaining(&self) -> f32 {
        match self.pending.front() {
            Some(restore) if self.lit => *restore,
            _ => 0.0,
        }
    }

    /// Color to draw the body with this frame.
    pub fn tint(&self, base: Vec4, flash: Vec4) -> Vec4 {
        if self.is_active() {
            flash
        } else {
            base
        }
    }
}

impl Default for JumpFlash {
    fn default() -> Self {
        Self {
            duration: DEFAULT_FLASH_SECS,
            lit: false,
            pending: VecDeque::new(),
        }
    }
}
