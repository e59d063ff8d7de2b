//! Applying tick decisions to a physics body

use crate::math::Vec2;
use crate::movement::TickResult;

impl TickResult {
    /// Velocity the body should have after this tick.
    ///
    /// X is always overwritten. Y keeps whatever gravity and earlier impulses
    /// left there, unless a jump fired, in which case it becomes `jump_force`
    /// (an impulse, not scaled by delta time).
    pub fn resolve_velocity(&self, current: Vec2, jump_force: f32) -> Vec2 {
        let y = if self.jumped { jump_force } else { current.y };
        Vec2::new(self.target_velocity_x, y)
    }
}

/// Physics body the movement pipeline can read and push.
pub trait BodyActuator {
    fn position(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    fn apply(&mut self, result: &TickResult, jump_force: f32) {
        let velocity = result.resolve_velocity(self.velocity(), jump_force);
        self.set_velocity(velocity);
    }
}
