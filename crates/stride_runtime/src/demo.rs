//! Headless demo level
//!
//! Two floors with a gap, a box-shaped body with plain gravity, and an input
//! script that exercises a standing jump, a buffered jump, and a coyote jump
//! off the ledge. The body physics here is only enough to move the box around.

use stride_core::actuator::BodyActuator;
use stride_core::math::{Aabb2, Vec2};
use stride_core::probe::{Collider, LayerMask, StaticGround};
use stride_services::input::{InputState, ScriptedInput};

pub const GRAVITY: f32 = -25.0;

/// Left floor ends at x = 2, right floor starts at x = 6.
pub fn level(mask: LayerMask) -> StaticGround {
    StaticGround::new(mask)
        .with_collider(Collider::ground(Aabb2::new(
            Vec2::new(-10.0, -1.0),
            Vec2::new(2.0, 0.0),
        )))
        .with_collider(Collider::ground(Aabb2::new(
            Vec2::new(6.0, -1.0),
            Vec2::new(20.0, 0.0),
        )))
}

pub fn script() -> ScriptedInput {
    let idle = InputState::idle();
    let jump = InputState::from_buttons(false, false, true);
    let right = InputState::from_buttons(false, true, false);
    let right_jump = InputState::from_buttons(false, true, true);

    ScriptedInput::new()
        // Settle, then a plain standing jump
        .hold(idle, 10)
        .hold(jump, 1)
        .hold(idle, 41)
        // Pressed just before touching down again
        .hold(jump, 1)
        .hold(idle, 70)
        // Run off the ledge and jump a few ticks late
        .hold(right, 34)
        .hold(right_jump, 1)
        .hold(right, 60)
        .hold(idle, 30)
}

/// Axis-aligned box body with gravity and landing on collider tops.
#[derive(Debug, Clone)]
pub struct DemoBody {
    position: Vec2,
    velocity: Vec2,
    half_extents: Vec2,
}

impl DemoBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_extents: size * 0.5,
        }
    }

    /// Body resting on a surface at height `top`.
    pub fn standing_on(x: f32, top: f32, size: Vec2) -> Self {
        Self::new(Vec2::new(x, top + size.y * 0.5), size)
    }

    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_center_size(self.position, self.half_extents * 2.0)
    }

    pub fn integrate(&mut self, delta_time: f32, ground: &StaticGround) {
        self.velocity.y += GRAVITY * delta_time;
        let previous_bottom = self.bounds().min.y;
        self.position += self.velocity * delta_time;

        if self.velocity.y > 0.0 {
            return;
        }

        let bounds = self.bounds();
        for collider in ground.colliders() {
            let top = collider.bounds.max.y;
            let spans_x = bounds.max.x > collider.bounds.min.x && bounds.min.x < collider.bounds.max.x;
            if spans_x && previous_bottom >= top && bounds.min.y < top {
                self.position.y = top + self.half_extents.y;
                self.velocity.y = 0.0;
            }
        }
    }
}

impl BodyActuator for DemoBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}
