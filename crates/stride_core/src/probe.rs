//! Ground probing
//!
//! The movement core only ever sees a boolean per tick. How that boolean is
//! computed belongs to whatever owns collision; [`StaticGround`] is a small
//! in-memory implementation for headless runs and tests.

use crate::math::{Aabb2, Vec2};
use crate::movement::ConfigError;
use serde::{Deserialize, Serialize};

/// Collision layer bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const DEFAULT: LayerMask = LayerMask(1 << 0);
    pub const GROUND: LayerMask = LayerMask(1 << 3);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// True if any bit of `layer` is set in this mask.
    pub fn contains(self, layer: LayerMask) -> bool {
        self.0 & layer.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::GROUND
    }
}

/// Answers "is the body standing on something" for one tick.
pub trait GroundProbe {
    /// True iff a `box_size` rectangle centered at `position + offset`
    /// overlaps any ground obstacle.
    fn query(&self, position: Vec2, offset: Vec2, box_size: Vec2) -> bool;
}

impl<P: GroundProbe + ?Sized> GroundProbe for &P {
    fn query(&self, position: Vec2, offset: Vec2, box_size: Vec2) -> bool {
        (**self).query(position, offset, box_size)
    }
}

/// Fixed box cast below a body's center.
///
/// A box of `box_size` starts `offset_y` below the center and sweeps straight
/// down by `cast_distance`. The probe region is the union of that sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeShape {
    box_size: Vec2,
    offset_y: f32,
    cast_distance: f32,
}

impl ProbeShape {
    pub fn new(box_size: Vec2, offset_y: f32, cast_distance: f32) -> Result<Self, ConfigError> {
        if !box_size.is_finite() || box_size.x <= 0.0 || box_size.y <= 0.0 {
            return Err(ConfigError::NonPositiveSize {
                name: "box_size",
                x: box_size.x,
                y: box_size.y,
            });
        }
        ConfigError::check_finite("offset_y", offset_y)?;
        ConfigError::check_non_negative("cast_distance", cast_distance)?;

        Ok(Self {
            box_size,
            offset_y,
            cast_distance,
        })
    }

    pub fn box_size(&self) -> Vec2 {
        self.box_size
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn cast_distance(&self) -> f32 {
        self.cast_distance
    }

    /// Offset from the body center to the center of the swept region.
    pub fn query_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.offset_y - self.cast_distance * 0.5)
    }

    /// Size of the swept region.
    pub fn query_size(&self) -> Vec2 {
        Vec2::new(self.box_size.x, self.box_size.y + self.cast_distance)
    }

    /// Swept region in world space.
    pub fn region(&self, position: Vec2) -> Aabb2 {
        Aabb2::from_center_size(position + self.query_offset(), self.query_size())
    }

    /// Box at the end of the cast, for debug drawing.
    pub fn debug_region(&self, position: Vec2) -> Aabb2 {
        let end = position + Vec2::new(0.0, self.offset_y - self.cast_distance);
        Aabb2::from_center_size(end, self.box_size)
    }

    /// Runs this shape against a probe.
    pub fn sample<P: GroundProbe + ?Sized>(&self, probe: &P, position: Vec2) -> bool {
        probe.query(position, self.query_offset(), self.query_size())
    }
}

impl Default for ProbeShape {
    fn default() -> Self {
        Self {
            box_size: Vec2::new(1.0, 0.1),
            offset_y: -0.2,
            cast_distance: 0.1,
        }
    }
}

/// Static obstacle on one or more layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub bounds: Aabb2,
    pub layer: LayerMask,
}

impl Collider {
    pub fn ground(bounds: Aabb2) -> Self {
        Self {
            bounds,
            layer: LayerMask::GROUND,
        }
    }
}

/// Immovable level geometry filtered by a layer mask.
#[derive(Debug, Clone, Default)]
pub struct StaticGround {
    colliders: Vec<Collider>,
    mask: LayerMask,
}

impl StaticGround {
    pub fn new(mask: LayerMask) -> Self {
        Self {
            colliders: Vec::new(),
            mask,
        }
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.colliders.push(collider);
        self
    }

    pub fn push(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn mask(&self) -> LayerMask {
        self.mask
    }
}

impl GroundProbe for StaticGround {
    fn query(&self, position: Vec2, offset: Vec2, box_size: Vec2) -> bool {
        let region = Aabb2::from_center_size(position + offset, box_size);
        self.colliders
            .iter()
            .any(|collider| self.mask.contains(collider.layer) && collider.bounds.overlaps(&region))
    }
}
