//! Deterministic math utilities
//!
//! Re-exports glam with the 2D box helpers used by ground probing

pub use glam::*;

/// Axis-aligned box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Closed-interval overlap: boxes that only share an edge still overlap.
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_size_round_trip() {
        let aabb = Aabb2::from_center_size(Vec2::new(1.0, 2.0), Vec2::new(4.0, 2.0));
        assert_eq!(aabb.min, Vec2::new(-1.0, 1.0));
        assert_eq!(aabb.max, Vec2::new(3.0, 3.0));
        assert_eq!(aabb.center(), Vec2::new(1.0, 2.0));
        assert_eq!(aabb.size(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_new_orders_corners() {
        let aabb = Aabb2::new(Vec2::new(2.0, 2.0), Vec2::new(0.0, 0.0));
        assert_eq!(aabb.min, Vec2::ZERO);
        assert_eq!(aabb.max, Vec2::splat(2.0));
    }

    #[test]
    fn test_overlap() {
        let a = Aabb2::new(Vec2::ZERO, Vec2::splat(1.0));
        let touching = Aabb2::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        let apart = Aabb2::new(Vec2::new(1.5, 0.0), Vec2::new(2.0, 1.0));

        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));
        assert!(!a.overlaps(&apart));
        assert!(a.translated(Vec2::new(1.0, 0.0)).overlaps(&apart));
    }
}
