use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: boxes that only share a face do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec3,
    /// Offset from the entity position to the box's minimum corner.
    pub offset: Vec3,
}

impl BoxCollider {
    /// Create a BoxCollider with given size whose minimum corner sits on the entity position.
    pub fn new(size: Vec3) -> Self {
        Self {
            size,
            offset: Vec3::ZERO,
        }
    }

    /// Create a BoxCollider centered on the entity position.
    pub fn centered(size: Vec3) -> Self {
        Self {
            size,
            offset: size * -0.5,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the world AABB of the collider for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec3) -> Aabb {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        Aabb::new(p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec3, other: &Self, other_position: Vec3) -> bool {
        self.aabb(position).overlaps(&other.aabb(other_position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_collider_surrounds_position() {
        let collider = BoxCollider::centered(Vec3::new(1.0, 1.0, 2.0));
        let aabb = collider.aabb(Vec3::new(0.5, 0.5, 3.0));
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 4.0));
        assert_eq!(aabb.center(), Vec3::new(0.5, 0.5, 3.0));
    }

    #[test]
    fn negative_size_is_normalized() {
        let collider = BoxCollider::new(Vec3::new(-2.0, 1.0, -1.0));
        let aabb = collider.aabb(Vec3::ZERO);
        assert_eq!(aabb.min, Vec3::new(-2.0, 0.0, -1.0));
        assert_eq!(aabb.max, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn touching_faces_do_not_overlap() {
        let a = BoxCollider::new(Vec3::ONE);
        let b = BoxCollider::new(Vec3::ONE);
        assert!(!a.overlaps(Vec3::ZERO, &b, Vec3::new(1.0, 0.0, 0.0)));
        assert!(a.overlaps(Vec3::ZERO, &b, Vec3::new(0.5, 0.5, 0.5)));
    }

    #[test]
    fn contains_point_is_inclusive() {
        let aabb = BoxCollider::new(Vec3::ONE).aabb(Vec3::ZERO);
        assert!(aabb.contains_point(Vec3::ONE));
        assert!(aabb.contains_point(Vec3::splat(0.5)));
        assert!(!aabb.contains_point(Vec3::new(1.1, 0.5, 0.5)));
    }
}
