//! Ray-based slide resolution.
//!
//! A slide is resolved by casting a ray from the face of the moving piece
//! that leads in the direction of travel and taking the nearest obstacle box
//! it hits. The signed distance from the face to that hit is how far the
//! piece may travel.

use bevy_ecs::prelude::Entity;
use glam::Vec3;

use crate::components::boxcollider::Aabb;
use crate::components::slidetask::Axis;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest obstacle found by [`resolve_slide`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideHit {
    pub obstacle: Entity,
    pub point: Vec3,
    /// Hit coordinate minus origin coordinate along the travel axis.
    pub distance: f32,
}

/// Slab test. Returns the ray parameter of the first point of `aabb` along
/// the ray, or `None` if the box is missed or lies behind the origin.
///
/// Bounds are inclusive, so a ray starting on a box's face hits it at `0.0`.
pub fn ray_aabb_distance(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for i in 0..3 {
        let origin = ray.origin[i];
        let direction = ray.direction[i];
        let (lo, hi) = (aabb.min[i], aabb.max[i]);

        if direction.abs() < f32::EPSILON {
            // parallel to this slab
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (t0, t1) = {
            let a = (lo - origin) * inv;
            let b = (hi - origin) * inv;
            if a <= b { (a, b) } else { (b, a) }
        };
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Center of the face of `aabb` that leads when travelling along `axis` with `sign`.
pub fn slide_origin(aabb: &Aabb, axis: Axis, sign: f32) -> Vec3 {
    let mut origin = aabb.center();
    let face = if sign > 0.0 {
        axis.coord(aabb.max)
    } else {
        axis.coord(aabb.min)
    };
    axis.set_coord(&mut origin, face);
    origin
}

/// Find how far a box can slide along `axis` (`sign` is `1.0` or `-1.0`)
/// before touching one of `obstacles`.
///
/// The caller must leave the moving piece itself out of `obstacles`.
/// `None` means nothing was hit at all, which a level closed by walls never
/// produces.
pub fn resolve_slide<I>(moving: &Aabb, axis: Axis, sign: f32, obstacles: I) -> Option<SlideHit>
where
    I: IntoIterator<Item = (Entity, Aabb)>,
{
    let origin = slide_origin(moving, axis, sign);
    let ray = Ray::new(origin, axis.unit() * sign);

    obstacles
        .into_iter()
        .filter_map(|(entity, aabb)| ray_aabb_distance(&ray, &aabb).map(|t| (entity, ray.at(t))))
        .min_by(|(_, a), (_, b)| {
            a.distance_squared(origin)
                .total_cmp(&b.distance_squared(origin))
        })
        .map(|(obstacle, point)| SlideHit {
            obstacle,
            point,
            distance: axis.coord(point) - axis.coord(origin),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn unit_box_at(min: Vec3) -> Aabb {
        Aabb::new(min, min + Vec3::ONE)
    }

    fn entities<const N: usize>() -> [Entity; N] {
        let mut world = World::new();
        std::array::from_fn(|_| world.spawn_empty().id())
    }

    #[test]
    fn ray_hits_box_in_front() {
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.0), Vec3::Z);
        let t = ray_aabb_distance(&ray, &unit_box_at(Vec3::new(0.0, 0.0, 3.0)));
        assert!(approx_eq(t.unwrap(), 3.0));
    }

    #[test]
    fn ray_misses_box_behind() {
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.0), Vec3::Z);
        assert!(ray_aabb_distance(&ray, &unit_box_at(Vec3::new(0.0, 0.0, -3.0))).is_none());
    }

    #[test]
    fn ray_misses_box_in_other_lane() {
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.0), Vec3::Z);
        assert!(ray_aabb_distance(&ray, &unit_box_at(Vec3::new(1.5, 0.0, 3.0))).is_none());
    }

    #[test]
    fn ray_starting_on_face_hits_at_zero() {
        let ray = Ray::new(Vec3::new(0.5, 0.5, 3.0), Vec3::Z);
        let t = ray_aabb_distance(&ray, &unit_box_at(Vec3::new(0.0, 0.0, 3.0)));
        assert!(approx_eq(t.unwrap(), 0.0));
    }

    #[test]
    fn ray_inside_box_hits_exit() {
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.25), Vec3::NEG_Z);
        let t = ray_aabb_distance(&ray, &unit_box_at(Vec3::ZERO));
        assert!(approx_eq(t.unwrap(), 0.25));
    }

    #[test]
    fn origin_is_leading_face_center() {
        let aabb = Aabb::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(slide_origin(&aabb, Axis::Z, 1.0), Vec3::new(0.5, 0.5, 3.0));
        assert_eq!(slide_origin(&aabb, Axis::Z, -1.0), Vec3::new(0.5, 0.5, 1.0));
        assert_eq!(slide_origin(&aabb, Axis::X, 1.0), Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(slide_origin(&aabb, Axis::X, -1.0), Vec3::new(0.0, 0.5, 2.0));
    }

    #[test]
    fn resolve_picks_nearest_obstacle() {
        let [far, near, behind] = entities();
        let moving = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 2.0));
        let obstacles = vec![
            (far, unit_box_at(Vec3::new(0.0, 0.0, 9.0))),
            (near, unit_box_at(Vec3::new(0.0, 0.0, 5.0))),
            (behind, unit_box_at(Vec3::new(0.0, 0.0, -4.0))),
        ];
        let hit = resolve_slide(&moving, Axis::Z, 1.0, obstacles).unwrap();
        assert_eq!(hit.obstacle, near);
        assert!(approx_eq(hit.distance, 3.0));
        assert!(approx_eq(hit.point.z, 5.0));
    }

    #[test]
    fn resolve_backwards_gives_negative_distance() {
        let [wall, ahead] = entities();
        let moving = Aabb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(5.0, 1.0, 1.0));
        let obstacles = vec![
            (wall, unit_box_at(Vec3::new(-1.0, 0.0, 0.0))),
            (ahead, unit_box_at(Vec3::new(6.0, 0.0, 0.0))),
        ];
        let hit = resolve_slide(&moving, Axis::X, -1.0, obstacles).unwrap();
        assert_eq!(hit.obstacle, wall);
        assert!(approx_eq(hit.distance, -3.0));
    }

    #[test]
    fn resolve_without_any_hit_is_none() {
        let [stray] = entities();
        let moving = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let obstacles = vec![(stray, unit_box_at(Vec3::new(4.0, 0.0, 4.0)))];
        assert!(resolve_slide(&moving, Axis::Z, 1.0, obstacles).is_none());
    }

    #[test]
    fn resolve_against_touching_neighbour_is_zero() {
        let [neighbour] = entities();
        let moving = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let obstacles = vec![(neighbour, unit_box_at(Vec3::new(0.0, 0.0, 1.0)))];
        let hit = resolve_slide(&moving, Axis::Z, 1.0, obstacles).unwrap();
        assert!(approx_eq(hit.distance, 0.0));
    }
}
