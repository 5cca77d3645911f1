//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray, Sphere};
use sable_math::{Interval, Vec3};

/// Hits at or beyond this distance are treated as background.
pub const VISIBILITY_HORIZON: f32 = 1000.0;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing from the sphere center through `p`
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Distance along the ray
    pub t: f32,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object at a distance `t` with
    /// `ray_t.min <= t < ray_t.max`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// Nearest hit by linear scan, in slice order.
///
/// A later sphere only replaces the current best when it is strictly
/// closer, so the first sphere wins exact ties.
impl Hittable for [Sphere] {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest_so_far = ray_t.max;
        let mut best = None;

        for sphere in self {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(rec) = sphere.hit(ray, interval) {
                closest_so_far = rec.t;
                best = Some(rec);
            }
        }

        best
    }
}

/// Find the nearest sphere in front of the ray, within the visibility horizon.
pub fn intersect_scene<'a>(ray: &Ray, spheres: &'a [Sphere]) -> Option<HitRecord<'a>> {
    spheres.hit(ray, Interval::new(0.0, VISIBILITY_HORIZON))
}
