//! Ray-sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use crate::{Ray, Sphere};
use sable_math::{vector, Interval};

/// Distance along `ray` to the first visible surface of `sphere`.
///
/// Geometric solution: project the center onto the ray, then step back by
/// the half-chord. Returns the near root when it is in front of the origin,
/// otherwise the far root.
///
/// A ray whose closest approach to the center lies behind its origin
/// (`tca < 0`) is a miss, even when the origin is inside the sphere.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let l = vector::sub(sphere.center, ray.origin());
    let tca = vector::dot(l, ray.direction());
    if tca < 0.0 {
        return None;
    }

    let r2 = sphere.radius * sphere.radius;
    let d2 = vector::dot(l, l) - tca * tca;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;

    if t0 < 0.0 && t1 < 0.0 {
        return None;
    }

    Some(if t0 < 0.0 { t1 } else { t0 })
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = intersect_sphere(ray, self)?;
        if t < ray_t.min || t >= ray_t.max {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord {
            p,
            normal: vector::normalize(p - self.center),
            material: &self.material,
            t,
        })
    }
}
