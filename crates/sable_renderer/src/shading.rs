//! Surface shading at a hit point.

use crate::{Color, HitRecord, Light};
use sable_math::vector;

/// Lambertian diffuse shading summed over every light.
///
/// Each light contributes `intensity * max(0, cos θ) * material.color`,
/// where θ is the angle between the surface normal and the direction to the
/// light. There is no shadow test and no ambient term, and the sum is left
/// unclamped.
pub fn shade(rec: &HitRecord, lights: &[Light]) -> Color {
    lights.iter().fold(Color::ZERO, |acc, light| {
        let light_dir = vector::normalize(light.position - rec.p);
        let cos_theta = vector::dot(light_dir, rec.normal).max(0.0);
        acc + rec.material.color * (light.intensity * cos_theta)
    })
}

/// Unlit shading: the material color as-is.
pub fn shade_flat(rec: &HitRecord) -> Color {
    rec.material.color
}
