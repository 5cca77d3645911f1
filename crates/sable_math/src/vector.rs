//! Vector algebra over `Vec3`.
//!
//! Thin free functions. Everything returns a new value; nothing mutates
//! its inputs.
//!
//! `glam::Vec3::normalize` produces NaNs for a zero vector. The renderer
//! relies on zero vectors passing through unchanged instead, so use
//! [`normalize`] rather than glam's method.

use crate::Vec3;

/// Component-wise sum.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Euclidean length.
#[inline]
pub fn norm(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// A zero-length vector is returned unchanged.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let n = norm(v);
    if n != 0.0 {
        v / n
    } else {
        v
    }
}
