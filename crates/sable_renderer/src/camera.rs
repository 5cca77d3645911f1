//! Pinhole camera for ray generation.

use sable_math::{vector, Ray, Vec2, Vec3};

/// A pinhole camera looking down -Z.
///
/// The image plane sits one unit in front of the camera. `vfov` is the
/// vertical aperture in radians; the horizontal extent follows from the
/// aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    position: Vec3,

    // Cached from the vertical fov (set by new())
    half_height: f32,
    aspect: f32,
}

impl Camera {
    /// Create a camera at the world origin.
    pub fn new(image_width: u32, image_height: u32, vfov: f32) -> Self {
        Self {
            image_width,
            image_height,
            position: Vec3::ZERO,
            half_height: (vfov / 2.0).tan(),
            aspect: image_width as f32 / image_height as f32,
        }
    }

    /// Move the pinhole. The view direction stays -Z.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Generate the ray through pixel (i, j) at a sub-pixel offset.
    ///
    /// `offset` is in pixel units, `(0.5, 0.5)` being the pixel center.
    /// Row 0 is the top of the image.
    pub fn get_ray(&self, i: u32, j: u32, offset: Vec2) -> Ray {
        let w = self.image_width as f32;
        let h = self.image_height as f32;

        let x = (2.0 * (i as f32 + offset.x) / w - 1.0) * self.half_height * self.aspect;
        let y = -(2.0 * (j as f32 + offset.y) / h - 1.0) * self.half_height;

        let direction = vector::normalize(Vec3::new(x, y, -1.0));
        Ray::new(self.position, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_center_ray_points_down_negative_z() {
        let camera = Camera::new(100, 100, FRAC_PI_2);
        let ray = camera.get_ray(50, 50, Vec2::ZERO);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_ray_direction_is_unit() {
        let camera = Camera::new(64, 48, FRAC_PI_2);
        for (i, j) in [(0, 0), (63, 47), (10, 40), (32, 0)] {
            let ray = camera.get_ray(i, j, Vec2::splat(0.5));
            assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_corner_rays_follow_fov_and_aspect() {
        // 90 degree vertical fov: the top edge of the image plane is at y = 1
        let camera = Camera::new(200, 100, FRAC_PI_2);

        let top_left = camera.get_ray(0, 0, Vec2::ZERO).direction();
        let expected = vector::normalize(Vec3::new(-2.0, 1.0, -1.0));
        assert!((top_left - expected).length() < 1e-6);

        // Bottom-right corner is the far edge of the last pixel
        let bottom_right = camera.get_ray(199, 99, Vec2::ONE).direction();
        let expected = vector::normalize(Vec3::new(2.0, -1.0, -1.0));
        assert!((bottom_right - expected).length() < 1e-5);
    }

    #[test]
    fn test_with_position_moves_origin_only() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let at_origin = Camera::new(10, 10, FRAC_PI_2);
        let moved = at_origin.with_position(origin);

        let a = at_origin.get_ray(3, 4, Vec2::splat(0.5));
        let b = moved.get_ray(3, 4, Vec2::splat(0.5));
        assert_eq!(b.origin(), origin);
        assert_eq!(a.direction(), b.direction());
    }
}
