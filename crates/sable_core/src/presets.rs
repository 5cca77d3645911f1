//! Built-in scenes.

use sable_math::Vec3;

use crate::scene::{Color, Light, Material, Scene, Sphere};

/// Dark red diffuse.
pub const RED_VELVET: Material = Material {
    color: Color::new(0.3, 0.1, 0.1),
};

/// Off-white diffuse.
pub const IVORY: Material = Material {
    color: Color::new(0.4, 0.4, 0.3),
};

/// Five spheres in two materials, lit by one light up and to the left.
pub fn showcase() -> Scene {
    Scene::new()
        .with_sphere(Sphere::new(Vec3::new(4.0, 3.0, -10.0), 2.0, RED_VELVET))
        .with_sphere(Sphere::new(Vec3::new(6.0, 1.5, -8.0), 1.5, IVORY))
        .with_sphere(Sphere::new(Vec3::new(2.5, 2.0, -15.0), 2.0, IVORY))
        .with_sphere(Sphere::new(Vec3::new(0.0, -2.0, -12.0), 1.0, RED_VELVET))
        .with_sphere(Sphere::new(Vec3::new(-7.0, 8.0, -10.0), 2.0, IVORY))
        .with_light(Light::new(Vec3::new(-50.0, 20.0, 20.0), 1.5))
}

/// One ivory sphere straight ahead of the camera, with no lights.
///
/// Under diffuse shading the sphere is a black silhouette; flat shading
/// shows its material color.
pub fn single_sphere() -> Scene {
    Scene::new().with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -16.0), 2.0, IVORY))
}
