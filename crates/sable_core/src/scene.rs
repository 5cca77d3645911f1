//! Scene description types for Sable.
//!
//! A scene is an ordered list of spheres plus an ordered list of point
//! lights. Everything here is plain data: the renderer borrows a `Scene`
//! read-only for the duration of a render.

use std::fs;
use std::path::Path;

use sable_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color type alias (RGB, conventionally 0-1 but unclamped until output)
pub type Color = Vec3;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A diffuse surface description.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base reflectance color
    pub color: Color,
}

impl Default for Material {
    /// Ivory, the color used when a scene does not assign materials.
    fn default() -> Self {
        Self {
            color: Color::new(0.4, 0.4, 0.3),
        }
    }
}

impl Material {
    /// Create a new material with the given base color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

/// A sphere primitive.
///
/// The radius is expected to be positive but is not checked.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Spheres and lights, in insertion order.
///
/// Order matters only for intersection ties: when two spheres are hit at
/// exactly the same distance, the one added first wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere (builder style).
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a light (builder style).
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Parse a scene from a JSON string.
    ///
    /// Vectors are written as `[x, y, z]` arrays. A sphere without a
    /// `material` gets [`Material::default`].
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&text)?;

        log::debug!(
            "Loaded scene {}: {} spheres, {} lights",
            path.display(),
            scene.sphere_count(),
            scene.light_count()
        );

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_builder_keeps_order() {
        let a = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default());
        let b = Sphere::new(Vec3::new(1.0, 0.0, -5.0), 2.0, Material::new(Color::X));
        let scene = Scene::new()
            .with_sphere(a)
            .with_sphere(b)
            .with_light(Light::new(Vec3::Y, 1.0));

        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.spheres[0], a);
        assert_eq!(scene.spheres[1], b);
    }

    #[test]
    fn test_scene_from_json() {
        let json = r#"{
            "spheres": [
                { "center": [0.0, 0.0, -16.0], "radius": 2.0,
                  "material": { "color": [0.3, 0.1, 0.1] } },
                { "center": [1.0, 2.0, -8.0], "radius": 0.5 }
            ],
            "lights": [
                { "position": [-50.0, 20.0, 20.0], "intensity": 1.5 }
            ]
        }"#;

        let scene = Scene::from_json_str(json).unwrap();
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.spheres[0].center, Vec3::new(0.0, 0.0, -16.0));
        assert_eq!(scene.spheres[0].material.color, Color::new(0.3, 0.1, 0.1));
        // Missing material falls back to the default
        assert_eq!(scene.spheres[1].material, Material::default());
        assert_eq!(scene.lights[0].intensity, 1.5);
    }

    #[test]
    fn test_scene_from_json_missing_lists() {
        let scene = Scene::from_json_str("{}").unwrap();
        assert_eq!(scene, Scene::new());
    }

    #[test]
    fn test_scene_from_json_invalid() {
        let err = Scene::from_json_str(r#"{ "spheres": [ { "radius": 1.0 } ] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn test_load_json_missing_file() {
        let path = std::env::temp_dir().join("sable_missing_dir_for_test/scene.json");
        let err = Scene::load_json(&path).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
