//! Sable Core - Scene description and background plates.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`
//! - **Presets**: the built-in demo scenes
//! - **Background plates**: decoded images sampled by pixel coordinate
//!
//! # Example
//!
//! ```ignore
//! use sable_core::{presets, Scene};
//!
//! let scene = presets::showcase();
//! println!("{} spheres, {} lights", scene.sphere_count(), scene.light_count());
//!
//! let scene = Scene::load_json("scene.json")?;
//! ```

pub mod background;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use background::{BackgroundError, BackgroundImage, BackgroundSampler};
pub use scene::{Color, Light, Material, Scene, SceneError, Sphere};
