//! Sable Renderer - CPU ray casting.
//!
//! Casts one ray per sub-pixel from a pinhole camera, finds the nearest
//! sphere with a linear scan, and shades hits with a Lambertian term summed
//! over all point lights. Misses fall back to a solid color or a background
//! plate. Rows are rendered in parallel with rayon.

mod background;
mod camera;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;

pub use background::Background;
pub use camera::Camera;
pub use hittable::{intersect_scene, HitRecord, Hittable, VISIBILITY_HORIZON};
pub use output::{color_to_rgb, encode_ppm, save_ppm, write_ppm};
pub use renderer::{
    render, render_pixel, FrameBuffer, RenderConfig, RenderContext, RenderError, ShadingMode,
};
pub use shading::{shade, shade_flat};
pub use sphere::intersect_sphere;

/// Re-export scene types from sable_core
pub use sable_core::{BackgroundSampler, Color, Light, Material, Scene, Sphere};

/// Re-export Vec3 and common math types from sable_math
pub use sable_math::{Interval, Ray, Vec2, Vec3};
