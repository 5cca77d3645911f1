//! Core ray casting renderer.
//!
//! Implements:
//! - Pinhole camera rays on a regular S x S sub-pixel grid
//! - Nearest-hit search against every sphere
//! - Lambertian shading or background lookup per sample
//! - Row-parallel rendering with rayon

use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hittable::intersect_scene;
use crate::shading::{shade, shade_flat};
use crate::{Background, Camera, Color, Scene};
use sable_math::{Vec2, Vec3};

/// Errors that abort a render or its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Out of memory allocating {bytes} bytes")]
    ResourceExhaustion { bytes: usize },

    #[error("Cannot open {} for writing: {source}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
}

/// How a hit surface is colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Lambertian diffuse summed over all lights.
    #[default]
    Diffuse,
    /// Material color, ignoring lights.
    Flat,
}

/// Render configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image columns
    pub width: u32,
    /// Image rows
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Sub-samples per pixel along each axis
    pub supersampling: u32,
    pub shading: ShadingMode,
    /// Pinhole location; the camera always looks down -Z
    pub camera_position: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: FRAC_PI_2,
            supersampling: 4,
            shading: ShadingMode::Diffuse,
            camera_position: Vec3::ZERO,
        }
    }
}

impl RenderConfig {
    /// Check that the configuration describes a renderable frame.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.supersampling == 0 {
            return Err(RenderError::InvalidConfig(
                "supersampling must be at least 1".to_string(),
            ));
        }
        if !self.fov.is_finite() || self.fov <= 0.0 || self.fov >= std::f32::consts::PI {
            return Err(RenderError::InvalidConfig(format!(
                "field of view must be in (0, pi) radians, got {}",
                self.fov
            )));
        }
        if !self.camera_position.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "camera position must be finite, got {}",
                self.camera_position
            )));
        }
        Ok(())
    }
}

/// Everything a render reads, bundled once and shared by all workers.
///
/// Fields are read-only after construction so the camera always agrees
/// with the configured image size.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    scene: &'a Scene,
    background: Background<'a>,
    camera: Camera,
    config: RenderConfig,
}

impl<'a> RenderContext<'a> {
    /// Validate `config` and build the camera for it.
    pub fn new(
        scene: &'a Scene,
        background: Background<'a>,
        config: RenderConfig,
    ) -> Result<Self, RenderError> {
        config.validate()?;
        let camera = Camera::new(config.width, config.height, config.fov)
            .with_position(config.camera_position);

        Ok(Self {
            scene,
            background,
            camera,
            config,
        })
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn background(&self) -> Background<'a> {
        self.background
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

/// Row-major buffer of linear colors.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Allocate a buffer filled with black.
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub fn try_new(width: u32, height: u32) -> Result<Self, RenderError> {
        let count = (width as usize).checked_mul(height as usize);
        let bytes = count
            .and_then(|n| n.checked_mul(std::mem::size_of::<Color>()))
            .unwrap_or(usize::MAX);
        let count = count.ok_or(RenderError::ResourceExhaustion { bytes })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| RenderError::ResourceExhaustion { bytes })?;
        pixels.resize(count, Color::ZERO);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y as usize) * (self.width as usize) + x as usize] = color;
    }
}

/// Number of sub-samples in an S x S grid, as a float divisor.
///
/// Squared in floating point; `S * S` in `u32` overflows for S >= 65536.
#[inline]
fn sample_count(supersampling: u32) -> f32 {
    let n = supersampling as f32;
    n * n
}

/// Render a single pixel, averaging its S x S sub-samples.
pub fn render_pixel(ctx: &RenderContext, i: u32, j: u32) -> Color {
    let ss = ctx.config().supersampling;
    let n = ss as f32;
    let mut pixel_color = Color::ZERO;

    for s in 0..ss {
        for t in 0..ss {
            let offset = Vec2::new((s as f32 + 0.5) / n, (t as f32 + 0.5) / n);
            let ray = ctx.camera().get_ray(i, j, offset);

            pixel_color += match intersect_scene(&ray, &ctx.scene().spheres) {
                Some(rec) => match ctx.config().shading {
                    ShadingMode::Diffuse => shade(&rec, &ctx.scene().lights),
                    ShadingMode::Flat => shade_flat(&rec),
                },
                None => ctx
                    .background()
                    .radiance(i, j, ctx.config().width, ctx.config().height),
            };
        }
    }

    pixel_color / sample_count(ss)
}

/// Render the whole frame.
///
/// Rows are distributed across the rayon thread pool. Each worker writes
/// only the cells of its own row and reads only `ctx`.
pub fn render(ctx: &RenderContext) -> Result<FrameBuffer, RenderError> {
    let config = ctx.config();

    log::info!(
        "Rendering {}x{} @ {}x{} samples ({} spheres, {} lights)",
        config.width,
        config.height,
        config.supersampling,
        config.supersampling,
        ctx.scene().sphere_count(),
        ctx.scene().light_count()
    );
    log::debug!("Render config: {:?}, background: {:?}", config, ctx.background());

    let start = Instant::now();
    let mut frame = FrameBuffer::try_new(config.width, config.height)?;

    frame
        .pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, slot) in row.iter_mut().enumerate() {
                *slot = render_pixel(ctx, i as u32, j as u32);
            }
        });

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(frame)
}
