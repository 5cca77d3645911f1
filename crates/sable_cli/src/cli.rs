use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sable_renderer::{Color, RenderConfig, ShadingMode, Vec3};

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes selectable with --preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Showcase,
    SingleSphere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shading {
    Diffuse,
    Flat,
}

impl From<Shading> for ShadingMode {
    fn from(shading: Shading) -> Self {
        match shading {
            Shading::Diffuse => ShadingMode::Diffuse,
            Shading::Flat => ShadingMode::Flat,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "sable")]
#[command(about = "Ray cast a scene of spheres to a PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    /// Sub-samples per pixel along each axis
    #[arg(long, short = 's', default_value_t = 4)]
    pub supersampling: u32,

    /// How hit surfaces are colored
    #[arg(long, value_enum, default_value_t = Shading::Diffuse)]
    pub shading: Shading,

    /// Background image stretched behind the scene
    #[arg(long, short = 'b')]
    pub background: Option<PathBuf>,

    /// Solid background color as R,G,B in [0, 1]
    #[arg(long, default_value = "0.2,0.7,0.8", value_parser = parse_triple)]
    pub background_color: Color,

    /// Camera position as X,Y,Z; the view always faces -Z
    #[arg(long, default_value = "0,0,0", value_parser = parse_triple, allow_hyphen_values = true)]
    pub camera_position: Vec3,

    /// JSON scene file (overrides --preset)
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Built-in scene to render when no --scene is given
    #[arg(long, value_enum, default_value_t = Preset::Showcase)]
    pub preset: Preset,

    /// Output file path (binary PPM)
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings described by these arguments.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            fov: self.fov.to_radians(),
            supersampling: self.supersampling,
            shading: self.shading.into(),
            camera_position: self.camera_position,
        }
    }
}

/// Parse "a,b,c" into a color or a position.
fn parse_triple(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated numbers, got '{s}'"));
    }

    let mut rgb = [0.0f32; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid channel '{part}': {e}"))?;
    }
    Ok(Vec3::from_array(rgb))
}
