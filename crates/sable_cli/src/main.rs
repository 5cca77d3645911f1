use anyhow::{Context, Result};
use clap::Parser;
use sable_core::{presets, BackgroundImage, Scene};
use sable_renderer::{render, save_ppm, Background, RenderContext};

mod cli;

use cli::{Args, Preset};

/// Resolve the scene from --scene or --preset.
fn load_scene(args: &Args) -> Result<Scene> {
    match &args.scene {
        Some(path) => Scene::load_json(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => Ok(match args.preset {
            Preset::Showcase => presets::showcase(),
            Preset::SingleSphere => presets::single_sphere(),
        }),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let scene = load_scene(&args)?;

    // Keep the plate alive for the whole render; the context only borrows it
    let plate = args
        .background
        .as_ref()
        .map(BackgroundImage::open)
        .transpose()
        .context("Failed to load background image")?;

    let background = match &plate {
        Some(plate) => {
            log::info!("Background plate: {}", plate.path);
            Background::Image {
                sampler: plate,
                fallback: args.background_color,
            }
        }
        None => Background::Solid(args.background_color),
    };

    let ctx = RenderContext::new(&scene, background, args.render_config())?;
    let frame = render(&ctx)?;

    save_ppm(&frame, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
