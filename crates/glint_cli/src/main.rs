use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::SceneDescription;
use glint_renderer::{build_scene, render, render_parallel, save_image, Camera, RenderConfig};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;
mod logger;

use cli::{Args, BuiltinScene};
use logger::init_logger;

fn load_description(args: &Args) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => Ok(match args.builtin {
            BuiltinScene::Default => SceneDescription::default_scene(),
            BuiltinScene::Random => SceneDescription::random_scene(args.seed),
        }),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.log_level.into());
    info!("Glint {}", env!("CARGO_PKG_VERSION"));

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let description = load_description(&args)?;

    if let Some(path) = &args.dump_scene {
        fs::write(path, description.to_json_string()?)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;
        info!("Scene description written to {}", path.display());
    }

    let start = Instant::now();
    let world = build_scene(&description).context("Invalid scene")?;
    info!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig {
        image_width: args.width,
        image_height: args.height,
        samples_per_pixel: args.samples,
        max_depth: args.max_depth,
        t_min: args.t_min,
        seed: args.seed,
    };
    let camera = Camera::from_config(&description.camera, config.aspect_ratio());

    let start = Instant::now();
    let image = if args.single_threaded {
        info!(
            "Rendering {}x{} @ {} spp on one thread",
            config.image_width, config.image_height, config.samples_per_pixel
        );
        let mut rng = StdRng::seed_from_u64(config.seed);
        render(&camera, &world, &config, &mut rng)
    } else {
        render_parallel(&camera, &world, &config)
    };
    info!("Rendered in {:?}", start.elapsed());

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
