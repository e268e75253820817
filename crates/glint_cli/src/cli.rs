use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{DEFAULT_MAX_DEPTH, DEFAULT_T_MIN};
use log::LevelFilter;

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

/// Scenes that ship with the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinScene {
    /// Four spheres with a shallow depth of field
    Default,
    /// The many-small-spheres cover scene, placed from --seed
    Random,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "An offline Monte Carlo path tracer for spheres")]
pub struct Args {
    /// JSON scene file (overrides --builtin)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Built-in scene to render when no --scene is given
    #[arg(long, value_enum, default_value = "default")]
    pub builtin: BuiltinScene,

    /// Write the scene description as JSON to this path and continue
    #[arg(long)]
    pub dump_scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value = "400", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "200", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(short = 'n', long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Ignore hits closer than this along a ray
    #[arg(long, default_value_t = DEFAULT_T_MIN)]
    pub t_min: f32,

    /// Seed for sampling and for the random scene
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Worker threads for the tile renderer (default: one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Render on the calling thread with a single generator
    #[arg(long)]
    pub single_threaded: bool,

    /// Output file path (.ppm for ASCII P3, .png for 8-bit PNG)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glint"]);

        assert!(args.scene.is_none());
        assert_eq!(args.builtin, BuiltinScene::Default);
        assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(args.t_min, DEFAULT_T_MIN);
        assert_eq!(args.output, PathBuf::from("output.ppm"));
        assert!(!args.single_threaded);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "glint", "--builtin", "random", "--width", "64", "--height", "32", "-n", "8", "--seed", "5", "-j", "2",
            "-o", "out.png", "--log-level", "debug",
        ]);

        assert_eq!(args.builtin, BuiltinScene::Random);
        assert_eq!((args.width, args.height, args.samples), (64, 32, 8));
        assert_eq!(args.seed, 5);
        assert_eq!(args.threads, Some(2));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(Args::try_parse_from(["glint", "-n", "0"]).is_err());
        assert!(Args::try_parse_from(["glint", "--width", "0"]).is_err());
    }
}
