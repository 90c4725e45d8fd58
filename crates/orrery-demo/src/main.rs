//! Orrery command-line entry point.
//!
//! Loads `config.ron`, applies CLI overrides, initializes logging, then prints
//! the generated planet catalog (or a single orbit outline with `--outline`).
//!
//! Run with: `cargo run -p orrery-demo -- --seed 42`

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use orrery_bodies::{
    GeometryError, ORBIT_SEGMENTS, generate_default_planets, orbit_outline_points, validate_extent,
};
use orrery_config::{CliArgs, Config, ConfigError, OutputFormat};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Anything that can stop the binary.
#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid outline radius: {0}")]
    Outline(#[from] GeometryError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// The single line written to stderr when the run fails.
fn failure_message(err: &DemoError) -> String {
    format!("orrery: {err}")
}

fn run(args: &CliArgs) -> Result<(), DemoError> {
    let config_dir: PathBuf = match &args.config {
        Some(dir) => dir.clone(),
        None => Config::default_dir()?,
    };
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);

    orrery_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );
    info!("Config dir: {}", config_dir.display());

    if let Some(radius) = args.outline {
        let radius = validate_extent(radius)?;
        info!("Orbit outline for radius {radius}");
        for p in orbit_outline_points(radius, ORBIT_SEGMENTS) {
            println!("{:.4} {:.4} {:.4}", p.x, p.y, p.z);
        }
        return Ok(());
    }

    let planets = match config.generator.seed {
        Some(seed) => {
            info!("Seed: {seed}");
            generate_default_planets(&mut ChaCha8Rng::seed_from_u64(seed))
        }
        None => generate_default_planets(&mut rand::rng()),
    };

    match config.output.format {
        OutputFormat::Text => print!("{}", report::render_text(&planets)),
        OutputFormat::Json => println!("{}", report::render_json(&planets)?),
    }
    Ok(())
}
