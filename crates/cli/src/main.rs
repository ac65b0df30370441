#![deny(unsafe_code)]
//! CLI binary for the perlin-field gradient noise engine.
//!
//! Subcommands:
//! - `render`: sample a seeded field across its box and write a PNG
//! - `sample`: print the noise value at one box coordinate
//! - `map`: convert a point between world and box coordinates
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use perlin_field_core::{BoxFrame, DVec2, GradientField, Recipe};
use perlin_field_render::Scheme;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perlin-field", about = "2D gradient noise CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample a seeded field at a fixed step and write a PNG.
    Render {
        /// Field side length in grid units [default: 8, or the recipe's].
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// PRNG seed for the gradients [default: 42, or the recipe's].
        #[arg(long)]
        seed: Option<u64>,

        /// Distance between samples in grid units [default: 0.05, or the recipe's].
        #[arg(long)]
        step: Option<f64>,

        /// Color scheme (gray, dual).
        #[arg(short = 'c', long, default_value = "dual")]
        scheme: String,

        /// JSON recipe file; explicit flags override its values.
        #[arg(short, long)]
        recipe: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "noise.png")]
        output: PathBuf,
    },
    /// Print the noise value at box coordinates (x, y).
    #[command(allow_negative_numbers = true)]
    Sample {
        x: f64,
        y: f64,

        /// Field side length in grid units.
        #[arg(short = 'n', long, default_value_t = perlin_field_core::recipe::DEFAULT_SIZE)]
        size: usize,

        /// PRNG seed for the gradients.
        #[arg(long, default_value_t = perlin_field_core::recipe::DEFAULT_SEED)]
        seed: u64,
    },
    /// Convert a point between world and box coordinates.
    #[command(allow_negative_numbers = true)]
    Map {
        x: f64,
        y: f64,

        /// Field side length.
        #[arg(short = 'n', long, default_value_t = 8.0)]
        size: f64,

        /// Frame to convert into.
        #[arg(long, value_enum, default_value_t = Frame::Box)]
        to: Frame,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Frame {
    /// World point in, box point out.
    Box,
    /// Box point in, world point out.
    World,
}

/// Loads the recipe file if one was given, then applies explicit overrides.
fn resolve_recipe(
    path: Option<&Path>,
    size: Option<usize>,
    seed: Option<u64>,
    step: Option<f64>,
) -> Result<Recipe, CliError> {
    let mut recipe = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", p.display())))?;
            Recipe::from_json_str(&text).map_err(|e| CliError::Input(e.to_string()))?
        }
        None => Recipe::default(),
    };
    if let Some(size) = size {
        recipe.size = size;
    }
    if let Some(seed) = seed {
        recipe.seed = seed;
    }
    if let Some(step) = step {
        recipe.step = step;
    }
    recipe.validate()?;
    Ok(recipe)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            size,
            seed,
            step,
            scheme,
            recipe,
            output,
        } => {
            let scheme = Scheme::from_name(&scheme).map_err(|e| CliError::Input(e.to_string()))?;
            let recipe = resolve_recipe(recipe.as_deref(), size, seed, step)?;
            info!(?recipe, ?scheme, "rendering noise raster");

            let grid = recipe.render()?;
            perlin_field_render::snapshot::write_png(&grid, scheme, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "recipe": recipe,
                    "samples_per_axis": grid.side(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered size {} seed {} step {} ({}x{} samples) -> {}",
                    recipe.size,
                    recipe.seed,
                    recipe.step,
                    grid.side(),
                    grid.side(),
                    output.display()
                );
            }
        }
        Command::Sample { x, y, size, seed } => {
            let field = GradientField::seeded(size, seed)?;
            let value = field.sample(x, y)?;
            info!(x, y, size, seed, value, "sampled noise");
            if cli.json {
                let info = serde_json::json!({
                    "x": x,
                    "y": y,
                    "size": size,
                    "seed": seed,
                    "value": value,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{value}");
            }
        }
        Command::Map { x, y, size, to } => {
            let frame = BoxFrame::new(size);
            let point = DVec2::new(x, y);
            let mapped = match to {
                Frame::Box => frame.world_to_box(point),
                Frame::World => frame.box_to_world(point),
            };
            if cli.json {
                let info = serde_json::json!({
                    "to": format!("{to:?}").to_lowercase(),
                    "size": frame.size(),
                    "x": mapped.x,
                    "y": mapped.y,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{} {}", mapped.x, mapped.y);
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
