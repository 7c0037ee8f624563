use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::time::Instant;

use colloid_common::{load_parameters, RunConfig};
use colloid_init::output::{save_configuration, save_positions_csv, InitialConfiguration};
use colloid_init::placement::{find_overlap, packing_fraction};
use colloid_init::report::{format_derived, format_physical};
use colloid_init::{prepare, PlacementEngine};

/// Prepares the initial configuration of a charged colloid suspension.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Parameter file; overrides `input.parameter_file`
    #[arg(short, long)]
    parameters: Option<PathBuf>,

    /// RNG seed; overrides `placement.seed`
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();
    let args = Args::parse();

    info!("Starting colloid initial-state preparation...");

    // --- Load Configuration ---
    let mut config = RunConfig::load(&args.config)
        .with_context(|| format!("Failed to load run configuration '{}'", args.config.display()))?;
    if let Some(path) = args.parameters {
        config.input.parameter_file = path;
    }
    if let Some(seed) = args.seed {
        config.placement.seed = seed;
    }
    debug!("Run configuration: {:#?}", config);

    // --- Read Physical Parameters ---
    let parameter_file = load_parameters(&config.input.parameter_file).with_context(|| {
        format!("Error reading parameters from '{}'", config.input.parameter_file.display())
    })?;
    if !parameter_file.unknown_keys.is_empty() {
        warn!("{} unknown parameter(s) ignored.", parameter_file.unknown_keys.len());
    }
    let physical = parameter_file.parameters;
    print!("{}", format_physical(&physical));

    // --- Rescale, Derive and Place ---
    let mut engine = PlacementEngine::from_config(&config.placement);
    info!(
        "Placing particles (seed {}, up to {} attempts per particle)...",
        config.placement.seed,
        engine.max_attempts_per_particle()
    );
    let start_time = Instant::now();
    let (derived, vectors) = match prepare(&physical, &mut engine) {
        Ok(result) => result,
        Err(e) => {
            error!("Initial state preparation failed: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Placement finished in {:.3} ms.",
        start_time.elapsed().as_secs_f64() * 1000.0
    );
    print!("{}", format_derived(&derived));

    // --- Verify ---
    let box_length = derived.reduced.box_length;
    if let Some((i, j)) = find_overlap(&vectors.positions, &vectors.radii, box_length) {
        anyhow::bail!("Placed configuration has overlapping particles {} and {}", i, j);
    }
    info!(
        "Verified {} particles: no overlaps, packing fraction {:.4}, net charge {}.",
        vectors.len(),
        packing_fraction(&vectors.radii, box_length),
        vectors.net_charge()
    );

    // --- Save Output ---
    let base = config.output.base_filename.as_str();
    if config.output.save_positions {
        let counts = derived.counts;
        let filename = format!("{}_positions.csv", base);
        save_positions_csv(&filename, &vectors, |i| counts.species_of(i))?;
    } else {
        info!("Skipping saving positions as per config.");
    }

    if config.output.save_configuration {
        let initial = InitialConfiguration {
            seed: config.placement.seed,
            parameters: derived,
            vectors,
        };
        save_configuration(&initial, base, config.output.format)?;
    } else {
        info!("Skipping saving configuration as per config (save_configuration is false).");
    }

    info!("Preparation Complete.");
    Ok(())
}
