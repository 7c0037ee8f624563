use crate::sim_params::DerivedParameters;
use crate::species::Species;
use anyhow::{Context, Result};
use colloid_common::{OutputFormat, SimulationVectors};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Everything needed to start a simulation from the prepared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialConfiguration {
    pub seed: u64,
    pub parameters: DerivedParameters,
    pub vectors: SimulationVectors,
}

fn configuration_path(base: &str, format: OutputFormat) -> PathBuf {
    let extension = match format {
        OutputFormat::Json => "json",
        OutputFormat::Bincode => "bin",
        OutputFormat::Messagepack => "msgpack",
    };
    PathBuf::from(format!("{}_configuration.{}", base, extension))
}

/// Writes the configuration as `<base>_configuration.<ext>` and returns the path.
pub fn save_configuration(config: &InitialConfiguration, base: &str, format: OutputFormat) -> Result<PathBuf> {
    let filename = configuration_path(base, format);
    let file = File::create(&filename)
        .with_context(|| format!("Error creating configuration file '{}'", filename.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Json => serde_json::to_writer(&mut writer, config)
            .context("Error serializing configuration to JSON")?,
        OutputFormat::Bincode => bincode::serialize_into(&mut writer, config)
            .context("Error serializing configuration to bincode")?,
        OutputFormat::Messagepack => rmp_serde::encode::write(&mut writer, config)
            .context("Error serializing configuration to MessagePack")?,
    }
    writer.flush()?;

    info!("Initial configuration saved to {}", filename.display());
    Ok(filename)
}

/// Writes one CSV row per particle: index, species, charge, radius and position.
pub fn save_positions_csv<P: AsRef<Path>>(
    path: P,
    vectors: &SimulationVectors,
    species: impl Fn(usize) -> Species,
) -> Result<()> {
    let path_ref = path.as_ref();
    let mut writer = csv::Writer::from_path(path_ref)
        .with_context(|| format!("Error creating CSV file '{}'", path_ref.display()))?;
    writer.write_record(["index", "species", "charge", "radius", "x", "y", "z"])?;
    for (index, ((charge, radius), pos)) in vectors
        .charges
        .iter()
        .zip(&vectors.radii)
        .zip(&vectors.positions)
        .enumerate()
    {
        writer.write_record(&[
            index.to_string(),
            species(index).to_string(),
            charge.to_string(),
            format!("{:.6}", radius),
            format!("{:.6}", pos.x),
            format!("{:.6}", pos.y),
            format!("{:.6}", pos.z),
        ])?;
    }
    writer.flush()?;
    info!("Positions saved to {}", path_ref.display());
    Ok(())
}
