use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Where the physical parameters come from
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InputConfig {
    #[serde(default = "default_parameter_file")]
    pub parameter_file: PathBuf,
}

// Settings for random sequential placement
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PlacementConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Candidates drawn per particle before the packing is declared infeasible.
    #[serde(default = "default_max_attempts")]
    pub max_attempts_per_particle: u64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Bincode,
    Messagepack,
}

// Configuration for output settings, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub base_filename: String,
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub save_configuration: bool,
    #[serde(default = "default_true")]
    pub save_positions: bool,
}

/// Run configuration, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub placement: PlacementConfig,
    pub output: OutputConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            parameter_file: default_parameter_file(),
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig {
            seed: default_seed(),
            max_attempts_per_particle: default_max_attempts(),
        }
    }
}

impl RunConfig {
    /// Loads the run configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let config: RunConfig = toml::from_str(&config_str).map_err(|source| ConfigError::Toml {
            path: path_ref.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placement.max_attempts_per_particle == 0 {
            return Err(ConfigError::InvalidSetting {
                setting: "placement.max_attempts_per_particle",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.output.base_filename.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                setting: "output.base_filename",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn default_parameter_file() -> PathBuf {
    PathBuf::from("parameters.in")
}

fn default_seed() -> u64 {
    12345
}

fn default_max_attempts() -> u64 {
    100_000
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Json
}

fn default_true() -> bool {
    true
}
