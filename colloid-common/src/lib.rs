pub mod config;
pub mod error;
pub mod param_file;
pub mod params;
pub mod vecmath;
pub mod vectors;

// Re-export key types for easier use by dependent crates
pub use config::{InputConfig, OutputConfig, OutputFormat, PlacementConfig, RunConfig};
pub use error::ConfigError;
pub use param_file::{load_parameters, parse_parameters, ParameterFile, ParameterKey};
pub use params::PhysicalParameters;
pub use vecmath::Vec3;
pub use vectors::SimulationVectors;
