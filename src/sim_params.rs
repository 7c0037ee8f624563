use crate::species::SpeciesCounts;
use serde::{Deserialize, Serialize};

/// Parameters in reduced (Bjerrum-length) units.
///
/// Produced only by [`crate::units::rescale`], so a record cannot be rescaled
/// twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ReducedParameters {
    /// Bjerrum length in Ångström, the unit of every reduced length.
    pub lambda_bjerrum: f64,
    /// Molar concentration times `1e-27 * lambda_bjerrum^3`.
    pub molar_conc: f64,
    pub box_length: f64,
    pub radius_cutoff: f64,
    /// Ewald inverse length, relative to the box length.
    pub kappa_ewald: f64,

    pub charge_anion: i32,
    pub charge_cation: i32,
    pub charge_colloid: i32,
    pub charge_counterion: i32,

    pub radius_anion: f64,
    pub radius_cation: f64,
    pub radius_colloid: f64,
    pub radius_counterion: f64,

    pub k_fourier_max: i32,
    pub mc_steps: u64,
}

impl ReducedParameters {
    /// Converts a reduced length back to Ångström.
    pub fn to_angstrom(&self, reduced_length: f64) -> f64 {
        reduced_length * self.lambda_bjerrum
    }
}

/// Reduced parameters plus the quantities derived from them.
///
/// Produced only by [`crate::population::derive_populations`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DerivedParameters {
    pub reduced: ReducedParameters,
    /// Box volume, `box_length^3`.
    pub volume: f64,
    pub counts: SpeciesCounts,
    pub num_particles: usize,
    pub radius_cutoff_sq: f64,
}
