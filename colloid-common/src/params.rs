use serde::{Deserialize, Serialize};

/// Input parameters in physical units, as read from the parameter file.
///
/// Lengths are in Ångström, concentration in mol/L and charges in units of
/// the elementary charge. Nothing here has been rescaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    pub lambda_bjerrum: f64,
    pub molar_conc: f64,
    pub box_length: f64,
    pub radius_cutoff: f64,

    pub charge_anion: i32,
    pub charge_cation: i32,
    pub charge_colloid: i32,
    pub charge_counterion: i32,

    pub radius_anion: f64,
    pub radius_cation: f64,
    pub radius_colloid: f64,
    pub radius_counterion: f64,

    // Ewald / Fourier settings, carried for the downstream simulation.
    pub kappa_ewald: i32,
    pub k_fourier_max: i32,
    pub mc_steps: u64,
}
