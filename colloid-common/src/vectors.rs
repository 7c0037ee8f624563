use crate::vecmath::Vec3;
use serde::{Deserialize, Serialize};

/// Per-particle state of the initial configuration.
///
/// The three vectors are indexed in parallel. Index 0 is the colloid, followed
/// by the anions, the cations and the counter-ions in contiguous blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationVectors {
    pub charges: Vec<i32>,
    pub radii: Vec<f64>,
    pub positions: Vec<Vec3>,
}

impl SimulationVectors {
    /// Number of particles, including the colloid.
    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Net charge of the whole configuration, in elementary charges.
    pub fn net_charge(&self) -> i64 {
        self.charges.iter().map(|&q| q as i64).sum()
    }
}
