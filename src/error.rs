use thiserror::Error;

/// Failures while turning physical parameters into a placed configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("Bjerrum length is zero; cannot rescale to reduced units")]
    ZeroBjerrumLength,

    #[error("Counter-ion charge is zero; cannot neutralize the colloid")]
    ZeroCounterionCharge,

    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Particle {index} has invalid radius {radius}; radii must be positive and finite")]
    InvalidRadius { index: usize, radius: f64 },

    #[error(
        "Packing density too high: no free position for particle {index} after {attempts} attempts \
         (packing fraction {packing_fraction:.3})"
    )]
    PackingInfeasible {
        index: usize,
        attempts: u64,
        packing_fraction: f64,
    },
}
