//! Initial-state preparation for Monte Carlo runs of a charged colloid in a
//! 1:1 electrolyte with counter-ions, in a cubic periodic box.
//!
//! The pipeline is [`units::rescale`] → [`population::derive_populations`] →
//! [`species::assign_species`] → [`placement::PlacementEngine::place`];
//! [`prepare`] runs all of it.

pub mod error;
pub mod output;
pub mod placement;
pub mod population;
pub mod report;
pub mod sim_params;
pub mod species;
pub mod units;

use colloid_common::{PhysicalParameters, SimulationVectors};
use log::info;

pub use error::SetupError;
pub use placement::PlacementEngine;
pub use sim_params::{DerivedParameters, ReducedParameters};
pub use species::{Species, SpeciesCounts};

/// Rescales, derives populations, assigns species and places every particle.
pub fn prepare(
    physical: &PhysicalParameters,
    engine: &mut PlacementEngine,
) -> Result<(DerivedParameters, SimulationVectors), SetupError> {
    let reduced = units::rescale(physical)?;
    info!(
        "Rescaled to Bjerrum units: box length {:.4} ({:.2} Å)",
        reduced.box_length,
        reduced.to_angstrom(reduced.box_length)
    );

    let derived = population::derive_populations(reduced)?;
    let assignment = species::assign_species(&derived);
    let positions = engine.place(&assignment.radii, derived.reduced.box_length)?;

    let vectors = SimulationVectors {
        charges: assignment.charges,
        radii: assignment.radii,
        positions,
    };
    Ok((derived, vectors))
}
