use crate::error::SetupError;
use crate::sim_params::{DerivedParameters, ReducedParameters};
use crate::species::SpeciesCounts;
use log::{debug, info};

/// Avogadro constant, 1/mol.
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Largest particle count, colloid included, a run will be prepared for.
/// Placement tests every insertion against all placed particles.
pub const MAX_PARTICLES: usize = 1_000_000;

/// Rounds to the nearest integer, ties to even.
fn round_count(expected: f64) -> usize {
    expected.round_ties_even() as usize
}

fn too_many_particles(name: &'static str, value: f64) -> SetupError {
    SetupError::InvalidParameter {
        name,
        value,
        reason: "implies more particles than can be placed",
    }
}

/// Derives species populations and the remaining run quantities.
///
/// Salt ions are counted from the reduced concentration and box volume, with
/// as many cations as anions. Counter-ions neutralize the colloid:
/// `trunc(|charge_colloid / charge_counterion|)`.
pub fn derive_populations(reduced: ReducedParameters) -> Result<DerivedParameters, SetupError> {
    if reduced.charge_counterion == 0 {
        return Err(SetupError::ZeroCounterionCharge);
    }
    if !reduced.box_length.is_finite() || reduced.box_length <= 0.0 {
        return Err(SetupError::InvalidParameter {
            name: "box_length",
            value: reduced.box_length,
            reason: "must be positive and finite",
        });
    }
    if !reduced.molar_conc.is_finite() || reduced.molar_conc < 0.0 {
        return Err(SetupError::InvalidParameter {
            name: "molar_conc",
            value: reduced.molar_conc,
            reason: "must be non-negative and finite",
        });
    }

    let volume = reduced.box_length.powi(3);
    let expected_salt = AVOGADRO * reduced.molar_conc * volume;
    if !expected_salt.is_finite() || expected_salt > MAX_PARTICLES as f64 {
        return Err(too_many_particles("molar_conc", reduced.molar_conc));
    }
    let anions = round_count(expected_salt);
    let cations = anions;
    // Integer division truncates toward zero, so this is trunc(|ratio|).
    let counterions =
        (reduced.charge_colloid.unsigned_abs() / reduced.charge_counterion.unsigned_abs()) as usize;

    let counts = SpeciesCounts {
        anions,
        cations,
        counterions,
    };
    let num_particles = match counts.total() {
        Some(total) if total <= MAX_PARTICLES => total,
        _ if counterions > MAX_PARTICLES => {
            return Err(too_many_particles("charge_colloid", reduced.charge_colloid as f64));
        }
        _ => return Err(too_many_particles("molar_conc", reduced.molar_conc)),
    };
    let radius_cutoff_sq = reduced.radius_cutoff * reduced.radius_cutoff;

    debug!("Expected salt pairs {:.3}, rounded to {}", expected_salt, anions);
    info!(
        "Populations: {} anions, {} cations, {} counter-ions, {} particles in total",
        anions, cations, counterions, num_particles
    );

    Ok(DerivedParameters {
        reduced,
        volume,
        counts,
        num_particles,
        radius_cutoff_sq,
    })
}
