use crate::error::SetupError;
use crate::sim_params::ReducedParameters;
use colloid_common::PhysicalParameters;
use log::debug;

/// Ångström^3 per litre is 1e27; concentrations are scaled by its inverse.
const LITRES_PER_CUBIC_ANGSTROM: f64 = 1e-27;

/// Converts physical parameters into reduced (Bjerrum-length) units.
///
/// Lengths are divided by the Bjerrum length. The Ewald parameter is then
/// divided by the rescaled box length and the cutoff multiplied by it, so the
/// box must be rescaled first. The molar concentration is multiplied by
/// `1e-27 * lambda_bjerrum^3`.
///
/// The input is left untouched; on error nothing is produced.
pub fn rescale(params: &PhysicalParameters) -> Result<ReducedParameters, SetupError> {
    let lambda = params.lambda_bjerrum;
    if lambda == 0.0 {
        return Err(SetupError::ZeroBjerrumLength);
    }
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(SetupError::InvalidParameter {
            name: "lambda_bjerrum",
            value: lambda,
            reason: "must be positive and finite",
        });
    }

    let box_length = params.box_length / lambda;
    let kappa_ewald = params.kappa_ewald as f64 / box_length;
    let radius_cutoff = params.radius_cutoff / lambda * box_length;
    let molar_conc = params.molar_conc * LITRES_PER_CUBIC_ANGSTROM * lambda.powi(3);

    let reduced = ReducedParameters {
        lambda_bjerrum: lambda,
        molar_conc,
        box_length,
        radius_cutoff,
        kappa_ewald,
        charge_anion: params.charge_anion,
        charge_cation: params.charge_cation,
        charge_colloid: params.charge_colloid,
        charge_counterion: params.charge_counterion,
        radius_anion: params.radius_anion / lambda,
        radius_cation: params.radius_cation / lambda,
        radius_colloid: params.radius_colloid / lambda,
        radius_counterion: params.radius_counterion / lambda,
        k_fourier_max: params.k_fourier_max,
        mc_steps: params.mc_steps,
    };
    debug!("Reduced parameters: {:#?}", reduced);
    Ok(reduced)
}
