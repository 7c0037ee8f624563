//! Random sequential addition (RSA) of hard spheres into a periodic cube.
//!
//! The colloid (index 0) sits at the box centre. Every other particle is
//! inserted in index order at a uniformly drawn position, redrawn until it
//! overlaps none of the particles already placed. Overlap is tested with
//! minimum-image distances, so spheres near a face see their neighbours across
//! the boundary. Placed particles are never moved.
//!
//! Each insertion tests against all previously placed particles, so a run is
//! O(N^2 * attempts). That is fine for the few hundred particles a single
//! colloid cell holds; it is not meant for large systems. Near the RSA jamming
//! limit (packing fraction around 0.38) the number of attempts per particle
//! grows without bound, which is why every particle gets a finite budget.

use crate::error::SetupError;
use colloid_common::{PlacementConfig, Vec3};
use log::{debug, info, trace, warn};
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Packing fraction reached by RSA of equal spheres at saturation.
pub const RSA_JAMMING_FRACTION: f64 = 0.384;

/// Relative slack for contact comparisons when auditing a finished packing.
const CONTACT_TOLERANCE: f64 = 1e-12;

/// Places particles with a single seeded random stream.
pub struct PlacementEngine {
    rng: StdRng,
    max_attempts_per_particle: u64,
}

impl PlacementEngine {
    pub fn new(seed: u64, max_attempts_per_particle: u64) -> Self {
        PlacementEngine {
            rng: StdRng::seed_from_u64(seed),
            max_attempts_per_particle,
        }
    }

    pub fn from_config(config: &PlacementConfig) -> Self {
        Self::new(config.seed, config.max_attempts_per_particle)
    }

    pub fn max_attempts_per_particle(&self) -> u64 {
        self.max_attempts_per_particle
    }

    /// Generates non-overlapping positions for particles with the given radii.
    ///
    /// Fails with [`SetupError::PackingInfeasible`] when some particle finds no
    /// free spot within the attempt budget.
    pub fn place(&mut self, radii: &[f64], box_length: f64) -> Result<Vec<Vec3>, SetupError> {
        check_preconditions(radii, box_length)?;
        if radii.is_empty() {
            return Ok(Vec::new());
        }

        let fraction = packing_fraction(radii, box_length);
        if fraction > RSA_JAMMING_FRACTION {
            warn!(
                "Packing fraction {:.3} exceeds the RSA jamming limit ({}); placement will likely fail.",
                fraction, RSA_JAMMING_FRACTION
            );
        }

        let half = box_length / 2.0;
        let coord_dist = Uniform::new_inclusive(-half, half).map_err(|_| SetupError::InvalidParameter {
            name: "box_length",
            value: box_length,
            reason: "cannot sample coordinates in this box",
        })?;

        let mut positions = Vec::with_capacity(radii.len());
        positions.push(Vec3::zero());
        let mut total_attempts: u64 = 0;

        for index in 1..radii.len() {
            let radius = radii[index];
            let mut committed = false;

            for attempt in 1..=self.max_attempts_per_particle {
                let candidate = Vec3::new(
                    self.rng.sample(&coord_dist),
                    self.rng.sample(&coord_dist),
                    self.rng.sample(&coord_dist),
                );

                if let Some(blocker) = first_overlap(candidate, radius, &positions, radii, box_length) {
                    trace!("Particle {}: candidate {} overlaps particle {}", index, attempt, blocker);
                    continue;
                }

                debug!("Particle {} placed after {} attempt(s)", index, attempt);
                positions.push(candidate);
                total_attempts += attempt;
                committed = true;
                break;
            }

            if !committed {
                return Err(SetupError::PackingInfeasible {
                    index,
                    attempts: self.max_attempts_per_particle,
                    packing_fraction: fraction,
                });
            }
        }

        info!(
            "Placed {} particles ({} candidate draws, packing fraction {:.4}).",
            positions.len(),
            total_attempts,
            fraction
        );
        Ok(positions)
    }
}

/// Rejects non-positive boxes and radii before any random draw.
pub fn check_preconditions(radii: &[f64], box_length: f64) -> Result<(), SetupError> {
    if !box_length.is_finite() || box_length <= 0.0 {
        return Err(SetupError::InvalidParameter {
            name: "box_length",
            value: box_length,
            reason: "must be positive and finite",
        });
    }
    if let Some((index, &radius)) = radii
        .iter()
        .enumerate()
        .find(|(_, r)| !r.is_finite() || **r <= 0.0)
    {
        return Err(SetupError::InvalidRadius { index, radius });
    }
    Ok(())
}

/// Index of the first placed particle that `candidate` would overlap.
fn first_overlap(
    candidate: Vec3,
    radius: f64,
    placed: &[Vec3],
    radii: &[f64],
    box_length: f64,
) -> Option<usize> {
    placed.iter().enumerate().find_map(|(j, &other)| {
        let contact = radius + radii[j];
        let dist_sq = candidate.periodic_distance_squared(other, box_length);
        (dist_sq < contact * contact).then_some(j)
    })
}

/// Total sphere volume over box volume.
pub fn packing_fraction(radii: &[f64], box_length: f64) -> f64 {
    let sphere_volume: f64 = radii.iter().map(|r| 4.0 / 3.0 * PI * r.powi(3)).sum();
    sphere_volume / box_length.powi(3)
}

/// Checks every pair of a configuration and returns the first overlapping
/// pair `(i, j)` with `i < j`, if any.
pub fn find_overlap(positions: &[Vec3], radii: &[f64], box_length: f64) -> Option<(usize, usize)> {
    let n = positions.len().min(radii.len());
    (0..n).into_par_iter().find_map_first(|i| {
        ((i + 1)..n)
            .find(|&j| {
                let contact = radii[i] + radii[j];
                let dist_sq = positions[i].periodic_distance_squared(positions[j], box_length);
                dist_sq < contact * contact * (1.0 - CONTACT_TOLERANCE)
            })
            .map(|j| (i, j))
    })
}
