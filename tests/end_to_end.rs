//! Runs the whole preparation pipeline on the reference colloid system and
//! checks the resulting configuration.

use colloid_common::{parse_parameters, Vec3};
use colloid_init::output::{save_configuration, InitialConfiguration};
use colloid_init::placement::find_overlap;
use colloid_init::{prepare, PlacementEngine, SetupError, Species};

const SEED: u64 = 20240611;
const MAX_ATTEMPTS: u64 = 100_000;

const PARAMETERS: &str = "\
lambda_bjerrum 7.1
molar_conc 0.1
box_length 100
charge_anion -1
charge_cation 1
charge_colloid -40
charge_counterion 1
radius_anion 2
radius_cation 2
radius_colloid 20
radius_counterion 2
kappa_ewald 5
radius_cutoff 0.5
k_fourier_max 6
mc_steps 10000
";

#[test]
fn reference_system() {
    let physical = parse_parameters(PARAMETERS).unwrap().parameters;
    let mut engine = PlacementEngine::new(SEED, MAX_ATTEMPTS);
    let (derived, vectors) = prepare(&physical, &mut engine).unwrap();

    let box_length = derived.reduced.box_length;
    assert!((box_length - 14.08).abs() < 0.01);

    let counts = derived.counts;
    assert!(counts.anions > 0);
    assert_eq!(counts.anions, counts.cations);
    assert_eq!(counts.counterions, 40);
    assert_eq!(derived.num_particles, counts.anions + counts.cations + 41);

    assert_eq!(vectors.len(), derived.num_particles);
    assert_eq!(vectors.radii.len(), derived.num_particles);
    assert_eq!(vectors.positions.len(), derived.num_particles);
    assert_eq!(vectors.positions[0], Vec3::zero());
    assert_eq!(find_overlap(&vectors.positions, &vectors.radii, box_length), None);

    // Colloid plus its counter-ions is neutral; the salt is neutral on its own.
    assert_eq!(vectors.net_charge(), 0);
    assert_eq!(counts.species_of(0), Species::Colloid);
    assert_eq!(counts.species_of(derived.num_particles - 1), Species::Counterion);
}

#[test]
fn same_seed_same_configuration() {
    let physical = parse_parameters(PARAMETERS).unwrap().parameters;
    let (_, first) = prepare(&physical, &mut PlacementEngine::new(SEED, MAX_ATTEMPTS)).unwrap();
    let (_, second) = prepare(&physical, &mut PlacementEngine::new(SEED, MAX_ATTEMPTS)).unwrap();
    assert_eq!(first.positions, second.positions);
}

#[test]
fn zero_bjerrum_length_stops_the_pipeline() {
    let text = PARAMETERS.replace("lambda_bjerrum 7.1", "lambda_bjerrum 0");
    let physical = parse_parameters(&text).unwrap().parameters;
    let result = prepare(&physical, &mut PlacementEngine::new(SEED, MAX_ATTEMPTS));
    assert_eq!(result.unwrap_err(), SetupError::ZeroBjerrumLength);
}

#[test]
fn oversized_colloid_reports_packing_failure() {
    // The colloid reaches past every corner of the box, leaving no room for the ions.
    let text = PARAMETERS.replace("radius_colloid 20", "radius_colloid 90");
    let physical = parse_parameters(&text).unwrap().parameters;
    let result = prepare(&physical, &mut PlacementEngine::new(SEED, 500));
    assert!(matches!(result, Err(SetupError::PackingInfeasible { attempts: 500, .. })));
}

#[test]
fn configuration_round_trips_through_json() {
    let physical = parse_parameters(PARAMETERS).unwrap().parameters;
    let (derived, vectors) = prepare(&physical, &mut PlacementEngine::new(SEED, MAX_ATTEMPTS)).unwrap();
    let initial = InitialConfiguration {
        seed: SEED,
        parameters: derived,
        vectors,
    };

    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("run");
    let path = save_configuration(&initial, base.to_str().unwrap(), colloid_common::OutputFormat::Json).unwrap();

    let text = std::fs::read_to_string(path).unwrap();
    let loaded: InitialConfiguration = serde_json::from_str(&text).unwrap();
    assert_eq!(loaded.vectors, initial.vectors);
    assert_eq!(loaded.parameters.counts, initial.parameters.counts);
}
