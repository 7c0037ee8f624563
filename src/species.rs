use crate::sim_params::DerivedParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Colloid,
    Anion,
    Cation,
    Counterion,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Colloid => "colloid",
            Species::Anion => "anion",
            Species::Cation => "cation",
            Species::Counterion => "counterion",
        };
        f.write_str(name)
    }
}

/// Population of each mobile species. There is always exactly one colloid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeciesCounts {
    pub anions: usize,
    pub cations: usize,
    pub counterions: usize,
}

impl SpeciesCounts {
    /// Total number of particles, colloid included, or `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        1usize
            .checked_add(self.anions)?
            .checked_add(self.cations)?
            .checked_add(self.counterions)
    }

    /// Species of the particle at `index`.
    ///
    /// Layout: `[colloid][anions][cations][counter-ions]`. Indices past the
    /// anion and cation blocks are counter-ions.
    pub fn species_of(&self, index: usize) -> Species {
        let last_anion = self.anions;
        let last_cation = self.anions.saturating_add(self.cations);
        if index == 0 {
            Species::Colloid
        } else if index <= last_anion {
            Species::Anion
        } else if index <= last_cation {
            Species::Cation
        } else {
            Species::Counterion
        }
    }
}

/// Charge and radius of each species, in reduced units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTable {
    pub colloid: (i32, f64),
    pub anion: (i32, f64),
    pub cation: (i32, f64),
    pub counterion: (i32, f64),
}

impl SpeciesTable {
    pub fn from_derived(derived: &DerivedParameters) -> Self {
        let r = &derived.reduced;
        SpeciesTable {
            colloid: (r.charge_colloid, r.radius_colloid),
            anion: (r.charge_anion, r.radius_anion),
            cation: (r.charge_cation, r.radius_cation),
            counterion: (r.charge_counterion, r.radius_counterion),
        }
    }

    pub fn get(&self, species: Species) -> (i32, f64) {
        match species {
            Species::Colloid => self.colloid,
            Species::Anion => self.anion,
            Species::Cation => self.cation,
            Species::Counterion => self.counterion,
        }
    }
}

/// Per-index charges and radii, parallel vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesAssignment {
    pub charges: Vec<i32>,
    pub radii: Vec<f64>,
}

/// Assigns a charge and a radius to every particle index.
///
/// Emits the species blocks in layout order, so index `i` gets the properties
/// of `counts.species_of(i)`.
pub fn assign(counts: &SpeciesCounts, table: &SpeciesTable) -> SpeciesAssignment {
    let block = |species: Species, len: usize| std::iter::repeat(table.get(species)).take(len);
    let (charges, radii) = block(Species::Colloid, 1)
        .chain(block(Species::Anion, counts.anions))
        .chain(block(Species::Cation, counts.cations))
        .chain(block(Species::Counterion, counts.counterions))
        .unzip();
    SpeciesAssignment { charges, radii }
}

/// Assigns species properties for a derived parameter set.
pub fn assign_species(derived: &DerivedParameters) -> SpeciesAssignment {
    assign(&derived.counts, &SpeciesTable::from_derived(derived))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: SpeciesTable = SpeciesTable {
        colloid: (-40, 2.8),
        anion: (-1, 0.25),
        cation: (1, 0.3),
        counterion: (2, 0.35),
    };

    fn small_counts() -> SpeciesCounts {
        SpeciesCounts {
            anions: 3,
            cations: 2,
            counterions: 1,
        }
    }

    #[test]
    fn boundaries_are_exact() {
        let counts = small_counts();
        assert_eq!(counts.total(), Some(7));
        let expected = [
            Species::Colloid,
            Species::Anion,
            Species::Anion,
            Species::Anion,
            Species::Cation,
            Species::Cation,
            Species::Counterion,
        ];
        for (index, species) in expected.iter().enumerate() {
            assert_eq!(counts.species_of(index), *species, "index {}", index);
        }
    }

    #[test]
    fn assignment_follows_species_layout() {
        let assignment = assign(&small_counts(), &TABLE);
        assert_eq!(assignment.charges, vec![-40, -1, -1, -1, 1, 1, 2]);
        assert_eq!(assignment.radii, vec![2.8, 0.25, 0.25, 0.25, 0.3, 0.3, 0.35]);
    }

    #[test]
    fn assignment_agrees_with_species_of() {
        let counts = SpeciesCounts {
            anions: 4,
            cations: 1,
            counterions: 3,
        };
        let assignment = assign(&counts, &TABLE);
        assert_eq!(assignment.charges.len(), 9);
        for (index, (&charge, &radius)) in assignment.charges.iter().zip(&assignment.radii).enumerate() {
            assert_eq!((charge, radius), TABLE.get(counts.species_of(index)), "index {}", index);
        }
    }

    #[test]
    fn total_reports_overflow() {
        let counts = SpeciesCounts {
            anions: usize::MAX / 2,
            cations: usize::MAX / 2,
            counterions: 2,
        };
        assert_eq!(counts.total(), None);
    }

    #[test]
    fn assignment_is_idempotent() {
        let counts = small_counts();
        assert_eq!(assign(&counts, &TABLE), assign(&counts, &TABLE));
    }

    #[test]
    fn empty_blocks_are_skipped() {
        let counts = SpeciesCounts {
            anions: 0,
            cations: 0,
            counterions: 2,
        };
        let assignment = assign(&counts, &TABLE);
        assert_eq!(assignment.charges, vec![-40, 2, 2]);

        let no_counterions = SpeciesCounts {
            anions: 1,
            cations: 1,
            counterions: 0,
        };
        assert_eq!(assign(&no_counterions, &TABLE).charges, vec![-40, -1, 1]);
    }
}
