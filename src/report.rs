use crate::sim_params::DerivedParameters;
use colloid_common::PhysicalParameters;

const NAME_WIDTH: usize = 30;
const VALUE_WIDTH: usize = 15;
const RULE_WIDTH: usize = 60;

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn row(out: &mut String, name: &str, value: impl std::fmt::Display, unit: &str) {
    let text = format!("{:<nw$}{:<vw$}{}", name, value.to_string(), unit, nw = NAME_WIDTH, vw = VALUE_WIDTH);
    line(out, &text);
}

fn rule(out: &mut String) {
    line(out, &"-".repeat(RULE_WIDTH));
}

/// Table of the parameters as read, in physical units.
pub fn format_physical(params: &PhysicalParameters) -> String {
    let mut out = String::new();
    line(&mut out, "Simulation Parameters:");
    rule(&mut out);
    row(&mut out, "Bjerrum Length:", params.lambda_bjerrum, "Å");
    row(&mut out, "Molar Concentration:", params.molar_conc, "mol/L");
    row(&mut out, "Box Length:", params.box_length, "Å");
    row(&mut out, "Anion Charge:", params.charge_anion, "e");
    row(&mut out, "Cation Charge:", params.charge_cation, "e");
    row(&mut out, "Colloid Charge:", params.charge_colloid, "e");
    row(&mut out, "Counterion Charge:", params.charge_counterion, "e");
    row(&mut out, "Anion Radius:", params.radius_anion, "Å");
    row(&mut out, "Cation Radius:", params.radius_cation, "Å");
    row(&mut out, "Colloid Radius:", params.radius_colloid, "Å");
    row(&mut out, "Counterion Radius:", params.radius_counterion, "Å");
    row(&mut out, "Ewald Kappa:", params.kappa_ewald, "Å⁻¹");
    row(&mut out, "Cutoff Radius:", params.radius_cutoff, "Å");
    row(&mut out, "Fourier K Max:", params.k_fourier_max, "Å⁻¹");
    row(&mut out, "Monte Carlo Steps:", params.mc_steps, "steps");
    rule(&mut out);
    line(&mut out, "End of parameters list");
    out
}

/// Table of the reduced and derived quantities.
pub fn format_derived(derived: &DerivedParameters) -> String {
    let r = &derived.reduced;
    let mut out = String::new();
    line(&mut out, "Reduced Parameters (Bjerrum units):");
    rule(&mut out);
    row(&mut out, "Box Length:", format!("{:.4}", r.box_length), "λB");
    row(&mut out, "Box Volume:", format!("{:.4}", derived.volume), "λB³");
    row(&mut out, "Scaled Concentration:", format!("{:.4e}", r.molar_conc), "mol/λB³");
    row(&mut out, "Anion Radius:", format!("{:.4}", r.radius_anion), "λB");
    row(&mut out, "Cation Radius:", format!("{:.4}", r.radius_cation), "λB");
    row(&mut out, "Colloid Radius:", format!("{:.4}", r.radius_colloid), "λB");
    row(&mut out, "Counterion Radius:", format!("{:.4}", r.radius_counterion), "λB");
    row(&mut out, "Ewald Kappa:", format!("{:.4}", r.kappa_ewald), "1/L");
    row(&mut out, "Cutoff Radius:", format!("{:.4}", r.radius_cutoff), "λB");
    row(&mut out, "Cutoff Radius Squared:", format!("{:.4}", derived.radius_cutoff_sq), "λB²");
    row(&mut out, "Number of Anions:", derived.counts.anions, "");
    row(&mut out, "Number of Cations:", derived.counts.cations, "");
    row(&mut out, "Number of Counterions:", derived.counts.counterions, "");
    row(&mut out, "Total Particles:", derived.num_particles, "");
    rule(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::derive_populations;
    use crate::units::rescale;
    use crate::units::tests::reference_parameters;

    #[test]
    fn physical_table_lists_every_parameter() {
        let table = format_physical(&reference_parameters());
        assert!(table.starts_with("Simulation Parameters:"));
        assert!(table.contains("Colloid Charge:"));
        assert!(table.contains("-40"));
        assert!(table.trim_end().ends_with("End of parameters list"));
        assert_eq!(table.lines().count(), 19);
    }

    #[test]
    fn rows_are_column_aligned() {
        let table = format_physical(&reference_parameters());
        let charge_line = table.lines().find(|l| l.starts_with("Colloid Charge:")).unwrap();
        assert_eq!(charge_line[NAME_WIDTH..NAME_WIDTH + VALUE_WIDTH].trim(), "-40");
        assert_eq!(&charge_line[NAME_WIDTH + VALUE_WIDTH..], "e");
        assert!(table.ends_with("End of parameters list\n"));
    }

    #[test]
    fn derived_table_shows_counts() {
        let derived = derive_populations(rescale(&reference_parameters()).unwrap()).unwrap();
        let table = format_derived(&derived);
        let total_line = table.lines().find(|l| l.starts_with("Total Particles:")).unwrap();
        assert!(total_line.contains("161"));
        assert!(table.contains("14.0845"));
    }
}
