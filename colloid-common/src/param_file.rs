//! Reader for the key/value parameter file (`parameters.in`).
//!
//! Each non-empty line holds a key followed by a value, separated by
//! whitespace and/or a colon. Anything after `#` is a comment. Recognized keys
//! are the variants of [`ParameterKey`]; each one knows how to parse and store
//! its own value. Unknown keys are collected and logged but never abort the
//! load.

use crate::error::ConfigError;
use crate::params::PhysicalParameters;
use log::{debug, warn};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    LambdaBjerrum,
    MolarConc,
    BoxLength,
    ChargeAnion,
    ChargeCation,
    ChargeColloid,
    ChargeCounterion,
    RadiusAnion,
    RadiusCation,
    RadiusColloid,
    RadiusCounterion,
    KappaEwald,
    RadiusCutoff,
    KFourierMax,
    McSteps,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 15] = [
        ParameterKey::LambdaBjerrum,
        ParameterKey::MolarConc,
        ParameterKey::BoxLength,
        ParameterKey::ChargeAnion,
        ParameterKey::ChargeCation,
        ParameterKey::ChargeColloid,
        ParameterKey::ChargeCounterion,
        ParameterKey::RadiusAnion,
        ParameterKey::RadiusCation,
        ParameterKey::RadiusColloid,
        ParameterKey::RadiusCounterion,
        ParameterKey::KappaEwald,
        ParameterKey::RadiusCutoff,
        ParameterKey::KFourierMax,
        ParameterKey::McSteps,
    ];

    /// The spelling used in the parameter file.
    pub fn name(self) -> &'static str {
        match self {
            ParameterKey::LambdaBjerrum => "lambda_bjerrum",
            ParameterKey::MolarConc => "molar_conc",
            ParameterKey::BoxLength => "box_length",
            ParameterKey::ChargeAnion => "charge_anion",
            ParameterKey::ChargeCation => "charge_cation",
            ParameterKey::ChargeColloid => "charge_colloid",
            ParameterKey::ChargeCounterion => "charge_counterion",
            ParameterKey::RadiusAnion => "radius_anion",
            ParameterKey::RadiusCation => "radius_cation",
            ParameterKey::RadiusColloid => "radius_colloid",
            ParameterKey::RadiusCounterion => "radius_counterion",
            ParameterKey::KappaEwald => "kappa_ewald",
            ParameterKey::RadiusCutoff => "radius_cutoff",
            ParameterKey::KFourierMax => "k_fourier_max",
            ParameterKey::McSteps => "mc_steps",
        }
    }

    /// Parses `raw` as this key's value type and stores it in `slots`.
    fn apply(self, slots: &mut ParameterSlots, raw: &str, line: usize) -> Result<(), ConfigError> {
        match self {
            ParameterKey::LambdaBjerrum => slots.lambda_bjerrum = Some(parse_value(self, raw, line)?),
            ParameterKey::MolarConc => slots.molar_conc = Some(parse_value(self, raw, line)?),
            ParameterKey::BoxLength => slots.box_length = Some(parse_value(self, raw, line)?),
            ParameterKey::ChargeAnion => slots.charge_anion = Some(parse_value(self, raw, line)?),
            ParameterKey::ChargeCation => slots.charge_cation = Some(parse_value(self, raw, line)?),
            ParameterKey::ChargeColloid => slots.charge_colloid = Some(parse_value(self, raw, line)?),
            ParameterKey::ChargeCounterion => {
                slots.charge_counterion = Some(parse_value(self, raw, line)?)
            }
            ParameterKey::RadiusAnion => slots.radius_anion = Some(parse_value(self, raw, line)?),
            ParameterKey::RadiusCation => slots.radius_cation = Some(parse_value(self, raw, line)?),
            ParameterKey::RadiusColloid => slots.radius_colloid = Some(parse_value(self, raw, line)?),
            ParameterKey::RadiusCounterion => {
                slots.radius_counterion = Some(parse_value(self, raw, line)?)
            }
            ParameterKey::KappaEwald => slots.kappa_ewald = Some(parse_value(self, raw, line)?),
            ParameterKey::RadiusCutoff => slots.radius_cutoff = Some(parse_value(self, raw, line)?),
            ParameterKey::KFourierMax => slots.k_fourier_max = Some(parse_value(self, raw, line)?),
            ParameterKey::McSteps => slots.mc_steps = Some(parse_value(self, raw, line)?),
        }
        Ok(())
    }
}

impl FromStr for ParameterKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterKey::ALL.into_iter().find(|key| key.name() == s).ok_or(())
    }
}

/// Types a parameter value can be read as.
trait ParameterValue: FromStr {
    const EXPECTED: &'static str;
}

impl ParameterValue for f64 {
    const EXPECTED: &'static str = "a real number";
}

impl ParameterValue for i32 {
    const EXPECTED: &'static str = "an integer";
}

impl ParameterValue for u64 {
    const EXPECTED: &'static str = "a non-negative integer";
}

fn parse_value<T: ParameterValue>(key: ParameterKey, raw: &str, line: usize) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        line,
        key: key.name(),
        value: raw.to_string(),
        expected: T::EXPECTED,
    })
}

#[derive(Debug, Default)]
struct ParameterSlots {
    lambda_bjerrum: Option<f64>,
    molar_conc: Option<f64>,
    box_length: Option<f64>,
    radius_cutoff: Option<f64>,
    charge_anion: Option<i32>,
    charge_cation: Option<i32>,
    charge_colloid: Option<i32>,
    charge_counterion: Option<i32>,
    radius_anion: Option<f64>,
    radius_cation: Option<f64>,
    radius_colloid: Option<f64>,
    radius_counterion: Option<f64>,
    kappa_ewald: Option<i32>,
    k_fourier_max: Option<i32>,
    mc_steps: Option<u64>,
}

impl ParameterSlots {
    fn finish(self) -> Result<PhysicalParameters, ConfigError> {
        fn take<T>(slot: Option<T>, key: ParameterKey) -> Result<T, ConfigError> {
            slot.ok_or(ConfigError::MissingParameter(key.name()))
        }

        Ok(PhysicalParameters {
            lambda_bjerrum: take(self.lambda_bjerrum, ParameterKey::LambdaBjerrum)?,
            molar_conc: take(self.molar_conc, ParameterKey::MolarConc)?,
            box_length: take(self.box_length, ParameterKey::BoxLength)?,
            charge_anion: take(self.charge_anion, ParameterKey::ChargeAnion)?,
            charge_cation: take(self.charge_cation, ParameterKey::ChargeCation)?,
            charge_colloid: take(self.charge_colloid, ParameterKey::ChargeColloid)?,
            charge_counterion: take(self.charge_counterion, ParameterKey::ChargeCounterion)?,
            radius_anion: take(self.radius_anion, ParameterKey::RadiusAnion)?,
            radius_cation: take(self.radius_cation, ParameterKey::RadiusCation)?,
            radius_colloid: take(self.radius_colloid, ParameterKey::RadiusColloid)?,
            radius_counterion: take(self.radius_counterion, ParameterKey::RadiusCounterion)?,
            kappa_ewald: take(self.kappa_ewald, ParameterKey::KappaEwald)?,
            radius_cutoff: take(self.radius_cutoff, ParameterKey::RadiusCutoff)?,
            k_fourier_max: take(self.k_fourier_max, ParameterKey::KFourierMax)?,
            mc_steps: take(self.mc_steps, ParameterKey::McSteps)?,
        })
    }
}

/// Result of reading a parameter file.
#[derive(Debug, Clone)]
pub struct ParameterFile {
    pub parameters: PhysicalParameters,
    /// Unrecognized keys with their 1-based line numbers.
    pub unknown_keys: Vec<(usize, String)>,
}

/// Splits a line into its key and (first) value token.
fn split_line(line: &str) -> Option<(&str, Option<&str>)> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return None;
    }
    let is_separator = |c: char| c.is_whitespace() || c == ':';
    let (key, rest) = match content.find(is_separator) {
        Some(pos) => (&content[..pos], &content[pos..]),
        None => (content, ""),
    };
    let value = rest.trim_start_matches(is_separator).split_whitespace().next();
    Some((key, value))
}

/// Parses parameter-file text. Later occurrences of a key override earlier ones.
pub fn parse_parameters(text: &str) -> Result<ParameterFile, ConfigError> {
    let mut slots = ParameterSlots::default();
    let mut unknown_keys = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let Some((key, value)) = split_line(raw_line) else {
            continue;
        };
        match key.parse::<ParameterKey>() {
            Ok(param) => {
                let value = value.ok_or(ConfigError::MissingValue { line, key: param.name() })?;
                debug!("Line {}: {} = {}", line, param.name(), value);
                param.apply(&mut slots, value, line)?;
            }
            Err(()) => {
                warn!("Unknown parameter on line {}: {}", line, key);
                unknown_keys.push((line, key.to_string()));
            }
        }
    }

    Ok(ParameterFile {
        parameters: slots.finish()?,
        unknown_keys,
    })
}

/// Reads and parses a parameter file from disk.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<ParameterFile, ConfigError> {
    let path_ref = path.as_ref();
    let text = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
        path: path_ref.to_path_buf(),
        source,
    })?;
    parse_parameters(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL: &str = "\
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
    fn parses_whitespace_delimited_file() {
        let file = parse_parameters(FULL).unwrap();
        let p = file.parameters;
        assert_eq!(p.lambda_bjerrum, 7.1);
        assert_eq!(p.box_length, 100.0);
        assert_eq!(p.charge_colloid, -40);
        assert_eq!(p.radius_colloid, 20.0);
        assert_eq!(p.kappa_ewald, 5);
        assert_eq!(p.mc_steps, 10000);
        assert!(file.unknown_keys.is_empty());
    }

    #[test]
    fn accepts_colon_delimiters_and_comments() {
        let text = FULL
            .replace("lambda_bjerrum 7.1", "lambda_bjerrum: 7.1  # angstrom")
            .replace("box_length 100", "box_length:100")
            + "\n# trailing comment\n\n";
        let p = parse_parameters(&text).unwrap().parameters;
        assert_eq!(p.lambda_bjerrum, 7.1);
        assert_eq!(p.box_length, 100.0);
    }

    #[test]
    fn unknown_keys_are_reported_not_fatal() {
        let text = format!("temperature 298\n{}", FULL);
        let file = parse_parameters(&text).unwrap();
        assert_eq!(file.unknown_keys, vec![(1, "temperature".to_string())]);
    }

    #[test]
    fn missing_key_is_named() {
        let text = FULL.replace("radius_counterion 2\n", "");
        match parse_parameters(&text) {
            Err(ConfigError::MissingParameter(name)) => assert_eq!(name, "radius_counterion"),
            other => panic!("expected missing parameter, got {:?}", other),
        }
    }

    #[test]
    fn bad_value_reports_key_and_line() {
        let text = FULL.replace("charge_colloid -40", "charge_colloid -40.5");
        match parse_parameters(&text) {
            Err(ConfigError::InvalidValue { line, key, .. }) => {
                assert_eq!(line, 6);
                assert_eq!(key, "charge_colloid");
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn key_without_value_is_an_error() {
        let text = format!("{}mc_steps\n", FULL);
        assert!(matches!(
            parse_parameters(&text),
            Err(ConfigError::MissingValue { key: "mc_steps", .. })
        ));
    }

    #[test]
    fn every_key_round_trips_through_its_name() {
        for key in ParameterKey::ALL {
            assert_eq!(key.name().parse::<ParameterKey>(), Ok(key));
        }
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();
        let loaded = load_parameters(file.path()).unwrap();
        assert_eq!(loaded.parameters.molar_conc, 0.1);
    }
}
