// src/species/classifier.rs

use std::fmt;

use crate::error::{PrepError, PrepResult};

/// Ion species written to the deposition file. Main fuel ions are singly
/// charged; impurities are known only by their atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesLabel {
    Deuterium,
    Tritium,
    Helium,
    Argon,
    Xenon,
}

impl SpeciesLabel {
    /// Short label expected by the downstream orbit code.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeciesLabel::Deuterium => "AD",
            SpeciesLabel::Tritium => "AT",
            SpeciesLabel::Helium => "AHe4",
            SpeciesLabel::Argon => "AAr",
            SpeciesLabel::Xenon => "AXe",
        }
    }
}

impl fmt::Display for SpeciesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const XENON_CHARGE_RANGE: std::ops::RangeInclusive<f64> = 50.0..=54.0;

/// Classifies an impurity by its atomic number.
///
/// Helium and argon match after rounding to the nearest integer, ties to
/// even (so 2.5 is helium and 18.5 is argon). Xenon is
/// accepted anywhere in `[50, 54]` without rounding, since the archive may
/// hold a non-integer effective charge there. Anything else is an error.
///
/// # Arguments
///
/// * `atomic_number` - Charge read from the impurity's `ZIA` variable.
/// * `index` - 1-based impurity index, reported on failure.
pub fn classify(atomic_number: f64, index: usize) -> PrepResult<SpeciesLabel> {
    let rounded = atomic_number.round_ties_even();
    if rounded == 2.0 {
        Ok(SpeciesLabel::Helium)
    } else if rounded == 18.0 {
        Ok(SpeciesLabel::Argon)
    } else if XENON_CHARGE_RANGE.contains(&atomic_number) {
        Ok(SpeciesLabel::Xenon)
    } else {
        Err(PrepError::UnknownSpecies {
            index,
            atomic_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helium_and_argon_after_rounding() {
        for z in [2.0, 1.6, 2.4, 1.5, 2.5] {
            assert_eq!(classify(z, 1).unwrap(), SpeciesLabel::Helium, "z = {z}");
        }
        for z in [18.0, 17.51, 18.49, 18.5] {
            assert_eq!(classify(z, 1).unwrap(), SpeciesLabel::Argon, "z = {z}");
        }
    }

    #[test]
    fn test_xenon_range_is_inclusive() {
        for z in [50.0, 51.3, 52.0, 53.99, 54.0] {
            assert_eq!(classify(z, 2).unwrap(), SpeciesLabel::Xenon, "z = {z}");
        }
    }

    #[test]
    fn test_xenon_range_is_not_rounded() {
        assert!(classify(49.9, 1).is_err());
        assert!(classify(54.1, 1).is_err());
    }

    #[test]
    fn test_unknown_species_reports_value_and_index() {
        match classify(6.0, 3) {
            Err(PrepError::UnknownSpecies {
                index,
                atomic_number,
            }) => {
                assert_eq!(index, 3);
                assert_eq!(atomic_number, 6.0);
            }
            other => panic!("expected UnknownSpecies, got {:?}", other),
        }
        assert!(classify(1.0, 1).is_err());
        assert!(classify(2.6, 1).is_err());
        assert!(classify(17.5 - 1e-9, 1).is_err());
        assert!(classify(f64::NAN, 1).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SpeciesLabel::Deuterium.to_string(), "AD");
        assert_eq!(SpeciesLabel::Tritium.to_string(), "AT");
        assert_eq!(SpeciesLabel::Helium.as_str(), "AHe4");
        assert_eq!(SpeciesLabel::Argon.as_str(), "AAr");
        assert_eq!(SpeciesLabel::Xenon.as_str(), "AXe");
    }
}
