// src/profiles/extractor.rs

use nalgebra::DVector;

use crate::error::{PrepError, PrepResult};
use crate::input::dataset::{
    ProfileDataset, DEUTERIUM_DENSITY, ELECTRON_DENSITY, ELECTRON_TEMPERATURE, ION_TEMPERATURE,
    RADIAL_COORDINATE, TRITIUM_DENSITY,
};

/// Converged radial profiles, in the archive's native units.
#[derive(Debug, Clone)]
pub struct RadialProfiles {
    pub psin: DVector<f64>,
    pub ion_temperature: DVector<f64>,
    pub electron_temperature: DVector<f64>,
    pub electron_density: DVector<f64>,
}

impl RadialProfiles {
    pub fn n_points(&self) -> usize {
        self.psin.len()
    }
}

/// Densities of the two fuel ions at the last time step.
#[derive(Debug, Clone)]
pub struct FuelDensities {
    pub deuterium: DVector<f64>,
    pub tritium: DVector<f64>,
}

/// Fails with `ShapeMismatch` unless `values` has `expected` points.
pub fn check_grid_length(name: &str, values: &DVector<f64>, expected: usize) -> PrepResult<()> {
    if values.len() != expected {
        return Err(PrepError::ShapeMismatch {
            name: name.to_string(),
            expected,
            found: values.len(),
        });
    }
    Ok(())
}

/// Reads the last time step of the radial coordinate, both temperatures and
/// the electron density. All profiles must share the radial grid.
pub fn extract_profiles<D: ProfileDataset + ?Sized>(dataset: &D) -> PrepResult<RadialProfiles> {
    let psin = dataset.last_time_slice(RADIAL_COORDINATE)?;
    let n_points = psin.len();

    let ion_temperature = dataset.last_time_slice(ION_TEMPERATURE)?;
    check_grid_length(ION_TEMPERATURE, &ion_temperature, n_points)?;
    let electron_temperature = dataset.last_time_slice(ELECTRON_TEMPERATURE)?;
    check_grid_length(ELECTRON_TEMPERATURE, &electron_temperature, n_points)?;
    let electron_density = dataset.last_time_slice(ELECTRON_DENSITY)?;
    check_grid_length(ELECTRON_DENSITY, &electron_density, n_points)?;

    Ok(RadialProfiles {
        psin,
        ion_temperature,
        electron_temperature,
        electron_density,
    })
}

pub fn extract_fuel_densities<D: ProfileDataset + ?Sized>(
    dataset: &D,
    n_points: usize,
) -> PrepResult<FuelDensities> {
    let deuterium = dataset.last_time_slice(DEUTERIUM_DENSITY)?;
    check_grid_length(DEUTERIUM_DENSITY, &deuterium, n_points)?;
    let tritium = dataset.last_time_slice(TRITIUM_DENSITY)?;
    check_grid_length(TRITIUM_DENSITY, &tritium, n_points)?;
    Ok(FuelDensities { deuterium, tritium })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::dataset::MemoryDataset;
    use nalgebra::DMatrix;

    fn base_dataset() -> MemoryDataset {
        let mut dataset = MemoryDataset::new();
        dataset.insert(
            "XPSI",
            DMatrix::from_row_slice(2, 3, &[0.0, 0.4, 0.9, 0.0, 0.5, 1.0]),
        );
        dataset.insert(
            "TI",
            DMatrix::from_row_slice(2, 3, &[1.0, 1.0, 1.0, 9.0e3, 5.0e3, 1.0e2]),
        );
        dataset.insert(
            "TE",
            DMatrix::from_row_slice(2, 3, &[1.0, 1.0, 1.0, 8.0e3, 4.0e3, 9.0e1]),
        );
        dataset.insert(
            "NE",
            DMatrix::from_row_slice(2, 3, &[1.0, 1.0, 1.0, 1.0e20, 8.0e19, 1.0e19]),
        );
        dataset
    }

    #[test]
    fn test_extracts_last_time_step_unchanged() {
        let profiles = extract_profiles(&base_dataset()).unwrap();
        assert_eq!(profiles.n_points(), 3);
        assert_eq!(profiles.psin.as_slice(), &[0.0, 0.5, 1.0]);
        assert_eq!(profiles.ion_temperature.as_slice(), &[9.0e3, 5.0e3, 1.0e2]);
        assert_eq!(profiles.electron_temperature.as_slice(), &[8.0e3, 4.0e3, 9.0e1]);
        assert_eq!(profiles.electron_density.as_slice(), &[1.0e20, 8.0e19, 1.0e19]);
    }

    #[test]
    fn test_grid_length_mismatch() {
        let dataset = base_dataset().with_profile("TE", &[1.0, 2.0]);
        match extract_profiles(&dataset) {
            Err(PrepError::ShapeMismatch {
                name,
                expected,
                found,
            }) => {
                assert_eq!(name, "TE");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_fuel_densities() {
        let dataset = base_dataset()
            .with_profile("NID", &[4.5e19, 3.0e19, 4.0e18])
            .with_profile("NIT", &[4.4e19, 3.1e19, 4.1e18]);
        let fuel = extract_fuel_densities(&dataset, 3).unwrap();
        assert_eq!(fuel.deuterium[0], 4.5e19);
        assert_eq!(fuel.tritium[2], 4.1e18);

        assert!(matches!(
            extract_fuel_densities(&dataset, 4),
            Err(PrepError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_profile() {
        let mut dataset = MemoryDataset::new();
        dataset.insert("XPSI", DMatrix::from_row_slice(1, 2, &[0.0, 1.0]));
        assert!(matches!(
            extract_profiles(&dataset),
            Err(PrepError::MissingVariable(name)) if name == "TI"
        ));
    }
}
