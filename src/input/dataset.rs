// src/input/dataset.rs

use nalgebra::{DMatrix, DVector};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::{PrepError, PrepResult};

/// Normalised poloidal flux, the radial coordinate of every profile.
pub const RADIAL_COORDINATE: &str = "XPSI";
pub const ION_TEMPERATURE: &str = "TI";
pub const ELECTRON_TEMPERATURE: &str = "TE";
pub const ELECTRON_DENSITY: &str = "NE";
pub const DEUTERIUM_DENSITY: &str = "NID";
pub const TRITIUM_DENSITY: &str = "NIT";
/// Prefix of the numbered impurity density family (`NIM1`, `NIM2`, ...).
pub const IMPURITY_DENSITY_PREFIX: &str = "NIM";
/// Prefix of the numbered impurity charge family (`ZIA1`, `ZIA2`, ...).
pub const IMPURITY_CHARGE_PREFIX: &str = "ZIA";

/// Read-only access to the named arrays of a transport-code profiles archive.
///
/// Every array is shaped `[time step, radial index]`. The last time step is
/// the converged profile and is the only one the pipeline reads.
pub trait ProfileDataset {
    fn has_variable(&self, name: &str) -> bool;

    fn variable(&self, name: &str) -> PrepResult<&DMatrix<f64>>;

    /// Row of `name` at the last time step.
    fn last_time_slice(&self, name: &str) -> PrepResult<DVector<f64>> {
        let data = self.variable(name)?;
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(PrepError::EmptyVariable(name.to_string()));
        }
        Ok(data.row(data.nrows() - 1).transpose())
    }

    /// Value of `name` at the last time step and first radial point.
    fn last_time_first_point(&self, name: &str) -> PrepResult<f64> {
        let data = self.variable(name)?;
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(PrepError::EmptyVariable(name.to_string()));
        }
        Ok(data[(data.nrows() - 1, 0)])
    }
}

/// A dataset held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataset {
    variables: HashMap<String, DMatrix<f64>>,
}

impl MemoryDataset {
    pub fn new() -> Self {
        MemoryDataset::default()
    }

    pub fn insert(&mut self, name: &str, data: DMatrix<f64>) {
        self.variables.insert(name.to_string(), data);
    }

    /// Builder-style insert of a single time step.
    pub fn with_profile(mut self, name: &str, values: &[f64]) -> Self {
        self.insert(name, DMatrix::from_row_slice(1, values.len(), values));
        self
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl ProfileDataset for MemoryDataset {
    fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    fn variable(&self, name: &str) -> PrepResult<&DMatrix<f64>> {
        self.variables
            .get(name)
            .ok_or_else(|| PrepError::MissingVariable(name.to_string()))
    }
}

/// On-disk layout of an exported profiles archive: each variable is a list
/// of time steps, each time step a list of radial values.
#[derive(Debug, Deserialize)]
pub struct DatasetFile {
    pub variables: BTreeMap<String, Vec<Vec<f64>>>,
}

impl TryFrom<DatasetFile> for MemoryDataset {
    type Error = PrepError;

    fn try_from(file: DatasetFile) -> PrepResult<Self> {
        let mut dataset = MemoryDataset::new();
        for (name, rows) in file.variables {
            let n_time = rows.len();
            let n_radial = rows.first().map_or(0, |row| row.len());
            if let Some(bad) = rows.iter().position(|row| row.len() != n_radial) {
                return Err(PrepError::MalformedDataset(format!(
                    "variable '{}' time step {} has {} points, expected {}",
                    name,
                    bad,
                    rows[bad].len(),
                    n_radial
                )));
            }
            let flat: Vec<f64> = rows.into_iter().flatten().collect();
            dataset.insert(&name, DMatrix::from_row_slice(n_time, n_radial, &flat));
        }
        Ok(dataset)
    }
}
