// src/species/discovery.rs

use nalgebra::DVector;

use crate::error::PrepResult;
use crate::input::dataset::{ProfileDataset, IMPURITY_CHARGE_PREFIX, IMPURITY_DENSITY_PREFIX};
use crate::species::classifier::{classify, SpeciesLabel};

/// An impurity density profile found in the archive, before classification.
#[derive(Debug, Clone)]
pub struct DiscoveredImpurity {
    pub index: usize,                 // 1-based, as in the variable names
    pub atomic_number: f64,
    pub density_profile: DVector<f64>,
}

/// A classified impurity species.
#[derive(Debug, Clone)]
pub struct ImpuritySpecies {
    pub index: usize,
    pub atomic_number: f64,
    pub density_profile: DVector<f64>,
    pub label: SpeciesLabel,
}

pub fn impurity_density_name(index: usize) -> String {
    format!("{}{}", IMPURITY_DENSITY_PREFIX, index)
}

pub fn impurity_charge_name(index: usize) -> String {
    format!("{}{}", IMPURITY_CHARGE_PREFIX, index)
}

/// Probes `NIM1, NIM2, ...` until the first index with no density variable.
///
/// Each found impurity also reads its atomic number from `ZIA<n>`. A missing
/// density variable ends the family; a missing charge for a present density
/// is an error.
pub fn discover_impurities<D: ProfileDataset + ?Sized>(
    dataset: &D,
) -> PrepResult<Vec<DiscoveredImpurity>> {
    let mut impurities = Vec::new();
    let mut index = 1;
    while dataset.has_variable(&impurity_density_name(index)) {
        let density_profile = dataset.last_time_slice(&impurity_density_name(index))?;
        let atomic_number = dataset.last_time_first_point(&impurity_charge_name(index))?;
        log::debug!("Found impurity {} with atomic number {}", index, atomic_number);
        impurities.push(DiscoveredImpurity {
            index,
            atomic_number,
            density_profile,
        });
        index += 1;
    }
    Ok(impurities)
}

/// Labels every discovered impurity, stopping at the first unknown one.
pub fn classify_impurities(discovered: Vec<DiscoveredImpurity>) -> PrepResult<Vec<ImpuritySpecies>> {
    discovered
        .into_iter()
        .map(|impurity| {
            let label = classify(impurity.atomic_number, impurity.index)?;
            Ok(ImpuritySpecies {
                index: impurity.index,
                atomic_number: impurity.atomic_number,
                density_profile: impurity.density_profile,
                label,
            })
        })
        .collect()
}
