// src/profiles/fractions.rs

use nalgebra::DVector;

use crate::profiles::extractor::FuelDensities;
use crate::species::ImpuritySpecies;

/// Ion fractions at the innermost radial point, relative to electron density.
#[derive(Debug, Clone, PartialEq)]
pub struct IonFractionSet {
    pub deuterium: f64,
    pub tritium: f64,
    pub impurities: Vec<f64>,  // same order as the discovered impurities
    pub charge_neutrality_residual: f64,
}

impl IonFractionSet {
    /// Distance of the residual from exact quasi-neutrality.
    pub fn neutrality_deviation(&self) -> f64 {
        (self.charge_neutrality_residual - 1.0).abs()
    }
}

/// Computes boundary fractions `n_s[0] / n_e[0]` for the fuel ions and every
/// impurity, and the residual `f_D + f_T + sum(f_i * Z_i)`.
///
/// Fuel ions count with charge 1; impurities with their atomic number. The
/// residual is reported, never enforced.
///
/// # Arguments
///
/// * `electron_density` - Electron density profile.
/// * `fuel` - Deuterium and tritium density profiles.
/// * `impurities` - Classified impurities in discovery order.
pub fn compute_fractions(
    electron_density: &DVector<f64>,
    fuel: &FuelDensities,
    impurities: &[ImpuritySpecies],
) -> IonFractionSet {
    let ne0 = electron_density[0];
    let deuterium = fuel.deuterium[0] / ne0;
    let tritium = fuel.tritium[0] / ne0;
    let impurity_fractions: Vec<f64> = impurities
        .iter()
        .map(|imp| imp.density_profile[0] / ne0)
        .collect();

    let impurity_charge: f64 = impurity_fractions
        .iter()
        .zip(impurities)
        .map(|(fraction, imp)| fraction * imp.atomic_number)
        .sum();

    IonFractionSet {
        deuterium,
        tritium,
        impurities: impurity_fractions,
        charge_neutrality_residual: deuterium + tritium + impurity_charge,
    }
}
