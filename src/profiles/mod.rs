// src/profiles/mod.rs

pub mod extractor;
pub mod fractions;

pub use extractor::{extract_fuel_densities, extract_profiles, FuelDensities, RadialProfiles};
pub use fractions::{compute_fractions, IonFractionSet};
