// src/species/mod.rs

pub mod classifier;
pub mod discovery;

pub use classifier::{classify, SpeciesLabel};
pub use discovery::{classify_impurities, discover_impurities, ImpuritySpecies};
