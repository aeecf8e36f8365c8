// src/lib.rs

//! Converts transport-code profile output into the input files of an
//! orbit-following code: ion and electron temperature profiles, the electron
//! density profile, and an ion-fraction/alpha-power deposition descriptor.

pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod power;
pub mod profiles;
pub mod species;
pub mod utils;

pub use error::{PrepError, PrepResult};
pub use pipeline::{prepare, LoggingObserver, Orchestrator, RunObserver, RunSummary};
