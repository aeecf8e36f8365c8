// src/error.rs

use thiserror::Error;

/// Every failure that can abort a profile preparation run.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("no line containing '{label}' found in {source_name}")]
    MissingLabeledValue { label: String, source_name: String },

    #[error("could not parse a number from '{raw}' on the '{label}' line")]
    InvalidLabeledValue { label: String, raw: String },

    #[error("unknown impurity species at index {index}: atomic number {atomic_number}")]
    UnknownSpecies { index: usize, atomic_number: f64 },

    #[error("variable '{0}' not found in dataset")]
    MissingVariable(String),

    #[error("variable '{0}' has no time steps or no radial points")]
    EmptyVariable(String),

    #[error("radial grid mismatch: '{name}' has {found} points, expected {expected}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("could not persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type PrepResult<T> = Result<T, PrepError>;
