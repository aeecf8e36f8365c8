// src/input/mod.rs

pub mod dataset;
pub mod parser;
pub mod run_config;

pub use dataset::{MemoryDataset, ProfileDataset};
pub use parser::{load_dataset, load_run_config, parse_run_config};
pub use run_config::RunConfig;
