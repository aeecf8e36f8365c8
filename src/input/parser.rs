// src/input/parser.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::PrepResult;
use crate::input::dataset::{DatasetFile, MemoryDataset};
use crate::input::run_config::{RunConfig, CONFIG_FILE_NAME};

fn read_to_string(file_path: &Path) -> PrepResult<String> {
    let mut file = File::open(file_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parses a run configuration from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file.
///
/// # Returns
///
/// * `Ok(RunConfig)` if parsing is successful. Missing keys take their defaults.
/// * `Err` if an error occurs during file reading or parsing.
pub fn parse_run_config(file_path: &Path) -> PrepResult<RunConfig> {
    let contents = read_to_string(file_path)?;
    if contents.trim().is_empty() {
        return Ok(RunConfig::default());
    }
    let config: RunConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Loads `prepare_profiles.yaml` from the run directory if there is one,
/// otherwise falls back to the default configuration.
pub fn load_run_config(run_dir: &Path) -> PrepResult<RunConfig> {
    let path = run_dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        log::info!("Using run configuration {}", path.display());
        parse_run_config(&path)
    } else {
        log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, run_dir.display());
        Ok(RunConfig::default())
    }
}

/// Loads a YAML export of a profiles archive into memory.
///
/// The file is read completely and closed before conversion.
pub fn load_dataset(file_path: &Path) -> PrepResult<MemoryDataset> {
    let contents = read_to_string(file_path)?;
    let file: DatasetFile = serde_yaml::from_str(&contents)?;
    MemoryDataset::try_from(file)
}
