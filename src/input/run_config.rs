// src/input/run_config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up inside a run directory.
pub const CONFIG_FILE_NAME: &str = "prepare_profiles.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub dataset: String,              // YAML export of the profiles archive
    pub power_log: String,            // free-text run notes holding the fusion power
    pub ion_temperature: String,
    pub electron_temperature: String,
    pub electron_density: String,
    pub deposition: String,           // ion fractions + alpha power
    pub output_dir: Option<PathBuf>,  // defaults to the run directory
}

impl Default for FileSettings {
    fn default() -> Self {
        FileSettings {
            dataset: "profiles.yaml".to_string(),
            power_log: "jetto.note".to_string(),
            ion_temperature: "profile_Ti.dat".to_string(),
            electron_temperature: "profile_Te.dat".to_string(),
            electron_density: "profile_ne.dat".to_string(),
            deposition: "pdep_fi.dat".to_string(),
            output_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticSettings {
    /// Allowed |residual - 1| before the charge neutrality check warns.
    pub neutrality_tolerance: f64,
}

impl Default for DiagnosticSettings {
    fn default() -> Self {
        DiagnosticSettings {
            neutrality_tolerance: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub files: FileSettings,
    pub diagnostics: DiagnosticSettings,
}

impl RunConfig {
    pub fn dataset_path(&self, run_dir: &Path) -> PathBuf {
        run_dir.join(&self.files.dataset)
    }

    pub fn power_log_path(&self, run_dir: &Path) -> PathBuf {
        run_dir.join(&self.files.power_log)
    }

    /// Directory the three output files go to. A relative `output_dir`
    /// is taken relative to the run directory.
    pub fn output_dir(&self, run_dir: &Path) -> PathBuf {
        match &self.files.output_dir {
            Some(dir) => run_dir.join(dir),
            None => run_dir.to_path_buf(),
        }
    }
}
