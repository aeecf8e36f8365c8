// src/pipeline/orchestrator.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::PrepResult;
use crate::input::run_config::FileSettings;
use crate::input::{load_dataset, ProfileDataset, RunConfig};
use crate::output::{render_deposition, render_profile, OutputSet};
use crate::pipeline::observer::RunObserver;
use crate::power::{parse_fusion_power, PowerReading};
use crate::profiles::extractor::check_grid_length;
use crate::profiles::{
    compute_fractions, extract_fuel_densities, extract_profiles, IonFractionSet, RadialProfiles,
};
use crate::species::discovery::impurity_density_name;
use crate::species::{classify_impurities, discover_impurities, ImpuritySpecies};

/// Everything extracted and derived for one run, ready to be rendered.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub profiles: RadialProfiles,
    pub power: PowerReading,
    pub impurities: Vec<ImpuritySpecies>,
    pub fractions: IonFractionSet,
}

impl PreparedRun {
    /// Renders the three profile files and the deposition descriptor.
    pub fn render(&self, files: &FileSettings) -> OutputSet {
        let p = &self.profiles;
        let mut outputs = OutputSet::new();
        outputs.add(&files.ion_temperature, render_profile(&p.psin, &p.ion_temperature));
        outputs.add(
            &files.electron_temperature,
            render_profile(&p.psin, &p.electron_temperature),
        );
        outputs.add(&files.electron_density, render_profile(&p.psin, &p.electron_density));
        outputs.add(
            &files.deposition,
            render_deposition(&self.power, &self.fractions, &self.impurities),
        );
        outputs
    }
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub n_impurities: usize,
    pub charge_neutrality_residual: f64,
    pub alpha_power_w: f64,
}

/// Extracts, classifies and derives everything a run needs, without
/// touching the filesystem. Any failure aborts the whole preparation.
///
/// # Arguments
///
/// * `dataset` - Profiles archive of the run.
/// * `power_log` - Run notes holding the fusion power line.
/// * `log_name` - Name of the notes source, for error messages.
/// * `observer` - Receives each intermediate result.
pub fn prepare<D, R>(
    dataset: &D,
    power_log: R,
    log_name: &str,
    observer: &mut dyn RunObserver,
) -> PrepResult<PreparedRun>
where
    D: ProfileDataset + ?Sized,
    R: BufRead,
{
    let profiles = extract_profiles(dataset)?;
    observer.profiles_extracted(&profiles);

    let power = parse_fusion_power(power_log, log_name)?;
    observer.fusion_power_parsed(&power);

    let discovered = discover_impurities(dataset)?;
    for impurity in &discovered {
        check_grid_length(
            &impurity_density_name(impurity.index),
            &impurity.density_profile,
            profiles.n_points(),
        )?;
    }
    let impurities = classify_impurities(discovered)?;
    observer.impurities_classified(&impurities);

    let fuel = extract_fuel_densities(dataset, profiles.n_points())?;
    let fractions = compute_fractions(&profiles.electron_density, &fuel, &impurities);
    observer.fractions_computed(&fractions);

    Ok(PreparedRun {
        profiles,
        power,
        impurities,
        fractions,
    })
}

/// Runs the whole conversion for one run directory.
pub struct Orchestrator<O: RunObserver> {
    config: RunConfig,
    observer: O,
}

impl<O: RunObserver> Orchestrator<O> {
    pub fn new(config: RunConfig, observer: O) -> Self {
        Orchestrator { config, observer }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Reads the dataset and power log from `run_dir` and writes the output
    /// files. Nothing is written unless every step before it succeeded.
    pub fn run(&mut self, run_dir: &Path) -> PrepResult<RunSummary> {
        let start = Instant::now();

        let dataset_path = self.config.dataset_path(run_dir);
        log::info!("Reading profiles from {}", dataset_path.display());
        let dataset = load_dataset(&dataset_path)?;

        let log_path = self.config.power_log_path(run_dir);
        let prepared = {
            let power_log = BufReader::new(File::open(&log_path)?);
            prepare(
                &dataset,
                power_log,
                &log_path.display().to_string(),
                &mut self.observer,
            )?
        };
        drop(dataset);

        let outputs = prepared.render(&self.config.files);
        let written = outputs.write_all(&self.config.output_dir(run_dir))?;
        self.observer.outputs_written(&written);
        self.observer.run_finished(start.elapsed());

        Ok(RunSummary {
            written,
            n_impurities: prepared.impurities.len(),
            charge_neutrality_residual: prepared.fractions.charge_neutrality_residual,
            alpha_power_w: prepared.power.alpha_power_w,
        })
    }
}
