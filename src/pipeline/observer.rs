// src/pipeline/observer.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::power::PowerReading;
use crate::profiles::{IonFractionSet, RadialProfiles};
use crate::species::ImpuritySpecies;

/// Hooks the orchestrator calls as a run progresses. All default to no-ops.
pub trait RunObserver {
    fn profiles_extracted(&mut self, _profiles: &RadialProfiles) {}

    fn fusion_power_parsed(&mut self, _power: &PowerReading) {}

    fn impurities_classified(&mut self, _impurities: &[ImpuritySpecies]) {}

    fn fractions_computed(&mut self, _fractions: &IonFractionSet) {}

    fn outputs_written(&mut self, _paths: &[PathBuf]) {}

    fn run_finished(&mut self, _elapsed: Duration) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// Reports every intermediate result through the `log` facade.
#[derive(Debug)]
pub struct LoggingObserver {
    neutrality_tolerance: f64,
}

impl LoggingObserver {
    pub fn new(neutrality_tolerance: f64) -> Self {
        LoggingObserver {
            neutrality_tolerance,
        }
    }
}

impl RunObserver for LoggingObserver {
    fn profiles_extracted(&mut self, profiles: &RadialProfiles) {
        log::info!("Radial grid points: {}", profiles.n_points());
    }

    fn fusion_power_parsed(&mut self, power: &PowerReading) {
        log::info!("Fusion power: {:.2e} GW", power.fusion_power_gw);
        log::info!("Alpha power: {:.2e} W", power.alpha_power_w);
    }

    fn impurities_classified(&mut self, impurities: &[ImpuritySpecies]) {
        let labels: Vec<&str> = impurities.iter().map(|imp| imp.label.as_str()).collect();
        let charges: Vec<f64> = impurities.iter().map(|imp| imp.atomic_number).collect();
        log::info!("Number of impurities: {}", impurities.len());
        log::info!("Impurity names: {:?}", labels);
        log::info!("Impurity atomic numbers: {:?}", charges);
    }

    fn fractions_computed(&mut self, fractions: &IonFractionSet) {
        log::info!("fid: {:.2e}", fractions.deuterium);
        log::info!("fit: {:.2e}", fractions.tritium);
        for (i, fraction) in fractions.impurities.iter().enumerate() {
            log::info!("fim{}: {:.2e}", i + 1, fraction);
        }
        log::info!("Charge neutrality: {:.2e}", fractions.charge_neutrality_residual);
        let deviation = fractions.neutrality_deviation();
        if deviation.is_nan() || deviation > self.neutrality_tolerance {
            log::warn!(
                "Charge neutrality residual {:.4} deviates from 1 by more than {}",
                fractions.charge_neutrality_residual,
                self.neutrality_tolerance
            );
        }
    }

    fn outputs_written(&mut self, paths: &[PathBuf]) {
        for path in paths {
            log::info!("Wrote {}", path.display());
        }
    }

    fn run_finished(&mut self, elapsed: Duration) {
        log::info!("Time taken: {:.2e} seconds", elapsed.as_secs_f64());
    }
}
