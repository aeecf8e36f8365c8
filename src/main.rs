// src/main.rs

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use locust_profiles::input::load_run_config;
use locust_profiles::{LoggingObserver, Orchestrator, PrepResult, RunSummary};

/// Prepare orbit-code input files from a transport run directory
#[derive(Parser)]
#[command(name = "prepare-profiles")]
#[command(about = "Write temperature, density and ion-fraction files for an orbit-following run")]
struct Args {
    /// Run directory holding the profiles export and the run notes
    run_dir: PathBuf,
}

fn run(args: &Args) -> PrepResult<RunSummary> {
    let config = load_run_config(&args.run_dir)?;
    let observer = LoggingObserver::new(config.diagnostics.neutrality_tolerance);
    Orchestrator::new(config, observer).run(&args.run_dir)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            log::info!(
                "Prepared {} files ({} impurities)",
                summary.written.len(),
                summary.n_impurities
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
