// src/pipeline/mod.rs

pub mod observer;
pub mod orchestrator;

pub use observer::{LoggingObserver, RunObserver, SilentObserver};
pub use orchestrator::{prepare, Orchestrator, PreparedRun, RunSummary};
