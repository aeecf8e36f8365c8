// src/output/mod.rs

pub mod formatter;

pub use formatter::{render_deposition, render_profile, OutputSet};
