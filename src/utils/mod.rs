// src/utils/mod.rs

pub mod formatting;

// Re-export specific functions for easier access
pub use formatting::{format_fixed_width, format_scientific, format_scientific_width};
