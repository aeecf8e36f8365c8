// src/power/mod.rs

pub mod log_parser;

pub use log_parser::{alpha_power, parse_fusion_power, PowerReading};
