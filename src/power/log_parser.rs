// src/power/log_parser.rs

use std::io::BufRead;

use crate::error::{PrepError, PrepResult};

/// Label of the run-notes line carrying the total fusion power.
pub const FUSION_POWER_LABEL: &str = "Fusion Power";
/// Characters of unit text (`GW`) that follow the number on that line.
pub const UNIT_SUFFIX_LEN: usize = 2;
/// The notes report fusion power in GW; the deposition file wants W.
pub const GIGAWATT: f64 = 1e9;
/// Alpha particle energy per D-T reaction [MeV].
pub const ALPHA_ENERGY_MEV: f64 = 3.5;
/// Total energy released per D-T reaction [MeV].
pub const DT_REACTION_ENERGY_MEV: f64 = 17.6;

/// Fusion power read from the run notes, with the alpha heating derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerReading {
    pub fusion_power_gw: f64,
    pub alpha_power_w: f64,
}

impl PowerReading {
    pub fn from_fusion_power(fusion_power_gw: f64) -> Self {
        PowerReading {
            fusion_power_gw,
            alpha_power_w: alpha_power(fusion_power_gw),
        }
    }
}

/// Alpha heating power [W] from total D-T fusion power [GW].
pub fn alpha_power(fusion_power_gw: f64) -> f64 {
    fusion_power_gw * GIGAWATT * ALPHA_ENERGY_MEV / DT_REACTION_ENERGY_MEV
}

/// Pulls the number out of a `... Fusion Power = 1.234 GW` line: the text
/// after the last `=`, minus the unit suffix.
fn value_from_line(line: &str) -> PrepResult<f64> {
    let raw = line.rsplit('=').next().unwrap_or(line).trim_end();
    let cut = raw
        .char_indices()
        .rev()
        .nth(UNIT_SUFFIX_LEN - 1)
        .map_or(0, |(i, _)| i);
    raw[..cut]
        .trim()
        .parse::<f64>()
        .map_err(|_| PrepError::InvalidLabeledValue {
            label: FUSION_POWER_LABEL.to_string(),
            raw: raw.to_string(),
        })
}

/// Scans `reader` line by line and parses the first `Fusion Power` line.
///
/// # Arguments
///
/// * `reader` - Source of the run notes.
/// * `source_name` - Name used in the error if no line matches.
///
/// # Returns
///
/// * `Ok(PowerReading)` for the first matching line.
/// * `Err(MissingLabeledValue)` if no line carries the label.
pub fn parse_fusion_power<R: BufRead>(reader: R, source_name: &str) -> PrepResult<PowerReading> {
    for line in reader.lines() {
        let line = line?;
        if line.contains(FUSION_POWER_LABEL) {
            let fusion_power_gw = value_from_line(&line)?;
            return Ok(PowerReading::from_fusion_power(fusion_power_gw));
        }
    }
    Err(PrepError::MissingLabeledValue {
        label: FUSION_POWER_LABEL.to_string(),
        source_name: source_name.to_string(),
    })
}
