// src/output/formatter.rs

use nalgebra::DVector;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::PrepResult;
use crate::power::PowerReading;
use crate::profiles::IonFractionSet;
use crate::species::{ImpuritySpecies, SpeciesLabel};
use crate::utils::{format_fixed_width, format_scientific, format_scientific_width};

const PROFILE_FIELD_WIDTH: usize = 13;
const PROFILE_PRECISION: usize = 5;
const FRACTION_FIELD_WIDTH: usize = 11;
const FRACTION_PRECISION: usize = 8;
/// Charge written for the singly charged fuel ions.
const FUEL_ION_CHARGE: f64 = 1.0;

/// Renders a two-column profile file: the point count on the first line,
/// then one `coordinate value` row per radial point.
///
/// Both slices must have the same length.
pub fn render_profile(coordinate: &DVector<f64>, values: &DVector<f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", coordinate.len());
    for (x, y) in coordinate.iter().zip(values.iter()) {
        let _ = writeln!(
            out,
            "{} {}",
            format_scientific_width(*x, PROFILE_FIELD_WIDTH, PROFILE_PRECISION),
            format_scientific_width(*y, PROFILE_FIELD_WIDTH, PROFILE_PRECISION)
        );
    }
    out
}

fn deposition_row(out: &mut String, charge: f64, fraction: f64, label: SpeciesLabel) {
    let _ = writeln!(
        out,
        "{} {} {}",
        format_fixed_width(charge, FRACTION_FIELD_WIDTH, FRACTION_PRECISION),
        format_fixed_width(fraction, FRACTION_FIELD_WIDTH, FRACTION_PRECISION),
        label
    );
}

/// Renders the deposition descriptor:
///
/// ```text
/// <number of species>
/// <alpha power [W]>
/// <charge> <fraction> <label>     (deuterium, tritium, then each impurity)
/// ```
pub fn render_deposition(
    power: &PowerReading,
    fractions: &IonFractionSet,
    impurities: &[ImpuritySpecies],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", impurities.len() + 2);
    let _ = writeln!(out, "{}", format_scientific(power.alpha_power_w, PROFILE_PRECISION));
    deposition_row(&mut out, FUEL_ION_CHARGE, fractions.deuterium, SpeciesLabel::Deuterium);
    deposition_row(&mut out, FUEL_ION_CHARGE, fractions.tritium, SpeciesLabel::Tritium);
    for (impurity, fraction) in impurities.iter().zip(&fractions.impurities) {
        deposition_row(&mut out, impurity.atomic_number, *fraction, impurity.label);
    }
    out
}

/// The rendered output files of one run, held in memory until written.
#[derive(Debug, Clone, Default)]
pub struct OutputSet {
    files: Vec<(String, String)>,
}

impl OutputSet {
    pub fn new() -> Self {
        OutputSet::default()
    }

    pub fn add(&mut self, file_name: &str, contents: String) {
        self.files.push((file_name.to_string(), contents));
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contents(&self, file_name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, contents)| contents.as_str())
    }

    /// Writes every file into `dir`.
    ///
    /// All files are first staged as temporary files in `dir`; they are
    /// renamed into place only once every one of them was written, so a
    /// failed write leaves none of the final names behind.
    pub fn write_all(&self, dir: &Path) -> PrepResult<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let mut staged = Vec::with_capacity(self.files.len());
        for (name, contents) in &self.files {
            let mut tmp = NamedTempFile::new_in(dir)?;
            tmp.write_all(contents.as_bytes())?;
            tmp.as_file().sync_all()?;
            staged.push((tmp, dir.join(name)));
        }

        let mut written = Vec::with_capacity(staged.len());
        for (tmp, path) in staged {
            tmp.persist(&path)?;
            log::debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse_profile(text: &str) -> (usize, Vec<(f64, f64)>) {
        let mut lines = text.lines();
        let count = lines.next().unwrap().trim().parse().unwrap();
        let rows = lines
            .map(|line| {
                let fields: Vec<f64> = line
                    .split_whitespace()
                    .map(|f| f.parse().unwrap())
                    .collect();
                (fields[0], fields[1])
            })
            .collect();
        (count, rows)
    }

    fn helium(density: f64) -> ImpuritySpecies {
        ImpuritySpecies {
            index: 1,
            atomic_number: 2.0,
            density_profile: DVector::from_vec(vec![density]),
            label: SpeciesLabel::Helium,
        }
    }

    #[test]
    fn test_render_profile_layout() {
        let psin = DVector::from_vec(vec![0.0, 0.5, 1.0]);
        let te = DVector::from_vec(vec![2.5e4, 1.23456e3, 100.0]);
        let text = render_profile(&psin, &te);
        let expected = "3\n\
                        \x20 0.00000e+00   2.50000e+04\n\
                        \x20 5.00000e-01   1.23456e+03\n\
                        \x20 1.00000e+00   1.00000e+02\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_profile_round_trip() {
        let psin = DVector::from_vec(vec![0.0, 0.3333333333, 0.987654321]);
        let ne = DVector::from_vec(vec![1.0123456e20, 7.777777e19, 3.14159e18]);
        let (count, rows) = parse_profile(&render_profile(&psin, &ne));

        assert_eq!(count, 3);
        assert_eq!(rows.len(), 3);
        for (i, (x, y)) in rows.iter().enumerate() {
            assert!(((x - psin[i]) / psin[i].max(1.0)).abs() < 5e-6);
            assert!(((y - ne[i]) / ne[i]).abs() < 5e-6);
        }
    }

    #[test]
    fn test_render_deposition_without_impurities() {
        let power = PowerReading::from_fusion_power(2.0);
        let fractions = IonFractionSet {
            deuterium: 0.45,
            tritium: 0.45,
            impurities: vec![],
            charge_neutrality_residual: 0.9,
        };
        let text = render_deposition(&power, &fractions, &[]);
        assert_eq!(
            text,
            "2\n3.97727e+08\n 1.00000000  0.45000000 AD\n 1.00000000  0.45000000 AT\n"
        );
    }

    #[test]
    fn test_render_deposition_with_impurity() {
        let power = PowerReading::from_fusion_power(1.0);
        let fractions = IonFractionSet {
            deuterium: 0.4,
            tritium: 0.4,
            impurities: vec![0.1],
            charge_neutrality_residual: 1.0,
        };
        let text = render_deposition(&power, &fractions, &[helium(1.0)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "3");
        assert_eq!(lines[4], " 2.00000000  0.10000000 AHe4");
    }

    #[test]
    fn test_output_set_writes_every_file() {
        let dir = tempdir().unwrap();
        let mut outputs = OutputSet::new();
        outputs.add("a.dat", "1\n".to_string());
        outputs.add("b.dat", "2\n".to_string());

        let written = outputs.write_all(dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join("a.dat")).unwrap(), "1\n");
        assert_eq!(outputs.contents("b.dat"), Some("2\n"));
        // no staging files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_output_set_overwrites_previous_run() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.dat"), "stale contents\n").unwrap();
        let mut outputs = OutputSet::new();
        outputs.add("a.dat", "fresh\n".to_string());
        outputs.write_all(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.dat")).unwrap(), "fresh\n");
    }
}
