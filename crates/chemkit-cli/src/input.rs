use std::path::Path;

use chemkit_core::{ChemError, ErrorInfo};
use chemkit_kinetics::ArrheniusPoint;
use chemkit_tauc::RawSample;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SpectrumRow {
    #[serde(default)]
    wavelength_nm: Option<f64>,
    #[serde(default)]
    absorbance: Option<f64>,
    #[serde(default)]
    energy_ev: Option<f64>,
    #[serde(default)]
    absorption_coefficient: Option<f64>,
}

fn input_error(path: &Path, code: &str, err: impl ToString) -> ChemError {
    ChemError::Input(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display()),
    )
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, ChemError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|err| input_error(path, "csv-open", err))
}

/// Reads a spectrum CSV with `wavelength_nm,absorbance` and/or
/// `energy_ev,absorption_coefficient` columns; each row must fill one pair.
pub fn load_spectrum(path: &Path) -> Result<Vec<RawSample>, ChemError> {
    let mut reader = open_reader(path)?;
    let mut samples = Vec::new();
    for (idx, row) in reader.deserialize::<SpectrumRow>().enumerate() {
        let row = row.map_err(|err| input_error(path, "csv-row", err).with_context("row", idx + 1))?;
        let sample = match row {
            SpectrumRow {
                wavelength_nm: Some(wavelength_nm),
                absorbance: Some(absorbance),
                ..
            } => RawSample::wavelength(wavelength_nm, absorbance),
            SpectrumRow {
                energy_ev: Some(energy_ev),
                absorption_coefficient: Some(absorption_coefficient),
                ..
            } => RawSample::energy(energy_ev, absorption_coefficient),
            _ => {
                return Err(input_error(
                    path,
                    "incomplete-row",
                    "row fills neither wavelength_nm/absorbance nor energy_ev/absorption_coefficient",
                )
                .with_context("row", idx + 1))
            }
        };
        samples.push(sample);
    }
    log::info!("read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Reads `temperature_k,rate_constant` rows.
pub fn load_rate_table(path: &Path) -> Result<Vec<ArrheniusPoint>, ChemError> {
    let mut reader = open_reader(path)?;
    reader
        .deserialize::<ArrheniusPoint>()
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|err| input_error(path, "csv-row", err).with_context("row", idx + 1))
        })
        .collect()
}
