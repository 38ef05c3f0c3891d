use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chemkit_core::{serde::from_yaml_slice, serde::to_canonical_json_pretty, ChemError};
use chemkit_tauc::{BandType, BandgapEstimate, BandgapEstimator, EstimatorOptions, RawSample};
use clap::Args;
use serde::{Deserialize, Serialize};

use super::emit_json;
use crate::input::load_spectrum;

#[derive(Args, Debug)]
pub struct BandgapArgs {
    /// Spectrum CSV with wavelength_nm,absorbance or energy_ev,absorption_coefficient columns.
    #[arg(long)]
    pub input: PathBuf,
    /// Transition type: "direct" or "indirect". Defaults to direct.
    #[arg(long)]
    pub band_type: Option<String>,
    /// YAML file providing band_type and estimator options.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Film or cuvette thickness in cm.
    #[arg(long)]
    pub thickness: Option<f64>,
    /// Sample concentration in mol/L; only used together with a thickness.
    #[arg(long)]
    pub concentration: Option<f64>,
    /// Points kept on each side of the steepest slope.
    #[arg(long)]
    pub window_half_width: Option<usize>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct BandgapConfig {
    #[serde(default)]
    band_type: Option<BandType>,
    #[serde(default)]
    estimator: EstimatorOptions,
}

#[derive(Debug, Serialize)]
struct BandgapReport<'a> {
    input: String,
    estimate: &'a BandgapEstimate,
    digest: String,
    dropped_samples: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct FailureReport<'a> {
    input: String,
    error: &'a ChemError,
}

fn load_config(path: Option<&Path>) -> Result<BandgapConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let bytes = fs::read(path)?;
            Ok(from_yaml_slice(&bytes)?)
        }
        None => Ok(BandgapConfig::default()),
    }
}

fn resolve_settings(args: &BandgapArgs) -> Result<(BandType, EstimatorOptions), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let band_type = match &args.band_type {
        Some(value) => value.parse::<BandType>()?,
        None => config.band_type.unwrap_or(BandType::Direct),
    };
    let mut options = config.estimator;
    if args.thickness.is_some() {
        options.thickness = args.thickness;
    }
    if args.concentration.is_some() {
        options.concentration = args.concentration;
    }
    if let Some(half_width) = args.window_half_width {
        options.window_half_width = half_width;
    }
    Ok((band_type, options))
}

fn dropped_indices(raw: &[RawSample], options: &EstimatorOptions) -> Vec<usize> {
    raw.iter()
        .enumerate()
        .filter(|(_, sample)| sample.normalize(options).is_none())
        .map(|(idx, _)| idx)
        .collect()
}

pub fn run(args: &BandgapArgs) -> Result<(), Box<dyn Error>> {
    let (band_type, options) = resolve_settings(args)?;
    let raw = load_spectrum(&args.input)?;
    let input = args.input.display().to_string();

    let estimator = BandgapEstimator::new(options);
    let estimate = match estimator.estimate(&raw, band_type) {
        Ok(estimate) => estimate,
        Err(err) => {
            // Failures also go to stdout as tagged JSON.
            let report = FailureReport { input, error: &err };
            println!("{}", to_canonical_json_pretty(&report)?);
            return Err(err.into());
        }
    };
    log::info!(
        "{band_type} bandgap {:.4} eV ({:.1} nm), r^2 {:.4}, {} fit",
        estimate.bandgap_ev,
        estimate.wavelength_nm,
        estimate.fit.r_squared,
        estimate.quality
    );

    let report = BandgapReport {
        input,
        digest: estimate.digest()?,
        dropped_samples: dropped_indices(&raw, estimator.options()),
        estimate: &estimate,
    };
    emit_json(&report, args.out.as_deref())
}
