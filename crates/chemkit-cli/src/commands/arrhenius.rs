use std::error::Error;
use std::path::PathBuf;

use chemkit_kinetics::{fit_arrhenius, half_life_first_order, ArrheniusFit};
use clap::Args;
use serde::Serialize;

use super::emit_json;
use crate::input::load_rate_table;

#[derive(Args, Debug)]
pub struct ArrheniusArgs {
    /// CSV with temperature_k,rate_constant columns.
    #[arg(long)]
    pub input: PathBuf,
    /// Temperature in K at which to extrapolate the rate constant.
    #[arg(long)]
    pub at: Option<f64>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Extrapolation {
    temperature_k: f64,
    rate_constant: f64,
    half_life: f64,
}

#[derive(Debug, Serialize)]
struct ArrheniusReport {
    fit: ArrheniusFit,
    activation_energy_kj_mol: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    extrapolation: Option<Extrapolation>,
}

pub fn run(args: &ArrheniusArgs) -> Result<(), Box<dyn Error>> {
    let points = load_rate_table(&args.input)?;
    let fit = fit_arrhenius(&points)?;
    log::info!(
        "Ea {:.2} kJ/mol from {} points, r^2 {:.4}",
        fit.activation_energy_kj_mol(),
        fit.points,
        fit.r_squared
    );
    let extrapolation = match args.at {
        Some(temperature_k) => {
            let rate_constant = fit.rate_at(temperature_k)?;
            Some(Extrapolation {
                temperature_k,
                rate_constant,
                half_life: half_life_first_order(rate_constant)?,
            })
        }
        None => None,
    };
    let report = ArrheniusReport {
        activation_energy_kj_mol: fit.activation_energy_kj_mol(),
        fit,
        extrapolation,
    };
    emit_json(&report, args.out.as_deref())
}
