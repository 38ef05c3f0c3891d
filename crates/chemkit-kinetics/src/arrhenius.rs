//! Arrhenius temperature dependence `k = A·exp(-Ea / (R·T))`.

use chemkit_core::stats::linear_fit;
use chemkit_core::{ChemError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

fn kinetics_error(code: &str, message: impl Into<String>) -> ChemError {
    ChemError::Kinetics(ErrorInfo::new(code, message))
}

fn require_positive(code: &str, what: &str, value: f64) -> Result<f64, ChemError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(kinetics_error(code, format!("{what} must be a positive finite number"))
            .with_context("value", value));
    }
    Ok(value)
}

/// Rate constant measured at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusPoint {
    /// Absolute temperature in K.
    pub temperature_k: f64,
    /// Rate constant in the caller's unit.
    pub rate_constant: f64,
}

/// Least-squares Arrhenius parameters from `ln k` against `1/T`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusFit {
    /// Activation energy in J/mol.
    pub activation_energy_j_mol: f64,
    /// Pre-exponential factor, same unit as the rate constants.
    pub pre_exponential: f64,
    /// Coefficient of determination of the linearized fit.
    pub r_squared: f64,
    /// Number of points in the fit.
    pub points: usize,
}

impl ArrheniusFit {
    /// Activation energy in kJ/mol.
    pub fn activation_energy_kj_mol(&self) -> f64 {
        self.activation_energy_j_mol / 1000.0
    }

    /// Rate constant predicted at `temperature_k`.
    pub fn rate_at(&self, temperature_k: f64) -> Result<f64, ChemError> {
        rate_constant(self.pre_exponential, self.activation_energy_j_mol, temperature_k)
    }
}

/// Rate constant `k = A·exp(-Ea / (R·T))` with `Ea` in J/mol.
pub fn rate_constant(
    pre_exponential: f64,
    activation_energy_j_mol: f64,
    temperature_k: f64,
) -> Result<f64, ChemError> {
    let a = require_positive("invalid-pre-exponential", "pre-exponential factor", pre_exponential)?;
    let t = require_positive("invalid-temperature", "temperature", temperature_k)?;
    if !activation_energy_j_mol.is_finite() {
        return Err(kinetics_error("invalid-activation-energy", "activation energy must be finite"));
    }
    Ok(a * (-activation_energy_j_mol / (GAS_CONSTANT * t)).exp())
}

/// Activation energy in J/mol from two rate constants at two temperatures.
pub fn activation_energy(k1: f64, t1: f64, k2: f64, t2: f64) -> Result<f64, ChemError> {
    let k1 = require_positive("invalid-rate-constant", "rate constant", k1)?;
    let k2 = require_positive("invalid-rate-constant", "rate constant", k2)?;
    let t1 = require_positive("invalid-temperature", "temperature", t1)?;
    let t2 = require_positive("invalid-temperature", "temperature", t2)?;
    let inverse_span = 1.0 / t1 - 1.0 / t2;
    if inverse_span == 0.0 {
        return Err(kinetics_error(
            "degenerate-temperatures",
            "the two temperatures must differ",
        ));
    }
    Ok(GAS_CONSTANT * (k2 / k1).ln() / inverse_span)
}

/// Fits `ln k = ln A - Ea/(R·T)` over at least two points.
pub fn fit_arrhenius(points: &[ArrheniusPoint]) -> Result<ArrheniusFit, ChemError> {
    if points.len() < 2 {
        return Err(kinetics_error(
            "insufficient-points",
            "an Arrhenius fit needs at least two temperatures",
        )
        .with_context("points", points.len()));
    }
    let mut xs = Vec::with_capacity(points.len());
    let mut ys = Vec::with_capacity(points.len());
    for (idx, point) in points.iter().enumerate() {
        let t = require_positive("invalid-temperature", "temperature", point.temperature_k)
            .map_err(|err| err.with_context("index", idx))?;
        let k = require_positive("invalid-rate-constant", "rate constant", point.rate_constant)
            .map_err(|err| err.with_context("index", idx))?;
        xs.push(1.0 / t);
        ys.push(k.ln());
    }

    let fit = linear_fit(&xs, &ys).ok_or_else(|| {
        kinetics_error(
            "degenerate-temperatures",
            "temperatures must not all coincide",
        )
    })?;
    let activation_energy_j_mol = -fit.slope * GAS_CONSTANT;
    if activation_energy_j_mol < 0.0 {
        log::warn!(
            "negative apparent activation energy ({activation_energy_j_mol:.1} J/mol): rate falls with temperature"
        );
    }
    Ok(ArrheniusFit {
        activation_energy_j_mol,
        pre_exponential: fit.intercept.exp(),
        r_squared: fit.r_squared,
        points: fit.points,
    })
}

/// Half-life `ln 2 / k` of a first-order process.
pub fn half_life_first_order(rate_constant: f64) -> Result<f64, ChemError> {
    let k = require_positive("invalid-rate-constant", "rate constant", rate_constant)?;
    Ok(std::f64::consts::LN_2 / k)
}
