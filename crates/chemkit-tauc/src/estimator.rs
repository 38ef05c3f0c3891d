use chemkit_core::stats::{linear_fit, LinearFit};
use chemkit_core::{stable_hash_string, ChemError, EstimationErrorKind, HC_EV_NM};
use serde::{Deserialize, Serialize};

use crate::quality::FitQuality;
use crate::region::{find_linear_region, LinearRegion};
use crate::sample::{BandType, EstimatorOptions, RawSample};
use crate::tauc::tauc_points;

/// Largest bandgap accepted as physically meaningful, in eV.
pub const MAX_BANDGAP_EV: f64 = 10.0;

/// Result of a successful Tauc analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandgapEstimate {
    /// Extrapolated bandgap in eV.
    pub bandgap_ev: f64,
    /// Wavelength corresponding to the bandgap, in nm.
    pub wavelength_nm: f64,
    /// Transition type used for the transform.
    pub band_type: BandType,
    /// Tauc exponent `n`.
    pub exponent: f64,
    /// Least-squares line through the linear region.
    pub fit: LinearFit,
    /// Number of points in the linear region.
    pub linear_region_size: usize,
    /// Location of the linear region in the energy-sorted points.
    pub region: LinearRegion,
    /// Advisory fit grade.
    pub quality: FitQuality,
    /// Human-readable fit equation.
    pub equation: String,
    /// Tauc points available after filtering.
    pub valid_points: usize,
    /// Raw samples discarded before the fit.
    pub dropped_points: usize,
}

impl BandgapEstimate {
    /// SHA-256 digest of the canonical JSON encoding.
    pub fn digest(&self) -> Result<String, ChemError> {
        stable_hash_string(self)
    }
}

/// Renders `y = <slope>x ± <intercept>` with four decimals.
pub fn format_equation(fit: &LinearFit) -> String {
    let sign = if fit.intercept < 0.0 { '-' } else { '+' };
    format!(
        "y = {:.4}x {} {:.4}",
        fit.slope,
        sign,
        fit.intercept.abs()
    )
}

/// Tauc-plot bandgap estimator bound to a set of options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandgapEstimator {
    options: EstimatorOptions,
}

impl BandgapEstimator {
    /// Creates an estimator with the supplied options.
    pub fn new(options: EstimatorOptions) -> Self {
        Self { options }
    }

    /// Options used by this estimator.
    pub fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    /// Estimates the bandgap of `samples` for the given transition type.
    pub fn estimate(
        &self,
        samples: &[RawSample],
        band_type: BandType,
    ) -> Result<BandgapEstimate, ChemError> {
        let points = tauc_points(samples, band_type, &self.options)?;
        let region = find_linear_region(&points, self.options.window_half_width)?;

        let window = &points[region.start..region.end];
        let xs: Vec<f64> = window.iter().map(|point| point.x).collect();
        let ys: Vec<f64> = window.iter().map(|point| point.y).collect();
        let fit = linear_fit(&xs, &ys).ok_or_else(|| {
            ChemError::estimation(
                EstimationErrorKind::FitFailed,
                "least-squares fit produced a non-finite line",
            )
            .with_context("window", window.len())
        })?;

        if fit.slope <= 0.0 {
            return Err(ChemError::estimation(
                EstimationErrorKind::NegativeSlope,
                "Tauc plot must rise with energy over the linear region",
            )
            .with_context("slope", fit.slope));
        }

        let bandgap_ev = -fit.intercept / fit.slope;
        if !bandgap_ev.is_finite() || bandgap_ev <= 0.0 || bandgap_ev > MAX_BANDGAP_EV {
            return Err(ChemError::estimation(
                EstimationErrorKind::UnreasonableBandgap,
                format!("extrapolated bandgap lies outside (0, {MAX_BANDGAP_EV}] eV"),
            )
            .with_context("bandgap_ev", bandgap_ev));
        }

        let quality = FitQuality::from_r_squared(fit.r_squared);
        if quality == FitQuality::Poor {
            log::warn!(
                "poor Tauc fit (r² = {:.4}) for {} bandgap estimate",
                fit.r_squared,
                band_type
            );
        }

        Ok(BandgapEstimate {
            bandgap_ev,
            wavelength_nm: HC_EV_NM / bandgap_ev,
            band_type,
            exponent: band_type.exponent(),
            equation: format_equation(&fit),
            fit,
            linear_region_size: region.len(),
            region,
            quality,
            valid_points: points.len(),
            dropped_points: samples.len() - points.len(),
        })
    }
}

/// Estimates a bandgap with the supplied options.
pub fn estimate_bandgap(
    samples: &[RawSample],
    band_type: BandType,
    options: &EstimatorOptions,
) -> Result<BandgapEstimate, ChemError> {
    BandgapEstimator::new(options.clone()).estimate(samples, band_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_folds_sign_into_operator() {
        let fit = LinearFit {
            slope: 12.5,
            intercept: -25.0,
            r_squared: 1.0,
            points: 3,
        };
        assert_eq!(format_equation(&fit), "y = 12.5000x - 25.0000");
        let fit = LinearFit {
            intercept: 0.125,
            ..fit
        };
        assert_eq!(format_equation(&fit), "y = 12.5000x + 0.1250");
    }
}
