use chemkit_core::{ChemError, EstimationErrorKind};
use serde::{Deserialize, Serialize};

use crate::sample::{normalize_samples, BandType, EstimatorOptions, RawSample, Sample, MIN_SAMPLES};

/// Point on a Tauc plot: `x = E`, `y = (α·E)^n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaucPoint {
    /// Photon energy in eV.
    pub x: f64,
    /// Tauc ordinate `(α·E)^n`.
    pub y: f64,
}

/// Applies the Tauc transform, drops non-finite ordinates and sorts by energy.
///
/// The sort is stable, so points sharing an energy keep their input order.
pub fn tauc_transform(samples: &[Sample], band_type: BandType) -> Vec<TaucPoint> {
    let exponent = band_type.exponent();
    let mut points: Vec<TaucPoint> = samples
        .iter()
        .map(|sample| TaucPoint {
            x: sample.energy,
            y: (sample.absorption_coefficient * sample.energy).powf(exponent),
        })
        .filter(|point| point.y.is_finite())
        .collect();
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points
}

/// Runs validation, normalization and the Tauc transform, enforcing the
/// minimum sample count at each stage.
pub fn tauc_points(
    raw: &[RawSample],
    band_type: BandType,
    options: &EstimatorOptions,
) -> Result<Vec<TaucPoint>, ChemError> {
    options.validate()?;
    if raw.len() < MIN_SAMPLES {
        return Err(ChemError::estimation(
            EstimationErrorKind::InsufficientData,
            format!("at least {MIN_SAMPLES} samples are required"),
        )
        .with_context("received", raw.len()));
    }

    let samples = normalize_samples(raw, options);
    if samples.len() < MIN_SAMPLES {
        return Err(ChemError::estimation(
            EstimationErrorKind::InsufficientValidData,
            format!("fewer than {MIN_SAMPLES} samples passed validation"),
        )
        .with_context("received", raw.len())
        .with_context("valid", samples.len()));
    }

    let points = tauc_transform(&samples, band_type);
    if points.len() < MIN_SAMPLES {
        return Err(ChemError::estimation(
            EstimationErrorKind::CalculationError,
            format!("fewer than {MIN_SAMPLES} finite Tauc points"),
        )
        .with_context("valid", samples.len())
        .with_context("finite", points.len()));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_sorts_by_energy() {
        let samples = [
            Sample {
                energy: 3.0,
                absorption_coefficient: 2.0,
            },
            Sample {
                energy: 1.0,
                absorption_coefficient: 4.0,
            },
        ];
        let points = tauc_transform(&samples, BandType::Direct);
        assert_eq!(points[0], TaucPoint { x: 1.0, y: 16.0 });
        assert_eq!(points[1], TaucPoint { x: 3.0, y: 36.0 });

        let indirect = tauc_transform(&samples, BandType::Indirect);
        assert!((indirect[0].y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn overflowing_ordinates_are_dropped() {
        let samples = [
            Sample {
                energy: 2.0,
                absorption_coefficient: 1e300,
            },
            Sample {
                energy: 2.5,
                absorption_coefficient: 1.0,
            },
        ];
        let points = tauc_transform(&samples, BandType::Direct);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 2.5);
    }
}
