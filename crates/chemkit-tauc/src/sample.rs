use std::fmt;
use std::str::FromStr;

use chemkit_core::{ChemError, ErrorInfo, EstimationErrorKind};
use chemkit_optics::wavelength_to_energy;
use serde::{Deserialize, Serialize};

use crate::region::DEFAULT_WINDOW_HALF_WIDTH;

/// Minimum number of samples required at every filtering stage.
pub const MIN_SAMPLES: usize = 5;

/// Nature of the optical transition, selecting the Tauc exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandType {
    /// Direct allowed transition, `n = 2`.
    Direct,
    /// Indirect allowed transition, `n = 1/2`.
    Indirect,
}

impl BandType {
    /// Exponent applied to `α·E` in the Tauc relation.
    pub fn exponent(self) -> f64 {
        match self {
            BandType::Direct => 2.0,
            BandType::Indirect => 0.5,
        }
    }

    /// Lowercase name used in reports and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            BandType::Direct => "direct",
            BandType::Indirect => "indirect",
        }
    }
}

impl fmt::Display for BandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BandType {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(BandType::Direct),
            "indirect" => Ok(BandType::Indirect),
            other => Err(ChemError::Input(
                ErrorInfo::new("unknown-band-type", format!("unknown band type `{other}`"))
                    .with_hint("expected `direct` or `indirect`"),
            )),
        }
    }
}

/// One raw observation as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSample {
    /// UV-Vis reading: wavelength in nm and measured absorbance.
    Wavelength {
        /// Wavelength in nm.
        wavelength_nm: f64,
        /// Measured absorbance (or F(R) for diffuse reflectance data).
        absorbance: f64,
    },
    /// Already converted point: photon energy and absorption coefficient.
    Energy {
        /// Photon energy in eV.
        energy_ev: f64,
        /// Absorption coefficient in the caller's unit.
        absorption_coefficient: f64,
    },
}

impl RawSample {
    /// Convenience constructor for a wavelength/absorbance reading.
    pub fn wavelength(wavelength_nm: f64, absorbance: f64) -> Self {
        RawSample::Wavelength {
            wavelength_nm,
            absorbance,
        }
    }

    /// Convenience constructor for an energy/coefficient point.
    pub fn energy(energy_ev: f64, absorption_coefficient: f64) -> Self {
        RawSample::Energy {
            energy_ev,
            absorption_coefficient,
        }
    }

    /// Normalizes the observation, returning `None` when it fails validation.
    pub fn normalize(&self, options: &EstimatorOptions) -> Option<Sample> {
        match *self {
            RawSample::Wavelength {
                wavelength_nm,
                absorbance,
            } => {
                if !absorbance.is_finite() || absorbance < 0.0 {
                    return None;
                }
                let energy = wavelength_to_energy(wavelength_nm).ok()?;
                let coefficient = absorbance / options.absorbance_divisor();
                coefficient.is_finite().then_some(Sample {
                    energy,
                    absorption_coefficient: coefficient,
                })
            }
            RawSample::Energy {
                energy_ev,
                absorption_coefficient,
            } => {
                if !energy_ev.is_finite() || energy_ev <= 0.0 {
                    return None;
                }
                if !absorption_coefficient.is_finite() || absorption_coefficient < 0.0 {
                    return None;
                }
                Some(Sample {
                    energy: energy_ev,
                    absorption_coefficient,
                })
            }
        }
    }
}

/// Validated `(energy, absorption coefficient)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Photon energy in eV, strictly positive.
    pub energy: f64,
    /// Absorption coefficient, non-negative.
    pub absorption_coefficient: f64,
}

fn default_window_half_width() -> usize {
    DEFAULT_WINDOW_HALF_WIDTH
}

/// Tunables for a single estimation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorOptions {
    /// Film or cuvette thickness dividing absorbance readings.
    #[serde(default)]
    pub thickness: Option<f64>,
    /// Concentration dividing absorbance readings; only applied with a thickness.
    #[serde(default)]
    pub concentration: Option<f64>,
    /// Points kept on each side of the steepest local slope.
    #[serde(default = "default_window_half_width")]
    pub window_half_width: usize,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            thickness: None,
            concentration: None,
            window_half_width: default_window_half_width(),
        }
    }
}

impl EstimatorOptions {
    /// Options with a thickness and no concentration.
    pub fn with_thickness(thickness: f64) -> Self {
        Self {
            thickness: Some(thickness),
            ..Self::default()
        }
    }

    /// Checks that thickness and concentration are positive finite numbers.
    pub fn validate(&self) -> Result<(), ChemError> {
        for (name, value) in [
            ("thickness", self.thickness),
            ("concentration", self.concentration),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ChemError::estimation(
                        EstimationErrorKind::InvalidOptions,
                        format!("{name} must be a positive finite number"),
                    )
                    .with_context(name, value));
                }
            }
        }
        Ok(())
    }

    /// Divisor turning an absorbance into an absorption coefficient.
    pub fn absorbance_divisor(&self) -> f64 {
        match (self.thickness, self.concentration) {
            (Some(thickness), Some(concentration)) => thickness * concentration,
            (Some(thickness), None) => thickness,
            _ => 1.0,
        }
    }
}

/// Normalizes every raw observation, silently dropping invalid ones.
pub fn normalize_samples(raw: &[RawSample], options: &EstimatorOptions) -> Vec<Sample> {
    let samples: Vec<Sample> = raw
        .iter()
        .filter_map(|sample| sample.normalize(options))
        .collect();
    if samples.len() < raw.len() {
        log::debug!(
            "dropped {} of {} samples during normalization",
            raw.len() - samples.len(),
            raw.len()
        );
    }
    samples
}
