#![deny(missing_docs)]
#![doc = "Photon energy conversions, reflectance and transmittance transforms, Beer-Lambert helpers and crystal-field splitting for chemkit."]

/// Beer-Lambert absorbance relations.
pub mod beer_lambert;
/// Crystal-field splitting derived from d-d absorption maxima.
pub mod crystal_field;
/// Reflectance and transmittance transforms.
pub mod reflectance;
/// Energy, wavelength, wavenumber and temperature conversions.
pub mod units;

pub use beer_lambert::{absorbance, absorbance_to_transmittance, concentration, transmittance_to_absorbance};
pub use crystal_field::{spin_state, splitting_from_wavelength, CrystalFieldSplitting, SpinState};
pub use reflectance::{absorption_coefficient, kubelka_munk, normalize_fraction};
pub use units::{energy_to_wavelength, wavelength_to_energy};

use chemkit_core::{ChemError, ErrorInfo};

pub(crate) fn conversion_error(code: &str, message: impl Into<String>, value: f64) -> ChemError {
    ChemError::Conversion(ErrorInfo::new(code, message).with_context("value", value))
}
