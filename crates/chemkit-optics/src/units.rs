use chemkit_core::{ChemError, HC_EV_NM};

use crate::conversion_error;

/// eV to cm⁻¹.
pub const EV_TO_WAVENUMBER: f64 = 8065.544;
/// eV per particle to kJ/mol.
pub const EV_TO_KJ_PER_MOL: f64 = 96.485_332;
/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

fn require_positive(code: &str, what: &str, value: f64) -> Result<f64, ChemError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(conversion_error(
            code,
            format!("{what} must be a positive finite number"),
            value,
        ));
    }
    Ok(value)
}

fn require_finite(code: &str, what: &str, input: f64, result: f64) -> Result<f64, ChemError> {
    if !result.is_finite() {
        return Err(conversion_error(
            code,
            format!("{what} is outside the representable range"),
            input,
        ));
    }
    Ok(result)
}

/// Converts a wavelength in nm to photon energy in eV (`E = 1239.84 / λ`).
pub fn wavelength_to_energy(wavelength_nm: f64) -> Result<f64, ChemError> {
    let wavelength = require_positive("invalid-wavelength", "wavelength", wavelength_nm)?;
    require_finite("invalid-wavelength", "wavelength", wavelength_nm, HC_EV_NM / wavelength)
}

/// Converts a photon energy in eV to wavelength in nm (`λ = 1239.84 / E`).
pub fn energy_to_wavelength(energy_ev: f64) -> Result<f64, ChemError> {
    let energy = require_positive("invalid-energy", "energy", energy_ev)?;
    require_finite("invalid-energy", "energy", energy_ev, HC_EV_NM / energy)
}

/// Converts a photon energy in eV to a wavenumber in cm⁻¹.
pub fn ev_to_wavenumber(energy_ev: f64) -> Result<f64, ChemError> {
    let energy = require_positive("invalid-energy", "energy", energy_ev)?;
    require_finite("invalid-energy", "energy", energy_ev, energy * EV_TO_WAVENUMBER)
}

/// Converts a wavenumber in cm⁻¹ to photon energy in eV.
pub fn wavenumber_to_ev(wavenumber_cm1: f64) -> Result<f64, ChemError> {
    let wavenumber = require_positive("invalid-wavenumber", "wavenumber", wavenumber_cm1)?;
    Ok(wavenumber / EV_TO_WAVENUMBER)
}

/// Converts a per-particle energy in eV to a molar energy in kJ/mol.
pub fn ev_to_kj_per_mol(energy_ev: f64) -> Result<f64, ChemError> {
    let energy = require_positive("invalid-energy", "energy", energy_ev)?;
    require_finite("invalid-energy", "energy", energy_ev, energy * EV_TO_KJ_PER_MOL)
}

/// Converts a molar energy in kJ/mol to a per-particle energy in eV.
pub fn kj_per_mol_to_ev(energy_kj_mol: f64) -> Result<f64, ChemError> {
    let energy = require_positive("invalid-energy", "molar energy", energy_kj_mol)?;
    Ok(energy / EV_TO_KJ_PER_MOL)
}

/// Converts °C to K, rejecting temperatures below absolute zero.
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64, ChemError> {
    let kelvin = celsius + KELVIN_OFFSET;
    if !kelvin.is_finite() || kelvin < 0.0 {
        return Err(conversion_error(
            "invalid-temperature",
            "temperature lies below absolute zero",
            celsius,
        ));
    }
    Ok(kelvin)
}

/// Converts K to °C, rejecting negative absolute temperatures.
pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64, ChemError> {
    if !kelvin.is_finite() || kelvin < 0.0 {
        return Err(conversion_error(
            "invalid-temperature",
            "absolute temperature must be non-negative",
            kelvin,
        ));
    }
    Ok(kelvin - KELVIN_OFFSET)
}
