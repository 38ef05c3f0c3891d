use serde::{Deserialize, Serialize};

use chemkit_core::ChemError;

use crate::conversion_error;
use crate::units::{ev_to_kj_per_mol, ev_to_wavenumber, wavelength_to_energy};

/// Ligand-field splitting Δ expressed in the units chemists quote it in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrystalFieldSplitting {
    /// Absorption maximum of the d-d band.
    pub wavelength_nm: f64,
    /// Δ in cm⁻¹.
    pub wavenumber_cm1: f64,
    /// Δ in eV.
    pub energy_ev: f64,
    /// Δ in kJ/mol.
    pub energy_kj_mol: f64,
}

/// Spin configuration implied by comparing Δ against the pairing energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinState {
    /// Δ below the pairing energy.
    HighSpin,
    /// Δ above the pairing energy.
    LowSpin,
}

/// Derives Δ from the wavelength of a single d-d absorption maximum.
pub fn splitting_from_wavelength(wavelength_nm: f64) -> Result<CrystalFieldSplitting, ChemError> {
    let energy_ev = wavelength_to_energy(wavelength_nm)?;
    Ok(CrystalFieldSplitting {
        wavelength_nm,
        wavenumber_cm1: ev_to_wavenumber(energy_ev)?,
        energy_ev,
        energy_kj_mol: ev_to_kj_per_mol(energy_ev)?,
    })
}

/// Classifies the spin state; both energies must share a unit. A tie counts as
/// high spin.
pub fn spin_state(splitting: f64, pairing_energy: f64) -> Result<SpinState, ChemError> {
    for value in [splitting, pairing_energy] {
        if !value.is_finite() || value <= 0.0 {
            return Err(conversion_error(
                "invalid-energy",
                "splitting and pairing energies must be positive finite numbers",
                value,
            ));
        }
    }
    Ok(if splitting > pairing_energy {
        SpinState::LowSpin
    } else {
        SpinState::HighSpin
    })
}
