use std::error::Error;

use chemkit_core::round_f64;
use chemkit_optics::units::{
    energy_to_wavelength, ev_to_kj_per_mol, ev_to_wavenumber, wavelength_to_energy,
};
use clap::Args;
use serde::Serialize;

use super::emit_json;

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ConvertArgs {
    /// Photon wavelength in nm.
    #[arg(long, allow_hyphen_values = true)]
    pub wavelength: Option<f64>,
    /// Photon energy in eV.
    #[arg(long, allow_hyphen_values = true)]
    pub energy: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PhotonReport {
    wavelength_nm: f64,
    energy_ev: f64,
    wavenumber_cm1: f64,
    energy_kj_mol: f64,
}

pub fn run(args: &ConvertArgs) -> Result<(), Box<dyn Error>> {
    let (wavelength_nm, energy_ev) = match (args.wavelength, args.energy) {
        (Some(wavelength), _) => (wavelength, wavelength_to_energy(wavelength)?),
        (None, Some(energy)) => (energy_to_wavelength(energy)?, energy),
        (None, None) => return Err("one of --wavelength or --energy is required".into()),
    };
    let report = PhotonReport {
        wavelength_nm: round_f64(wavelength_nm),
        energy_ev: round_f64(energy_ev),
        wavenumber_cm1: round_f64(ev_to_wavenumber(energy_ev)?),
        energy_kj_mol: round_f64(ev_to_kj_per_mol(energy_ev)?),
    };
    emit_json(&report, None)
}
