#![deny(missing_docs)]
#![doc = "Arrhenius rate laws, two-point activation energies and multi-temperature Arrhenius fits."]

pub mod arrhenius;

pub use arrhenius::{
    activation_energy, fit_arrhenius, half_life_first_order, rate_constant, ArrheniusFit,
    ArrheniusPoint, GAS_CONSTANT,
};
