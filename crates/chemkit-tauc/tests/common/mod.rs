#![allow(dead_code)]

use chemkit_tauc::RawSample;

/// Direct-gap absorption edge whose Tauc ordinate follows a logistic step
/// centred on 2.4 eV; `scale` multiplies every absorption coefficient.
pub fn logistic_edge(scale: f64) -> Vec<RawSample> {
    (0..61)
        .map(|idx| {
            let energy = 1.8 + idx as f64 * 0.02;
            let tauc = 100.0 / (1.0 + (-(energy - 2.4) / 0.08).exp());
            RawSample::energy(energy, scale * tauc.sqrt() / energy)
        })
        .collect()
}

/// Energy samples whose direct Tauc ordinate is exactly `f(E)`.
pub fn direct_samples(energies: &[f64], f: impl Fn(f64) -> f64) -> Vec<RawSample> {
    energies
        .iter()
        .map(|&energy| RawSample::energy(energy, f(energy).sqrt() / energy))
        .collect()
}
