use std::error::Error;

use chemkit_core::round_f64;
use chemkit_optics::{kubelka_munk, normalize_fraction};
use clap::Args;
use serde::Serialize;

use super::emit_json;

#[derive(Args, Debug)]
pub struct KubelkaMunkArgs {
    /// Diffuse reflectance as a fraction or a percentage.
    #[arg(long, allow_hyphen_values = true)]
    pub reflectance: f64,
}

#[derive(Debug, Serialize)]
struct KubelkaMunkReport {
    reflectance: f64,
    fraction: f64,
    f_r: f64,
}

pub fn run(args: &KubelkaMunkArgs) -> Result<(), Box<dyn Error>> {
    let f_r = kubelka_munk(args.reflectance)?;
    let report = KubelkaMunkReport {
        reflectance: args.reflectance,
        fraction: normalize_fraction(args.reflectance),
        f_r: round_f64(f_r),
    };
    emit_json(&report, None)
}
