use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    arrhenius::{self, ArrheniusArgs},
    bandgap::{self, BandgapArgs},
    convert::{self, ConvertArgs},
    kubelka_munk::{self, KubelkaMunkArgs},
    version::{self, VersionArgs},
};

mod commands;
mod input;

#[derive(Parser, Debug)]
#[command(name = "chemkit", about = "Spectroscopy and kinetics toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate an optical bandgap from a UV-Vis spectrum via a Tauc plot.
    Bandgap(BandgapArgs),
    /// Convert between photon wavelength and energy.
    Convert(ConvertArgs),
    /// Apply the Kubelka-Munk transform to a diffuse reflectance reading.
    KubelkaMunk(KubelkaMunkArgs),
    /// Fit Arrhenius parameters to rate constants measured at several temperatures.
    Arrhenius(ArrheniusArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Bandgap(args) => bandgap::run(&args),
        Command::Convert(args) => convert::run(&args),
        Command::KubelkaMunk(args) => kubelka_munk::run(&args),
        Command::Arrhenius(args) => arrhenius::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
