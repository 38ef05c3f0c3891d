#![deny(missing_docs)]
#![doc = "Shared error surface, canonical serialization and numeric helpers for chemkit crates."]

pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
/// Canonical JSON and YAML helpers.
pub mod serde;
pub mod stats;

pub use errors::{ChemError, ErrorInfo, EstimationErrorKind};
pub use hash::{round_f64, stable_hash_string};
pub use stats::{linear_fit, LinearFit};

/// Photon energy to wavelength conversion constant `hc` in eV·nm.
pub const HC_EV_NM: f64 = 1239.84;
