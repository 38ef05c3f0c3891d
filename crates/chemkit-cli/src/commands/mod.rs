pub mod arrhenius;
pub mod bandgap;
pub mod convert;
pub mod kubelka_munk;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::Path;

use chemkit_core::serde::to_canonical_json_pretty;
use serde::Serialize;

/// Writes `value` as canonical JSON to `out`, or to stdout when no path is given.
pub fn emit_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let rendered = to_canonical_json_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
