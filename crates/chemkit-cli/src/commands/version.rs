use std::error::Error;
use std::process::Command;

use clap::Args;
use serde::Serialize;

use super::emit_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the toolchain and the library crates bundled into the binary.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    rustc: String,
    components: Vec<String>,
}

fn rustc_version() -> String {
    Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_else(|| "rustc unavailable".into())
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        rustc: rustc_version(),
        components: ["core", "optics", "tauc", "kinetics"]
            .iter()
            .map(|name| format!("chemkit-{name}"))
            .collect(),
    };
    emit_json(&info, None)
}
