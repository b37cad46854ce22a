//! Convert character generator ROM dumps into BDF fonts.
//!
//! Takes a raw ROM dump, and writes a BDF font and a PNG preview sheet of
//! its 128 characters. Several conversions can be listed in a TOML plan file
//! and run in one go.

use std::path::Path;

use miette::miette;

mod convert;
mod dump;
mod plan;

use convert::Conversion;
use plan::Plan;

fn main() -> miette::Result<()> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| miette!("{e}"))?;

    if let Some(path) = &args.plan {
        if args.rom.is_some() {
            return Err(miette!("pass either a ROM or --plan, not both"));
        }
        return run_plan(path);
    }

    let conversion = Conversion::from_args(&args);
    convert::run(&conversion, args.dump).map_err(|e| miette!("{e}"))
}

fn run_plan(path: &Path) -> miette::Result<()> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| miette!("error reading '{}': {e}", path.display()))?;
    let plan: Plan =
        toml::from_str(&contents).map_err(|e| miette!("failed to parse plan: '{}'", e))?;

    log::info!("running {} conversions from {}", plan.convert.len(), path.display());
    for job in &plan.convert {
        let conversion = job.resolve();
        convert::run(&conversion, false)
            .map_err(|e| miette!("{}: {e}", conversion.rom.display()))?;
    }
    Ok(())
}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Convert a character generator ROM dump into a BDF font and a PNG preview
        cmd args {
            /// The ROM dump to read (default: s619.bin)
            optional rom: PathBuf
            /// Family name of the font (default: Robotron1715)
            optional -n, --name name: String
            /// Path of the BDF font to write (default: <name>.bdf)
            optional --bdf bdf: PathBuf
            /// Path of the PNG preview to write (default: <name>.png)
            optional --png png: PathBuf
            /// Magnification of the preview (default: 2)
            optional -s, --scale scale: u32
            /// Print every glyph to stdout
            optional -d, --dump
            /// Run the conversions listed in a TOML plan file
            optional -p, --plan plan: PathBuf
        }
    }
}
