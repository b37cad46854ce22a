//! Running a single ROM conversion

use std::io::Write;
use std::path::PathBuf;

use read_chargen::{ReadError, RomData};
use write_bdf::{BdfFont, Preview};

use crate::{dump, flags};

pub const DEFAULT_ROM: &str = "s619.bin";
pub const DEFAULT_NAME: &str = write_bdf::properties::DEFAULT_FAMILY;
pub const DEFAULT_SCALE: u32 = 2;

/// Everything needed to convert one ROM dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub rom: PathBuf,
    pub name: String,
    pub bdf: PathBuf,
    pub png: PathBuf,
    pub scale: u32,
}

/// An error that aborts a conversion
#[derive(Debug)]
pub enum Error {
    Load {
        path: PathBuf,
        source: std::io::Error,
    },
    Read(ReadError),
    Write(write_bdf::Error),
    Dump(std::io::Error),
}

impl Conversion {
    /// Fill in defaults for anything that was not provided.
    ///
    /// Output paths default to the lowercased font name in the current
    /// directory.
    pub fn new(
        rom: Option<PathBuf>,
        name: Option<String>,
        bdf: Option<PathBuf>,
        png: Option<PathBuf>,
        scale: Option<u32>,
    ) -> Self {
        let name = name.unwrap_or_else(|| DEFAULT_NAME.to_owned());
        let stem = name.to_lowercase();
        Conversion {
            rom: rom.unwrap_or_else(|| DEFAULT_ROM.into()),
            bdf: bdf.unwrap_or_else(|| format!("{stem}.bdf").into()),
            png: png.unwrap_or_else(|| format!("{stem}.png").into()),
            scale: scale.unwrap_or(DEFAULT_SCALE),
            name,
        }
    }

    pub fn from_args(args: &flags::Args) -> Self {
        Conversion::new(
            args.rom.clone(),
            args.name.clone(),
            args.bdf.clone(),
            args.png.clone(),
            args.scale,
        )
    }
}

/// Convert a ROM, optionally printing every glyph to stdout.
pub fn run(conversion: &Conversion, dump: bool) -> Result<(), Error> {
    if dump {
        let stdout = std::io::stdout();
        let mut locked = stdout.lock();
        convert(conversion, Some(&mut locked))
    } else {
        convert(conversion, None)
    }
}

/// Convert a ROM.
///
/// The dump is validated and every glyph is extracted and composited before
/// either output is written.
pub fn convert(
    conversion: &Conversion,
    mut dump_to: Option<&mut dyn Write>,
) -> Result<(), Error> {
    log::info!("loading character ROM {}", conversion.rom.display());
    let bytes = std::fs::read(&conversion.rom).map_err(|source| Error::Load {
        path: conversion.rom.clone(),
        source,
    })?;
    let rom = RomData::new(&bytes);
    let glyphs = rom.glyphs().map_err(Error::Read)?;
    if rom.len() > read_chargen::MIN_ROM_LEN {
        log::warn!(
            "ignoring {} trailing bytes of {}",
            rom.len() - read_chargen::MIN_ROM_LEN,
            conversion.rom.display()
        );
    }

    let mut font = BdfFont::new(&conversion.name, &conversion.bdf);
    let mut preview = Preview::new(&conversion.png, conversion.scale).map_err(Error::Write)?;
    for (code, glyph) in glyphs {
        font.add_char(code, glyph);
        preview.add_char(code, &glyph);
        if let Some(out) = dump_to.as_mut() {
            dump::print_glyph(out, code, &glyph).map_err(Error::Dump)?;
        }
    }

    log::info!("saving font to {}", conversion.bdf.display());
    font.write().map_err(Error::Write)?;
    log::info!("saving preview to {}", conversion.png.display());
    preview.write().map_err(Error::Write)?;
    log::info!("done");
    Ok(())
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Load { path, source } => {
                write!(f, "failed to read ROM '{}': {source}", path.display())
            }
            Error::Read(err) => write!(f, "{err}"),
            Error::Write(err) => write!(f, "{err}"),
            Error::Dump(err) => write!(f, "failed to print glyphs: {err}"),
        }
    }
}

impl std::error::Error for Error {}
