//! Reading character generator ROM dumps
//!
//! A character generator (chargen) ROM holds the bitmaps of a fixed set of
//! characters for a text mode display. The dumps this crate understands hold
//! 128 characters, each 8 pixels wide and 16 scanlines tall, laid out with
//! the scanlines of a single character spread across the chip: scanline `i`
//! of character `code` is stored at byte `code + i * 128`.
//!
//! This crate does no allocation; a [`RomData`] borrows the dump and hands
//! out owned, fixed size [`Glyph`] values.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_rom = std::path::Path::new("");
//! use read_chargen::RomData;
//! let bytes = std::fs::read(path_to_my_rom).unwrap();
//! let rom = RomData::new(&bytes);
//! let glyph = rom.glyph(b'A').expect("rom too short");
//! for row in glyph.scanlines() {
//!     println!("{row:08b}");
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod glyph;
mod read;
mod rom_data;

pub use glyph::Glyph;
pub use read::ReadError;
pub use rom_data::{extract, Glyphs, RomData};

/// The number of characters stored in a ROM.
pub const GLYPH_COUNT: usize = 128;

/// The width of every glyph, in pixels.
///
/// Each scanline is a single byte.
pub const GLYPH_WIDTH: usize = 8;

/// The number of scanlines in every glyph.
pub const GLYPH_HEIGHT: usize = 16;

/// The distance in bytes between two consecutive scanlines of one glyph.
pub const ROM_STRIDE: usize = 128;

/// The smallest dump that covers the last scanline of the last character.
pub const MIN_ROM_LEN: usize = ROM_STRIDE * (GLYPH_HEIGHT - 1) + GLYPH_COUNT;
