//! test data shared between the chargen crates.

pub mod glyphs;

/// A 2048 byte dump of all zeros.
pub static ZEROS_ROM: &[u8] = include_bytes!("../test_data/zeros.bin");

/// A 2048 byte dump with byte `i` equal to `(i * 73) ^ ((i >> 7) * 29)`,
/// truncated to 8 bits.
pub static PATTERN_ROM: &[u8] = include_bytes!("../test_data/pattern.bin");

/// The BDF font for [`ZEROS_ROM`] with the default metadata.
pub static ZEROS_BDF: &str = include_str!("../test_data/zeros.bdf");

/// The BDF font for [`PATTERN_ROM`] with the default metadata.
pub static PATTERN_BDF: &str = include_str!("../test_data/pattern.bdf");

// These mirror the constants in read-chargen. This crate is a dev-dependency
// of the reader, so it does not depend on it in turn.

/// The number of characters in a ROM dump.
pub const GLYPH_COUNT: usize = 128;

/// The number of scanlines per character.
pub const GLYPH_HEIGHT: usize = 16;

/// Build a ROM dump from per character bitmaps.
///
/// This is the inverse of glyph extraction: scanline `i` of character `code`
/// is written to byte `code + i * 128`.
pub fn interleave(glyphs: &[[u8; GLYPH_HEIGHT]; GLYPH_COUNT]) -> Vec<u8> {
    let mut rom = vec![0u8; GLYPH_COUNT * GLYPH_HEIGHT];
    for (code, glyph) in glyphs.iter().enumerate() {
        for (i, row) in glyph.iter().enumerate() {
            rom[code + i * GLYPH_COUNT] = *row;
        }
    }
    rom
}
