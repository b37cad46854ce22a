//! The bitmap of a single character

use crate::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// The monochrome bitmap of one character.
///
/// Each byte is one scanline, top to bottom. The most significant bit of a
/// scanline is the leftmost pixel; a set bit is ink.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    scanlines: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Create a glyph from its scanlines.
    pub const fn new(scanlines: [u8; GLYPH_HEIGHT]) -> Self {
        Glyph { scanlines }
    }

    /// The scanlines of this glyph, top to bottom.
    pub fn scanlines(&self) -> &[u8; GLYPH_HEIGHT] {
        &self.scanlines
    }

    /// Returns `true` if the pixel at `(x, y)` is ink.
    ///
    /// Pixels outside of the 8x16 cell are never set.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= GLYPH_WIDTH {
            return false;
        }
        self.scanlines
            .get(y)
            .map(|row| row & (0x80 >> x) != 0)
            .unwrap_or(false)
    }

    /// `true` if no pixel of the glyph is set.
    pub fn is_blank(&self) -> bool {
        self.scanlines.iter().all(|row| *row == 0)
    }
}

impl From<[u8; GLYPH_HEIGHT]> for Glyph {
    fn from(scanlines: [u8; GLYPH_HEIGHT]) -> Self {
        Glyph::new(scanlines)
    }
}

impl AsRef<[u8]> for Glyph {
    fn as_ref(&self) -> &[u8] {
        &self.scanlines
    }
}
