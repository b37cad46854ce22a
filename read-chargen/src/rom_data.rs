//! raw ROM bytes

use crate::{Glyph, ReadError, GLYPH_COUNT, GLYPH_HEIGHT, MIN_ROM_LEN, ROM_STRIDE};

/// A reference to a raw character generator ROM dump.
///
/// This is a wrapper around a byte slice that knows the interleaved layout of
/// the dump: scanline `i` of character `code` is stored at
/// `code + i * ROM_STRIDE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RomData<'a> {
    bytes: &'a [u8],
}

/// An iterator over every character of a validated [`RomData`].
///
/// Yields `(code, glyph)` pairs in ascending code order.
#[derive(Debug, Clone)]
pub struct Glyphs<'a> {
    rom: RomData<'a>,
    next: usize,
}

impl<'a> RomData<'a> {
    /// Create a new `RomData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        RomData { bytes }
    }

    /// The length of the dump, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the dump has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Ensure the dump covers every scanline of every character.
    ///
    /// A dump that fails this check cannot be converted at all; there is no
    /// recovery of the characters that happen to fit.
    pub fn validate(&self) -> Result<(), ReadError> {
        if self.bytes.len() < MIN_ROM_LEN {
            return Err(ReadError::InputTooShort {
                len: self.bytes.len(),
                required: MIN_ROM_LEN,
            });
        }
        Ok(())
    }

    /// Read the 16 scanlines of the character `code`.
    pub fn glyph(&self, code: u8) -> Result<Glyph, ReadError> {
        let code = code as usize;
        if code >= GLYPH_COUNT {
            return Err(ReadError::InvalidCode(code as u32));
        }
        let required = code + ROM_STRIDE * (GLYPH_HEIGHT - 1) + 1;
        if self.bytes.len() < required {
            return Err(ReadError::InputTooShort {
                len: self.bytes.len(),
                required,
            });
        }
        let mut scanlines = [0u8; GLYPH_HEIGHT];
        let column = self.bytes[code..].iter().step_by(ROM_STRIDE);
        for (row, byte) in scanlines.iter_mut().zip(column) {
            *row = *byte;
        }
        Ok(Glyph::new(scanlines))
    }

    /// Iterate over all 128 characters.
    ///
    /// The whole dump is validated up front, so the iterator itself cannot
    /// fail.
    pub fn glyphs(&self) -> Result<Glyphs<'a>, ReadError> {
        self.validate()?;
        Ok(Glyphs {
            rom: *self,
            next: 0,
        })
    }
}

/// Read the glyph for `code` from a raw ROM dump.
///
/// This is shorthand for `RomData::new(rom).glyph(code)`.
pub fn extract(rom: &[u8], code: u8) -> Result<Glyph, ReadError> {
    RomData::new(rom).glyph(code)
}

impl Iterator for Glyphs<'_> {
    type Item = (u8, Glyph);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= GLYPH_COUNT {
            return None;
        }
        let code = self.next as u8;
        self.next += 1;
        // the dump was validated when the iterator was created
        self.rom.glyph(code).ok().map(|glyph| (code, glyph))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = GLYPH_COUNT.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Glyphs<'_> {}

impl<'a> From<&'a [u8]> for RomData<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        RomData::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn every_scanline_comes_from_its_stride() {
        let bytes = chargen_test_data::PATTERN_ROM;
        let rom = RomData::new(bytes);
        for code in 0..GLYPH_COUNT as u8 {
            let glyph = rom.glyph(code).unwrap();
            assert_eq!(glyph.scanlines().len(), GLYPH_HEIGHT);
            for (i, row) in glyph.scanlines().iter().enumerate() {
                assert_eq!(*row, bytes[code as usize + i * ROM_STRIDE], "{code}/{i}");
            }
        }
    }

    #[rstest]
    #[case(0, [0x00, 0x9d, 0x3a, 0xd7, 0x74, 0x11, 0xae, 0x4b])]
    #[case(b'A', [0x89, 0x14, 0xb3, 0x5e, 0xfd, 0x98, 0x27, 0xc2])]
    #[case(127, [0x37, 0xaa, 0x0d, 0xe0, 0x43, 0x26, 0x99, 0x7c])]
    fn known_glyphs(#[case] code: u8, #[case] top_half: [u8; 8]) {
        let glyph = extract(chargen_test_data::PATTERN_ROM, code).unwrap();
        assert_eq!(&glyph.scanlines()[..8], &top_half);
    }

    #[test]
    fn glyphs_from_interleaved_bitmaps() {
        let mut bitmaps = [[0u8; GLYPH_HEIGHT]; GLYPH_COUNT];
        bitmaps[b'H' as usize] = chargen_test_data::glyphs::LETTER_H;
        bitmaps[127] = [0xff; GLYPH_HEIGHT];
        let bytes = chargen_test_data::interleave(&bitmaps);
        let rom = RomData::new(&bytes);
        assert_eq!(
            rom.glyph(b'H').unwrap().scanlines(),
            &chargen_test_data::glyphs::LETTER_H
        );
        assert_eq!(rom.glyph(127).unwrap().scanlines(), &[0xff; GLYPH_HEIGHT]);
        assert!(rom.glyph(b'G').unwrap().is_blank());
    }

    #[test]
    fn iterate_all() {
        let rom = RomData::new(chargen_test_data::ZEROS_ROM);
        let glyphs = rom.glyphs().unwrap();
        assert_eq!(glyphs.len(), GLYPH_COUNT);
        let codes: Vec<_> = glyphs
            .map(|(code, glyph)| {
                assert!(glyph.is_blank());
                code
            })
            .collect();
        assert_eq!(codes, (0..128u8).collect::<Vec<_>>());
    }

    #[test]
    fn short_rom() {
        let bytes = [0u8; MIN_ROM_LEN - 1];
        let rom = RomData::new(&bytes);
        assert_eq!(
            rom.validate(),
            Err(ReadError::InputTooShort {
                len: MIN_ROM_LEN - 1,
                required: MIN_ROM_LEN
            })
        );
        assert!(rom.glyphs().is_err());
        // everything but the last character still fits
        assert!(rom.glyph(126).is_ok());
        assert_eq!(
            rom.glyph(127),
            Err(ReadError::InputTooShort {
                len: MIN_ROM_LEN - 1,
                required: MIN_ROM_LEN
            })
        );
    }

    #[test]
    fn empty_rom() {
        let rom = RomData::new(&[]);
        assert!(rom.is_empty());
        assert!(matches!(
            rom.glyph(0),
            Err(ReadError::InputTooShort { len: 0, required }) if required == 1921
        ));
    }

    #[test]
    fn invalid_code() {
        let rom = RomData::new(chargen_test_data::ZEROS_ROM);
        assert_eq!(rom.glyph(128), Err(ReadError::InvalidCode(128)));
        assert_eq!(rom.glyph(255), Err(ReadError::InvalidCode(255)));
    }

    #[test]
    fn min_len() {
        assert_eq!(MIN_ROM_LEN, 2048);
    }
}
