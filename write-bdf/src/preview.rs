//! A contact sheet of every glyph in the font

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use read_chargen::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

use crate::error::Error;

/// The intensity of a set pixel.
pub const INK: u8 = 0;

/// The intensity of a clear pixel.
pub const PAPER: u8 = 200;

/// The largest width or height of a PNG image, in pixels.
const MAX_DIMENSION: usize = i32::MAX as usize;

/// How glyph cells are arranged on a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: usize,
    pub cell_height: usize,
}

impl GridLayout {
    /// 128 characters of 8x16 pixels, in 8 rows of 16.
    pub const CHARGEN: GridLayout = GridLayout {
        columns: 16,
        rows: 8,
        cell_width: GLYPH_WIDTH,
        cell_height: GLYPH_HEIGHT,
    };

    /// Unscaled width of the whole grid, in pixels.
    pub fn width(&self) -> usize {
        self.cell_width * self.columns
    }

    /// Unscaled height of the whole grid, in pixels.
    pub fn height(&self) -> usize {
        self.cell_height * self.rows
    }

    /// The number of cells in the grid.
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Unscaled top left pixel of the cell for `code`.
    ///
    /// Cells are filled left to right, then top to bottom.
    pub fn cell_origin(&self, code: usize) -> (usize, usize) {
        (
            (code % self.columns) * self.cell_width,
            (code / self.columns) * self.cell_height,
        )
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout::CHARGEN
    }
}

/// A greyscale preview image with every glyph laid out on a grid.
///
/// The canvas starts out black. Each glyph that is added paints its whole
/// cell, with [`INK`] for set pixels and [`PAPER`] for clear ones, magnified
/// by an integer scale factor.
#[derive(Debug, Clone)]
pub struct Preview {
    path: PathBuf,
    layout: GridLayout,
    scale: usize,
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Preview {
    /// Create a preview of the standard 16x8 grid, to be written to `path`.
    pub fn new(path: impl Into<PathBuf>, scale: u32) -> Result<Self, Error> {
        Preview::with_layout(path, GridLayout::CHARGEN, scale)
    }

    pub fn with_layout(
        path: impl Into<PathBuf>,
        layout: GridLayout,
        scale: u32,
    ) -> Result<Self, Error> {
        if scale == 0 {
            return Err(Error::InvalidScale(scale));
        }
        let too_large = || Error::InvalidScale(scale);
        let factor = scale as usize;
        let width = layout
            .width()
            .checked_mul(factor)
            .filter(|w| *w <= MAX_DIMENSION)
            .ok_or_else(too_large)?;
        let height = layout
            .height()
            .checked_mul(factor)
            .filter(|h| *h <= MAX_DIMENSION)
            .ok_or_else(too_large)?;
        let len = width.checked_mul(height).ok_or_else(too_large)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        pixels.resize(len, 0);
        Ok(Preview {
            path: path.into(),
            layout,
            scale: factor,
            width,
            height,
            pixels,
        })
    }

    /// The path that [`write`](Preview::write) writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Width of the canvas, in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the canvas, in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The intensity of a canvas pixel, if it exists.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// The canvas, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Paint the `scale` x `scale` block for the unscaled pixel `(x, y)`.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        let (left, top) = (x * self.scale, y * self.scale);
        if left + self.scale > self.width || top + self.scale > self.height {
            log::debug!("pixel ({x}, {y}) is outside of the canvas");
            return;
        }
        for row in top..top + self.scale {
            let start = row * self.width + left;
            self.pixels[start..start + self.scale].fill(value);
        }
    }

    /// Paint the glyph for `code` into its cell.
    pub fn add_char(&mut self, code: u8, glyph: &Glyph) {
        let code = code as usize;
        if code >= self.layout.capacity() {
            log::warn!("no room for code {code} in the preview grid");
            return;
        }
        let (x, y) = self.layout.cell_origin(code);
        for (i, row) in glyph.scanlines().iter().enumerate() {
            // lsb first, from the right edge of the cell
            let mut bits = *row;
            for j in (0..self.layout.cell_width).rev() {
                let value = if bits & 1 != 0 { INK } else { PAPER };
                self.set_pixel(x + j, y + i, value);
                bits >>= 1;
            }
        }
    }

    /// Encode the canvas as an 8-bit greyscale PNG into `writer`.
    pub fn write_to(&self, writer: impl Write) -> Result<(), png::EncodingError> {
        let dimension = |val: usize| {
            u32::try_from(val).map_err(|_| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("preview dimension {val} does not fit in a PNG"),
                )
            })
        };
        let width = dimension(self.width)?;
        let height = dimension(self.height)?;
        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()
    }

    /// Write the canvas to its output path as a PNG image.
    pub fn write(&self) -> Result<(), Error> {
        log::debug!(
            "writing {}x{} preview to {}",
            self.width,
            self.height,
            self.path.display()
        );
        let file = std::fs::File::create(&self.path).map_err(|e| Error::write(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(|source| match source {
            png::EncodingError::IoError(e) => Error::write(&self.path, e),
            source => Error::Encode {
                path: self.path.clone(),
                source,
            },
        })?;
        writer.flush().map_err(|e| Error::write(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use read_chargen::RomData;
    use rstest::rstest;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn preview_for_rom(bytes: &[u8], scale: u32) -> Preview {
        let mut preview = Preview::new("preview.png", scale).unwrap();
        for (code, glyph) in RomData::new(bytes).glyphs().unwrap() {
            preview.add_char(code, &glyph);
        }
        preview
    }

    #[rstest]
    #[case(1, 128)]
    #[case(2, 256)]
    #[case(3, 384)]
    fn canvas_size(#[case] scale: u32, #[case] size: usize) {
        let preview = Preview::new("preview.png", scale).unwrap();
        assert_eq!(preview.width(), size);
        assert_eq!(preview.height(), size);
        assert_eq!(preview.as_bytes().len(), size * size);
        assert!(preview.as_bytes().iter().all(|px| *px == 0));
    }

    #[rstest]
    #[case(0)]
    // 128 * scale is wider than a PNG allows
    #[case(16_777_216)]
    #[case(u32::MAX)]
    // each side fits, the canvas does not
    #[case(16_777_215)]
    fn invalid_scale(#[case] scale: u32) {
        assert!(matches!(
            Preview::new("preview.png", scale),
            Err(Error::InvalidScale(s)) if s == scale
        ));
    }

    #[test]
    fn checkerboard() {
        let mut preview = Preview::new("preview.png", 1).unwrap();
        let glyph = Glyph::new(chargen_test_data::glyphs::CHECKER);
        preview.add_char(b'#', &glyph);
        let (x0, y0) = GridLayout::CHARGEN.cell_origin(b'#' as usize);
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                // 0xaa on even scanlines sets the even columns
                let expected = if (x + y) % 2 == 0 { INK } else { PAPER };
                assert_eq!(preview.pixel(x0 + x, y0 + y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn msb_is_leftmost() {
        let mut preview = Preview::new("preview.png", 1).unwrap();
        let glyph = Glyph::new(chargen_test_data::glyphs::SINGLE_ROW);
        preview.add_char(0, &glyph);
        let row: Vec<_> = (0..8).map(|x| preview.pixel(x, 0).unwrap()).collect();
        assert_eq!(row, [INK, PAPER, INK, INK, PAPER, PAPER, PAPER, PAPER]);
        // the rest of the cell is paper, the next cell is untouched
        assert_eq!(preview.pixel(0, 1), Some(PAPER));
        assert_eq!(preview.pixel(7, 15), Some(PAPER));
        assert_eq!(preview.pixel(8, 0), Some(0));
    }

    #[test]
    fn cells_follow_code() {
        let mut preview = Preview::new("preview.png", 1).unwrap();
        let glyph = Glyph::new(chargen_test_data::glyphs::SINGLE_ROW);
        // 'A' is in the fifth row, second column
        preview.add_char(b'A', &glyph);
        assert_eq!(GridLayout::CHARGEN.cell_origin(b'A' as usize), (8, 64));
        assert_eq!(preview.pixel(8, 64), Some(INK));
        assert_eq!(preview.pixel(9, 64), Some(PAPER));
        assert_eq!(preview.pixel(10, 64), Some(INK));
        assert_eq!(preview.pixel(7, 64), Some(0));
    }

    #[test]
    fn scaled_blocks() {
        let mut preview = Preview::new("preview.png", 2).unwrap();
        let glyph = Glyph::new(chargen_test_data::glyphs::SINGLE_ROW);
        preview.add_char(127, &glyph);
        // code 127 is the last cell: origin (120, 112), scaled (240, 224)
        for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(preview.pixel(240 + dx, 224 + dy), Some(INK));
            assert_eq!(preview.pixel(242 + dx, 224 + dy), Some(PAPER));
        }
        assert_eq!(preview.pixel(255, 255), Some(PAPER));
        assert_eq!(preview.pixel(256, 0), None);
    }

    #[test]
    fn set_pixel_fills_block() {
        let mut preview = Preview::new("preview.png", 3).unwrap();
        preview.set_pixel(1, 2, 77);
        let filled: Vec<_> = (0..preview.height())
            .flat_map(|y| (0..preview.width()).map(move |x| (x, y)))
            .filter(|(x, y)| preview.pixel(*x, *y) == Some(77))
            .collect();
        assert_eq!(filled.len(), 9);
        assert_eq!(filled.first(), Some(&(3, 6)));
        assert_eq!(filled.last(), Some(&(5, 8)));
        // off the canvas, ignored
        preview.set_pixel(128, 0, 77);
    }

    #[test]
    fn zeros_rom_is_all_paper() {
        let preview = preview_for_rom(chargen_test_data::ZEROS_ROM, 2);
        assert!(preview.as_bytes().iter().all(|px| *px == PAPER));
    }

    #[test]
    fn matches_glyph_pixels() {
        let preview = preview_for_rom(chargen_test_data::PATTERN_ROM, 1);
        let rom = RomData::new(chargen_test_data::PATTERN_ROM);
        for (code, glyph) in rom.glyphs().unwrap() {
            let (x0, y0) = GridLayout::CHARGEN.cell_origin(code as usize);
            for y in 0..GLYPH_HEIGHT {
                for x in 0..GLYPH_WIDTH {
                    let expected = if glyph.is_set(x, y) { INK } else { PAPER };
                    assert_eq!(preview.pixel(x0 + x, y0 + y), Some(expected));
                }
            }
        }
    }

    #[test]
    fn png_round_trip() {
        init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pattern.png");
        let mut preview = preview_for_rom(chargen_test_data::PATTERN_ROM, 2);
        preview.path = path.clone();
        preview.write().unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let mut reader = png::Decoder::new(file).read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (256, 256));
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(&buf[..info.buffer_size()], preview.as_bytes());
    }

    #[test]
    fn write_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let preview = Preview::new(&path, 1).unwrap();
        let err = preview.write().unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }
}
