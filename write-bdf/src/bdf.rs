//! Assembling [BDF] text fonts
//!
//! [BDF]: https://www.x.org/docs/BDF/bdf.pdf

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use read_chargen::{Glyph, GLYPH_COUNT, GLYPH_HEIGHT, GLYPH_WIDTH};

use crate::{error::Error, glyph_names::NameLookup, properties::FontMetadata};

/// The version of the format we write.
pub const BDF_VERSION: &str = "2.1";

/// The scalable width of every glyph, in 1/1000ths of the point size.
///
/// This is a fixed constant of these fonts; it is not derived from
/// [`DWIDTH`] or the pixel size.
pub const SWIDTH: (i32, i32) = (500, 0);

/// The device width (advance) of every glyph, in pixels.
pub const DWIDTH: (i32, i32) = (GLYPH_WIDTH as i32, 0);

/// The extent and origin offset of a glyph bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl BoundingBox {
    /// The box shared by every glyph: the full 8x16 cell, with the baseline
    /// seven pixels above the bottom edge.
    pub const CELL: BoundingBox = BoundingBox {
        width: GLYPH_WIDTH as u32,
        height: GLYPH_HEIGHT as u32,
        x_offset: 0,
        y_offset: -7,
    };
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.width, self.height, self.x_offset, self.y_offset
        )
    }
}

/// A fixed size, 128 character BDF font.
///
/// Glyphs are added one at a time with [`add_char`](BdfFont::add_char); the
/// font is then rendered to text with [`render_font`](BdfFont::render_font)
/// or written to its output path with [`write`](BdfFont::write).
#[derive(Debug, Clone)]
pub struct BdfFont {
    name: String,
    path: PathBuf,
    bounding_box: BoundingBox,
    glyphs: Vec<Option<Glyph>>,
    metadata: FontMetadata,
}

struct PropertiesBlock<'a>(&'a FontMetadata);

struct GlyphRecord<'a> {
    font: &'a BdfFont,
    code: u8,
}

impl BdfFont {
    /// Create an empty font in the family `name`, to be written to `path`.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        BdfFont {
            metadata: FontMetadata::new(&name),
            name,
            path: path.into(),
            bounding_box: BoundingBox::CELL,
            glyphs: vec![None; GLYPH_COUNT],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path that [`write`](BdfFont::write) writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &FontMetadata {
        &self.metadata
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Store the glyph for `code`, replacing any previous glyph.
    pub fn add_char(&mut self, code: u8, glyph: Glyph) -> &mut Self {
        match self.glyphs.get_mut(code as usize) {
            Some(slot) => *slot = Some(glyph),
            None => log::warn!("ignoring glyph for code {code}, outside of the font"),
        }
        self
    }

    /// The glyph stored for `code`, if any.
    pub fn glyph(&self, code: u8) -> Option<&Glyph> {
        self.glyphs.get(code as usize).and_then(Option::as_ref)
    }

    /// The number of characters in the font.
    pub fn num_chars(&self) -> usize {
        self.glyphs.len()
    }

    /// The XLFD name of the font, used on the `FONT` line.
    pub fn render_header(&self) -> String {
        self.metadata.xlfd_name()
    }

    /// The `STARTPROPERTIES` ... `ENDPROPERTIES` block.
    pub fn render_properties(&self) -> String {
        PropertiesBlock(&self.metadata).to_string()
    }

    /// The `STARTCHAR` ... `ENDCHAR` record for one character.
    ///
    /// Characters that were never added are written as blank bitmaps.
    pub fn render_glyph(&self, code: u8) -> String {
        GlyphRecord { font: self, code }.to_string()
    }

    /// The complete font, as BDF text.
    pub fn render_font(&self) -> String {
        let missing = self.glyphs.iter().filter(|glyph| glyph.is_none()).count();
        if missing > 0 {
            log::warn!("{missing} characters were never added, writing them blank");
        }
        self.to_string()
    }

    /// Write the font to `writer`.
    pub fn write_to(&self, mut writer: impl std::io::Write) -> std::io::Result<()> {
        writer.write_all(self.render_font().as_bytes())?;
        writer.flush()
    }

    /// Write the font to its output path.
    ///
    /// Has the same semantics as [`std::fs::write`].
    pub fn write(&self) -> Result<(), Error> {
        log::debug!("writing {} to {}", self.name, self.path.display());
        std::fs::write(&self.path, self.render_font()).map_err(|e| Error::write(&self.path, e))
    }
}

impl Display for BdfFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = |name| self.metadata.get_int(name).unwrap_or_default();
        writeln!(f, "STARTFONT {BDF_VERSION}")?;
        writeln!(f, "FONT {}", self.render_header())?;
        writeln!(
            f,
            "SIZE {} {} {}",
            size("PIXEL_SIZE"),
            size("RESOLUTION_X"),
            size("RESOLUTION_Y")
        )?;
        writeln!(f, "FONTBOUNDINGBOX {}", self.bounding_box)?;
        PropertiesBlock(&self.metadata).fmt(f)?;
        writeln!(f, "CHARS {}", self.num_chars())?;
        for code in 0..self.num_chars() {
            GlyphRecord {
                font: self,
                code: code as u8,
            }
            .fmt(f)?;
        }
        writeln!(f, "ENDFONT")
    }
}

impl Display for PropertiesBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STARTPROPERTIES {}", self.0.len())?;
        for prop in self.0.iter() {
            writeln!(f, "{} {}", prop.name, prop.value.bdf_repr())?;
        }
        writeln!(f, "ENDPROPERTIES")
    }
}

impl Display for GlyphRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code;
        let glyph = self.font.glyph(code).copied().unwrap_or_default();
        writeln!(f, "STARTCHAR {}", NameLookup::resolve(code as u32))?;
        writeln!(f, "ENCODING {code}")?;
        writeln!(f, "SWIDTH {} {}", SWIDTH.0, SWIDTH.1)?;
        writeln!(f, "DWIDTH {} {}", DWIDTH.0, DWIDTH.1)?;
        writeln!(f, "BBX {}", self.font.bounding_box)?;
        writeln!(f, "BITMAP")?;
        for row in glyph.scanlines() {
            writeln!(f, "{row:02x}")?;
        }
        writeln!(f, "ENDCHAR")
    }
}
