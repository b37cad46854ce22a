//! Printing glyphs as text

use std::io::Write;

use read_chargen::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use write_bdf::NameLookup;

/// Print a header line for `code`, then one line of `#` and `.` per scanline.
pub fn print_glyph<W: Write + ?Sized>(
    out: &mut W,
    code: u8,
    glyph: &Glyph,
) -> std::io::Result<()> {
    writeln!(out, "{code:4} 0x{code:02X} {}", NameLookup::resolve(code as u32))?;
    for y in 0..GLYPH_HEIGHT {
        let row: String = (0..GLYPH_WIDTH)
            .map(|x| if glyph.is_set(x, y) { '#' } else { '.' })
            .collect();
        writeln!(out, "     {row}")?;
    }
    Ok(())
}
