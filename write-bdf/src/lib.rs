//! Writing BDF fonts and preview images
//!
//! This crate takes the [`Glyph`]s read from a character generator ROM and
//! produces the two artifacts of a conversion:
//!
//! - a [BDF] text font, assembled by [`BdfFont`], and
//! - a greyscale PNG contact sheet of every glyph, composited by
//!   [`Preview`].
//!
//! Both are built up one character at a time and written once at the end.
//!
//! # Example
//!
//! ```no_run
//! # let rom_bytes = vec![0u8; 2048];
//! use read_chargen::RomData;
//! use write_bdf::{BdfFont, Preview};
//!
//! let rom = RomData::new(&rom_bytes);
//! let mut font = BdfFont::new("Robotron1715", "robotron1715.bdf");
//! let mut preview = Preview::new("robotron1715.png", 2).unwrap();
//! for (code, glyph) in rom.glyphs().unwrap() {
//!     font.add_char(code, glyph);
//!     preview.add_char(code, &glyph);
//! }
//! font.write().unwrap();
//! preview.write().unwrap();
//! ```
//!
//! [BDF]: https://www.x.org/docs/BDF/bdf.pdf
//! [`Glyph`]: read_chargen::Glyph

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bdf;
pub mod error;
pub mod glyph_names;
mod preview;
pub mod properties;

pub use bdf::{BdfFont, BoundingBox, BDF_VERSION, DWIDTH, SWIDTH};
pub use error::Error;
pub use glyph_names::NameLookup;
pub use preview::{GridLayout, Preview, INK, PAPER};
pub use properties::{FontMetadata, Property, PropertyValue};

/// Public re-export of the read-chargen crate.
pub extern crate read_chargen as read;
