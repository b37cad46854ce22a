//! Errors raised while reading a ROM dump

/// An error that occurs when reading glyphs from a ROM dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The dump does not cover every scanline of the requested characters.
    InputTooShort { len: usize, required: usize },
    /// A character code outside of the 128 characters held by the ROM.
    InvalidCode(u32),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::InputTooShort { len, required } => write!(
                f,
                "ROM dump is too short: {len} bytes, at least {required} are required"
            ),
            ReadError::InvalidCode(code) => {
                write!(f, "Invalid character code {code} (expected 0..=127)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
