//! Errors that occur during writing

use std::path::PathBuf;

/// An error occured while writing a font or preview
#[derive(Debug)]
pub enum Error {
    /// The output could not be created or written.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The preview image could not be encoded.
    Encode {
        path: PathBuf,
        source: png::EncodingError,
    },
    /// Previews are magnified by a positive integer factor.
    InvalidScale(u32),
}

impl Error {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    /// The path of the output that failed, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Write { path, .. } | Error::Encode { path, .. } => Some(path),
            Error::InvalidScale(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Write { path, source } => {
                write!(f, "failed to write '{}': {source}", path.display())
            }
            Error::Encode { path, source } => {
                write!(f, "failed to encode '{}': {source}", path.display())
            }
            Error::InvalidScale(scale) => {
                write!(f, "invalid preview scale {scale}, must be at least 1")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Write { source, .. } => Some(source),
            Error::Encode { source, .. } => Some(source),
            Error::InvalidScale(_) => None,
        }
    }
}
