//! Error types and result handling for text generation and word counting.

use std::fmt;
use std::path::PathBuf;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type covering all failure modes in generation runs.
#[derive(Debug)]
pub enum Error {
    /// The text unit to repeat contains no characters.
    EmptyTextUnit,

    /// The block multiplier must repeat the unit at least once.
    InvalidMultiplier(usize),

    /// The generation target must be a positive number of bytes.
    InvalidTarget,

    /// Converting the requested gigabytes to bytes overflowed `u64`.
    TargetOverflow {
        /// Number of gigabytes requested by the caller
        gigabytes: u64,
    },

    /// The progress interval must be a positive number of bytes.
    InvalidProgressInterval,

    /// The requested thread count exceeds the safe limit for the host.
    InvalidThreadCount {
        /// Number of threads requested by the user
        requested: u32,
        /// Maximum safe thread count for the current system
        maximum: u32,
    },

    /// The output file could not be opened for writing.
    CreateOutput {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O failure while reading input or writing output.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTextUnit => write!(f, "text unit must not be empty"),
            Error::InvalidMultiplier(multiplier) => {
                write!(f, "block multiplier must be at least 1 (got {multiplier})")
            }
            Error::InvalidTarget => write!(f, "target size must be a positive number of bytes"),
            Error::TargetOverflow { gigabytes } => {
                write!(f, "target size of {gigabytes} GB does not fit into 64 bits")
            }
            Error::InvalidProgressInterval => {
                write!(f, "progress interval must be a positive number of bytes")
            }
            Error::InvalidThreadCount { requested, maximum } => write!(
                f,
                "requested {requested} threads exceeds safe limit of {maximum}",
            ),
            Error::CreateOutput { path, source } => write!(f, "{}: {source}", path.display()),
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CreateOutput { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(source) => source,
            Error::CreateOutput { ref source, .. } => std::io::Error::new(source.kind(), err),
            _ => std::io::Error::new(std::io::ErrorKind::InvalidInput, err),
        }
    }
}
