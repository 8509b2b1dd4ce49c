//! Error types for the textgen command-line tools.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A CLI error tagged with the program that produced it.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output (e.g. "textgen", "wordcount").
    pub program: String,
    /// Underlying error produced by the run.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Formats an error returned by a CLI runner as a single stderr line.
///
/// Errors that already carry an [`InvocationError`] are printed as-is,
/// anything else gets the program name prefixed.
pub fn format_error_for_stderr(program: &str, err: &io::Error) -> String {
    match err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>())
    {
        Some(run_err) => run_err.to_string(),
        None => format!("{program}: {err}"),
    }
}

/// Main error type for the textgen command-line tools.
#[derive(Debug, Error)]
pub enum Error {
    /// Size argument is not a positive integer number of gigabytes
    #[error("Invalid size '{0}': expected a positive integer number of gigabytes")]
    InvalidGigabytes(String),

    /// Size argument with a suffix could not be parsed
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Failed to read the text unit file
    #[error("{}: {source}", path.display())]
    ReadTextFile {
        /// Path to the text file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Text unit file contains no text
    #[error("{}: Text file is empty", path.display())]
    EmptyTextFile {
        /// Path to the text file
        path: PathBuf,
    },

    /// Failed to open the file to count
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Generation or counting failed
    #[error(transparent)]
    Core(#[from] textgen_core::Error),
}

/// Specialized `Result` type for textgen CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn io_kind(&self) -> io::ErrorKind {
        match self {
            Error::ReadTextFile { source, .. } | Error::OpenInput { source, .. } => source.kind(),
            Error::Core(textgen_core::Error::CreateOutput { source, .. }) => source.kind(),
            Error::Core(textgen_core::Error::Io(source)) => source.kind(),
            _ => io::ErrorKind::InvalidInput,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        // Preserve the original error kind
        io::Error::new(err.io_kind(), err)
    }
}

impl From<InvocationError> for io::Error {
    fn from(err: InvocationError) -> Self {
        io::Error::new(err.source.io_kind(), err)
    }
}
