//! Configuration types and constants for the textgen command-line tools.

use std::path::PathBuf;

use textgen_core::{GenerationOptions, GenerationTarget, TextUnit, Threading};

/// Target size used when no size argument is given
pub const DEFAULT_TARGET_GB: u64 = 20;

/// Output file name used when no size argument is given
pub const DEFAULT_OUTPUT_NAME: &str = "lorem_20GB.txt";

/// Default buffer size for reading input files
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// How the target size was requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRequest {
    /// Nothing given: 20 GB into the default file name
    Default,
    /// Positional argument in binary gigabytes
    Gigabytes(u64),
    /// `--size` in bytes
    Bytes(u64),
}

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Output file path
    pub output: PathBuf,
    /// Minimum size of the output
    pub target: GenerationTarget,
    /// Text repeated into the output
    pub unit: TextUnit,
    /// Block multiplier and progress interval
    pub options: GenerationOptions,
    /// Print the run plan to stderr
    pub verbose: bool,
    /// Suppress progress lines
    pub quiet: bool,
}

/// Which counter the word count tool runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Single streaming pass
    Sequential,
    /// Chunked count on worker threads
    Parallel(Threading),
    /// Per-word occurrence table
    Frequencies,
    /// Per-word occurrence table built from chunks on worker threads
    ParallelFrequencies(Threading),
}

/// Configuration for a word count run
#[derive(Debug, Clone)]
pub struct CountConfig {
    /// File to read
    pub input: PathBuf,
    /// Counting strategy
    pub mode: CountMode,
}

impl SizeRequest {
    /// Converts the request into a byte target.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is zero or overflows `u64`.
    pub fn target(self) -> textgen_core::Result<GenerationTarget> {
        match self {
            SizeRequest::Default => GenerationTarget::from_gigabytes(DEFAULT_TARGET_GB),
            SizeRequest::Gigabytes(gb) => GenerationTarget::from_gigabytes(gb),
            SizeRequest::Bytes(bytes) => GenerationTarget::from_bytes(bytes),
        }
    }
}
