//! Command line argument parsing for the wordcount utility.

use std::path::PathBuf;

use clap::Parser;

use textgen_cli::{CountConfig, CountMode};
use textgen_core::Threading;

/// Word counter for generated text files
///
/// Counts whitespace-delimited words, or lists per-word frequencies.
#[derive(Debug, Parser)]
#[command(
    name = "wordcount",
    version = "0.1.0",
    about = "Count words in large text files",
    long_about = "wordcount reads a text file and reports how many whitespace-delimited \
                 words it contains, along with the elapsed time. With --threads the file \
                 is split into chunks counted in parallel. With --frequencies every \
                 alphanumeric word is lowercased and tallied, in parallel when \
                 combined with --threads."
)]
pub struct WordcountOpts {
    /// File to count
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Count in parallel with at most this many threads (0 or no value = auto)
    #[arg(
        short = 'T',
        long = "threads",
        value_name = "NUM",
        num_args = 0..=1,
        default_missing_value = "0"
    )]
    threads: Option<u32>,

    /// List how often each word occurs
    #[arg(short = 'f', long = "frequencies")]
    frequencies: bool,
}

impl WordcountOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build count configuration from the parsed options
    pub fn config(&self) -> CountConfig {
        let mode = match (self.frequencies, self.threads) {
            (true, Some(threads)) => CountMode::ParallelFrequencies(Threading::Exact(threads)),
            (true, None) => CountMode::Frequencies,
            (false, Some(threads)) => CountMode::Parallel(Threading::Exact(threads)),
            (false, None) => CountMode::Sequential,
        };

        CountConfig {
            input: self.file.clone(),
            mode,
        }
    }
}
