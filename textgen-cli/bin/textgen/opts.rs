//! Command line argument parsing for the textgen utility

use std::path::PathBuf;

use clap::Parser;

use textgen_cli::{
    default_output_name, load_text_unit, parse_progress_interval, resolve_size_request,
    CliConfig, Result,
};
use textgen_core::{GenerationOptions, DEFAULT_MULTIPLIER};

/// Bulk text file generator
///
/// Writes a block of sample text over and over until the output reaches the
/// requested size.
#[derive(Parser, Debug)]
#[command(
    name = "textgen",
    version = "0.1.0",
    about = "Generate large plain-text files",
    long_about = "textgen writes a fixed block of sample text repeatedly until the output \
                 reaches the requested size. The file is at least as large as requested \
                 and overshoots by less than one block. Without arguments it writes \
                 20 GB into lorem_20GB.txt."
)]
pub struct TextgenOpts {
    /// Target size in gigabytes (1 GB = 1024^3 bytes)
    #[arg(value_name = "GB", allow_negative_numbers = true, conflicts_with = "size")]
    pub gigabytes: Option<String>,

    /// Write to FILE instead of the derived name
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Target size in bytes, with optional K, M or G suffix
    #[arg(short = 's', long = "size", value_name = "SIZE")]
    pub size: Option<String>,

    /// Read the repeated text from FILE instead of the built-in paragraph
    #[arg(short = 't', long = "text-file", value_name = "FILE")]
    pub text_file: Option<PathBuf>,

    /// Number of text repetitions per written block
    #[arg(short = 'm', long = "multiplier", value_name = "N", default_value_t = DEFAULT_MULTIPLIER)]
    pub multiplier: usize,

    /// Report progress roughly every SIZE bytes (K, M or G suffix allowed)
    #[arg(long = "progress-interval", value_name = "SIZE")]
    pub progress_interval: Option<String>,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (suppress progress lines)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl TextgenOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the generation configuration from the parsed options.
    ///
    /// Every argument is validated here so that nothing is written when one
    /// of them is invalid.
    pub fn config(&self) -> Result<CliConfig> {
        let request = resolve_size_request(self.gigabytes.as_deref(), self.size.as_deref())?;
        let target = request.target()?;

        if self.multiplier == 0 {
            return Err(textgen_core::Error::InvalidMultiplier(self.multiplier).into());
        }

        let options = GenerationOptions {
            multiplier: self.multiplier,
            progress_interval: parse_progress_interval(self.progress_interval.as_deref())?,
        };

        Ok(CliConfig {
            output: self
                .output
                .clone()
                .unwrap_or_else(|| default_output_name(request)),
            target,
            unit: load_text_unit(self.text_file.as_deref())?,
            options,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}
