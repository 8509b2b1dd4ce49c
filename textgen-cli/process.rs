//! Argument parsing helpers and high-level orchestration of both tools.

use std::io::{self, Write};
use std::num::NonZeroU64;
use std::time::Instant;

use textgen_core::count::{
    count_words, count_words_parallel, word_frequencies, word_frequencies_parallel,
    WordFrequencies,
};
use textgen_core::config::DEFAULT_PROGRESS_INTERVAL;
use textgen_core::{generate, GenerationSummary, ProgressObserver};

use crate::config::{CliConfig, CountConfig, CountMode, SizeRequest};
use crate::error::{Error, InvocationError, Result};
use crate::io::open_input;
use crate::utils::bytes::{format_gib, format_size};

/// Parses a size string with an optional binary suffix.
///
/// Accepts numeric values with optional suffixes: `K` (KiB), `M` (MiB), or `G` (GiB).
/// All suffixes are case-insensitive. Values without a suffix are interpreted as bytes.
///
/// # Parameters
///
/// * `s` - The size string to parse (e.g., "1024", "1K", "512M", "2G")
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] in the following cases:
///
/// - The input string is empty
/// - The numeric part cannot be parsed as a valid [`u64`]
/// - The suffix is not one of K, M, G, or a digit
/// - The result would overflow [`u64`] after applying the multiplier
pub fn parse_size(s: &str) -> Result<u64> {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let s = s.trim();
    let Some(last_char) = s.chars().last() else {
        return Err(Error::InvalidSize("Empty size".to_string()));
    };

    let (number_part, multiplier) = match last_char.to_ascii_uppercase() {
        'K' => (&s[..s.len() - 1], KB),
        'M' => (&s[..s.len() - 1], MB),
        'G' => (&s[..s.len() - 1], GB),
        _ if last_char.is_ascii_digit() => (s, 1),
        _ => {
            return Err(Error::InvalidSize(format!(
                "Invalid size suffix: {last_char}"
            )))
        }
    };

    let number: u64 = number_part
        .parse()
        .map_err(|_| Error::InvalidSize(format!("Invalid number: {number_part}")))?;

    number
        .checked_mul(multiplier)
        .ok_or_else(|| Error::InvalidSize("Size too large (overflow)".to_string()))
}

/// Parses the positional size argument as a positive number of gigabytes.
///
/// # Errors
///
/// Returns [`Error::InvalidGigabytes`] for anything that is not a positive
/// integer, including zero and negative numbers.
pub fn parse_gigabytes(s: &str) -> Result<u64> {
    match s.trim().parse::<u64>() {
        Ok(gb) if gb > 0 => Ok(gb),
        _ => Err(Error::InvalidGigabytes(s.to_string())),
    }
}

/// Combines the positional gigabytes and `--size` arguments into one request.
///
/// # Errors
///
/// Returns an error if the given argument cannot be parsed.
pub fn resolve_size_request(gigabytes: Option<&str>, size: Option<&str>) -> Result<SizeRequest> {
    match (gigabytes, size) {
        (Some(gb), _) => parse_gigabytes(gb).map(SizeRequest::Gigabytes),
        (None, Some(size)) => parse_size(size).map(SizeRequest::Bytes),
        (None, None) => Ok(SizeRequest::Default),
    }
}

/// Parses the `--progress-interval` argument, defaulting to one gigabyte.
///
/// # Errors
///
/// Returns an error if the value cannot be parsed or is zero.
pub fn parse_progress_interval(s: Option<&str>) -> Result<NonZeroU64> {
    let Some(s) = s else {
        return Ok(DEFAULT_PROGRESS_INTERVAL);
    };
    NonZeroU64::new(parse_size(s)?)
        .ok_or(Error::Core(textgen_core::Error::InvalidProgressInterval))
}

/// Prints `Progress: X.XX GB written` lines to stdout.
#[derive(Debug, Clone, Copy)]
struct ConsoleProgress {
    quiet: bool,
}

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&mut self, bytes_written: u64) {
        if !self.quiet {
            println!("Progress: {} GB written", format_gib(bytes_written));
        }
    }
}

/// Generates the output file described by `config`.
///
/// Progress lines go to stdout unless `quiet` is set, followed by a
/// confirmation line with the output path and final size.
///
/// # Errors
///
/// Returns an error if the output cannot be created or written. A partially
/// written file is left on disk.
pub fn generate_file(config: &CliConfig) -> Result<GenerationSummary> {
    if config.verbose {
        eprintln!(
            "Writing {}: target {}, block of {} x {}",
            config.output.display(),
            format_size(config.target.bytes()),
            config.options.multiplier,
            format_size(config.unit.len() as u64),
        );
    }

    let mut progress = ConsoleProgress {
        quiet: config.quiet,
    };
    let summary = generate(
        &config.output,
        &config.unit,
        config.target,
        &config.options,
        &mut progress,
    )?;

    println!(
        "✅ File \"{}\" generated with size: {} GB",
        config.output.display(),
        format_gib(summary.bytes_written)
    );

    if config.verbose {
        eprintln!(
            "Wrote {} blocks of {} ({} bytes, {} past target)",
            summary.blocks_written,
            format_size(summary.block_len),
            summary.bytes_written,
            summary.overshoot(config.target.bytes()),
        );
    }

    Ok(summary)
}

/// Runs a generation with program-name error context.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`] if generation fails.
pub fn run_textgen(config: &CliConfig, program: &str) -> io::Result<GenerationSummary> {
    generate_file(config).map_err(|source| {
        io::Error::from(InvocationError {
            program: program.to_string(),
            source,
        })
    })
}

/// Result of a word count run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountReport {
    /// Whitespace-delimited word count
    Words(u64),
    /// Per-word occurrence table
    Frequencies(WordFrequencies),
}

/// Counts the words of the file described by `config`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if the requested
/// thread count is too large.
pub fn count_file(config: &CountConfig) -> Result<CountReport> {
    let input = open_input(&config.input)?;

    match config.mode {
        CountMode::Sequential => {
            let words = count_words(input).map_err(textgen_core::Error::from)?;
            Ok(CountReport::Words(words))
        }
        CountMode::Parallel(threading) => {
            drop(input);
            Ok(CountReport::Words(count_words_parallel(
                &config.input,
                threading,
            )?))
        }
        CountMode::Frequencies => {
            let freq = word_frequencies(input).map_err(textgen_core::Error::from)?;
            Ok(CountReport::Frequencies(freq))
        }
        CountMode::ParallelFrequencies(threading) => {
            drop(input);
            Ok(CountReport::Frequencies(word_frequencies_parallel(
                &config.input,
                threading,
            )?))
        }
    }
}

/// Writes a count report in the format of the classic benchmark tools.
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn write_report<W: Write>(out: &mut W, report: &CountReport, elapsed_secs: f64) -> io::Result<()> {
    match report {
        CountReport::Words(words) => {
            writeln!(out, "Word count: {words}")?;
            writeln!(out, "Elapsed time: {elapsed_secs} seconds")?;
        }
        CountReport::Frequencies(freq) => {
            writeln!(out, "Total word count: {}", freq.total)?;
            writeln!(out, "Unique words: {}", freq.unique())?;
            writeln!(out, "Elapsed time: {elapsed_secs} seconds")?;
            writeln!(out, "Words found:")?;
            for (word, count) in &freq.words {
                writeln!(out, "{word}: {count}")?;
            }
        }
    }
    out.flush()
}

/// Runs a word count with program-name error context and prints the report.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`] if counting fails,
/// or the raw error if stdout cannot be written.
pub fn run_wordcount(config: &CountConfig, program: &str) -> io::Result<CountReport> {
    let start = Instant::now();
    let report = count_file(config).map_err(|source| {
        io::Error::from(InvocationError {
            program: program.to_string(),
            source,
        })
    })?;
    let elapsed = start.elapsed().as_secs_f64();

    write_report(&mut io::stdout().lock(), &report, elapsed)?;
    Ok(report)
}
