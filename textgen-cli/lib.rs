//! Common CLI utilities and shared functionality for the textgen command-line tools.
//!
//! This crate ties the block writer and word counters from `textgen-core` to
//! the `textgen` and `wordcount` binaries: argument parsing helpers, output
//! naming, error reporting and console output.

pub mod config;
pub mod error;
pub mod io;
pub mod process;
pub mod utils;


pub use config::{
    CliConfig, CountConfig, CountMode, SizeRequest, DEFAULT_BUFFER_SIZE, DEFAULT_OUTPUT_NAME,
    DEFAULT_TARGET_GB,
};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use io::{default_output_name, load_text_unit, open_input};
pub use process::{
    count_file, generate_file, parse_gigabytes, parse_progress_interval, parse_size,
    resolve_size_request, run_textgen, run_wordcount, write_report, CountReport,
};
