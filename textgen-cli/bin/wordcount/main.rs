//! Word counter for generated text files
//!
//! Reads a file back and reports its word count and the time it took, either
//! in a single streaming pass or split across worker threads.

use std::process;

mod opts;

use opts::WordcountOpts;

use textgen_cli::{format_error_for_stderr, run_wordcount};

const PROGRAM_NAME: &str = "wordcount";

fn main() -> std::io::Result<()> {
    let opts = WordcountOpts::parse();
    let config = opts.config();

    if let Err(err) = run_wordcount(&config, PROGRAM_NAME) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }

    Ok(())
}
