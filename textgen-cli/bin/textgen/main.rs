//! Bulk text file generator
//!
//! Fills a file with repetitions of a sample paragraph until it reaches the
//! requested size, printing progress roughly once per gigabyte.

use std::process;

mod opts;

use opts::TextgenOpts;

use textgen_cli::{format_error_for_stderr, run_textgen};

const PROGRAM_NAME: &str = "textgen";

fn main() -> std::io::Result<()> {
    let opts = TextgenOpts::parse();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run_textgen(&config, PROGRAM_NAME) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }

    Ok(())
}
