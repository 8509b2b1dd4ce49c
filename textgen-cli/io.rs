//! File I/O helpers and output naming for the textgen tools.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use textgen_core::TextUnit;

use crate::config::{SizeRequest, DEFAULT_BUFFER_SIZE, DEFAULT_OUTPUT_NAME};
use crate::error::{Error, Result};

/// Derives the output file name for a size request.
///
/// # Parameters
///
/// * `request` - How the size was given on the command line
///
/// # Returns
///
/// - `lorem_20GB.txt` when no size was given
/// - `text_{gb}GB.txt` for a size in gigabytes
/// - `text_{bytes}B.txt` for an exact byte size
pub fn default_output_name(request: SizeRequest) -> PathBuf {
    match request {
        SizeRequest::Default => PathBuf::from(DEFAULT_OUTPUT_NAME),
        SizeRequest::Gigabytes(gb) => PathBuf::from(format!("text_{gb}GB.txt")),
        SizeRequest::Bytes(bytes) => PathBuf::from(format!("text_{bytes}B.txt")),
    }
}

/// Loads the text unit to repeat.
///
/// # Parameters
///
/// * `path` - UTF-8 text file to read, or `None` for the built-in paragraph
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The file cannot be read or is not valid UTF-8
/// - The file is empty
pub fn load_text_unit(path: Option<&Path>) -> Result<TextUnit> {
    let Some(path) = path else {
        return Ok(TextUnit::default());
    };

    let text = fs::read_to_string(path).map_err(|source| Error::ReadTextFile {
        path: path.to_path_buf(),
        source,
    })?;

    TextUnit::new(text).map_err(|_| Error::EmptyTextFile {
        path: path.to_path_buf(),
    })
}

/// Opens a buffered reader over the file at `path`.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<io::BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(io::BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
}
