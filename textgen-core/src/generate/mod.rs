//! Block-based bulk file writer.

use std::fs::File;
use std::io::Write;
use std::num::NonZeroU64;
use std::path::Path;

use crate::config::{GenerationOptions, GenerationSummary};
use crate::error::{Error, Result};
use crate::progress::ProgressObserver;
use crate::unit::{Block, GenerationTarget, TextUnit, WriteCursor};


/// Writes `block` into `writer` until at least `target` bytes were written.
///
/// Every iteration writes the whole block, so the final size is the smallest
/// multiple of the block length that is `>= target`. The observer is notified
/// whenever `written % progress_interval < block.len()`, which approximates
/// "a progress boundary was just crossed".
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`Write`]
/// * `block` - Pre-encoded block written on every iteration
/// * `target` - Minimum number of bytes to write
/// * `progress_interval` - Distance between progress notifications
/// * `observer` - Receives progress notifications
///
/// # Errors
///
/// Returns [`Error::Io`] if a write or the final flush fails. Bytes already
/// handed to the writer are not rolled back.
pub fn write_blocks<W, P>(
    mut writer: W,
    block: &Block,
    target: GenerationTarget,
    progress_interval: NonZeroU64,
    observer: &mut P,
) -> Result<GenerationSummary>
where
    W: Write,
    P: ProgressObserver + ?Sized,
{
    let block_len = block.len_u64();
    let interval = progress_interval.get();
    let mut cursor = WriteCursor::default();
    let mut blocks_written = 0u64;

    while !cursor.reached(target) {
        writer.write_all(block)?;
        cursor.advance(block_len);
        blocks_written += 1;

        if cursor.position() % interval < block_len {
            observer.on_progress(cursor.position());
        }
    }

    writer.flush()?;

    Ok(GenerationSummary {
        bytes_written: cursor.position(),
        blocks_written,
        block_len,
    })
}

/// Generates a file at `path` filled with repetitions of `unit`.
///
/// The file is created or truncated, never appended to. The handle is owned by
/// this call and closed before it returns.
///
/// # Parameters
///
/// * `path` - Output file path
/// * `unit` - Text repeated to fill the file
/// * `target` - Minimum output size
/// * `options` - Block multiplier and progress interval
/// * `observer` - Receives progress notifications
///
/// # Errors
///
/// - [`Error::InvalidMultiplier`] if `options.multiplier` is zero
/// - [`Error::CreateOutput`] if the file cannot be opened for writing
/// - [`Error::Io`] if writing fails part way; the partial file stays on disk
pub fn generate<P>(
    path: &Path,
    unit: &TextUnit,
    target: GenerationTarget,
    options: &GenerationOptions,
    observer: &mut P,
) -> Result<GenerationSummary>
where
    P: ProgressObserver + ?Sized,
{
    let block = Block::new(unit, options.multiplier)?;

    let mut file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    write_blocks(
        &mut file,
        &block,
        target,
        options.progress_interval,
        observer,
    )
}
