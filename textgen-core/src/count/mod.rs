//! Word counting over generated files.
//!
//! Two notions of "word" are used, matching the tools these files are
//! benchmarked with:
//!
//! - [`count_words`] and [`count_words_parallel`] count runs of non-whitespace
//!   bytes, like `wc -w`.
//! - [`word_frequencies`] and [`word_frequencies_parallel`] treat runs of ASCII
//!   alphanumerics as words and lowercase them. Every other byte ends the
//!   current word, including punctuation, control bytes and the bytes of
//!   non-ASCII UTF-8 characters, so `"naïve"` yields `na` and `ve`. Because a
//!   word never spans a non-alphanumeric byte, the parallel variant can cut the
//!   file at such bytes and merge per-chunk tables into the streaming result.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;
use crate::threading::{sanitize_threads, Threading};


/// Read buffer used by the streaming counters.
pub const READ_BUFFER_SIZE: usize = 1 << 20;

/// Size of the file slices handed to parallel workers.
pub const CHUNK_SIZE: u64 = 1 << 22;

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\r' | b'\t' | 0x0b | 0x0c)
}

/// Incremental whitespace-delimited word counter.
#[derive(Debug, Default)]
struct WordScanner {
    in_word: bool,
    words: u64,
}

impl WordScanner {
    fn feed(&mut self, data: &[u8]) {
        for &byte in data {
            if is_space(byte) {
                self.in_word = false;
            } else if !self.in_word {
                self.in_word = true;
                self.words += 1;
            }
        }
    }
}

/// Feeds every chunk read from `reader` into `sink`, retrying interrupted reads.
fn for_each_chunk<R, F>(mut reader: R, mut sink: F) -> io::Result<()>
where
    R: Read,
    F: FnMut(&[u8]),
{
    let mut buf = vec![0u8; READ_BUFFER_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => sink(&buf[..n]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
}

/// Counts whitespace-delimited words in a stream.
///
/// # Errors
///
/// Returns any error produced by `reader` other than [`io::ErrorKind::Interrupted`].
pub fn count_words<R: Read>(reader: R) -> io::Result<u64> {
    let mut scanner = WordScanner::default();
    for_each_chunk(reader, |data| scanner.feed(data))?;
    Ok(scanner.words)
}

/// Word count of one slice plus what its edges look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChunkCount {
    words: u64,
    starts_in_word: bool,
    ends_in_word: bool,
}

fn count_chunk(path: &Path, offset: u64, len: u64) -> io::Result<ChunkCount> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;

    let mut buf = Vec::new();
    file.take(len).read_to_end(&mut buf)?;

    let mut scanner = WordScanner::default();
    scanner.feed(&buf);

    Ok(ChunkCount {
        words: scanner.words,
        starts_in_word: buf.first().is_some_and(|&b| !is_space(b)),
        ends_in_word: buf.last().is_some_and(|&b| !is_space(b)),
    })
}

/// Counts whitespace-delimited words in the file at `path` using worker threads.
///
/// The file is cut into [`CHUNK_SIZE`] slices that are counted independently.
/// A word cut in two by a slice boundary is counted by both neighbours, so one
/// is subtracted for every such boundary.
///
/// # Errors
///
/// - [`crate::Error::InvalidThreadCount`] if `threading` exceeds the safe limit
/// - [`crate::Error::Io`] if the file cannot be inspected or read
pub fn count_words_parallel(path: &Path, threading: Threading) -> Result<u64> {
    let workers = sanitize_threads(threading)? as usize;
    count_words_chunked(path, workers, CHUNK_SIZE)
}

/// Runs `op` on a dedicated rayon pool with `workers` threads.
fn in_pool<T, F>(workers: usize, op: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> io::Result<T> + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    Ok(pool.install(op)?)
}

/// Number of `chunk_size` slices covering `file_size` bytes.
fn chunks_for(file_size: u64, chunk_size: u64) -> usize {
    usize::try_from(file_size.div_ceil(chunk_size)).unwrap_or(usize::MAX)
}

pub(crate) fn count_words_chunked(path: &Path, workers: usize, chunk_size: u64) -> Result<u64> {
    let file_size = fs::metadata(path)?.len();
    if file_size == 0 {
        return Ok(0);
    }

    let chunk_count = chunks_for(file_size, chunk_size);
    let chunks = in_pool(workers.clamp(1, chunk_count), || {
        (0..chunk_count)
            .into_par_iter()
            .map(|index| {
                let offset = index as u64 * chunk_size;
                count_chunk(path, offset, chunk_size.min(file_size - offset))
            })
            .collect::<io::Result<Vec<ChunkCount>>>()
    })?;

    let total: u64 = chunks.iter().map(|c| c.words).sum();
    let split_words = chunks
        .windows(2)
        .filter(|pair| pair[0].ends_in_word && pair[1].starts_in_word)
        .count() as u64;

    Ok(total - split_words)
}

/// Per-word occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    /// Total number of words seen.
    pub total: u64,
    /// Occurrences per lowercased word, in lexicographic order.
    pub words: BTreeMap<String, u64>,
}

impl WordFrequencies {
    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.words.len()
    }

    /// Adds every count of `other` into `self`.
    pub fn merge(&mut self, other: WordFrequencies) {
        self.total += other.total;
        for (word, count) in other.words {
            *self.words.entry(word).or_insert(0) += count;
        }
    }
}

/// Incremental alphanumeric word tally.
#[derive(Debug, Default)]
struct FrequencyScanner {
    freq: WordFrequencies,
    word: Vec<u8>,
}

impl FrequencyScanner {
    fn feed(&mut self, data: &[u8]) {
        for &byte in data {
            if byte.is_ascii_alphanumeric() {
                self.word.push(byte.to_ascii_lowercase());
            } else {
                self.end_word();
            }
        }
    }

    fn end_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        // Only ASCII alphanumerics are ever pushed.
        let key: String = self.word.iter().map(|&b| char::from(b)).collect();
        *self.freq.words.entry(key).or_insert(0) += 1;
        self.freq.total += 1;
        self.word.clear();
    }

    fn finish(mut self) -> WordFrequencies {
        self.end_word();
        self.freq
    }
}

/// Counts lowercased alphanumeric words in a stream.
///
/// # Errors
///
/// Returns any error produced by `reader` other than [`io::ErrorKind::Interrupted`].
pub fn word_frequencies<R: Read>(reader: R) -> io::Result<WordFrequencies> {
    let mut scanner = FrequencyScanner::default();
    for_each_chunk(reader, |data| scanner.feed(data))?;
    Ok(scanner.finish())
}

/// Moves `pos` forward past any alphanumeric run so that it never falls
/// inside a word. Offset 0 and the end of file are already word boundaries.
fn word_boundary(file: &mut File, pos: u64, file_size: u64) -> io::Result<u64> {
    if pos == 0 || pos >= file_size {
        return Ok(pos.min(file_size));
    }

    file.seek(SeekFrom::Start(pos))?;
    let mut skipped = 0;
    for byte in io::BufReader::new(&mut *file).bytes() {
        if !byte?.is_ascii_alphanumeric() {
            break;
        }
        skipped += 1;
    }
    Ok(pos + skipped)
}

fn frequency_chunk(
    path: &Path,
    index: u64,
    chunk_size: u64,
    file_size: u64,
) -> io::Result<WordFrequencies> {
    let mut file = File::open(path)?;
    let start = word_boundary(&mut file, index * chunk_size, file_size)?;
    let end = word_boundary(&mut file, (index + 1).saturating_mul(chunk_size), file_size)?;

    let mut scanner = FrequencyScanner::default();
    if start < end {
        file.seek(SeekFrom::Start(start))?;
        let mut buf = Vec::new();
        file.take(end - start).read_to_end(&mut buf)?;
        scanner.feed(&buf);
    }
    Ok(scanner.finish())
}

/// Builds the word frequency table of the file at `path` using worker threads.
///
/// The file is cut into [`CHUNK_SIZE`] slices whose edges are moved forward to
/// the next non-alphanumeric byte, so no word is split between two slices.
/// Each slice gets its own table and the tables are merged in file order.
/// The result equals [`word_frequencies`] over the whole file.
///
/// # Errors
///
/// - [`crate::Error::InvalidThreadCount`] if `threading` exceeds the safe limit
/// - [`crate::Error::Io`] if the file cannot be inspected or read
pub fn word_frequencies_parallel(path: &Path, threading: Threading) -> Result<WordFrequencies> {
    let workers = sanitize_threads(threading)? as usize;
    word_frequencies_chunked(path, workers, CHUNK_SIZE)
}

pub(crate) fn word_frequencies_chunked(
    path: &Path,
    workers: usize,
    chunk_size: u64,
) -> Result<WordFrequencies> {
    let file_size = fs::metadata(path)?.len();
    if file_size == 0 {
        return Ok(WordFrequencies::default());
    }

    let chunk_count = chunks_for(file_size, chunk_size);
    let tables = in_pool(workers.clamp(1, chunk_count), || {
        (0..chunk_count)
            .into_par_iter()
            .map(|index| frequency_chunk(path, index as u64, chunk_size, file_size))
            .collect::<io::Result<Vec<WordFrequencies>>>()
    })?;

    let mut merged = WordFrequencies::default();
    for table in tables {
        merged.merge(table);
    }
    Ok(merged)
}
