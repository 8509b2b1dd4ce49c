//! Value types describing what gets written and how much of it.

use std::ops::Deref;

use crate::config::GIB;
use crate::error::{Error, Result};

/// Immutable, non-empty piece of text that is repeated to fill the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit(String);

impl TextUnit {
    /// Creates a text unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTextUnit`] if `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyTextUnit);
        }
        Ok(Self(text))
    }

    /// UTF-8 encoded form of the unit.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with [`TextUnit::len`].
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for TextUnit {
    fn default() -> Self {
        Self(crate::config::LOREM.to_string())
    }
}

impl AsRef<str> for TextUnit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The byte buffer written on every loop iteration.
///
/// Encoded once per run and reused, so its length stays
/// `unit.len() * multiplier` for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    bytes: Vec<u8>,
    multiplier: usize,
}

impl Block {
    /// Repeats `unit` `multiplier` times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMultiplier`] if `multiplier` is zero.
    pub fn new(unit: &TextUnit, multiplier: usize) -> Result<Self> {
        if multiplier == 0 {
            return Err(Error::InvalidMultiplier(multiplier));
        }
        Ok(Self {
            bytes: unit.as_bytes().repeat(multiplier),
            multiplier,
        })
    }

    /// Number of unit repetitions in the block.
    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Block length as `u64`, the unit used by the write cursor.
    pub fn len_u64(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl Deref for Block {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Minimum size of the generated file, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationTarget(u64);

impl GenerationTarget {
    /// Target of `gigabytes * 1024^3` bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTarget`] for zero gigabytes
    /// - [`Error::TargetOverflow`] if the byte count does not fit into `u64`
    pub fn from_gigabytes(gigabytes: u64) -> Result<Self> {
        let bytes = gigabytes
            .checked_mul(GIB)
            .ok_or(Error::TargetOverflow { gigabytes })?;
        Self::from_bytes(bytes)
    }

    /// Target of an exact byte count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] if `bytes` is zero.
    pub fn from_bytes(bytes: u64) -> Result<Self> {
        if bytes == 0 {
            return Err(Error::InvalidTarget);
        }
        Ok(Self(bytes))
    }

    /// Target size in bytes.
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

/// Running total of bytes written during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteCursor(u64);

impl WriteCursor {
    /// Bytes written so far.
    pub const fn position(self) -> u64 {
        self.0
    }

    /// Records `len` more bytes.
    pub(crate) fn advance(&mut self, len: u64) {
        self.0 = self.0.saturating_add(len);
    }

    /// Whether the cursor has reached `target`.
    pub const fn reached(self, target: GenerationTarget) -> bool {
        self.0 >= target.0
    }
}
