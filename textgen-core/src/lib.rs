//! # textgen-core
//!
//! Block-based generation of large plain-text files.
//!
//! A [`TextUnit`] is repeated into a [`Block`] once, and the block is written
//! until the output reaches a [`GenerationTarget`]. The final size is the first
//! multiple of the block length at or above the target, so consumers should
//! treat the target as a lower bound rather than an exact size.
//!
//! The [`count`] module reads such files back and counts their words, either
//! streaming or on a rayon pool sized by [`Threading`].

pub mod config;
pub mod count;
pub mod error;
pub mod generate;
pub mod progress;
pub mod threading;
pub mod unit;

pub use config::{GenerationOptions, GenerationSummary, DEFAULT_MULTIPLIER, GIB, LOREM};
pub use error::{Error, Result};
pub use generate::{generate, write_blocks};
pub use progress::{NoProgress, ProgressObserver};
pub use threading::Threading;
pub use unit::{Block, GenerationTarget, TextUnit, WriteCursor};
