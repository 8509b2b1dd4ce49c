//! Shared constants and run parameters for bulk text generation.

use std::num::NonZeroU64;

/// One binary gigabyte (`1024^3` bytes).
pub const GIB: u64 = 1024 * 1024 * 1024;

/// How many times the text unit is repeated inside a single block.
pub const DEFAULT_MULTIPLIER: usize = 1000;

/// Default distance between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: NonZeroU64 = match NonZeroU64::new(GIB) {
    Some(interval) => interval,
    None => panic!("GIB must be non-zero"),
};

/// Sample paragraph used when the caller does not provide a text unit.
pub const LOREM: &str = concat!(
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. ",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. ",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. ",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.\n",
);

/// Tuning knobs for a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Number of text unit repetitions per block.
    pub multiplier: usize,
    /// Distance between progress notifications, in bytes.
    ///
    /// Notifications are best-effort: a boundary may be reported once or not
    /// at all depending on how blocks line up with it.
    pub progress_interval: NonZeroU64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Statistical summary of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Total number of bytes written to the output.
    pub bytes_written: u64,

    /// Number of whole blocks written.
    pub blocks_written: u64,

    /// Length of one block in bytes.
    pub block_len: u64,
}

impl GenerationSummary {
    /// Bytes written past the requested target.
    pub fn overshoot(&self, target_bytes: u64) -> u64 {
        self.bytes_written.saturating_sub(target_bytes)
    }
}
