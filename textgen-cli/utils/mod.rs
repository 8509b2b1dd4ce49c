//! Small shared utilities for the CLI binaries.
//!
//! Helpers reused by both entrypoints that don't belong to the higher-level
//! orchestration in `process`.

pub mod bytes;
