//! Worker thread selection for parallel word counting.

use crate::error::{Error, Result};

/// How many workers the parallel counter may spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threading {
    /// Use the host's parallelism minus a small reserve for the rest of the system.
    #[default]
    Auto,
    /// Use an explicit number of workers. `Exact(0)` behaves like [`Threading::Auto`].
    Exact(u32),
}

/// Resolves a [`Threading`] request to a concrete worker count.
///
/// # Errors
///
/// Returns [`Error::InvalidThreadCount`] when an explicit request exceeds the
/// safe maximum for this host.
pub(crate) fn sanitize_threads(threads: Threading) -> Result<u32> {
    let maximum = safe_max_threads();
    match threads {
        Threading::Auto | Threading::Exact(0) => Ok(maximum),
        Threading::Exact(requested) if requested <= maximum => Ok(requested),
        Threading::Exact(requested) => Err(Error::InvalidThreadCount { requested, maximum }),
    }
}

/// Largest worker count that still leaves cores for the rest of the system.
///
/// Falls back to one worker when the host parallelism cannot be queried.
fn safe_max_threads() -> u32 {
    let available = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);

    let reserve = match available {
        1 => 0,
        2..=4 => 1,
        5..=7 => 2,
        _ => 3,
    };

    let safe = available.saturating_sub(reserve).max(1);
    u32::try_from(safe).unwrap_or(u32::MAX)
}
