//! Progress notifications emitted by the generation loop.

/// Receives best-effort progress notifications.
///
/// The loop calls [`ProgressObserver::on_progress`] when the cursor has just
/// crossed (or landed on) a multiple of the progress interval. A boundary that
/// falls inside a block may be reported once or not at all, so observers must
/// not rely on an exact once-per-interval schedule.
pub trait ProgressObserver {
    /// Called with the total number of bytes written so far.
    fn on_progress(&mut self, bytes_written: u64);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _bytes_written: u64) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(u64),
{
    fn on_progress(&mut self, bytes_written: u64) {
        self(bytes_written);
    }
}
