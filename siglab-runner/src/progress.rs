//! Batch progress reporting.

use tracing::info;

use crate::runner::RunError;

/// Observer for batch runs. The runner calls these hooks as it walks the
/// ticker list; implementations render them however they like.
pub trait BatchProgress: Send {
    /// Called when starting a ticker.
    fn on_start(&self, ticker: &str, index: usize, total: usize);

    /// Called when a ticker finishes, successfully or not.
    fn on_complete(&self, ticker: &str, index: usize, total: usize, result: &Result<(), RunError>);

    /// Called once after the whole batch.
    fn on_batch_complete(&self, succeeded: usize, failed: usize, total: usize);
}

/// Progress reporter that ignores everything.
pub struct NullProgress;

impl BatchProgress for NullProgress {
    fn on_start(&self, _: &str, _: usize, _: usize) {}
    fn on_complete(&self, _: &str, _: usize, _: usize, _: &Result<(), RunError>) {}
    fn on_batch_complete(&self, _: usize, _: usize, _: usize) {}
}

/// Progress reporter that emits structured log events.
pub struct LogProgress;

impl BatchProgress for LogProgress {
    fn on_start(&self, ticker: &str, index: usize, total: usize) {
        info!(ticker, position = index + 1, total, "analyzing");
    }

    fn on_complete(&self, ticker: &str, index: usize, total: usize, result: &Result<(), RunError>) {
        match result {
            Ok(()) => info!(ticker, position = index + 1, total, "done"),
            Err(error) => info!(ticker, position = index + 1, total, %error, "failed"),
        }
    }

    fn on_batch_complete(&self, succeeded: usize, failed: usize, total: usize) {
        info!(succeeded, failed, total, "batch complete");
    }
}
