//! Loader progress reporting.

use crate::context::Stage;

/// Trait for receiving loader progress updates.
pub trait LoadProgress {
    /// Called when a stage starts.
    fn on_stage(&self, stage: Stage);

    /// Called after each source row of the current stage is processed.
    fn on_row(&self, current: usize, total: usize);

    /// Called when a stage finishes, with a one-line summary.
    fn on_complete(&self, stage: Stage, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl LoadProgress for SilentProgress {
    fn on_stage(&self, _stage: Stage) {}
    fn on_row(&self, _current: usize, _total: usize) {}
    fn on_complete(&self, _stage: Stage, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl LoadProgress for LogProgress {
    fn on_stage(&self, stage: Stage) {
        log::debug!("Loading {}", stage);
    }

    fn on_row(&self, current: usize, total: usize) {
        if current.is_multiple_of(5000) || current == total {
            log::debug!("  [{}/{}]", current, total);
        }
    }

    fn on_complete(&self, _stage: Stage, message: &str) {
        log::info!("{}", message);
    }
}
