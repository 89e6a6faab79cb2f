//! Terminal progress for the loader pipeline.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use giftgraph_import::{LoadProgress, Stage};

/// Rows between spinner message updates.
const ROW_STRIDE: usize = 250;

/// A single spinner that follows the loader through its stages.
///
/// Stage summaries are logged rather than drawn, so they stay in the
/// scrollback once the spinner is cleared.
pub(crate) struct LoadSpinner {
    pb: ProgressBar,
}

impl LoadSpinner {
    /// When `quiet` is true the spinner is hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        if quiet {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Stop ticking and clear the line.
    pub(crate) fn finish(&self) {
        self.pb.disable_steady_tick();
        self.pb.finish_and_clear();
    }
}

impl LoadProgress for LoadSpinner {
    fn on_stage(&self, stage: Stage) {
        self.pb.set_message(format!("Loading {stage}..."));
    }

    fn on_row(&self, current: usize, total: usize) {
        if current.is_multiple_of(ROW_STRIDE) || current == total {
            self.pb.set_message(format!("Loading rows [{current}/{total}]"));
        }
    }

    fn on_complete(&self, _stage: Stage, message: &str) {
        self.pb.suspend(|| log::info!("{}", message));
    }
}

impl Drop for LoadSpinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
