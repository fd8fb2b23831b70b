//! Progress bar utilities using indicatif for terminal output
//!
//! Scans over wide bit widths run for a long time; a progress bar on stderr
//! shows how many start values are done without touching the report on
//! stdout.

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Style template for scan progress
const PROGRESS_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.cyan/blue} {human_pos}/{human_len} {msg} (ETA: {eta})";

/// Progress bar characters for visual effect
const PROGRESS_CHARS: &str = "█▓▒░ ";

/// Create a standard progress bar with ETA calculation, drawn on stderr
///
/// # Arguments
/// * `total` - Total number of items to process
///
/// # Example
/// ```
/// use collatz_tail::cli::output::progress::create_progress_bar;
///
/// let pb = create_progress_bar(100);
/// for _ in 0..100 {
///     pb.inc(1);
/// }
/// pb.finish_with_message("Complete");
/// ```
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS);
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Progress bar for a scan of `total` start values.
///
/// Hidden unless `enabled` is set and stderr is an interactive terminal.
pub fn scan_progress(total: u64, enabled: bool) -> ProgressBar {
    if enabled && Term::stderr().is_term() {
        let pb = create_progress_bar(total);
        pb.set_message("start values");
        pb
    } else {
        ProgressBar::hidden()
    }
}

/// Extension trait for ProgressBar to add common utility methods
pub trait ProgressBarExt {
    /// Finish with a success message (green checkmark)
    fn finish_success(&self, message: impl Into<String>);

    /// Finish with a warning message (yellow !)
    fn finish_warning(&self, message: impl Into<String>);
}

impl ProgressBarExt for ProgressBar {
    fn finish_success(&self, message: impl Into<String>) {
        self.finish_with_message(format!("✓ {}", message.into()));
    }

    fn finish_warning(&self, message: impl Into<String>) {
        self.finish_with_message(format!("! {}", message.into()));
    }
}
