//! CLI output formatting module
//!
//! Provides the output dispatch trait and the formatters used for terminal
//! display.

pub mod format;
pub mod progress;
pub mod table;

use serde::Serialize;

pub use format::{padded_binary, row_binary_width};
pub use progress::{create_progress_bar, scan_progress, ProgressBarExt};
pub use table::TableFormatter;

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}
