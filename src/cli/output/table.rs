//! Table output formatting for CLI commands
//!
//! Renders trajectory records and traced steps using comfy-table. Supports
//! color-coded outcome cells and respects `NO_COLOR`.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::env;

use super::format::{padded_binary, row_binary_width};
use crate::domain::models::{TailMetric, TrajectoryRecord, WinOutcome};

/// One traced step as shown by `collatz-tail trace`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TraceRow {
    pub step: u64,
    pub value: String,
    pub binary: String,
    pub zeros_removed: u64,
    pub bit_length: u64,
    pub total_zeros_removed: u64,
    pub extra_zeros: u64,
}

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format trajectory records as report rows
    ///
    /// Start values are padded to `bit_width` binary digits; ending values
    /// to at least that width.
    pub fn format_records(
        &self,
        records: &[TrajectoryRecord],
        bit_width: u32,
        metric: TailMetric,
    ) -> String {
        let mut table = self.create_base_table();

        table.set_header(header_cells(&[
            "Decimal",
            "Binary",
            "Win After",
            "Max Bits",
            "Head Grow",
            metric.column_title(),
            "End Dec",
            "End Bin",
        ]));

        for record in records {
            let metric_value = match metric {
                TailMetric::ExtraZeros => record.extra_zeros(),
                TailMetric::TotalTail => record.total_zeros_removed,
            };
            let end_width = row_binary_width(&record.ending_value, bit_width);

            table.add_row(vec![
                Cell::new(record.start.to_string()),
                Cell::new(padded_binary(&record.start, bit_width as usize)),
                self.outcome_cell(&record.outcome),
                Cell::new(record.max_bit_length),
                Cell::new(record.head_growth_events),
                Cell::new(metric_value),
                Cell::new(record.ending_value.to_string()),
                Cell::new(padded_binary(&record.ending_value, end_width)),
            ]);
        }

        table.to_string()
    }

    /// Format the steps of a single trajectory
    pub fn format_trace(&self, rows: &[TraceRow]) -> String {
        let mut table = self.create_base_table();

        table.set_header(header_cells(&[
            "Step",
            "Value",
            "Binary",
            "Zeros",
            "Bits",
            "Total Zeros",
            "Extra Zeros",
        ]));

        for row in rows {
            let extra_cell = if self.use_colors && row.extra_zeros > 0 {
                Cell::new(row.extra_zeros).fg(Color::Green)
            } else {
                Cell::new(row.extra_zeros)
            };

            table.add_row(vec![
                Cell::new(row.step),
                Cell::new(&row.value),
                Cell::new(&row.binary),
                Cell::new(row.zeros_removed),
                Cell::new(row.bit_length),
                Cell::new(row.total_zeros_removed),
                extra_cell,
            ]);
        }

        table.to_string()
    }

    fn outcome_cell(&self, outcome: &WinOutcome) -> Cell {
        if self.use_colors {
            Cell::new(outcome.label()).fg(outcome_color(outcome))
        } else {
            Cell::new(outcome.label())
        }
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Borderless columns; binary strings must never wrap
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled);

        if !self.use_colors {
            table.force_no_tty();
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header_cells(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| {
            Cell::new(title)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Left)
        })
        .collect()
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Map a trajectory outcome to color
const fn outcome_color(outcome: &WinOutcome) -> Color {
    match outcome {
        WinOutcome::TailWin { .. } => Color::Green,
        WinOutcome::NeverWon => Color::Red,
        WinOutcome::BoundExceeded { .. } => Color::Yellow,
    }
}
