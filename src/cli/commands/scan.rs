//! Implementation of the `collatz-tail scan` command.

use std::fmt::Write as _;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;
use num_bigint::BigUint;
use num_traits::One;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::output::{
    output, padded_binary, scan_progress, CommandOutput, ProgressBarExt, TableFormatter,
};
use crate::domain::models::{Config, ScanSummary, TailMetric, TrajectoryRecord};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{ScanDriver, TrajectoryEngine};

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Maximum number of bits to analyze (default: 16)
    #[arg(short = 'k', long = "bits")]
    pub bits: Option<u32>,

    /// Per-row tail metric: extra-zeros or total-tail
    #[arg(short, long)]
    pub metric: Option<TailMetric>,

    /// Give up on a trajectory after this many steps
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Only print rows for numbers whose tail did not win
    #[arg(long)]
    pub failures_only: bool,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl ScanArgs {
    /// Layer command-line flags over the loaded configuration.
    pub fn apply(&self, config: &Config) -> Result<Config> {
        let mut config = config.clone();
        if let Some(bits) = self.bits {
            config.scan.bit_width = bits;
        }
        if let Some(metric) = self.metric {
            config.report.metric = metric;
        }
        if self.max_iterations.is_some() {
            config.scan.max_iterations = self.max_iterations;
        }
        if self.failures_only {
            config.report.failures_only = true;
        }
        if self.no_progress {
            config.report.progress = false;
        }

        ConfigLoader::validate(&config).context("Invalid scan options")?;
        Ok(config)
    }
}

/// Report of one scan: the rendered rows plus the aggregate summary
#[derive(Debug, Serialize)]
pub struct ScanOutput {
    pub bit_width: u32,
    pub metric: TailMetric,
    pub max_iterations: Option<u64>,
    pub failures_only: bool,
    pub records: Vec<TrajectoryRecord>,
    pub summary: ScanSummary,
}

impl ScanOutput {
    fn summary_text(&self) -> String {
        let summary = &self.summary;
        let mut lines = vec!["Summary:".to_string()];

        if summary.all_won() {
            lines.push(format!(
                "All {} odd numbers exhibited extra zero dominance (removing more zeros than the guaranteed minimum)!",
                summary.total
            ));
        } else if summary.failures.is_empty() {
            lines.push(format!(
                "{} out of {} odd numbers exhibited extra zero dominance; none reached 1 without it.",
                summary.tail_wins, summary.total
            ));
        } else {
            lines.push(format!(
                "Found {} out of {} odd numbers where extra zeros (beyond guaranteed minimum) did not exceed zero:",
                summary.failures.len(),
                summary.total
            ));
            for record in &summary.failures {
                lines.push(self.diagnostic_line(record));
            }
        }

        if !summary.bound_exceeded.is_empty() {
            lines.push(format!(
                "{} odd numbers hit the iteration bound before settling:",
                summary.bound_exceeded.len()
            ));
            for record in &summary.bound_exceeded {
                lines.push(self.diagnostic_line(record));
            }
        }

        if let Some(slowest) = &summary.slowest_win {
            lines.push(format!(
                "Slowest tail win: {} after {} iterations (max bits seen: {})",
                slowest.start, slowest.iteration, summary.max_bit_length_seen
            ));
        }

        lines.join("\n")
    }

    fn diagnostic_line(&self, record: &TrajectoryRecord) -> String {
        format!(
            "Decimal: {}, Binary: {}, Total Zeros: {}, Iterations: {}, Extra Zeros: {}, Max Bits: {}, Head Growth: {}",
            record.start,
            padded_binary(&record.start, self.bit_width as usize),
            record.total_zeros_removed,
            record.iterations,
            record.extra_zeros(),
            record.max_bit_length,
            record.head_growth_events,
        )
    }
}

impl CommandOutput for ScanOutput {
    fn to_human(&self) -> String {
        let last = (BigUint::one() << self.bit_width) - 1u32;
        let mut text = format!(
            "\nAnalyzing odd numbers 3 to {last} (k={}):\n\n",
            self.bit_width
        );

        if self.records.is_empty() {
            let _ = writeln!(text, "No rows to display.");
        } else {
            let table = TableFormatter::new().format_records(
                &self.records,
                self.bit_width,
                self.metric,
            );
            let _ = writeln!(text, "{table}");
        }

        let _ = write!(text, "\n{}", self.summary_text());
        text
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run the scan described by `config`, feeding `progress` as records arrive.
pub fn run_scan(config: &Config, progress: &ProgressBar) -> Result<ScanOutput> {
    let engine = TrajectoryEngine::with_max_iterations(config.scan.max_iterations);
    let scan = ScanDriver::new(engine)
        .scan(config.scan.bit_width)
        .with_context(|| format!("Failed to start scan for k={}", config.scan.bit_width))?;
    let bit_width = scan.bit_width();

    info!(
        bit_width,
        records = scan.remaining(),
        max_iterations = ?engine.max_iterations(),
        "scan started"
    );
    let started = Instant::now();

    let mut summary = ScanSummary::new();
    let mut records = Vec::new();
    for record in scan {
        summary.observe(&record);
        if !config.report.failures_only || !record.is_tail_win() {
            records.push(record);
        }
        progress.inc(1);
    }

    if !summary.failures.is_empty() {
        let starts: Vec<String> = summary
            .failure_starts()
            .iter()
            .map(ToString::to_string)
            .collect();
        warn!(bit_width, starts = ?starts, "start values reached 1 without a tail win");
    }

    info!(
        bit_width,
        total = summary.total,
        tail_wins = summary.tail_wins,
        failures = summary.failures.len(),
        bound_exceeded = summary.bound_exceeded.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "scan finished"
    );

    Ok(ScanOutput {
        bit_width,
        metric: config.report.metric,
        max_iterations: config.scan.max_iterations,
        failures_only: config.report.failures_only,
        records,
        summary,
    })
}

pub fn execute(args: ScanArgs, config: &Config, json_mode: bool) -> Result<()> {
    let config = args.apply(config)?;
    let total = crate::services::expected_record_count(config.scan.bit_width);
    let progress = scan_progress(
        u64::try_from(total).unwrap_or(u64::MAX),
        config.report.progress && !json_mode,
    );

    let output_data = run_scan(&config, &progress)?;

    if output_data.summary.all_won() {
        progress.finish_success("scan complete");
    } else {
        progress.finish_warning("scan complete with non-winning trajectories");
    }

    output(&output_data, json_mode);
    Ok(())
}
