//! Implementation of the `collatz-tail trace` command.

use anyhow::{Context, Result};
use clap::Args;
use num_bigint::BigUint;
use serde::Serialize;

use crate::cli::output::table::TraceRow;
use crate::cli::output::{output, padded_binary, row_binary_width, CommandOutput, TableFormatter};
use crate::domain::models::{bit_length, Config, StartValue, TrajectoryRecord};
use crate::infrastructure::config::ConfigLoader;
use crate::services::TrajectoryEngine;

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Odd start value (decimal, any size)
    pub start: BigUint,

    /// Bit width used for padding (defaults to the bit length of START)
    #[arg(short = 'k', long = "bits")]
    pub bits: Option<u32>,

    /// Give up after this many steps
    #[arg(long)]
    pub max_iterations: Option<u64>,
}

/// Step listing and final record for one start value
#[derive(Debug, Serialize)]
pub struct TraceOutput {
    pub steps: Vec<TraceRow>,
    pub record: TrajectoryRecord,
}

impl CommandOutput for TraceOutput {
    fn to_human(&self) -> String {
        let record = &self.record;
        let start_binary = padded_binary(&record.start, record.bit_width as usize);
        let end_width = row_binary_width(&record.ending_value, record.bit_width);

        let mut lines = vec![format!(
            "Trajectory of {} ({start_binary}, k={}):",
            record.start, record.bit_width
        )];
        if self.steps.is_empty() {
            lines.push("No steps taken.".to_string());
        } else {
            lines.push(TableFormatter::new().format_trace(&self.steps));
        }

        lines.push(String::new());
        lines.push(format!("Outcome: {}", record.outcome));
        lines.push(format!(
            "Iterations: {}, Total Zeros: {}, Extra Zeros: {}",
            record.iterations,
            record.total_zeros_removed,
            record.extra_zeros()
        ));
        lines.push(format!(
            "Max Bits: {}, Head Growth: {}",
            record.max_bit_length, record.head_growth_events
        ));
        lines.push(format!(
            "Ending value: {} ({})",
            record.ending_value,
            padded_binary(&record.ending_value, end_width)
        ));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Compute one trajectory and collect a row per step.
pub fn run_trace(args: &TraceArgs, config: &Config) -> Result<TraceOutput> {
    let start = StartValue::new(args.start.clone()).context("Invalid start value")?;
    let bit_width = match args.bits {
        Some(bits) => bits,
        None => u32::try_from(bit_length(start.value()))
            .context("Start value is too wide to trace")?,
    };
    // Only the iteration limit is read from the scan section
    let max_iterations = args.max_iterations.or(config.scan.max_iterations);
    ConfigLoader::validate_max_iterations(max_iterations).context("Invalid trace options")?;
    let engine = TrajectoryEngine::with_max_iterations(max_iterations);

    let mut steps = Vec::new();
    let mut total_zeros_removed = 0u64;
    let record = engine
        .compute_with(&start, bit_width, |step| {
            total_zeros_removed += step.zeros_removed;
            let index = steps.len() as u64 + 1;
            steps.push(TraceRow {
                step: index,
                value: step.next_value.to_string(),
                binary: padded_binary(&step.next_value, bit_width as usize),
                zeros_removed: step.zeros_removed,
                bit_length: bit_length(&step.next_value),
                total_zeros_removed,
                extra_zeros: total_zeros_removed - index,
            });
        })
        .with_context(|| format!("Failed to trace {start}"))?;

    Ok(TraceOutput { steps, record })
}

pub fn execute(args: TraceArgs, config: &Config, json_mode: bool) -> Result<()> {
    let output_data = run_trace(&args, config)?;
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::WinOutcome;

    fn args(start: u32) -> TraceArgs {
        TraceArgs {
            start: BigUint::from(start),
            bits: None,
            max_iterations: None,
        }
    }

    #[test]
    fn test_trace_seven() {
        let output = run_trace(&args(7), &Config::default()).unwrap();

        assert_eq!(output.record.bit_width, 3);
        assert_eq!(output.record.outcome, WinOutcome::TailWin { iteration: 3 });
        let values: Vec<&str> = output.steps.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["11", "17", "13"]);
        let extras: Vec<u64> = output.steps.iter().map(|s| s.extra_zeros).collect();
        assert_eq!(extras, vec![0, 0, 1]);
        assert_eq!(output.steps[2].binary, "1101");
    }

    #[test]
    fn test_trace_uses_config_bound() {
        let mut config = Config::default();
        config.scan.max_iterations = Some(1);

        let output = run_trace(&args(27), &config).unwrap();

        assert_eq!(output.steps.len(), 1);
        assert_eq!(output.record.outcome, WinOutcome::BoundExceeded { limit: 1 });
    }

    #[test]
    fn test_trace_ignores_scan_bit_width() {
        let mut config = Config::default();
        config.scan.bit_width = 100;

        let output = run_trace(&args(7), &config).unwrap();

        assert_eq!(output.record.bit_width, 3);
        assert_eq!(output.record.outcome, WinOutcome::TailWin { iteration: 3 });
    }

    #[test]
    fn test_trace_rejects_zero_iteration_limit() {
        let mut config = Config::default();
        config.scan.max_iterations = Some(0);
        assert!(run_trace(&args(7), &config).is_err());

        let mut trace_args = args(7);
        trace_args.max_iterations = Some(5);
        assert!(run_trace(&trace_args, &config).is_ok(), "Flag overrides config");
    }

    #[test]
    fn test_trace_rejects_even_start() {
        let err = run_trace(&args(10), &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Value must be odd"));
    }

    #[test]
    fn test_trace_rejects_narrow_width() {
        let mut trace_args = args(9);
        trace_args.bits = Some(3);

        let err = run_trace(&trace_args, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("does not fit in 3 bits"));
    }

    #[test]
    fn test_trace_one_has_no_steps() {
        let output = run_trace(&args(1), &Config::default()).unwrap();

        assert!(output.steps.is_empty());
        assert!(output.to_human().contains("No steps taken."));
        assert!(output.to_human().contains("Outcome: never won"));
    }
}
