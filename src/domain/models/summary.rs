//! Aggregate statistics over a stream of trajectory records.

use num_bigint::BigUint;
use serde::Serialize;

use super::trajectory::{TrajectoryRecord, WinOutcome};

/// The start value whose tail win took the most iterations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlowestWin {
    pub start: String,
    pub iteration: u64,
}

/// Counts and failure lists gathered from the records of one scan.
///
/// The engine keeps no state between trajectories; all aggregation happens
/// here by observing finished records in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: u64,
    pub tail_wins: u64,
    /// Records that reached 1 without the tail dominating
    pub failures: Vec<TrajectoryRecord>,
    /// Records cut off by the iteration limit
    pub bound_exceeded: Vec<TrajectoryRecord>,
    pub max_iterations_seen: u64,
    pub max_bit_length_seen: u64,
    pub slowest_win: Option<SlowestWin>,
}

impl ScanSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a summary from a finished sequence of records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TrajectoryRecord>) -> Self {
        let mut summary = Self::new();
        for record in records {
            summary.observe(record);
        }
        summary
    }

    /// Fold one record into the running totals.
    pub fn observe(&mut self, record: &TrajectoryRecord) {
        self.total += 1;
        self.max_iterations_seen = self.max_iterations_seen.max(record.iterations);
        self.max_bit_length_seen = self.max_bit_length_seen.max(record.max_bit_length);

        match record.outcome {
            WinOutcome::TailWin { iteration } => {
                self.tail_wins += 1;
                let slower = self
                    .slowest_win
                    .as_ref()
                    .is_none_or(|slowest| iteration > slowest.iteration);
                if slower {
                    self.slowest_win = Some(SlowestWin {
                        start: record.start.to_string(),
                        iteration,
                    });
                }
            }
            WinOutcome::NeverWon => self.failures.push(record.clone()),
            WinOutcome::BoundExceeded { .. } => self.bound_exceeded.push(record.clone()),
        }
    }

    /// True when every observed record ended in a tail win.
    pub fn all_won(&self) -> bool {
        self.tail_wins == self.total
    }

    /// Start values of the failure records, in scan order.
    pub fn failure_starts(&self) -> Vec<BigUint> {
        self.failures.iter().map(|r| r.start.clone()).collect()
    }
}
