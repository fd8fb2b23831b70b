//! Runs one start value through the odd-step map until its tail wins,
//! it reaches 1, or the iteration limit cuts it off.

use num_bigint::BigUint;
use num_traits::One;
use tracing::{trace, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::trajectory::tail_dominates;
use crate::domain::models::{bit_length, StartValue, StepResult, TrajectoryRecord, WinOutcome};
use crate::services::odd_step::step_odd;

/// Follows one start value through the odd-step map and classifies it.
///
/// The engine holds no state between calls: the same start value and bit
/// width always produce the same record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrajectoryEngine {
    max_iterations: Option<u64>,
}

impl TrajectoryEngine {
    /// Create an unbounded engine
    pub const fn new() -> Self {
        Self {
            max_iterations: None,
        }
    }

    /// Create an engine that gives up after `max_iterations` steps
    ///
    /// A trajectory that neither wins nor reaches 1 within the limit is
    /// reported as [`WinOutcome::BoundExceeded`].
    pub const fn with_max_iterations(max_iterations: Option<u64>) -> Self {
        Self { max_iterations }
    }

    pub const fn max_iterations(&self) -> Option<u64> {
        self.max_iterations
    }

    /// Compute the trajectory record for `start`.
    ///
    /// # Arguments
    /// * `start` - Odd, positive start value
    /// * `bit_width` - Scan width k; `start` must be below `2^k`
    ///
    /// # Returns
    /// * `Ok(TrajectoryRecord)` - The finished record
    /// * `Err(DomainError)` - If `bit_width` is 0 or `start` does not fit
    pub fn compute(&self, start: &StartValue, bit_width: u32) -> DomainResult<TrajectoryRecord> {
        self.compute_with(start, bit_width, |_| {})
    }

    /// Like [`compute`](Self::compute), calling `on_step` after every map
    /// application that is part of the record.
    pub fn compute_with<F>(
        &self,
        start: &StartValue,
        bit_width: u32,
        on_step: F,
    ) -> DomainResult<TrajectoryRecord>
    where
        F: FnMut(&StepResult),
    {
        if bit_width == 0 {
            return Err(DomainError::InvalidBitWidth(bit_width));
        }
        if bit_length(start.value()) > u64::from(bit_width) {
            return Err(DomainError::StartExceedsWidth {
                start: start.value().clone(),
                bit_width,
            });
        }
        Ok(self.run(start, bit_width, on_step))
    }

    /// The trajectory loop. Callers guarantee the width preconditions.
    pub(crate) fn run<F>(&self, start: &StartValue, bit_width: u32, mut on_step: F) -> TrajectoryRecord
    where
        F: FnMut(&StepResult),
    {
        let mut current = start.value().clone();
        let mut iterations = 0u64;
        let mut total_zeros_removed = 0u64;
        let mut head_growth_events = 0u64;
        let mut max_bit_length = bit_length(&current);
        let mut prev_bit_length = max_bit_length;
        let mut tail_win_iteration = None;

        while !current.is_one() {
            if self.max_iterations.is_some_and(|limit| iterations >= limit) {
                break;
            }

            let step = step_odd(&current);
            on_step(&step);
            total_zeros_removed += step.zeros_removed;
            iterations += 1;
            current = step.next_value;

            let cur_bits = bit_length(&current);
            if cur_bits > prev_bit_length {
                head_growth_events += 1;
            }
            prev_bit_length = cur_bits;
            max_bit_length = max_bit_length.max(cur_bits);

            if tail_dominates(total_zeros_removed, iterations) {
                tail_win_iteration = Some(iterations);
                break;
            }
        }

        let outcome = match (tail_win_iteration, self.max_iterations) {
            (Some(iteration), _) => WinOutcome::TailWin { iteration },
            (None, Some(limit)) if !current.is_one() => {
                warn!(
                    start = %start,
                    limit,
                    "iteration bound reached before the trajectory settled"
                );
                WinOutcome::BoundExceeded { limit }
            }
            _ => WinOutcome::NeverWon,
        };

        trace!(
            start = %start,
            outcome = %outcome,
            iterations,
            total_zeros_removed,
            "trajectory computed"
        );

        TrajectoryRecord {
            start: start.value().clone(),
            bit_width,
            outcome,
            iterations,
            total_zeros_removed,
            max_bit_length,
            head_growth_events,
            ending_value: current,
        }
    }
}

/// Compute the trajectory of `start` with an unbounded engine.
///
/// Validates that `start` is odd, positive and fits in `bit_width` bits.
pub fn compute_trajectory(start: &BigUint, bit_width: u32) -> DomainResult<TrajectoryRecord> {
    let start = StartValue::with_width(start.clone(), bit_width)?;
    Ok(TrajectoryEngine::new().run(&start, bit_width, |_| {}))
}
