//! Trajectory domain model.
//!
//! A trajectory follows one odd start value through the odd-step map
//! `n -> (3n + 1) / 2^v` until it reaches 1 or the trailing zeros removed so
//! far outnumber the steps taken.

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use serde::{Serialize, Serializer};

use crate::domain::errors::{DomainError, DomainResult};

/// Number of bits needed to write `n` in binary, without leading zeros.
///
/// `bit_length(1)` is 1 and `bit_length(0)` is 0.
pub fn bit_length(n: &BigUint) -> u64 {
    n.bits()
}

/// Win test shared by every consumer of trajectory totals.
///
/// Each step removes at least one zero, so the tail only dominates once the
/// total strictly exceeds the number of steps.
pub const fn tail_dominates(total_zeros_removed: u64, iterations: u64) -> bool {
    total_zeros_removed > iterations
}

/// A validated odd, positive starting value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartValue(BigUint);

impl StartValue {
    /// Validate that `value` is odd and positive.
    pub fn new(value: BigUint) -> DomainResult<Self> {
        if value.is_zero() {
            return Err(DomainError::ZeroValue);
        }
        if value.is_even() {
            return Err(DomainError::EvenValue(value));
        }
        Ok(Self(value))
    }

    /// Validate that `value` is odd, positive and below `2^bit_width`.
    pub fn with_width(value: BigUint, bit_width: u32) -> DomainResult<Self> {
        if bit_width == 0 {
            return Err(DomainError::InvalidBitWidth(bit_width));
        }
        let start = Self::new(value)?;
        if bit_length(&start.0) > u64::from(bit_width) {
            return Err(DomainError::StartExceedsWidth {
                start: start.0,
                bit_width,
            });
        }
        Ok(start)
    }

    /// Wrap a value the caller already knows to be odd and positive.
    pub(crate) const fn new_unchecked(value: BigUint) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> &BigUint {
        &self.0
    }
}

impl TryFrom<u64> for StartValue {
    type Error = DomainError;

    fn try_from(value: u64) -> DomainResult<Self> {
        Self::new(BigUint::from(value))
    }
}

impl fmt::Display for StartValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Result of one application of the odd-step map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// The odd value after stripping all trailing zeros from `3n + 1`
    #[serde(serialize_with = "serialize_decimal")]
    pub next_value: BigUint,
    /// 2-adic valuation of `3n + 1`, always at least 1
    pub zeros_removed: u64,
}

/// How a trajectory ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WinOutcome {
    /// Extra zeros became positive at this (1-based) iteration
    TailWin { iteration: u64 },
    /// Reached 1 without the tail ever dominating
    NeverWon,
    /// Stopped at the configured iteration limit without reaching 1 or winning
    BoundExceeded { limit: u64 },
}

impl WinOutcome {
    /// Short label used in report rows: the win iteration, `Never` or `Bound(L)`.
    pub fn label(&self) -> String {
        match self {
            Self::TailWin { iteration } => iteration.to_string(),
            Self::NeverWon => "Never".to_string(),
            Self::BoundExceeded { limit } => format!("Bound({limit})"),
        }
    }

    pub const fn is_win(&self) -> bool {
        matches!(self, Self::TailWin { .. })
    }
}

impl fmt::Display for WinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TailWin { iteration } => write!(f, "tail win at iteration {iteration}"),
            Self::NeverWon => write!(f, "never won"),
            Self::BoundExceeded { limit } => write!(f, "bound of {limit} iterations exceeded"),
        }
    }
}

/// The outcome and metrics of one trajectory.
///
/// Built once by the trajectory engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrajectoryRecord {
    #[serde(serialize_with = "serialize_decimal")]
    pub start: BigUint,
    pub bit_width: u32,
    pub outcome: WinOutcome,
    pub iterations: u64,
    pub total_zeros_removed: u64,
    /// Largest bit length seen, start value included
    pub max_bit_length: u64,
    /// Steps whose value had more bits than the value before it
    pub head_growth_events: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub ending_value: BigUint,
}

impl TrajectoryRecord {
    /// Zeros removed beyond the guaranteed one per step.
    pub const fn extra_zeros(&self) -> u64 {
        self.total_zeros_removed.saturating_sub(self.iterations)
    }

    pub const fn is_tail_win(&self) -> bool {
        self.outcome.is_win()
    }
}

fn serialize_decimal<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}
