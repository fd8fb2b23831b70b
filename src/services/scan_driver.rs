//! Enumerates every odd k-bit start value and runs the engine on each.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{StartValue, TrajectoryRecord};
use crate::services::trajectory_engine::TrajectoryEngine;

/// First start value of every scan. 1 is the fixed point and is skipped.
const FIRST_START: u32 = 3;

/// Service producing lazy scans over odd k-bit start values
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanDriver {
    engine: TrajectoryEngine,
}

impl ScanDriver {
    pub const fn new(engine: TrajectoryEngine) -> Self {
        Self { engine }
    }

    /// Start a scan over the odd values `3, 5, ..., 2^k - 1`.
    ///
    /// Records are produced lazily, one per start value, in ascending order.
    pub fn scan(&self, bit_width: u32) -> DomainResult<Scan> {
        if bit_width == 0 {
            return Err(DomainError::InvalidBitWidth(bit_width));
        }

        let end = BigUint::one() << bit_width;
        debug!(bit_width, end = %end, "scan range prepared");

        Ok(Scan {
            engine: self.engine,
            bit_width,
            next: BigUint::from(FIRST_START),
            end,
        })
    }
}

/// Scan all odd `bit_width`-bit values with an unbounded engine.
pub fn scan(bit_width: u32) -> DomainResult<Scan> {
    ScanDriver::default().scan(bit_width)
}

/// Number of records a scan of `bit_width` yields: `2^(k-1) - 1`.
pub fn expected_record_count(bit_width: u32) -> BigUint {
    if bit_width == 0 {
        return BigUint::default();
    }
    (BigUint::one() << (bit_width - 1)) - 1u32
}

/// Lazy iterator of trajectory records for one scan
#[derive(Debug, Clone)]
pub struct Scan {
    engine: TrajectoryEngine,
    bit_width: u32,
    next: BigUint,
    end: BigUint,
}

impl Scan {
    pub const fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Records still to be produced, saturating at `u64::MAX`.
    pub fn remaining(&self) -> u64 {
        self.remaining_big().to_u64().unwrap_or(u64::MAX)
    }

    fn remaining_big(&self) -> BigUint {
        if self.next >= self.end {
            BigUint::default()
        } else {
            (&self.end - &self.next + 1u32) >> 1u32
        }
    }
}

impl Iterator for Scan {
    type Item = TrajectoryRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        // The cursor starts odd and advances by two
        let start = StartValue::new_unchecked(self.next.clone());
        self.next += 2u32;
        Some(self.engine.run(&start, self.bit_width, |_| {}))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_big().to_usize();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
