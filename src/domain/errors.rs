//! Domain errors for the tail-collapse analysis.

use num_bigint::BigUint;
use thiserror::Error;

/// Precondition violations raised by the arithmetic core.
///
/// Every input the scan produces satisfies these by construction, so they
/// only surface for caller-supplied values (tracing a single number, or a
/// misconfigured bit width).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid bit width: {0}. Must be at least 1")]
    InvalidBitWidth(u32),

    #[error("Value must be positive, got 0")]
    ZeroValue,

    #[error("Value must be odd, got {0}")]
    EvenValue(BigUint),

    #[error("Start value {start} does not fit in {bit_width} bits")]
    StartExceedsWidth { start: BigUint, bit_width: u32 },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::InvalidBitWidth(0).to_string(),
            "Invalid bit width: 0. Must be at least 1"
        );
        assert_eq!(
            DomainError::EvenValue(BigUint::from(10u32)).to_string(),
            "Value must be odd, got 10"
        );
        assert_eq!(
            DomainError::StartExceedsWidth {
                start: BigUint::from(9u32),
                bit_width: 3,
            }
            .to_string(),
            "Start value 9 does not fit in 3 bits"
        );
    }
}
