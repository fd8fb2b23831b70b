//! The odd-step map and its trailing-zero counter.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::StepResult;

/// 2-adic valuation of `n`: how many times it divides by 2 before turning odd.
///
/// Zero has no finite valuation and is rejected.
pub fn trailing_zeros(n: &BigUint) -> DomainResult<u64> {
    n.trailing_zeros().ok_or(DomainError::ZeroValue)
}

/// Apply `n -> (3n + 1) / 2^v` where `v` strips every trailing zero.
///
/// # Examples
///
/// ```
/// use collatz_tail::services::odd_step::apply_step;
/// use num_bigint::BigUint;
///
/// let step = apply_step(&BigUint::from(5u32)).unwrap();
/// assert_eq!(step.next_value, BigUint::from(1u32));
/// assert_eq!(step.zeros_removed, 4);
/// ```
pub fn apply_step(n: &BigUint) -> DomainResult<StepResult> {
    if n.is_zero() {
        return Err(DomainError::ZeroValue);
    }
    if n.is_even() {
        return Err(DomainError::EvenValue(n.clone()));
    }
    Ok(step_odd(n))
}

/// Odd-step map for a value already known to be odd and positive.
pub(crate) fn step_odd(n: &BigUint) -> StepResult {
    let lifted = n * 3u32 + 1u32;
    // 3n + 1 is even and nonzero for odd n
    let zeros_removed = lifted.trailing_zeros().unwrap_or_default();
    StepResult {
        next_value: lifted >> zeros_removed,
        zeros_removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_trailing_zeros_known_values() {
        assert_eq!(trailing_zeros(&big(4)), Ok(2));
        assert_eq!(trailing_zeros(&big(6)), Ok(1));
        assert_eq!(trailing_zeros(&big(1)), Ok(0));
        assert_eq!(trailing_zeros(&big(1 << 40)), Ok(40));
    }

    #[test]
    fn test_trailing_zeros_rejects_zero() {
        assert_eq!(trailing_zeros(&big(0)), Err(DomainError::ZeroValue));
    }

    #[test]
    fn test_apply_step_three() {
        let step = apply_step(&big(3)).unwrap();
        assert_eq!(step.next_value, big(5));
        assert_eq!(step.zeros_removed, 1);
    }

    #[test]
    fn test_apply_step_five() {
        let step = apply_step(&big(5)).unwrap();
        assert_eq!(step.next_value, big(1));
        assert_eq!(step.zeros_removed, 4);
    }

    #[test]
    fn test_apply_step_one_is_fixed_point() {
        let step = apply_step(&big(1)).unwrap();
        assert_eq!(step.next_value, big(1));
        assert_eq!(step.zeros_removed, 2);
    }

    #[test]
    fn test_apply_step_rejects_even_and_zero() {
        assert_eq!(apply_step(&big(0)), Err(DomainError::ZeroValue));
        assert_eq!(apply_step(&big(12)), Err(DomainError::EvenValue(big(12))));
    }

    #[test]
    fn test_apply_step_beyond_machine_words() {
        // 2^100 - 1 steps to 3 * 2^99 - 1 with a single zero removed
        let n = (BigUint::from(1u32) << 100u32) - 1u32;
        let step = apply_step(&n).unwrap();
        let expected = (BigUint::from(3u32) << 99u32) - 1u32;
        assert_eq!(step.next_value, expected);
        assert_eq!(step.zeros_removed, 1);
    }
}
