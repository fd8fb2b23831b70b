//! Binary and numeric formatters for report rows.

use num_bigint::BigUint;

use crate::domain::models::bit_length;

/// Binary digits of `value`, left-padded with zeros to `width`.
///
/// Values wider than `width` are printed in full.
pub fn padded_binary(value: &BigUint, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Width used for an ending value column: at least the scan width `k`.
pub fn row_binary_width(value: &BigUint, bit_width: u32) -> usize {
    let needed = usize::try_from(bit_length(value)).unwrap_or(usize::MAX);
    needed.max(bit_width as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_binary() {
        assert_eq!(padded_binary(&BigUint::from(3u32), 4), "0011");
        assert_eq!(padded_binary(&BigUint::from(1u32), 1), "1");
        assert_eq!(padded_binary(&BigUint::from(17u32), 3), "10001");
    }

    #[test]
    fn test_row_binary_width() {
        assert_eq!(row_binary_width(&BigUint::from(1u32), 4), 4);
        assert_eq!(row_binary_width(&BigUint::from(17u32), 4), 5);
    }
}
