//! Liquidity math for a single constant-liquidity segment
//!
//! With sqrt prices carrying `R` fractional bits and liquidity scaled the
//! same way, moving between `lower` and `upper` exchanges
//!
//! ```text
//! quote = L * (upper - lower) / 2^(2R)
//! base  = L * (upper - lower) / (lower * upper)
//! ```
//!
//! All products are taken in 256 bits. Amounts paid in round up, amounts
//! paid out round down.

use ethnum::U256;

use crate::core::{QuoteError, RESOLUTION};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Up,
    Down,
}

/// Fixed-point convention of the sqrt prices being walked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveMath {
    resolution: u32,
}

impl CurveMath {
    /// Q64.64, as stored on chain
    pub const Q64: Self = Self {
        resolution: RESOLUTION,
    };

    /// Plain integers: `quote = L * Δp`, `base = L * (1/p_lo - 1/p_hi)`
    pub const UNSCALED: Self = Self { resolution: 0 };

    pub fn new(resolution: u32) -> Result<Self, QuoteError> {
        if resolution > RESOLUTION {
            return Err(QuoteError::InvalidResolution(resolution));
        }
        Ok(Self { resolution })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    fn shift(&self) -> u32 {
        self.resolution * 2
    }

    /// Quote token moved between two prices
    pub fn quote_delta(&self, liquidity: u128, lower: u128, upper: u128, rounding: Rounding) -> U256 {
        let product = U256::from(liquidity) * U256::from(upper - lower);
        let shift = self.shift();
        match rounding {
            Rounding::Down => product >> shift,
            Rounding::Up => {
                let quotient = product >> shift;
                if shift > 0 && (quotient << shift) != product {
                    quotient + U256::ONE
                } else {
                    quotient
                }
            }
        }
    }

    /// Base token moved between two prices; `lower` must be non-zero
    pub fn base_delta(&self, liquidity: u128, lower: u128, upper: u128, rounding: Rounding) -> U256 {
        let numerator = U256::from(liquidity) * U256::from(upper - lower);
        let denominator = U256::from(lower) * U256::from(upper);
        div_rounding(numerator, denominator, rounding)
    }

    /// Price reached after paying `amount` quote into `liquidity` from `sqrt_price`.
    /// Rounds down so the trader never receives more than paid for.
    pub fn next_sqrt_price_from_quote(
        &self,
        sqrt_price: u128,
        liquidity: u128,
        amount: u64,
    ) -> Result<u128, QuoteError> {
        let delta = (U256::from(amount) << self.shift()) / U256::from(liquidity);
        to_u128(U256::from(sqrt_price) + delta)
    }

    /// Price reached after paying `amount` base into `liquidity` from `sqrt_price`.
    /// Rounds up so the trader never receives more than paid for.
    pub fn next_sqrt_price_from_base(
        &self,
        sqrt_price: u128,
        liquidity: u128,
        amount: u64,
    ) -> Result<u128, QuoteError> {
        let price = U256::from(sqrt_price);
        let liquidity = U256::from(liquidity);
        let numerator = liquidity * price;
        let denominator = liquidity + U256::from(amount) * price;
        to_u128(div_rounding(numerator, denominator, Rounding::Up))
    }
}

impl Default for CurveMath {
    fn default() -> Self {
        Self::Q64
    }
}

fn div_rounding(numerator: U256, denominator: U256, rounding: Rounding) -> U256 {
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Up if numerator % denominator != U256::ZERO => quotient + U256::ONE,
        _ => quotient,
    }
}

pub(crate) fn to_u128(value: U256) -> Result<u128, QuoteError> {
    if value > U256::from(u128::MAX) {
        return Err(QuoteError::MathOverflow);
    }
    Ok(value.as_u128())
}

pub(crate) fn to_u64(value: U256) -> Result<u64, QuoteError> {
    if value > U256::from(u64::MAX) {
        return Err(QuoteError::MathOverflow);
    }
    Ok(value.as_u64())
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q64: u128 = 1 << 64;

    #[test]
    fn test_unscaled_deltas() {
        let math = CurveMath::UNSCALED;
        assert_eq!(
            math.quote_delta(1_000_000, 100, 200, Rounding::Up),
            U256::from(100_000_000u64)
        );
        // 1e6 * 100 / (100 * 200) = 5000
        assert_eq!(
            math.base_delta(1_000_000, 100, 200, Rounding::Down),
            U256::from(5_000u64)
        );
        // 1e6 * 50 / (100 * 150) = 3333.33
        assert_eq!(
            math.base_delta(1_000_000, 100, 150, Rounding::Down),
            U256::from(3_333u64)
        );
        assert_eq!(
            math.base_delta(1_000_000, 100, 150, Rounding::Up),
            U256::from(3_334u64)
        );
    }

    #[test]
    fn test_q64_deltas() {
        // Price 1 -> 4 with one trillion units of liquidity
        let math = CurveMath::Q64;
        let liquidity = 1_000_000_000_000u128 * Q64;
        assert_eq!(
            math.quote_delta(liquidity, Q64, 2 * Q64, Rounding::Down),
            U256::from(1_000_000_000_000u64)
        );
        assert_eq!(
            math.base_delta(liquidity, Q64, 2 * Q64, Rounding::Down),
            U256::from(500_000_000_000u64)
        );
    }

    #[test]
    fn test_quote_delta_rounds_up_on_remainder() {
        let math = CurveMath::Q64;
        assert_eq!(math.quote_delta(1, Q64, Q64 + 1, Rounding::Down), U256::ZERO);
        assert_eq!(math.quote_delta(1, Q64, Q64 + 1, Rounding::Up), U256::ONE);
        assert_eq!(math.quote_delta(0, Q64, 2 * Q64, Rounding::Up), U256::ZERO);
    }

    #[test]
    fn test_next_sqrt_price_from_quote() {
        let math = CurveMath::UNSCALED;
        assert_eq!(
            math.next_sqrt_price_from_quote(100, 1_000_000, 50_000_000).unwrap(),
            150
        );
        // Rounds down
        assert_eq!(
            math.next_sqrt_price_from_quote(100, 1_000_000, 999_999).unwrap(),
            100
        );
    }

    #[test]
    fn test_next_sqrt_price_from_base() {
        let math = CurveMath::UNSCALED;
        // 1e6 * 200 / (1e6 + 2500 * 200) = 133.33 -> 134
        assert_eq!(
            math.next_sqrt_price_from_base(200, 1_000_000, 2_500).unwrap(),
            134
        );
        assert_eq!(math.next_sqrt_price_from_base(200, 1_000_000, 0).unwrap(), 200);
    }

    #[test]
    fn test_resolution_bound() {
        assert!(CurveMath::new(64).is_ok());
        assert_eq!(CurveMath::new(65), Err(QuoteError::InvalidResolution(65)));
    }
}
