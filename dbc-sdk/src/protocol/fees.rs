use crate::{
    core::{QuoteError, SdkError, SdkResult, FEE_DENOMINATOR, MAX_FEE_PERCENT, MAX_SLIPPAGE_BPS},
    state::PoolFees,
};

/// Fees taken from a swap's input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub fee_total: u64,
    pub protocol_fee: u64,
    pub referral_fee: u64,
}

impl FeeBreakdown {
    /// Share left to liquidity providers
    pub fn lp_fee(&self) -> u64 {
        self.fee_total - self.protocol_fee - self.referral_fee
    }
}

/// Split the trading fee charged on `amount_in`.
///
/// The referral share is carved out of the protocol share, so
/// `protocol_fee + referral_fee <= fee_total` for any valid percentages.
pub fn split_fees(amount_in: u64, fees: &PoolFees) -> Result<FeeBreakdown, QuoteError> {
    check_percent("protocol_fee_percent", fees.protocol_fee_percent)?;
    check_percent("referral_fee_percent", fees.referral_fee_percent)?;

    let fee_total =
        amount_in as u128 * fees.cliff_fee_numerator as u128 / FEE_DENOMINATOR as u128;
    if fee_total > amount_in as u128 {
        return Err(QuoteError::AmountTooSmall {
            amount_in,
            fee_total: u64::try_from(fee_total).unwrap_or(u64::MAX),
        });
    }
    let fee_total = fee_total as u64;

    let protocol_share = percent_of(fee_total, fees.protocol_fee_percent);
    let referral_fee = percent_of(protocol_share, fees.referral_fee_percent);

    Ok(FeeBreakdown {
        fee_total,
        protocol_fee: protocol_share - referral_fee,
        referral_fee,
    })
}

fn check_percent(field: &'static str, value: u8) -> Result<(), QuoteError> {
    if value > MAX_FEE_PERCENT {
        return Err(QuoteError::InvalidFeePercent { field, value });
    }
    Ok(())
}

fn percent_of(amount: u64, percent: u8) -> u64 {
    (amount as u128 * percent as u128 / 100) as u64
}

/// Lowest acceptable output after allowing `slippage_bps` of movement
pub fn minimum_amount_out(amount: u64, slippage_bps: u16) -> SdkResult<u64> {
    if slippage_bps > MAX_SLIPPAGE_BPS {
        return Err(SdkError::InvalidParameters(
            "Slippage cannot exceed 100%".to_string(),
        ));
    }

    let factor = (MAX_SLIPPAGE_BPS - slippage_bps) as u128;
    Ok((amount as u128 * factor / MAX_SLIPPAGE_BPS as u128) as u64)
}

/// Convert a decimal token amount (e.g. "0.25") into raw units.
///
/// Rejects negatives, more fractional digits than `decimals`, and overflow.
pub fn ui_amount_to_raw(amount: &str, decimals: u8) -> SdkResult<u64> {
    let invalid = || SdkError::InvalidParameters(format!("Invalid token amount: {amount:?}"));

    let trimmed = amount.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return Err(invalid());
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > decimals as usize {
        return Err(invalid());
    }

    let scale = 10u64.checked_pow(decimals as u32).ok_or_else(invalid)?;
    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        padded.parse().map_err(|_| invalid())?
    };

    whole
        .checked_mul(scale)
        .and_then(|raw| raw.checked_add(fraction))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fees(numerator: u64, protocol: u8, referral: u8) -> PoolFees {
        PoolFees {
            cliff_fee_numerator: numerator,
            protocol_fee_percent: protocol,
            referral_fee_percent: referral,
        }
    }

    #[test]
    fn test_fee_split() {
        // 1% fee, 20% of it to protocol, 20% of that to the referrer
        let split = split_fees(1_000_000, &fees(10_000_000, 20, 20)).unwrap();
        assert_eq!(split.fee_total, 10_000);
        assert_eq!(split.referral_fee, 400);
        assert_eq!(split.protocol_fee, 1_600);
        assert_eq!(split.lp_fee(), 8_000);
    }

    #[test]
    fn test_fee_floors() {
        let split = split_fees(99, &fees(10_000_000, 50, 50)).unwrap();
        assert_eq!(split.fee_total, 0);
        assert_eq!(split.protocol_fee, 0);

        let split = split_fees(150, &fees(10_000_000, 50, 0)).unwrap();
        assert_eq!(split.fee_total, 1);
        assert_eq!(split.protocol_fee, 0);
    }

    #[test]
    fn test_full_percentages_stay_within_total() {
        let split = split_fees(1_000_000_000, &fees(25_000_000, 100, 100)).unwrap();
        assert_eq!(split.fee_total, 25_000_000);
        assert_eq!(split.protocol_fee + split.referral_fee, split.fee_total);
        assert_eq!(split.lp_fee(), 0);
    }

    #[test]
    fn test_degenerate_fee_rejected() {
        assert_eq!(
            split_fees(1_000, &fees(2 * FEE_DENOMINATOR, 0, 0)),
            Err(QuoteError::AmountTooSmall {
                amount_in: 1_000,
                fee_total: 2_000,
            })
        );
        // A 100% fee is still a valid (if useless) trade
        assert_eq!(
            split_fees(1_000, &fees(FEE_DENOMINATOR, 0, 0)).unwrap().fee_total,
            1_000
        );
    }

    #[test]
    fn test_invalid_percent_rejected() {
        assert_eq!(
            split_fees(1_000, &fees(0, 101, 0)),
            Err(QuoteError::InvalidFeePercent {
                field: "protocol_fee_percent",
                value: 101,
            })
        );
        assert!(split_fees(1_000, &fees(0, 0, 200)).is_err());
    }

    #[test]
    fn test_minimum_amount_out() {
        assert_eq!(minimum_amount_out(1_000, 100).unwrap(), 990);
        assert_eq!(minimum_amount_out(1_000, 0).unwrap(), 1_000);
        assert_eq!(minimum_amount_out(1_000, 10_000).unwrap(), 0);
        assert!(minimum_amount_out(1_000, 10_001).is_err());
    }

    #[test]
    fn test_ui_amount_to_raw() {
        assert_eq!(ui_amount_to_raw("0.1", 9).unwrap(), 100_000_000);
        assert_eq!(ui_amount_to_raw("1", 6).unwrap(), 1_000_000);
        assert_eq!(ui_amount_to_raw(".5", 2).unwrap(), 50);
        assert_eq!(ui_amount_to_raw("3.", 2).unwrap(), 300);
        assert_eq!(ui_amount_to_raw(" +2.25 ", 2).unwrap(), 225);
        assert_eq!(ui_amount_to_raw("7", 0).unwrap(), 7);

        assert!(ui_amount_to_raw("", 9).is_err());
        assert!(ui_amount_to_raw(".", 9).is_err());
        assert!(ui_amount_to_raw("-1", 9).is_err());
        assert!(ui_amount_to_raw("0.123", 2).is_err());
        assert!(ui_amount_to_raw("1.2.3", 9).is_err());
        assert!(ui_amount_to_raw("abc", 9).is_err());
        assert!(ui_amount_to_raw("18446744073709551616", 0).is_err());
        assert!(ui_amount_to_raw("1", 20).is_err());
    }
}
