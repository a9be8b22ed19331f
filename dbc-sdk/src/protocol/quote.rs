//! Swap quotation
//!
//! A quote takes the trading fee off the input and walks the remaining
//! amount across the curve segment by segment, starting from the pool's
//! current sqrt price. Quote-in trades move the price up, base-in trades
//! move it down. When the curve runs out the result saturates at the outer
//! boundary instead of failing; the leftover is reported on the quote.

use ethnum::U256;

use super::{
    curve::Curve,
    fees::split_fees,
    math::{to_u64, CurveMath, Rounding},
};
use crate::{
    core::{QuoteError, SwapDirection, SwapQuote},
    state::{PoolConfig, PoolState},
};

/// Quote a swap against the on-chain Q64.64 curve
pub fn quote(
    direction: SwapDirection,
    amount_in: u64,
    pool_state: &PoolState,
    pool_config: &PoolConfig,
) -> Result<SwapQuote, QuoteError> {
    quote_with(CurveMath::Q64, direction, amount_in, pool_state, pool_config)
}

/// Quote a swap using an explicit sqrt-price convention
pub fn quote_with(
    math: CurveMath,
    direction: SwapDirection,
    amount_in: u64,
    pool_state: &PoolState,
    pool_config: &PoolConfig,
) -> Result<SwapQuote, QuoteError> {
    let curve = pool_config.build_curve()?;
    let fees = split_fees(amount_in, &pool_config.fees)?;
    let net_input = amount_in - fees.fee_total;

    let walk = if net_input == 0 {
        // A zero amount leaves the pool price untouched; a fee-only trade still clamps
        let ending_sqrt_price = if amount_in == 0 {
            pool_state.sqrt_price
        } else {
            curve.clamp(pool_state.sqrt_price)
        };
        Walk {
            amount_out: 0,
            ending_sqrt_price,
            unconsumed: 0,
        }
    } else {
        match direction {
            SwapDirection::QuoteToBase => walk_up(math, &curve, pool_state.sqrt_price, net_input)?,
            SwapDirection::BaseToQuote => {
                walk_down(math, &curve, pool_state.sqrt_price, net_input)?
            }
        }
    };

    Ok(SwapQuote {
        amount_in,
        amount_out: walk.amount_out,
        fee_total: fees.fee_total,
        protocol_fee: fees.protocol_fee,
        referral_fee: fees.referral_fee,
        ending_sqrt_price: walk.ending_sqrt_price,
        saturated: walk.unconsumed > 0,
        unconsumed_input: walk.unconsumed,
    })
}

struct Walk {
    amount_out: u64,
    ending_sqrt_price: u128,
    unconsumed: u64,
}

/// Quote in, base out
fn walk_up(math: CurveMath, curve: &Curve, start: u128, amount: u64) -> Result<Walk, QuoteError> {
    let mut sqrt_price = curve.clamp(start);
    let mut remaining = amount;
    let mut amount_out = U256::ZERO;

    for segment in curve.segments().skip(curve.locate(sqrt_price)) {
        if remaining == 0 {
            break;
        }
        let upper = segment.upper_sqrt_price;
        if sqrt_price >= upper {
            continue;
        }
        if segment.liquidity == 0 {
            sqrt_price = upper;
            continue;
        }

        let max_in = math.quote_delta(segment.liquidity, sqrt_price, upper, Rounding::Up);
        if U256::from(remaining) < max_in {
            let target = math.next_sqrt_price_from_quote(sqrt_price, segment.liquidity, remaining)?;
            amount_out += math.base_delta(segment.liquidity, sqrt_price, target, Rounding::Down);
            sqrt_price = target;
            remaining = 0;
            break;
        }

        amount_out += math.base_delta(segment.liquidity, sqrt_price, upper, Rounding::Down);
        // max_in <= remaining here, so it fits
        remaining -= max_in.as_u64();
        sqrt_price = upper;
    }

    Ok(Walk {
        amount_out: to_u64(amount_out)?,
        ending_sqrt_price: sqrt_price,
        unconsumed: remaining,
    })
}

/// Base in, quote out
fn walk_down(math: CurveMath, curve: &Curve, start: u128, amount: u64) -> Result<Walk, QuoteError> {
    let mut sqrt_price = curve.clamp(start);
    let mut remaining = amount;
    let mut amount_out = U256::ZERO;

    let segments = curve.segments().take(curve.locate(sqrt_price) + 1).rev();
    for segment in segments {
        if remaining == 0 {
            break;
        }
        let lower = segment.lower_sqrt_price;
        if sqrt_price <= lower {
            continue;
        }
        if segment.liquidity == 0 {
            sqrt_price = lower;
            continue;
        }

        let max_in = math.base_delta(segment.liquidity, lower, sqrt_price, Rounding::Up);
        if U256::from(remaining) < max_in {
            let target = math.next_sqrt_price_from_base(sqrt_price, segment.liquidity, remaining)?;
            amount_out += math.quote_delta(segment.liquidity, target, sqrt_price, Rounding::Down);
            sqrt_price = target;
            remaining = 0;
            break;
        }

        amount_out += math.quote_delta(segment.liquidity, lower, sqrt_price, Rounding::Down);
        remaining -= max_in.as_u64();
        sqrt_price = lower;
    }

    Ok(Walk {
        amount_out: to_u64(amount_out)?,
        ending_sqrt_price: sqrt_price,
        unconsumed: remaining,
    })
}
