use solana_sdk::pubkey::Pubkey;

use super::{check_header, layout::pool_config as layout, read_pubkey, read_u128, read_u64, write_bytes};
use crate::{
    core::{CurveError, DecodeError},
    protocol::Curve,
};

/// One breakpoint of the liquidity distribution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurvePoint {
    pub sqrt_price: u128,
    pub liquidity: u128,
}

impl CurvePoint {
    pub fn new(sqrt_price: u128, liquidity: u128) -> Self {
        Self {
            sqrt_price,
            liquidity,
        }
    }
}

/// Fee parameters charged on swap input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolFees {
    /// Fee rate over `FEE_DENOMINATOR`
    pub cliff_fee_numerator: u64,
    pub protocol_fee_percent: u8,
    pub referral_fee_percent: u8,
}

/// Immutable per-pool configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub quote_mint: Pubkey,
    pub fee_claimer: Pubkey,
    /// Decimals of the quote token
    pub token_decimal: u8,
    pub collect_fee_mode: u8,
    pub activation_type: u8,
    pub migration_quote_threshold: u64,
    pub sqrt_start_price: u128,
    pub fees: PoolFees,
    /// Populated curve points, padding slots removed
    pub curve: Vec<CurvePoint>,
}

impl PoolConfig {
    pub const LEN: usize = layout::LEN;

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        check_header(data, layout::LEN, &layout::DISCRIMINATOR)?;

        let curve = (0..layout::CURVE_CAPACITY)
            .map(|i| {
                let offset = layout::CURVE + i * layout::CURVE_POINT_LEN;
                CurvePoint::new(read_u128(data, offset), read_u128(data, offset + 16))
            })
            .filter(|point| point.sqrt_price != 0)
            .collect();

        Ok(Self {
            quote_mint: read_pubkey(data, layout::QUOTE_MINT),
            fee_claimer: read_pubkey(data, layout::FEE_CLAIMER),
            token_decimal: data[layout::TOKEN_DECIMAL],
            collect_fee_mode: data[layout::COLLECT_FEE_MODE],
            activation_type: data[layout::ACTIVATION_TYPE],
            migration_quote_threshold: read_u64(data, layout::MIGRATION_QUOTE_THRESHOLD),
            sqrt_start_price: read_u128(data, layout::SQRT_START_PRICE),
            fees: PoolFees {
                cliff_fee_numerator: read_u64(data, layout::CLIFF_FEE_NUMERATOR),
                protocol_fee_percent: data[layout::PROTOCOL_FEE_PERCENT],
                referral_fee_percent: data[layout::REFERRAL_FEE_PERCENT],
            },
            curve,
        })
    }

    /// Serialize the known fields into a full-size record; unknown bytes are zero.
    /// Points beyond the on-chain capacity are dropped.
    pub fn encode(&self) -> Vec<u8> {
        let mut data = vec![0u8; layout::LEN];
        write_bytes(&mut data, 0, &layout::DISCRIMINATOR);
        write_bytes(&mut data, layout::QUOTE_MINT, self.quote_mint.as_ref());
        write_bytes(&mut data, layout::FEE_CLAIMER, self.fee_claimer.as_ref());
        write_bytes(
            &mut data,
            layout::CLIFF_FEE_NUMERATOR,
            &self.fees.cliff_fee_numerator.to_le_bytes(),
        );
        data[layout::PROTOCOL_FEE_PERCENT] = self.fees.protocol_fee_percent;
        data[layout::REFERRAL_FEE_PERCENT] = self.fees.referral_fee_percent;
        data[layout::COLLECT_FEE_MODE] = self.collect_fee_mode;
        data[layout::ACTIVATION_TYPE] = self.activation_type;
        data[layout::TOKEN_DECIMAL] = self.token_decimal;
        write_bytes(
            &mut data,
            layout::MIGRATION_QUOTE_THRESHOLD,
            &self.migration_quote_threshold.to_le_bytes(),
        );
        write_bytes(
            &mut data,
            layout::SQRT_START_PRICE,
            &self.sqrt_start_price.to_le_bytes(),
        );

        for (i, point) in self.curve.iter().take(layout::CURVE_CAPACITY).enumerate() {
            let offset = layout::CURVE + i * layout::CURVE_POINT_LEN;
            write_bytes(&mut data, offset, &point.sqrt_price.to_le_bytes());
            write_bytes(&mut data, offset + 16, &point.liquidity.to_le_bytes());
        }

        data
    }

    /// Build the walkable curve for this pool
    pub fn build_curve(&self) -> Result<Curve, CurveError> {
        Curve::new(&self.curve)
    }
}
