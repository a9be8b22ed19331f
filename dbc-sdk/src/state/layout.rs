//! Byte offsets of the on-chain records
//!
//! Both accounts are zero-copy Anchor accounts: an 8-byte discriminator
//! (`sha256("account:<Name>")[..8]`) followed by `repr(C)` fields in
//! little-endian order. Only the fields the SDK consumes are listed.

/// `PoolConfig` account
pub mod pool_config {
    pub const DISCRIMINATOR: [u8; 8] = [26, 108, 14, 123, 116, 230, 129, 43];
    pub const LEN: usize = 1048;

    pub const QUOTE_MINT: usize = 8;
    pub const FEE_CLAIMER: usize = 40;
    // pool_fees.base_fee.cliff_fee_numerator
    pub const CLIFF_FEE_NUMERATOR: usize = 104;
    pub const PROTOCOL_FEE_PERCENT: usize = 230;
    pub const REFERRAL_FEE_PERCENT: usize = 231;
    pub const COLLECT_FEE_MODE: usize = 232;
    pub const ACTIVATION_TYPE: usize = 234;
    pub const TOKEN_DECIMAL: usize = 235;
    pub const MIGRATION_QUOTE_THRESHOLD: usize = 264;
    pub const SQRT_START_PRICE: usize = 392;

    /// `[LiquidityDistributionConfig; CURVE_CAPACITY]`, each `(sqrt_price: u128, liquidity: u128)`
    pub const CURVE: usize = 408;
    pub const CURVE_CAPACITY: usize = 20;
    pub const CURVE_POINT_LEN: usize = 32;

    const _: () = assert!(CURVE + CURVE_CAPACITY * CURVE_POINT_LEN == LEN);
}

/// `VirtualPool` account
pub mod pool_state {
    pub const DISCRIMINATOR: [u8; 8] = [213, 224, 5, 209, 98, 69, 119, 92];
    pub const LEN: usize = 424;

    // 8..72 is the volatility tracker
    pub const CONFIG: usize = 72;
    pub const CREATOR: usize = 104;
    pub const BASE_MINT: usize = 136;
    pub const BASE_VAULT: usize = 168;
    pub const QUOTE_VAULT: usize = 200;
    pub const BASE_RESERVE: usize = 232;
    pub const QUOTE_RESERVE: usize = 240;
    pub const SQRT_PRICE: usize = 280;
    pub const IS_MIGRATED: usize = 305;

    const _: () = assert!(SQRT_PRICE + 16 <= LEN);
}
