use solana_sdk::pubkey::Pubkey;

use super::{check_header, layout::pool_state as layout, read_pubkey, read_u128, read_u64, write_bytes};
use crate::core::DecodeError;

/// Live state of a bonding curve pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolState {
    /// Address of the owning `PoolConfig`
    pub config: Pubkey,
    /// Address of this pool account
    pub pool: Pubkey,
    pub creator: Pubkey,
    pub base_mint: Pubkey,
    pub base_vault: Pubkey,
    pub quote_vault: Pubkey,
    pub base_reserve: u64,
    pub quote_reserve: u64,
    /// Current Q64.64 sqrt price; the next trade walks the curve from here
    pub sqrt_price: u128,
    pub is_migrated: bool,
}

impl PoolState {
    pub const LEN: usize = layout::LEN;

    /// Decode the record stored at `pool`
    pub fn decode(pool: Pubkey, data: &[u8]) -> Result<Self, DecodeError> {
        check_header(data, layout::LEN, &layout::DISCRIMINATOR)?;

        Ok(Self {
            config: read_pubkey(data, layout::CONFIG),
            pool,
            creator: read_pubkey(data, layout::CREATOR),
            base_mint: read_pubkey(data, layout::BASE_MINT),
            base_vault: read_pubkey(data, layout::BASE_VAULT),
            quote_vault: read_pubkey(data, layout::QUOTE_VAULT),
            base_reserve: read_u64(data, layout::BASE_RESERVE),
            quote_reserve: read_u64(data, layout::QUOTE_RESERVE),
            sqrt_price: read_u128(data, layout::SQRT_PRICE),
            is_migrated: data[layout::IS_MIGRATED] != 0,
        })
    }

    /// Serialize the known fields into a full-size record; unknown bytes are zero
    pub fn encode(&self) -> Vec<u8> {
        let mut data = vec![0u8; layout::LEN];
        write_bytes(&mut data, 0, &layout::DISCRIMINATOR);
        write_bytes(&mut data, layout::CONFIG, self.config.as_ref());
        write_bytes(&mut data, layout::CREATOR, self.creator.as_ref());
        write_bytes(&mut data, layout::BASE_MINT, self.base_mint.as_ref());
        write_bytes(&mut data, layout::BASE_VAULT, self.base_vault.as_ref());
        write_bytes(&mut data, layout::QUOTE_VAULT, self.quote_vault.as_ref());
        write_bytes(&mut data, layout::BASE_RESERVE, &self.base_reserve.to_le_bytes());
        write_bytes(&mut data, layout::QUOTE_RESERVE, &self.quote_reserve.to_le_bytes());
        write_bytes(&mut data, layout::SQRT_PRICE, &self.sqrt_price.to_le_bytes());
        data[layout::IS_MIGRATED] = self.is_migrated as u8;
        data
    }
}
