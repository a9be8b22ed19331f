//! Account codec for the two records a swap reads

pub mod layout;
pub mod pool_config;
pub mod pool_state;

pub use pool_config::{CurvePoint, PoolConfig, PoolFees};
pub use pool_state::PoolState;

use crate::core::DecodeError;

/// Check length and discriminator before any field is touched
pub(crate) fn check_header(
    data: &[u8],
    expected_len: usize,
    discriminator: &[u8; 8],
) -> Result<(), DecodeError> {
    if data.len() != expected_len {
        return Err(DecodeError::UnexpectedLength {
            expected: expected_len,
            actual: data.len(),
        });
    }

    let actual: [u8; 8] = read_array(data, 0);
    if &actual != discriminator {
        return Err(DecodeError::InvalidDiscriminator {
            expected: *discriminator,
            actual,
        });
    }

    Ok(())
}

// Callers validate the record length before reading, so every slice below is in bounds.

pub(crate) fn read_array<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}

pub(crate) fn read_u64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(read_array(data, offset))
}

pub(crate) fn read_u128(data: &[u8], offset: usize) -> u128 {
    u128::from_le_bytes(read_array(data, offset))
}

pub(crate) fn read_pubkey(data: &[u8], offset: usize) -> solana_sdk::pubkey::Pubkey {
    solana_sdk::pubkey::Pubkey::new_from_array(read_array(data, offset))
}

pub(crate) fn write_bytes(data: &mut [u8], offset: usize, bytes: &[u8]) {
    data[offset..offset + bytes.len()].copy_from_slice(bytes);
}
