use crate::prelude::*;
use solana_sdk::instruction::Instruction;

use crate::{
    core::{DecodeError, ProgramAddresses, SdkResult, SwapDirection},
    impl_instruction,
    instructions::{DbcInstructionBuilder, InstructionBuilder},
    state::{check_header, read_u64, PoolConfig, PoolState},
};

/// `sha256("global:swap")[..8]`
pub const SWAP_DISCRIMINATOR: [u8; 8] = [0xf8, 0xc6, 0x9e, 0x91, 0xe1, 0x75, 0x87, 0xc8];

/// Parameters for swap
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapParams {
    pub amount_in: u64,
    pub minimum_amount_out: u64,
}

impl_instruction!(SwapParams, SWAP_DISCRIMINATOR);

impl SwapParams {
    /// Discriminator plus two little-endian u64s
    pub const LEN: usize = 24;

    pub fn new(amount_in: u64, minimum_amount_out: u64) -> Self {
        Self {
            amount_in,
            minimum_amount_out,
        }
    }

    /// Parse swap instruction data back into its parameters
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        check_header(data, Self::LEN, &SWAP_DISCRIMINATOR)?;
        Ok(Self {
            amount_in: read_u64(data, 8),
            minimum_amount_out: read_u64(data, 16),
        })
    }
}

/// Pool-specific and trader-specific swap accounts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapAccounts {
    pub config: Pubkey,
    pub pool: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub base_vault: Pubkey,
    pub quote_vault: Pubkey,
    pub payer: Pubkey,
    pub base_token_account: Pubkey,
    pub quote_token_account: Pubkey,
}

impl SwapAccounts {
    /// Collect the pool side from decoded records
    pub fn from_pool(
        state: &PoolState,
        config: &PoolConfig,
        payer: Pubkey,
        base_token_account: Pubkey,
        quote_token_account: Pubkey,
    ) -> Self {
        Self {
            config: state.config,
            pool: state.pool,
            base_mint: state.base_mint,
            quote_mint: config.quote_mint,
            base_vault: state.base_vault,
            quote_vault: state.quote_vault,
            payer,
            base_token_account,
            quote_token_account,
        }
    }
}

/// Swap instruction builder
pub struct SwapInstructionBuilder {
    addresses: ProgramAddresses,
}

impl SwapInstructionBuilder {
    pub fn new(addresses: &ProgramAddresses) -> Self {
        Self {
            addresses: *addresses,
        }
    }

    /// Pay quote, receive base
    pub fn buy(&self, accounts: &SwapAccounts, params: SwapParams) -> SdkResult<Instruction> {
        self.swap(SwapDirection::QuoteToBase, accounts, params)
    }

    /// Pay base, receive quote
    pub fn sell(&self, accounts: &SwapAccounts, params: SwapParams) -> SdkResult<Instruction> {
        self.swap(SwapDirection::BaseToQuote, accounts, params)
    }

    /// Build the swap instruction; the direction only decides which token
    /// account is debited and which is credited.
    pub fn swap(
        &self,
        direction: SwapDirection,
        accounts: &SwapAccounts,
        params: SwapParams,
    ) -> SdkResult<Instruction> {
        let (input_account, output_account) = match direction {
            SwapDirection::QuoteToBase => {
                (accounts.quote_token_account, accounts.base_token_account)
            }
            SwapDirection::BaseToQuote => {
                (accounts.base_token_account, accounts.quote_token_account)
            }
        };

        let addresses = &self.addresses;
        Ok(DbcInstructionBuilder::new(addresses.program_id)
            .add_readonly(addresses.pool_authority)
            .add_readonly(accounts.config)
            .add_writable(accounts.pool)
            .add_writable(input_account)
            .add_writable(output_account)
            .add_writable(accounts.base_vault)
            .add_writable(accounts.quote_vault)
            .add_readonly(accounts.base_mint)
            .add_readonly(accounts.quote_mint)
            .add_signer(accounts.payer)
            // Input and output token programs
            .add_readonly(addresses.token_program)
            .add_readonly(addresses.token_program)
            .add_readonly(addresses.referral_token_account)
            .add_readonly(addresses.event_authority)
            .add_readonly(addresses.program_id)
            .with_data(params.build_data()?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_layout() {
        let data = SwapParams::new(0x0102_0304_0506_0708, 42).build_data().unwrap();
        assert_eq!(data.len(), SwapParams::LEN);
        assert_eq!(&data[..8], &SWAP_DISCRIMINATOR);
        assert_eq!(&data[8..16], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(&data[16..], &42u64.to_le_bytes());
    }

    #[test]
    fn test_payload_decode() {
        let params = SwapParams::new(1_000_000, 990_000);
        let data = params.build_data().unwrap();
        assert_eq!(SwapParams::decode(&data).unwrap(), params);

        assert_eq!(
            SwapParams::decode(&data[..23]),
            Err(DecodeError::UnexpectedLength {
                expected: 24,
                actual: 23,
            })
        );

        let mut wrong = data.clone();
        wrong[7] = 0;
        assert!(matches!(
            SwapParams::decode(&wrong),
            Err(DecodeError::InvalidDiscriminator { .. })
        ));
    }
}
