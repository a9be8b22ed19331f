use crate::prelude::*;
use solana_sdk::instruction::{AccountMeta, Instruction};

use crate::core::{SdkError, SdkResult};

/// Trait for building instruction data with consistent patterns
pub trait InstructionBuilder: BorshSerialize {
    /// The 8-byte instruction discriminator
    const DISCRIMINATOR: [u8; 8];

    /// Build the instruction data (discriminator + serialized params)
    fn build_data(&self) -> SdkResult<Vec<u8>> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        data.extend_from_slice(
            &self
                .try_to_vec()
                .map_err(|e| SdkError::Serialization(e.to_string()))?,
        );
        Ok(data)
    }
}

/// Builder for instructions addressed to the bonding curve program
pub struct DbcInstructionBuilder {
    program_id: Pubkey,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
}

impl DbcInstructionBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            accounts: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Add a writable signer account
    pub fn add_signer(mut self, pubkey: Pubkey) -> Self {
        self.accounts.push(AccountMeta::new(pubkey, true));
        self
    }

    /// Add a writable non-signer account
    pub fn add_writable(mut self, pubkey: Pubkey) -> Self {
        self.accounts.push(AccountMeta::new(pubkey, false));
        self
    }

    /// Add a readonly account
    pub fn add_readonly(mut self, pubkey: Pubkey) -> Self {
        self.accounts.push(AccountMeta::new_readonly(pubkey, false));
        self
    }

    /// Set the instruction data
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Build the final instruction
    pub fn build(self) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: self.accounts,
            data: self.data,
        }
    }
}

/// Macro for implementing InstructionBuilder for a params struct
#[macro_export]
macro_rules! impl_instruction {
    ($name:ident, $discriminator:expr) => {
        impl $crate::instructions::InstructionBuilder for $name {
            const DISCRIMINATOR: [u8; 8] = $discriminator;
        }
    };
}
