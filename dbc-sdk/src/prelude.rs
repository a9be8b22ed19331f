//! Prelude module for common imports

pub use borsh::{BorshDeserialize, BorshSerialize};
pub use solana_sdk::pubkey::Pubkey;
