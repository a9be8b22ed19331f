//! Seams between the swap flows and the cluster

use std::time::Duration;

use async_trait::async_trait;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};

use crate::core::SdkResult;

/// Read access to accounts on the ledger
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Raw data of the account at `address`; `AccountNotFound` if it does not exist
    async fn get_account_bytes(&self, address: &Pubkey) -> SdkResult<Vec<u8>>;

    /// Token accounts held by `owner` for `mint`
    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> SdkResult<Vec<Pubkey>>;

    /// Raw token amount held by a token account
    async fn get_token_balance(&self, account: &Pubkey) -> SdkResult<u64>;

    async fn get_minimum_balance_for_rent_exemption(&self, space: usize) -> SdkResult<u64>;
}

/// Submission of signed transactions
#[async_trait]
pub trait TransactionSender: Send + Sync {
    /// Sign `instructions` with `payer` against a fresh blockhash and submit
    async fn send(&self, instructions: Vec<Instruction>, payer: &Keypair) -> SdkResult<Signature>;

    /// Wait up to `timeout` for the transaction to reach the configured commitment.
    /// Returns `false` if it did not land in time; a failed transaction is an error.
    async fn confirm(&self, signature: &Signature, timeout: Duration) -> SdkResult<bool>;
}
