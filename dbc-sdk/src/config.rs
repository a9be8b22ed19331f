use std::time::Duration;

use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

use crate::core::ProgramAddresses;

/// SDK configuration for talking to the bonding curve program
#[derive(Clone, Debug)]
pub struct SdkConfig {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Commitment used for reads, preflight and confirmation
    pub commitment: CommitmentLevel,

    /// Timeout for a single RPC request
    pub request_timeout: Duration,

    /// How long to wait for a sent transaction to confirm
    pub confirm_timeout: Duration,

    /// Delay between signature status polls
    pub poll_interval: Duration,

    pub compute_unit_limit: u32,

    /// Priority fee in micro-lamports per compute unit
    pub compute_unit_price: u64,

    /// Program and fixed account addresses
    pub addresses: ProgramAddresses,
}

impl SdkConfig {
    fn with_url(rpc_url: &str) -> Self {
        Self {
            rpc_url: rpc_url.to_string(),
            commitment: CommitmentLevel::Confirmed,
            request_timeout: Duration::from_secs(30),
            confirm_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
            compute_unit_limit: 200_000,
            compute_unit_price: 1_000,
            addresses: ProgramAddresses::mainnet(),
        }
    }

    pub fn localnet() -> Self {
        Self::with_url("http://localhost:8899")
    }

    pub fn devnet() -> Self {
        Self::with_url("https://api.devnet.solana.com")
    }

    pub fn mainnet() -> Self {
        Self::with_url("https://api.mainnet-beta.solana.com")
    }

    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = url;
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.addresses = self.addresses.with_program_id(program_id);
        self
    }

    pub fn with_referral(mut self, referral_token_account: Pubkey) -> Self {
        self.addresses = self.addresses.with_referral(referral_token_account);
        self
    }

    pub fn with_compute_budget(mut self, unit_limit: u32, unit_price: u64) -> Self {
        self.compute_unit_limit = unit_limit;
        self.compute_unit_price = unit_price;
        self
    }

    pub fn with_confirm_timeout(mut self, timeout: Duration) -> Self {
        self.confirm_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Commitment as it appears in JSON-RPC request options
    pub fn commitment_str(&self) -> &'static str {
        match self.commitment {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        }
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DBC_PROGRAM_ID;

    #[test]
    fn test_presets_share_program_addresses() {
        for config in [SdkConfig::localnet(), SdkConfig::devnet(), SdkConfig::mainnet()] {
            assert_eq!(config.addresses.program_id, DBC_PROGRAM_ID);
            assert_eq!(config.commitment_str(), "confirmed");
        }
    }

    #[test]
    fn test_builders() {
        let referral = Pubkey::new_unique();
        let config = SdkConfig::localnet()
            .with_rpc_url("http://127.0.0.1:9000".to_string())
            .with_commitment(CommitmentLevel::Finalized)
            .with_referral(referral)
            .with_compute_budget(300_000, 5);

        assert_eq!(config.rpc_url, "http://127.0.0.1:9000");
        assert_eq!(config.commitment_str(), "finalized");
        assert_eq!(config.addresses.referral_token_account, referral);
        assert_eq!(config.compute_unit_limit, 300_000);
        assert_eq!(config.compute_unit_price, 5);
    }
}
