pub mod ledger;
pub mod rpc;
pub mod swap;

use std::sync::Arc;

use crate::config::SdkConfig;

pub use ledger::{LedgerReader, TransactionSender};
pub use rpc::RpcClient;
pub use swap::{PoolSnapshot, SwapOutcome, SwapService};

/// Bonding curve client wired to a JSON-RPC node
pub struct DbcClient {
    /// RPC transport, shared by the services
    pub rpc: Arc<RpcClient>,
    /// Buy and sell flows
    pub swap: SwapService,
    config: SdkConfig,
}

impl DbcClient {
    pub fn new(config: SdkConfig) -> Self {
        let rpc = Arc::new(RpcClient::new(&config));
        Self {
            swap: SwapService::new(rpc.clone(), rpc.clone(), config.clone()),
            rpc,
            config,
        }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Get the RPC endpoint
    pub fn rpc_url(&self) -> &str {
        self.rpc.url()
    }
}
