//! Lightweight JSON-RPC client
//! Uses ureq instead of solana-client; blocking calls run on tokio's blocking pool

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use tracing::{debug, warn};

use crate::{
    client::{LedgerReader, TransactionSender},
    config::SdkConfig,
    core::{SdkError, SdkResult},
};

/// JSON-RPC implementation of the ledger seams
#[derive(Clone)]
pub struct RpcClient {
    agent: ureq::Agent,
    url: String,
    commitment: &'static str,
    request_timeout: Duration,
    poll_interval: Duration,
}

impl RpcClient {
    pub fn new(config: &SdkConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.request_timeout)
            .build();
        Self {
            agent,
            url: config.rpc_url.clone(),
            commitment: config.commitment_str(),
            request_timeout: config.request_timeout,
            poll_interval: config.poll_interval,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one JSON-RPC call and return its `result`
    async fn request(&self, method: &'static str, params: Value) -> SdkResult<Value> {
        let agent = self.agent.clone();
        let url = self.url.clone();
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        debug!(method, "rpc request");
        let call = tokio::task::spawn_blocking(move || call_blocking(&agent, &url, payload));
        tokio::time::timeout(self.request_timeout, call)
            .await
            .map_err(|_| SdkError::Timeout(format!("{method} did not respond")))?
            .map_err(|e| SdkError::Rpc(format!("{method} task failed: {e}")))?
            .map_err(|e| SdkError::Rpc(format!("{method}: {e}")))
    }

    pub async fn get_latest_blockhash(&self) -> SdkResult<Hash> {
        let result = self
            .request("getLatestBlockhash", json!([{ "commitment": self.commitment }]))
            .await?;
        result["value"]["blockhash"]
            .as_str()
            .ok_or_else(|| SdkError::Rpc("Invalid blockhash response".to_string()))?
            .parse()
            .map_err(|e| SdkError::Rpc(format!("Failed to parse blockhash: {e}")))
    }

    pub async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature> {
        let serialized =
            bincode::serialize(transaction).map_err(|e| SdkError::Serialization(e.to_string()))?;
        let result = self
            .request(
                "sendTransaction",
                json!([
                    STANDARD.encode(serialized),
                    {
                        "encoding": "base64",
                        "preflightCommitment": self.commitment,
                    }
                ]),
            )
            .await?;
        result
            .as_str()
            .ok_or_else(|| SdkError::Rpc("Invalid sendTransaction response".to_string()))?
            .parse()
            .map_err(|e| SdkError::Rpc(format!("Failed to parse signature: {e}")))
    }

    /// One status poll; `None` while the cluster has not seen the signature
    pub async fn get_signature_status(&self, signature: &Signature) -> SdkResult<Option<Value>> {
        let result = self
            .request(
                "getSignatureStatuses",
                json!([[signature.to_string()], { "searchTransactionHistory": true }]),
            )
            .await?;
        let status = &result["value"][0];
        Ok((!status.is_null()).then(|| status.clone()))
    }

    fn reached_commitment(&self, status: &Value) -> bool {
        let level = status["confirmationStatus"].as_str().unwrap_or_default();
        match self.commitment {
            "finalized" => level == "finalized",
            "confirmed" => matches!(level, "confirmed" | "finalized"),
            _ => !level.is_empty(),
        }
    }
}

fn call_blocking(agent: &ureq::Agent, url: &str, payload: Value) -> Result<Value, String> {
    let response = agent
        .post(url)
        .set("Content-Type", "application/json")
        .send_json(payload)
        .map_err(|e| e.to_string())?;
    let mut json: Value = response.into_json().map_err(|e| e.to_string())?;

    if let Some(error) = json.get("error") {
        return Err(error.to_string());
    }
    Ok(json.get_mut("result").map(Value::take).unwrap_or(Value::Null))
}

#[async_trait]
impl LedgerReader for RpcClient {
    async fn get_account_bytes(&self, address: &Pubkey) -> SdkResult<Vec<u8>> {
        let result = self
            .request(
                "getAccountInfo",
                json!([
                    address.to_string(),
                    { "encoding": "base64", "commitment": self.commitment }
                ]),
            )
            .await?;

        let value = &result["value"];
        if value.is_null() {
            return Err(SdkError::AccountNotFound(address.to_string()));
        }
        let encoded = value["data"][0]
            .as_str()
            .ok_or_else(|| SdkError::Rpc(format!("Invalid account data for {address}")))?;
        STANDARD
            .decode(encoded)
            .map_err(|e| SdkError::Serialization(format!("Account {address}: {e}")))
    }

    async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> SdkResult<Vec<Pubkey>> {
        let result = self
            .request(
                "getTokenAccountsByOwner",
                json!([
                    owner.to_string(),
                    { "mint": mint.to_string() },
                    { "encoding": "base64", "commitment": self.commitment }
                ]),
            )
            .await?;

        let accounts = result["value"]
            .as_array()
            .ok_or_else(|| SdkError::Rpc("Invalid token accounts response".to_string()))?;
        accounts
            .iter()
            .map(|entry| {
                entry["pubkey"]
                    .as_str()
                    .and_then(|key| key.parse().ok())
                    .ok_or_else(|| SdkError::Rpc(format!("Invalid token account entry: {entry}")))
            })
            .collect()
    }

    async fn get_token_balance(&self, account: &Pubkey) -> SdkResult<u64> {
        let result = self
            .request(
                "getTokenAccountBalance",
                json!([account.to_string(), { "commitment": self.commitment }]),
            )
            .await?;
        result["value"]["amount"]
            .as_str()
            .and_then(|amount| amount.parse().ok())
            .ok_or_else(|| SdkError::Rpc(format!("Invalid balance for {account}")))
    }

    async fn get_minimum_balance_for_rent_exemption(&self, space: usize) -> SdkResult<u64> {
        let result = self
            .request("getMinimumBalanceForRentExemption", json!([space]))
            .await?;
        result
            .as_u64()
            .ok_or_else(|| SdkError::Rpc("Invalid rent exemption response".to_string()))
    }
}

#[async_trait]
impl TransactionSender for RpcClient {
    async fn send(&self, instructions: Vec<Instruction>, payer: &Keypair) -> SdkResult<Signature> {
        let blockhash = self.get_latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        self.send_transaction(&transaction).await
    }

    async fn confirm(&self, signature: &Signature, timeout: Duration) -> SdkResult<bool> {
        let poll = async {
            loop {
                if let Some(status) = self.get_signature_status(signature).await? {
                    if !status["err"].is_null() {
                        return Err(SdkError::TransactionFailed(format!(
                            "{signature}: {}",
                            status["err"]
                        )));
                    }
                    if self.reached_commitment(&status) {
                        return Ok(());
                    }
                }
                tokio::time::sleep(self.poll_interval).await;
            }
        };

        match tokio::time::timeout(timeout, poll).await {
            Ok(result) => result.map(|()| true),
            Err(_) => {
                warn!(%signature, ?timeout, "transaction not confirmed in time");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(commitment: &'static str) -> RpcClient {
        let mut client = RpcClient::new(&SdkConfig::localnet());
        client.commitment = commitment;
        client
    }

    #[test]
    fn test_reached_commitment() {
        let confirmed = json!({ "confirmationStatus": "confirmed", "err": null });
        let processed = json!({ "confirmationStatus": "processed", "err": null });
        let finalized = json!({ "confirmationStatus": "finalized", "err": null });

        let rpc = client("confirmed");
        assert!(rpc.reached_commitment(&confirmed));
        assert!(rpc.reached_commitment(&finalized));
        assert!(!rpc.reached_commitment(&processed));

        let rpc = client("finalized");
        assert!(!rpc.reached_commitment(&confirmed));
        assert!(rpc.reached_commitment(&finalized));

        assert!(client("processed").reached_commitment(&processed));
    }

    #[tokio::test]
    async fn test_unreachable_node_is_rpc_error() {
        let config = SdkConfig::localnet().with_rpc_url("http://127.0.0.1:1".to_string());
        let rpc = RpcClient::new(&config);
        let result = rpc.get_account_bytes(&Pubkey::new_unique()).await;
        assert!(matches!(result, Err(SdkError::Rpc(_))));
    }
}
