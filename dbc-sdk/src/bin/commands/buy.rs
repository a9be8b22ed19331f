// Buy command

use anyhow::{Context, Result};
use clap::Args;
use dbc_sdk::DbcClient;

use super::utils::{build_config, info, load_keypair, parse_pubkey, report_outcome};

#[derive(Args)]
pub struct BuyCmd {
    /// Pool address
    #[arg(long)]
    pool: String,

    /// Amount of SOL to spend, e.g. 0.1
    #[arg(long)]
    amount: String,

    /// Accepted slippage in basis points
    #[arg(long, default_value = "100")]
    slippage_bps: u16,

    /// Compute unit limit
    #[arg(long, default_value = "200000")]
    unit_limit: u32,

    /// Priority fee in micro-lamports per compute unit
    #[arg(long, default_value = "1000")]
    unit_price: u64,
}

pub async fn execute(
    cmd: BuyCmd,
    rpc_url: &str,
    wallet_path: &str,
    program_id_str: Option<&str>,
) -> Result<()> {
    let wallet = load_keypair(wallet_path)?;
    let pool = parse_pubkey(&cmd.pool)?;
    let config = build_config(rpc_url, program_id_str)?
        .with_compute_budget(cmd.unit_limit, cmd.unit_price);
    let client = DbcClient::new(config);

    info(&format!("Buying with {} SOL on {}", cmd.amount, pool));
    let outcome = client
        .swap
        .buy(&wallet, &pool, &cmd.amount, cmd.slippage_bps)
        .await
        .context("Buy failed")?;

    report_outcome(&outcome);
    Ok(())
}
