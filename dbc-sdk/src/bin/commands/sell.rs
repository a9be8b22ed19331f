// Sell command

use anyhow::{Context, Result};
use clap::Args;
use dbc_sdk::DbcClient;

use super::utils::{build_config, info, load_keypair, parse_pubkey, report_outcome};

#[derive(Args)]
pub struct SellCmd {
    /// Pool address
    #[arg(long)]
    pool: String,

    /// Percentage of the balance to sell (1-100); 100 also closes the token account
    #[arg(long, default_value = "100")]
    percentage: u8,

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
    cmd: SellCmd,
    rpc_url: &str,
    wallet_path: &str,
    program_id_str: Option<&str>,
) -> Result<()> {
    let wallet = load_keypair(wallet_path)?;
    let pool = parse_pubkey(&cmd.pool)?;
    let config = build_config(rpc_url, program_id_str)?
        .with_compute_budget(cmd.unit_limit, cmd.unit_price);
    let client = DbcClient::new(config);

    info(&format!("Selling {}% on {}", cmd.percentage, pool));
    let outcome = client
        .swap
        .sell(&wallet, &pool, cmd.percentage, cmd.slippage_bps)
        .await
        .context("Sell failed")?;

    report_outcome(&outcome);
    Ok(())
}
