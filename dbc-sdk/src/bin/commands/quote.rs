// Dry-run quoting

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dbc_sdk::DbcClient;
use solana_sdk::signer::Signer;

use super::utils::{build_config, info, load_keypair, parse_pubkey, print_quote};

#[derive(Args)]
pub struct QuoteCmd {
    #[command(subcommand)]
    command: QuoteSubcommand,
}

#[derive(Subcommand)]
enum QuoteSubcommand {
    /// Quote buying base with SOL
    Buy {
        /// Pool address
        #[arg(long)]
        pool: String,

        /// Amount of SOL to spend, e.g. 0.1
        #[arg(long)]
        amount: String,
    },

    /// Quote selling a percentage of the wallet's base tokens
    Sell {
        /// Pool address
        #[arg(long)]
        pool: String,

        /// Percentage of the balance to sell (1-100)
        #[arg(long, default_value = "100")]
        percentage: u8,
    },
}

pub async fn execute(
    cmd: QuoteCmd,
    rpc_url: &str,
    wallet_path: &str,
    program_id_str: Option<&str>,
) -> Result<()> {
    let client = DbcClient::new(build_config(rpc_url, program_id_str)?);

    match cmd.command {
        QuoteSubcommand::Buy { pool, amount } => {
            let pool = parse_pubkey(&pool)?;
            info(&format!("Quoting buy of {amount} SOL on {pool}"));
            let quote = client
                .swap
                .quote_buy(&pool, &amount)
                .await
                .context("Failed to quote buy")?;
            print_quote(&quote);
        }
        QuoteSubcommand::Sell { pool, percentage } => {
            let pool = parse_pubkey(&pool)?;
            let owner = load_keypair(wallet_path)?.pubkey();
            info(&format!("Quoting sell of {percentage}% on {pool}"));
            let quote = client
                .swap
                .quote_sell(&pool, &owner, percentage)
                .await
                .context("Failed to quote sell")?;
            print_quote(&quote);
        }
    }

    Ok(())
}
