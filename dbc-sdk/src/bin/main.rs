// CLI tool for the Dynamic Bonding Curve program
//
// Quotes, buys and sells against a single bonding curve pool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dbc")]
#[command(about = "Dynamic Bonding Curve swap CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// RPC URL to connect to
    #[arg(long, env = "DBC_RPC_URL", default_value = "https://api.mainnet-beta.solana.com")]
    rpc_url: String,

    /// Path to wallet keypair file
    #[arg(long, env = "DBC_WALLET", default_value = "~/.config/solana/id.json")]
    wallet: String,

    /// Program ID (defaults to the mainnet deployment)
    #[arg(long)]
    program_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a buy or sell without sending anything
    Quote(commands::quote::QuoteCmd),

    /// Buy base tokens with SOL
    Buy(commands::buy::BuyCmd),

    /// Sell a percentage of held base tokens for SOL
    Sell(commands::sell::SellCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Quote(cmd) => {
            commands::quote::execute(cmd, &cli.rpc_url, &cli.wallet, cli.program_id.as_deref())
                .await
        }
        Commands::Buy(cmd) => {
            commands::buy::execute(cmd, &cli.rpc_url, &cli.wallet, cli.program_id.as_deref())
                .await
        }
        Commands::Sell(cmd) => {
            commands::sell::execute(cmd, &cli.rpc_url, &cli.wallet, cli.program_id.as_deref())
                .await
        }
    }
}
