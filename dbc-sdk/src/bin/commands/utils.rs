// Utility functions for CLI commands

use anyhow::{Context, Result};
use dbc_sdk::{SdkConfig, SwapOutcome, SwapQuote};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::str::FromStr;

/// Load a keypair from a file path, expanding ~ if needed
pub fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded_path = if path.starts_with('~') {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        path.replacen('~', &home, 1)
    } else {
        path.to_string()
    };

    read_keypair_file(&expanded_path)
        .map_err(|e| anyhow::anyhow!("Failed to load keypair from {}: {}", expanded_path, e))
}

/// Parse a pubkey from string
pub fn parse_pubkey(s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).with_context(|| format!("Invalid public key: {s}"))
}

/// Client configuration for the given endpoint and optional program override
pub fn build_config(rpc_url: &str, program_id: Option<&str>) -> Result<SdkConfig> {
    let mut config = SdkConfig::mainnet().with_rpc_url(rpc_url.to_string());
    if let Some(id) = program_id {
        config = config.with_program_id(parse_pubkey(id)?);
    }
    Ok(config)
}

pub fn print_quote(quote: &SwapQuote) {
    info(&format!("Amount in:      {}", quote.amount_in));
    info(&format!("Expected out:   {}", quote.amount_out));
    info(&format!(
        "Fees:           {} (protocol {}, referral {})",
        quote.fee_total, quote.protocol_fee, quote.referral_fee
    ));
    info(&format!("End sqrt price: {}", quote.ending_sqrt_price));
    if quote.saturated {
        warn(&format!(
            "Curve exhausted, {} of the input would not be used",
            quote.unconsumed_input
        ));
    }
}

pub fn report_outcome(outcome: &SwapOutcome) {
    print_quote(&outcome.quote);
    if outcome.confirmed {
        success(&format!("Transaction confirmed: {}", outcome.signature));
    } else {
        warn(&format!(
            "Transaction sent but not confirmed in time: {}",
            outcome.signature
        ));
    }
}

/// Print success message with checkmark
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

/// Print warning message
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}
