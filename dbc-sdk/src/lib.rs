//! Dynamic Bonding Curve SDK
//!
//! Client-side toolkit for the Dynamic Bonding Curve program:
//! - decoding pool configuration and pool state accounts
//! - quoting swaps by walking the piecewise liquidity curve
//! - building the swap instruction for buys and sells
//! - orchestrating full buy/sell transactions against an RPC node

pub mod client;
pub mod config;
pub mod core;
pub mod instructions;
pub mod prelude;
pub mod protocol;
pub mod state;

pub use client::{DbcClient, LedgerReader, RpcClient, SwapOutcome, SwapService, TransactionSender};
pub use config::SdkConfig;
pub use crate::core::{
    CurveError, DecodeError, ProgramAddresses, QuoteError, SdkError, SdkResult, SwapDirection,
    SwapQuote,
};
pub use instructions::{SwapAccounts, SwapInstructionBuilder, SwapParams};
pub use protocol::{quote, quote_with, Curve, CurveMath, Segment};
pub use state::{CurvePoint, PoolConfig, PoolFees, PoolState};
