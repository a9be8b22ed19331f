use thiserror::Error;

/// Failure to interpret raw account or instruction bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unexpected length: expected {expected} bytes, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },

    #[error("Invalid discriminator: expected {expected:02x?}, got {actual:02x?}")]
    InvalidDiscriminator { expected: [u8; 8], actual: [u8; 8] },
}

/// The pool's curve cannot be walked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("Curve needs at least two non-zero points, found {valid_points}")]
    Empty { valid_points: usize },

    #[error("Curve prices are not strictly increasing at point {index}")]
    NonMonotonic { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Amount {amount_in} is smaller than its fee {fee_total}")]
    AmountTooSmall { amount_in: u64, fee_total: u64 },

    #[error("Invalid {field}: {value} exceeds 100")]
    InvalidFeePercent { field: &'static str, value: u8 },

    #[error("Math overflow")]
    MathOverflow,

    #[error("Invalid sqrt price resolution: {0} bits, at most 64 supported")]
    InvalidResolution(u32),

    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Failed to decode account: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid curve: {0}")]
    Curve(#[from] CurveError),

    #[error("Quote failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Timed out: {0}")]
    Timeout(String),
}

pub type SdkResult<T> = Result<T, SdkError>;
