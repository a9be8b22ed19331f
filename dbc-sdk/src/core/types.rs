/// Which side of the pool the trader pays in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Pay quote, receive base (buy). Price rises.
    QuoteToBase,
    /// Pay base, receive quote (sell). Price falls.
    BaseToQuote,
}

impl SwapDirection {
    pub fn is_buy(&self) -> bool {
        matches!(self, SwapDirection::QuoteToBase)
    }
}

/// Result of quoting a swap against a pool snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_in: u64,
    pub amount_out: u64,
    /// Total fee charged on the input
    pub fee_total: u64,
    pub protocol_fee: u64,
    pub referral_fee: u64,
    pub ending_sqrt_price: u128,
    /// The curve ran out before the input was fully consumed
    pub saturated: bool,
    /// Net input left over when `saturated` is set
    pub unconsumed_input: u64,
}

impl SwapQuote {
    /// Input left after fees
    pub fn net_input(&self) -> u64 {
        self.amount_in - self.fee_total
    }
}
