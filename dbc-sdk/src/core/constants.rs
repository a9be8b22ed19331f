use solana_sdk::{pubkey, pubkey::Pubkey};

/// Dynamic Bonding Curve program
pub const DBC_PROGRAM_ID: Pubkey = pubkey!("dbcij3LWUppWqq96dh6gJWwBifmcGfLSB5D4DuSMaqN");
pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const POOL_AUTHORITY: Pubkey = pubkey!("FhVo3mqL8PW5pH5U2CN4XE33DokiyZnUwuGpH2hmHLuM");
pub const EVENT_AUTHORITY: Pubkey = pubkey!("8Ks12pbrD6PXxfty1hVQiE9sc289zgU1zHkvXhrSdriF");
/// The program accepts its own id in the referral slot to mean "no referrer"
pub const NO_REFERRAL_ACCOUNT: Pubkey = DBC_PROGRAM_ID;

/// Size of an SPL token account
pub const ACCOUNT_SPACE: usize = 165;

/// Denominator for `cliff_fee_numerator`
pub const FEE_DENOMINATOR: u64 = 1_000_000_000;
pub const MAX_FEE_PERCENT: u8 = 100;
pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

/// Fractional bits of the on-chain Q64.64 sqrt price
pub const RESOLUTION: u32 = 64;

/// Fixed addresses the swap instruction references
///
/// Kept in one table so that the instruction builder and the ephemeral
/// account helpers never embed literals of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramAddresses {
    pub program_id: Pubkey,
    pub pool_authority: Pubkey,
    pub event_authority: Pubkey,
    pub referral_token_account: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ProgramAddresses {
    pub const fn mainnet() -> Self {
        Self {
            program_id: DBC_PROGRAM_ID,
            pool_authority: POOL_AUTHORITY,
            event_authority: EVENT_AUTHORITY,
            referral_token_account: NO_REFERRAL_ACCOUNT,
            token_program: TOKEN_PROGRAM_ID,
            system_program: SYSTEM_PROGRAM_ID,
        }
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_referral(mut self, referral_token_account: Pubkey) -> Self {
        self.referral_token_account = referral_token_account;
        self
    }
}

impl Default for ProgramAddresses {
    fn default() -> Self {
        Self::mainnet()
    }
}
