use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::RngCore;
#[allow(deprecated)]
use solana_sdk::system_instruction;
use solana_sdk::{compute_budget::ComputeBudgetInstruction, instruction::Instruction};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};
use spl_token::instruction::{close_account, initialize_account};

use crate::{
    core::{SdkError, SdkResult, ACCOUNT_SPACE},
    prelude::*,
};

/// Random bytes behind an ephemeral seed; base64 turns 24 bytes into the
/// 32 characters `create_with_seed` allows
const SEED_BYTES: usize = 24;

/// Short-lived token account holding the quote side of a swap
///
/// Derived from the payer with a random seed so no extra signer is needed.
/// The account is opened at the start of a transaction and closed at the
/// end, returning its lamports to the payer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EphemeralQuoteAccount {
    payer: Pubkey,
    mint: Pubkey,
    token_program: Pubkey,
    seed: String,
    address: Pubkey,
}

impl EphemeralQuoteAccount {
    /// Derive an account with a fresh random seed
    pub fn generate(payer: Pubkey, mint: Pubkey, token_program: Pubkey) -> SdkResult<Self> {
        let mut bytes = [0u8; SEED_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::with_seed(payer, mint, token_program, URL_SAFE.encode(bytes))
    }

    pub fn with_seed(
        payer: Pubkey,
        mint: Pubkey,
        token_program: Pubkey,
        seed: String,
    ) -> SdkResult<Self> {
        let address = Pubkey::create_with_seed(&payer, &seed, &token_program)
            .map_err(|e| SdkError::InvalidParameters(format!("Invalid account seed: {e}")))?;
        Ok(Self {
            payer,
            mint,
            token_program,
            seed,
            address,
        })
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Allocate the account with `lamports` and initialize it for the quote mint
    pub fn open_instructions(&self, lamports: u64) -> SdkResult<Vec<Instruction>> {
        #[allow(deprecated)]
        let create = system_instruction::create_account_with_seed(
            &self.payer,
            &self.address,
            &self.payer,
            &self.seed,
            lamports,
            ACCOUNT_SPACE as u64,
            &self.token_program,
        );
        let initialize =
            initialize_account(&self.token_program, &self.address, &self.mint, &self.payer)
                .map_err(|e| SdkError::Serialization(e.to_string()))?;
        Ok(vec![create, initialize])
    }

    /// Close the account, sending every lamport it holds back to the payer
    pub fn close_instruction(&self) -> SdkResult<Instruction> {
        close_token_account(&self.token_program, &self.address, &self.payer)
    }

    /// Surround `inner` with the open and close instructions
    pub fn wrap(&self, lamports: u64, inner: Vec<Instruction>) -> SdkResult<Vec<Instruction>> {
        let mut instructions = self.open_instructions(lamports)?;
        instructions.extend(inner);
        instructions.push(self.close_instruction()?);
        Ok(instructions)
    }
}

/// Compute unit limit followed by compute unit price
pub fn compute_budget_instructions(unit_limit: u32, unit_price: u64) -> Vec<Instruction> {
    vec![
        ComputeBudgetInstruction::set_compute_unit_limit(unit_limit),
        ComputeBudgetInstruction::set_compute_unit_price(unit_price),
    ]
}

/// Associated token account for `owner`, plus an instruction that creates it if missing
pub fn associated_token_account(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> (Pubkey, Instruction) {
    let address = get_associated_token_address_with_program_id(owner, mint, token_program);
    let create = create_associated_token_account_idempotent(payer, owner, mint, token_program);
    (address, create)
}

/// Close a token account owned by `owner`, refunding rent to the owner
pub fn close_token_account(
    token_program: &Pubkey,
    account: &Pubkey,
    owner: &Pubkey,
) -> SdkResult<Instruction> {
    close_account(token_program, account, owner, owner, &[])
        .map_err(|e| SdkError::Serialization(e.to_string()))
}
