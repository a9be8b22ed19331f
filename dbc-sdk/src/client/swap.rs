use std::sync::Arc;

use solana_sdk::{
    instruction::Instruction,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::{debug, info};

use crate::{
    client::{LedgerReader, TransactionSender},
    config::SdkConfig,
    core::{SdkError, SdkResult, SwapDirection, SwapQuote, ACCOUNT_SPACE},
    instructions::{
        associated_token_account, close_token_account, compute_budget_instructions,
        EphemeralQuoteAccount, SwapAccounts, SwapInstructionBuilder, SwapParams,
    },
    prelude::*,
    protocol::{minimum_amount_out, quote, ui_amount_to_raw},
    state::{PoolConfig, PoolState},
};

/// Decoded pool records as of one read
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub state: PoolState,
    pub config: PoolConfig,
}

/// Result of a submitted swap
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    pub signature: Signature,
    /// Quote the minimum output was derived from
    pub quote: SwapQuote,
    /// Whether the transaction reached the configured commitment in time
    pub confirmed: bool,
}

struct PreparedSwap {
    snapshot: PoolSnapshot,
    quote: SwapQuote,
    base_account: Pubkey,
    /// Idempotent create for the base account when the payer has none yet
    create_base_account: Option<Instruction>,
}

/// Service for buy and sell flows against a single pool
pub struct SwapService {
    ledger: Arc<dyn LedgerReader>,
    sender: Arc<dyn TransactionSender>,
    config: SdkConfig,
    swap_builder: SwapInstructionBuilder,
}

impl SwapService {
    pub fn new(
        ledger: Arc<dyn LedgerReader>,
        sender: Arc<dyn TransactionSender>,
        config: SdkConfig,
    ) -> Self {
        Self {
            swap_builder: SwapInstructionBuilder::new(&config.addresses),
            ledger,
            sender,
            config,
        }
    }

    /// Fetch and decode the pool state, then the config it points to
    pub async fn load_pool(&self, pool: &Pubkey) -> SdkResult<PoolSnapshot> {
        let state = PoolState::decode(*pool, &self.ledger.get_account_bytes(pool).await?)?;
        let config = PoolConfig::decode(&self.ledger.get_account_bytes(&state.config).await?)?;
        debug!(
            %pool,
            config = %state.config,
            sqrt_price = state.sqrt_price,
            points = config.curve.len(),
            "loaded pool"
        );
        Ok(PoolSnapshot { state, config })
    }

    /// Quote buying with `quote_amount` (a decimal string in quote token units)
    pub async fn quote_buy(&self, pool: &Pubkey, quote_amount: &str) -> SdkResult<SwapQuote> {
        let snapshot = self.load_pool(pool).await?;
        let amount_in = self.buy_amount(&snapshot, quote_amount)?;
        Ok(quote(
            SwapDirection::QuoteToBase,
            amount_in,
            &snapshot.state,
            &snapshot.config,
        )?)
    }

    /// Quote selling `percentage` of `owner`'s base balance
    pub async fn quote_sell(
        &self,
        pool: &Pubkey,
        owner: &Pubkey,
        percentage: u8,
    ) -> SdkResult<SwapQuote> {
        check_percentage(percentage)?;
        let snapshot = self.load_pool(pool).await?;
        let base_account = self.existing_base_account(owner, &snapshot).await?;
        let amount_in = self.sell_amount(base_account, percentage).await?;
        Ok(quote(
            SwapDirection::BaseToQuote,
            amount_in,
            &snapshot.state,
            &snapshot.config,
        )?)
    }

    /// Buy base with `quote_amount` of the quote token
    pub async fn buy(
        &self,
        payer: &Keypair,
        pool: &Pubkey,
        quote_amount: &str,
        slippage_bps: u16,
    ) -> SdkResult<SwapOutcome> {
        let owner = payer.pubkey();
        let snapshot = self.load_pool(pool).await?;
        let amount_in = self.buy_amount(&snapshot, quote_amount)?;
        let quote = quote(
            SwapDirection::QuoteToBase,
            amount_in,
            &snapshot.state,
            &snapshot.config,
        )?;

        let (base_account, create_base_account) =
            match self.find_base_account(&owner, &snapshot).await? {
                Some(account) => (account, None),
                None => {
                    let (account, create) = associated_token_account(
                        &owner,
                        &owner,
                        &snapshot.state.base_mint,
                        &self.config.addresses.token_program,
                    );
                    (account, Some(create))
                }
            };

        let prepared = PreparedSwap {
            snapshot,
            quote,
            base_account,
            create_base_account,
        };

        // The ephemeral account carries the quote being spent on top of its rent
        let rent = self
            .ledger
            .get_minimum_balance_for_rent_exemption(ACCOUNT_SPACE)
            .await?;
        let lamports = rent
            .checked_add(amount_in)
            .ok_or_else(|| SdkError::InvalidParameters("Buy amount too large".to_string()))?;

        self.execute(
            payer,
            SwapDirection::QuoteToBase,
            prepared,
            lamports,
            slippage_bps,
            false,
        )
        .await
    }

    /// Sell `percentage` (1..=100) of the payer's base balance.
    /// Selling everything also closes the base token account.
    pub async fn sell(
        &self,
        payer: &Keypair,
        pool: &Pubkey,
        percentage: u8,
        slippage_bps: u16,
    ) -> SdkResult<SwapOutcome> {
        check_percentage(percentage)?;
        let owner = payer.pubkey();
        let snapshot = self.load_pool(pool).await?;
        let base_account = self.existing_base_account(&owner, &snapshot).await?;
        let amount_in = self.sell_amount(base_account, percentage).await?;
        let quote = quote(
            SwapDirection::BaseToQuote,
            amount_in,
            &snapshot.state,
            &snapshot.config,
        )?;

        let prepared = PreparedSwap {
            snapshot,
            quote,
            base_account,
            create_base_account: None,
        };
        let rent = self
            .ledger
            .get_minimum_balance_for_rent_exemption(ACCOUNT_SPACE)
            .await?;

        self.execute(
            payer,
            SwapDirection::BaseToQuote,
            prepared,
            rent,
            slippage_bps,
            percentage == 100,
        )
        .await
    }

    async fn execute(
        &self,
        payer: &Keypair,
        direction: SwapDirection,
        prepared: PreparedSwap,
        ephemeral_lamports: u64,
        slippage_bps: u16,
        close_base_account: bool,
    ) -> SdkResult<SwapOutcome> {
        let owner = payer.pubkey();
        let PreparedSwap {
            snapshot,
            quote,
            base_account,
            create_base_account,
        } = prepared;
        let addresses = &self.config.addresses;

        let minimum_out = minimum_amount_out(quote.amount_out, slippage_bps)?;
        let ephemeral = EphemeralQuoteAccount::generate(
            owner,
            snapshot.config.quote_mint,
            addresses.token_program,
        )?;
        let accounts = SwapAccounts::from_pool(
            &snapshot.state,
            &snapshot.config,
            owner,
            base_account,
            ephemeral.address(),
        );
        let swap = self.swap_builder.swap(
            direction,
            &accounts,
            SwapParams::new(quote.amount_in, minimum_out),
        )?;

        let mut instructions =
            compute_budget_instructions(self.config.compute_unit_limit, self.config.compute_unit_price);
        instructions.extend(create_base_account);
        instructions.extend(ephemeral.wrap(ephemeral_lamports, vec![swap])?);
        if close_base_account {
            instructions.push(close_token_account(
                &addresses.token_program,
                &base_account,
                &owner,
            )?);
        }

        info!(
            pool = %snapshot.state.pool,
            ?direction,
            amount_in = quote.amount_in,
            expected_out = quote.amount_out,
            minimum_out,
            fee = quote.fee_total,
            saturated = quote.saturated,
            "sending swap"
        );

        let signature = self.sender.send(instructions, payer).await?;
        info!(%signature, "swap sent");

        let confirmed = self
            .sender
            .confirm(&signature, self.config.confirm_timeout)
            .await?;
        info!(%signature, confirmed, "swap finished");

        Ok(SwapOutcome {
            signature,
            quote,
            confirmed,
        })
    }

    fn buy_amount(&self, snapshot: &PoolSnapshot, quote_amount: &str) -> SdkResult<u64> {
        check_native_quote(&snapshot.config)?;
        let amount = ui_amount_to_raw(quote_amount, snapshot.config.token_decimal)?;
        if amount == 0 {
            return Err(SdkError::InvalidParameters(
                "Buy amount must be greater than zero".to_string(),
            ));
        }
        Ok(amount)
    }

    async fn sell_amount(&self, base_account: Pubkey, percentage: u8) -> SdkResult<u64> {
        let balance = self.ledger.get_token_balance(&base_account).await?;
        if balance == 0 {
            return Err(SdkError::InvalidParameters(format!(
                "No base tokens to sell in {base_account}"
            )));
        }
        let amount = (balance as u128 * percentage as u128 / 100) as u64;
        if amount == 0 {
            return Err(SdkError::InvalidParameters(format!(
                "{percentage}% of {balance} rounds to zero"
            )));
        }
        Ok(amount)
    }

    async fn find_base_account(
        &self,
        owner: &Pubkey,
        snapshot: &PoolSnapshot,
    ) -> SdkResult<Option<Pubkey>> {
        let accounts = self
            .ledger
            .get_token_accounts_by_owner(owner, &snapshot.state.base_mint)
            .await?;
        Ok(accounts.first().copied())
    }

    async fn existing_base_account(
        &self,
        owner: &Pubkey,
        snapshot: &PoolSnapshot,
    ) -> SdkResult<Pubkey> {
        check_native_quote(&snapshot.config)?;
        self.find_base_account(owner, snapshot).await?.ok_or_else(|| {
            SdkError::InvalidParameters(format!(
                "{owner} holds no {} tokens",
                snapshot.state.base_mint
            ))
        })
    }
}

fn check_percentage(percentage: u8) -> SdkResult<()> {
    if !(1..=100).contains(&percentage) {
        return Err(SdkError::InvalidParameters(format!(
            "Percentage must be between 1 and 100, got {percentage}"
        )));
    }
    Ok(())
}

// Ephemeral accounts hold the quote side as wrapped SOL; any other quote
// mint would leave a token balance behind and the close would fail.
fn check_native_quote(config: &PoolConfig) -> SdkResult<()> {
    if config.quote_mint != spl_token::native_mint::id() {
        return Err(SdkError::InvalidParameters(format!(
            "Only SOL-quoted pools are supported, quote mint is {}",
            config.quote_mint
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_bounds() {
        assert!(check_percentage(0).is_err());
        assert!(check_percentage(1).is_ok());
        assert!(check_percentage(100).is_ok());
        assert!(check_percentage(101).is_err());
    }
}
