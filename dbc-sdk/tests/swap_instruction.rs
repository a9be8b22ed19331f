use dbc_sdk::{
    core::{DBC_PROGRAM_ID, EVENT_AUTHORITY, NO_REFERRAL_ACCOUNT, POOL_AUTHORITY, TOKEN_PROGRAM_ID},
    instructions::SWAP_DISCRIMINATOR,
    ProgramAddresses, SwapAccounts, SwapInstructionBuilder, SwapParams,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

fn accounts() -> SwapAccounts {
    SwapAccounts {
        config: Pubkey::new_unique(),
        pool: Pubkey::new_unique(),
        base_mint: Pubkey::new_unique(),
        quote_mint: Pubkey::new_unique(),
        base_vault: Pubkey::new_unique(),
        quote_vault: Pubkey::new_unique(),
        payer: Pubkey::new_unique(),
        base_token_account: Pubkey::new_unique(),
        quote_token_account: Pubkey::new_unique(),
    }
}

#[test]
fn test_buy_account_order() {
    let accounts = accounts();
    let builder = SwapInstructionBuilder::new(&ProgramAddresses::mainnet());
    let ix = builder
        .buy(&accounts, SwapParams::new(1_000_000, 900))
        .unwrap();

    assert_eq!(ix.program_id, DBC_PROGRAM_ID);
    assert_eq!(
        ix.accounts,
        vec![
            AccountMeta::new_readonly(POOL_AUTHORITY, false),
            AccountMeta::new_readonly(accounts.config, false),
            AccountMeta::new(accounts.pool, false),
            AccountMeta::new(accounts.quote_token_account, false),
            AccountMeta::new(accounts.base_token_account, false),
            AccountMeta::new(accounts.base_vault, false),
            AccountMeta::new(accounts.quote_vault, false),
            AccountMeta::new_readonly(accounts.base_mint, false),
            AccountMeta::new_readonly(accounts.quote_mint, false),
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(NO_REFERRAL_ACCOUNT, false),
            AccountMeta::new_readonly(EVENT_AUTHORITY, false),
            AccountMeta::new_readonly(DBC_PROGRAM_ID, false),
        ]
    );
}

#[test]
fn test_sell_swaps_token_account_slots() {
    let accounts = accounts();
    let builder = SwapInstructionBuilder::new(&ProgramAddresses::mainnet());
    let params = SwapParams::new(5_000, 0);
    let buy = builder.buy(&accounts, params).unwrap();
    let sell = builder.sell(&accounts, params).unwrap();

    assert_eq!(sell.accounts.len(), 15);
    assert_eq!(sell.accounts[3].pubkey, accounts.base_token_account);
    assert_eq!(sell.accounts[4].pubkey, accounts.quote_token_account);

    // Everything else is identical
    for i in (0..15).filter(|i| *i != 3 && *i != 4) {
        assert_eq!(buy.accounts[i], sell.accounts[i], "slot {i}");
    }
    assert_eq!(buy.data, sell.data);
}

#[test]
fn test_payload_bytes() {
    let ix = SwapInstructionBuilder::new(&ProgramAddresses::mainnet())
        .buy(&accounts(), SwapParams::new(100_000_000, 3_300))
        .unwrap();

    let mut expected = SWAP_DISCRIMINATOR.to_vec();
    expected.extend_from_slice(&100_000_000u64.to_le_bytes());
    expected.extend_from_slice(&3_300u64.to_le_bytes());
    assert_eq!(ix.data, expected);
    assert_eq!(
        SwapParams::decode(&ix.data).unwrap(),
        SwapParams::new(100_000_000, 3_300)
    );
}

#[test]
fn test_address_table_overrides() {
    let program_id = Pubkey::new_unique();
    let referral = Pubkey::new_unique();
    let addresses = ProgramAddresses::mainnet()
        .with_program_id(program_id)
        .with_referral(referral);

    let ix = SwapInstructionBuilder::new(&addresses)
        .sell(&accounts(), SwapParams::default())
        .unwrap();

    assert_eq!(ix.program_id, program_id);
    assert_eq!(ix.accounts[12].pubkey, referral);
    assert_eq!(ix.accounts[14].pubkey, program_id);
}
