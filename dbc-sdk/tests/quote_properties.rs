use dbc_sdk::{
    instructions::InstructionBuilder,
    protocol::{quote_with, split_fees, CurveMath},
    CurvePoint, PoolConfig, PoolFees, PoolState, SwapDirection, SwapParams,
};
use proptest::prelude::*;
use solana_sdk::pubkey::Pubkey;

fn config(fees: PoolFees) -> PoolConfig {
    PoolConfig {
        quote_mint: Pubkey::new_unique(),
        fee_claimer: Pubkey::new_unique(),
        token_decimal: 9,
        collect_fee_mode: 0,
        activation_type: 0,
        migration_quote_threshold: 0,
        sqrt_start_price: 100,
        fees,
        curve: vec![
            CurvePoint::new(100, 1_000_000),
            CurvePoint::new(200, 2_000_000),
            CurvePoint::new(400, 500_000),
            CurvePoint::new(800, 0),
        ],
    }
}

fn state(sqrt_price: u128) -> PoolState {
    PoolState {
        config: Pubkey::new_unique(),
        pool: Pubkey::new_unique(),
        creator: Pubkey::new_unique(),
        base_mint: Pubkey::new_unique(),
        base_vault: Pubkey::new_unique(),
        quote_vault: Pubkey::new_unique(),
        base_reserve: 0,
        quote_reserve: 0,
        sqrt_price,
        is_migrated: false,
    }
}

fn direction() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![
        Just(SwapDirection::QuoteToBase),
        Just(SwapDirection::BaseToQuote)
    ]
}

proptest! {
    #[test]
    fn prop_payload_round_trip(amount_in: u64, minimum_amount_out: u64) {
        let params = SwapParams::new(amount_in, minimum_amount_out);
        let data = params.build_data().unwrap();
        prop_assert_eq!(data.len(), SwapParams::LEN);
        prop_assert_eq!(SwapParams::decode(&data).unwrap(), params);
    }

    #[test]
    fn prop_fee_shares_within_total(
        amount in any::<u64>(),
        numerator in 0u64..=1_000_000_000,
        protocol in 0u8..=100,
        referral in 0u8..=100,
    ) {
        let fees = PoolFees {
            cliff_fee_numerator: numerator,
            protocol_fee_percent: protocol,
            referral_fee_percent: referral,
        };
        let split = split_fees(amount, &fees).unwrap();
        prop_assert!(split.fee_total <= amount);
        prop_assert!(split.protocol_fee + split.referral_fee <= split.fee_total);
    }

    #[test]
    fn prop_fee_monotonic_in_amount(
        a in 0u64..1_000_000_000_000,
        b in 0u64..1_000_000_000_000,
        numerator in 0u64..=1_000_000_000,
    ) {
        let fees = PoolFees {
            cliff_fee_numerator: numerator,
            protocol_fee_percent: 20,
            referral_fee_percent: 20,
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            split_fees(low, &fees).unwrap().fee_total <= split_fees(high, &fees).unwrap().fee_total
        );
    }

    #[test]
    fn prop_output_non_increasing_in_fee(
        direction in direction(),
        amount in 0u64..2_000_000_000,
        a in 0u64..=1_000_000_000,
        b in 0u64..=1_000_000_000,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let with_fee = |numerator| {
            let config = config(PoolFees {
                cliff_fee_numerator: numerator,
                protocol_fee_percent: 50,
                referral_fee_percent: 10,
            });
            quote_with(CurveMath::UNSCALED, direction, amount, &state(300), &config).unwrap()
        };
        prop_assert!(with_fee(high).amount_out <= with_fee(low).amount_out);
    }

    #[test]
    fn prop_output_monotonic_in_input(
        direction in direction(),
        start in 100u128..800,
        a in 0u64..2_000_000_000,
        b in 0u64..2_000_000_000,
    ) {
        let config = config(PoolFees {
            cliff_fee_numerator: 10_000_000,
            protocol_fee_percent: 20,
            referral_fee_percent: 0,
        });
        let state = state(start);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low = quote_with(CurveMath::UNSCALED, direction, low, &state, &config).unwrap();
        let high = quote_with(CurveMath::UNSCALED, direction, high, &state, &config).unwrap();
        prop_assert!(low.amount_out <= high.amount_out);
    }

    #[test]
    fn prop_price_moves_with_direction(
        direction in direction(),
        start in 100u128..800,
        amount in 1u64..2_000_000_000,
    ) {
        let config = config(PoolFees::default());
        let quote = quote_with(CurveMath::UNSCALED, direction, amount, &state(start), &config)
            .unwrap();

        prop_assert!((100..=800).contains(&quote.ending_sqrt_price));
        match direction {
            SwapDirection::QuoteToBase => prop_assert!(quote.ending_sqrt_price >= start),
            SwapDirection::BaseToQuote => prop_assert!(quote.ending_sqrt_price <= start),
        }
        if quote.saturated {
            prop_assert!(quote.unconsumed_input > 0);
            prop_assert!(quote.unconsumed_input <= quote.net_input());
        }
    }
}
