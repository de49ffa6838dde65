//! Property-based tests for the change engine.
//!
//! - Property 3: Full Representation With a Unit Coin
//! - Property 4: Strictly Descending Steps
//! - Property 5: Determinism
//! - Property 6: Minimal Coin Count for US Coins

use proptest::prelude::*;

use super::engine::ChangeEngine;
use crate::currency::Coin;

/// Strategy to generate coin sets that always include a unit coin.
fn coins_with_unit() -> impl Strategy<Value = Vec<Coin>> {
    prop::collection::btree_set(2u64..500, 0..8).prop_map(|values| {
        std::iter::once(1)
            .chain(values)
            .map(|value| Coin::new(format!("c{value}"), value))
            .collect()
    })
}

/// Strategy to generate arbitrary coin sets (possibly without a unit coin).
fn any_coins() -> impl Strategy<Value = Vec<Coin>> {
    prop::collection::vec(1u64..500, 1..8).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Coin::new(format!("c{i}"), value))
            .collect()
    })
}

fn us_coins() -> Vec<Coin> {
    vec![
        Coin::new("Quarter", 25),
        Coin::new("Dime", 10),
        Coin::new("Nickel", 5),
        Coin::new("Penny", 1),
    ]
}

/// Minimum coin count by dynamic programming, for comparison.
fn optimal_coin_count(amount: u64, values: &[u64]) -> u64 {
    let amount = usize::try_from(amount).unwrap();
    let mut best = vec![u64::MAX; amount + 1];
    best[0] = 0;
    for total in 1..=amount {
        for &value in values {
            let value = usize::try_from(value).unwrap();
            if value <= total && best[total - value] != u64::MAX {
                best[total] = best[total].min(best[total - value] + 1);
            }
        }
    }
    best[amount]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 3: With a unit coin, the whole amount is always paid out.
    #[test]
    fn prop_unit_coin_represents_everything(
        amount in 0u64..1_000_000,
        coins in coins_with_unit(),
    ) {
        let change = ChangeEngine::make_change(amount, &coins);
        prop_assert_eq!(change.remainder, 0);
        prop_assert_eq!(change.total(), amount);
    }

    /// Property 3b: Without that guarantee, paid plus remainder still equals the amount.
    #[test]
    fn prop_paid_plus_remainder_is_amount(
        amount in 0u64..1_000_000,
        coins in any_coins(),
    ) {
        let change = ChangeEngine::make_change(amount, &coins);
        prop_assert_eq!(change.total() + change.remainder, amount);
        let smallest = coins.iter().map(|coin| coin.value).min().unwrap();
        prop_assert!(change.remainder < smallest);
    }

    /// Property 4: Step values strictly decrease and every count is positive.
    #[test]
    fn prop_steps_strictly_descending(
        amount in 0u64..1_000_000,
        coins in any_coins(),
    ) {
        let change = ChangeEngine::make_change(amount, &coins);
        for pair in change.steps.windows(2) {
            prop_assert!(pair[0].coin.value > pair[1].coin.value);
        }
        prop_assert!(change.steps.iter().all(|step| step.count >= 1));
    }

    /// Property 5: Identical inputs give identical outputs.
    #[test]
    fn prop_make_change_is_deterministic(
        amount in 0u64..1_000_000,
        coins in any_coins(),
    ) {
        prop_assert_eq!(
            ChangeEngine::make_change(amount, &coins),
            ChangeEngine::make_change(amount, &coins)
        );
    }

    /// Property 6: US coins are canonical, so greedy matches the optimum.
    #[test]
    fn prop_us_coins_minimal(amount in 0u64..1_000) {
        let change = ChangeEngine::make_change(amount, &us_coins());
        prop_assert_eq!(change.coin_count(), optimal_coin_count(amount, &[25, 10, 5, 1]));
    }
}
