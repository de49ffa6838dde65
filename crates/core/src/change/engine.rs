//! Greedy change-making engine.
//!
//! The engine walks the coins from the largest value down and takes as many
//! of each as fit into what is still owed. For canonical coin systems (US,
//! euro, sterling, yen) this yields the fewest coins possible.

use crate::currency::Coin;

/// One line of change: a coin and how many of it to hand back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStep {
    /// The coin to hand back.
    pub coin: Coin,
    /// How many of it. Always at least 1.
    pub count: u64,
}

impl ChangeStep {
    /// Value of this step in minor units.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.coin.value * self.count
    }
}

/// Ordered change instructions, largest coin first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeInstructions {
    /// Steps in strictly descending coin value.
    pub steps: Vec<ChangeStep>,
    /// Minor units the coins could not represent. Zero for canonical coin sets.
    pub remainder: u64,
}

impl ChangeInstructions {
    /// Total minor units paid out across all steps.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.steps.iter().map(ChangeStep::subtotal).sum()
    }

    /// Total number of coins handed back.
    #[must_use]
    pub fn coin_count(&self) -> u64 {
        self.steps.iter().map(|step| step.count).sum()
    }

    /// Returns true if the whole amount was represented.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.remainder == 0
    }

    /// Returns true if no coins are handed back.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Engine for computing change.
pub struct ChangeEngine;

impl ChangeEngine {
    /// Splits `amount` minor units into coins, largest value first.
    ///
    /// Coin order in `coins` does not matter. Coins that would be used zero
    /// times are omitted. Whatever cannot be represented is left in
    /// [`ChangeInstructions::remainder`]; with a coin worth 1 that is always 0.
    ///
    /// # Example
    ///
    /// ```
    /// use changemaker_core::change::ChangeEngine;
    /// use changemaker_core::currency::Coin;
    ///
    /// let coins = [
    ///     Coin::new("Penny", 1),
    ///     Coin::new("Nickel", 5),
    ///     Coin::new("Dime", 10),
    ///     Coin::new("Quarter", 25),
    /// ];
    /// let change = ChangeEngine::make_change(41, &coins);
    /// assert_eq!(change.coin_count(), 4);
    /// assert_eq!(change.steps[0].coin.name, "Quarter");
    /// ```
    #[must_use]
    pub fn make_change(amount: u64, coins: &[Coin]) -> ChangeInstructions {
        let mut ordered: Vec<&Coin> = coins.iter().collect();
        // Stable, so equal values keep input order.
        ordered.sort_by(|a, b| b.value.cmp(&a.value));

        let mut remaining = amount;
        let mut steps = Vec::new();
        for coin in ordered {
            if coin.value == 0 {
                continue;
            }
            let count = remaining / coin.value;
            if count > 0 {
                remaining -= count * coin.value;
                steps.push(ChangeStep {
                    coin: coin.clone(),
                    count,
                });
            }
        }

        ChangeInstructions {
            steps,
            remainder: remaining,
        }
    }
}
