//! Greedy cash dispenser.

use super::stock::DenominationStock;
use super::{Bundle, CashDispenser};

/// The standard note ladder, largest first, in minor units.
pub const STANDARD_DENOMINATIONS: [u32; 7] = [2000, 500, 200, 100, 50, 20, 10];

/// Dispenser that decomposes amounts greedily, largest denomination first.
///
/// Greedy decomposition is not optimal for arbitrary denomination sets, but
/// is exact for the canonical ladder used here; it is deliberately not a
/// general change-making solver.
///
/// A dispense is all-or-nothing: the plan is computed against current stock
/// without touching it, and stock is decremented only once the plan covers
/// the full amount. An infeasible request leaves stock untouched.
///
/// # Example
///
/// ```rust
/// use cashpoint::dispenser::{CashDispenser, GreedyDispenser};
///
/// let mut dispenser = GreedyDispenser::with_standard_ladder(50);
/// let bundles = dispenser.dispense(1860).expect("feasible amount");
///
/// let total: u32 = bundles.iter().map(|b| b.value()).sum();
/// assert_eq!(total, 1860);
/// assert_eq!(dispenser.stock().count(500), 47);
///
/// // 15 has no decomposition in this ladder; stock stays put.
/// assert!(dispenser.dispense(15).is_none());
/// assert_eq!(dispenser.stock().count(500), 47);
/// ```
#[derive(Clone, Debug)]
pub struct GreedyDispenser {
    denominations: Vec<u32>,
    stock: DenominationStock,
}

impl GreedyDispenser {
    /// Create a dispenser over the given denominations and stock.
    ///
    /// Denominations are sorted descending; duplicates are removed.
    pub fn new(denominations: &[u32], stock: DenominationStock) -> Self {
        let mut denominations: Vec<u32> = denominations.to_vec();
        denominations.sort_unstable_by(|a, b| b.cmp(a));
        denominations.dedup();
        Self {
            denominations,
            stock,
        }
    }

    /// Create a dispenser over the standard ladder with `count` notes of each.
    pub fn with_standard_ladder(count: u32) -> Self {
        Self::new(
            &STANDARD_DENOMINATIONS,
            DenominationStock::uniform(&STANDARD_DENOMINATIONS, count),
        )
    }

    /// The denomination ladder, descending.
    pub fn denominations(&self) -> &[u32] {
        &self.denominations
    }

    /// Compute the greedy plan for `amount` without mutating stock.
    ///
    /// Returns `None` when no exact decomposition exists.
    fn plan(&self, amount: u32) -> Option<Vec<Bundle>> {
        let mut remaining = amount;
        let mut bundles = Vec::new();

        for &denomination in &self.denominations {
            let wanted = remaining / denomination;
            let take = wanted.min(self.stock.count(denomination));
            if take > 0 {
                bundles.push(Bundle {
                    denomination,
                    count: take,
                });
                remaining -= take * denomination;
            }
        }

        if remaining == 0 {
            Some(bundles)
        } else {
            None
        }
    }
}

impl CashDispenser for GreedyDispenser {
    fn dispense(&mut self, amount: u32) -> Option<Vec<Bundle>> {
        if amount == 0 {
            return None;
        }
        let bundles = self.plan(amount)?;
        for bundle in &bundles {
            self.stock.deduct(bundle.denomination, bundle.count);
        }
        Some(bundles)
    }

    fn stock(&self) -> &DenominationStock {
        &self.stock
    }
}
