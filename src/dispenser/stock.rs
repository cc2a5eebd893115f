//! Denomination stock.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts of available notes per denomination value.
///
/// Counts are unsigned and only ever decremented by a committed dispense, so
/// they can never go negative.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationStock {
    counts: BTreeMap<u32, u32>,
}

impl DenominationStock {
    /// Create an empty stock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stock holding `count` notes of each listed denomination.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cashpoint::dispenser::DenominationStock;
    ///
    /// let stock = DenominationStock::uniform(&[500, 100, 50], 50);
    /// assert_eq!(stock.count(100), 50);
    /// assert_eq!(stock.count(20), 0);
    /// ```
    pub fn uniform(denominations: &[u32], count: u32) -> Self {
        let counts = denominations.iter().map(|&d| (d, count)).collect();
        Self { counts }
    }

    /// Notes available for `denomination`; zero for unknown denominations.
    pub fn count(&self, denomination: u32) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Set the available count for a denomination.
    pub fn set_count(&mut self, denomination: u32, count: u32) {
        self.counts.insert(denomination, count);
    }

    /// Remove notes from stock. Saturates at zero.
    pub(crate) fn deduct(&mut self, denomination: u32, count: u32) {
        if let Some(available) = self.counts.get_mut(&denomination) {
            *available = available.saturating_sub(count);
        }
    }

    /// Total monetary value held, in minor units.
    pub fn total_value(&self) -> u64 {
        self.counts
            .iter()
            .map(|(&d, &c)| u64::from(d) * u64::from(c))
            .sum()
    }

    /// Iterate over `(denomination, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stocks_every_denomination() {
        let stock = DenominationStock::uniform(&[2000, 500, 10], 50);
        assert_eq!(stock.count(2000), 50);
        assert_eq!(stock.count(500), 50);
        assert_eq!(stock.count(10), 50);
    }

    #[test]
    fn unknown_denomination_counts_as_zero() {
        let stock = DenominationStock::new();
        assert_eq!(stock.count(500), 0);
    }

    #[test]
    fn deduct_reduces_count() {
        let mut stock = DenominationStock::uniform(&[100], 5);
        stock.deduct(100, 3);
        assert_eq!(stock.count(100), 2);
    }

    #[test]
    fn deduct_saturates_at_zero() {
        let mut stock = DenominationStock::uniform(&[100], 2);
        stock.deduct(100, 10);
        assert_eq!(stock.count(100), 0);
    }

    #[test]
    fn total_value_sums_all_denominations() {
        let stock = DenominationStock::uniform(&[500, 100], 2);
        assert_eq!(stock.total_value(), 1200);
    }
}
