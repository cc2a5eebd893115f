//! Cash dispensing.
//!
//! The dispenser solves a constrained decomposition problem: break a
//! requested amount into available notes, or report that no exact breakdown
//! exists. Infeasibility is an expected outcome, not an error, and commits
//! nothing.

mod greedy;
mod stock;

pub use greedy::{GreedyDispenser, STANDARD_DENOMINATIONS};
pub use stock::DenominationStock;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A number of notes of one denomination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Note face value in minor units.
    pub denomination: u32,
    /// How many notes.
    pub count: u32,
}

impl Bundle {
    /// Monetary value of the bundle.
    pub fn value(&self) -> u32 {
        self.denomination * self.count
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.denomination, self.count)
    }
}

/// A machine component that turns amounts into note bundles.
///
/// `dispense` returns the breakdown in descending denomination order, or
/// `None` when the amount cannot be decomposed with current stock. On `None`
/// the stock must be unchanged; on `Some` it must be decremented by exactly
/// the returned bundles. Implementations never panic on any amount.
pub trait CashDispenser {
    /// Dispense `amount`, committing stock on success.
    fn dispense(&mut self, amount: u32) -> Option<Vec<Bundle>>;

    /// Current stock, for inspection.
    fn stock(&self) -> &DenominationStock;
}

/// Render a breakdown as `"500x3 200x1 ..."` for receipts and logs.
pub fn format_breakdown(bundles: &[Bundle]) -> String {
    bundles
        .iter()
        .map(Bundle::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
