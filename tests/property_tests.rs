//! Property-based tests for the dispenser, ledger, and session legality table.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use cashpoint::core::{Action, AtmState, Transaction, TransactionKind};
use cashpoint::dispenser::{
    Bundle, CashDispenser, DenominationStock, GreedyDispenser, STANDARD_DENOMINATIONS,
};
use cashpoint::ledger::TransactionLedger;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> AtmState {
        match variant {
            0 => AtmState::Idle,
            1 => AtmState::CardInserted,
            _ => AtmState::Authenticated,
        }
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..7usize) -> Action {
        Action::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_stock()(counts in prop::collection::vec(0..60u32, 7)) -> DenominationStock {
        let mut stock = DenominationStock::new();
        for (&denomination, count) in STANDARD_DENOMINATIONS.iter().zip(counts) {
            stock.set_count(denomination, count);
        }
        stock
    }
}

fn breakdown_total(bundles: &[Bundle]) -> u64 {
    bundles.iter().map(|b| u64::from(b.value())).sum()
}

proptest! {
    #[test]
    fn legality_table_is_deterministic(state in arbitrary_state(), action in arbitrary_action()) {
        prop_assert_eq!(state.allows(action), state.allows(action));
    }

    #[test]
    fn eject_is_always_legal(state in arbitrary_state()) {
        prop_assert!(state.allows(Action::EjectCard));
    }

    #[test]
    fn dispense_is_deterministic(stock in arbitrary_stock(), amount in 1..5000u32) {
        let mut first = GreedyDispenser::new(&STANDARD_DENOMINATIONS, stock.clone());
        let mut second = GreedyDispenser::new(&STANDARD_DENOMINATIONS, stock);
        prop_assert_eq!(first.dispense(amount), second.dispense(amount));
    }

    #[test]
    fn dispensed_bundles_sum_to_the_amount(stock in arbitrary_stock(), amount in 1..5000u32) {
        let mut dispenser = GreedyDispenser::new(&STANDARD_DENOMINATIONS, stock);
        if let Some(bundles) = dispenser.dispense(amount) {
            prop_assert_eq!(breakdown_total(&bundles), u64::from(amount));
        }
    }

    #[test]
    fn infeasible_dispense_leaves_stock_bit_for_bit_unchanged(
        stock in arbitrary_stock(),
        amount in 1..5000u32,
    ) {
        let mut dispenser = GreedyDispenser::new(&STANDARD_DENOMINATIONS, stock.clone());
        if dispenser.dispense(amount).is_none() {
            prop_assert_eq!(dispenser.stock(), &stock);
        }
    }

    #[test]
    fn successful_dispense_removes_exactly_the_dispensed_notes(
        stock in arbitrary_stock(),
        amount in 1..5000u32,
    ) {
        let mut dispenser = GreedyDispenser::new(&STANDARD_DENOMINATIONS, stock.clone());
        if let Some(bundles) = dispenser.dispense(amount) {
            for &denomination in &STANDARD_DENOMINATIONS {
                let taken = bundles
                    .iter()
                    .find(|b| b.denomination == denomination)
                    .map_or(0, |b| b.count);
                prop_assert_eq!(
                    dispenser.stock().count(denomination),
                    stock.count(denomination) - taken
                );
            }
        }
    }

    #[test]
    fn breakdown_is_in_descending_denomination_order(
        stock in arbitrary_stock(),
        amount in 1..5000u32,
    ) {
        let mut dispenser = GreedyDispenser::new(&STANDARD_DENOMINATIONS, stock);
        if let Some(bundles) = dispenser.dispense(amount) {
            for pair in bundles.windows(2) {
                prop_assert!(pair[0].denomination > pair[1].denomination);
            }
        }
    }

    #[test]
    fn ledger_last_n_preserves_recording_order(
        amounts in prop::collection::vec(1..10_000u32, 1..20),
        n in 0..30usize,
    ) {
        let mut ledger = TransactionLedger::new();
        for &amount in &amounts {
            let tx = Transaction::new(TransactionKind::Deposit, amount, "").unwrap();
            ledger.record(tx).unwrap();
        }

        let recent = ledger.last_n(n);
        prop_assert_eq!(recent.len(), n.min(amounts.len()));

        let expected = &amounts[amounts.len() - recent.len()..];
        for (tx, &amount) in recent.iter().zip(expected) {
            prop_assert_eq!(tx.amount(), amount);
        }
    }
}
