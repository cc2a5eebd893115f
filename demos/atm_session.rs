//! A full ATM session against the in-memory bank.
//!
//! Walks the canonical sequence: insert card, authenticate, withdraw 1860
//! (exercising the greedy note decomposition), print a mini statement, change
//! the PIN, deposit, and eject.
//!
//! Run with: cargo run --example atm_session

use std::sync::Arc;

use cashpoint::bank::InMemoryBank;
use cashpoint::core::Card;
use cashpoint::devices::{ConsoleDisplay, ConsolePrinter, EnvelopeSlot};
use cashpoint::dispenser::GreedyDispenser;
use cashpoint::session::{Atm, AtmError};

fn main() -> Result<(), AtmError> {
    let bank = InMemoryBank::new().with_account("1234-5678-9012-3456", "1234", 10_000);

    let mut atm = Atm::new(
        Box::new(bank),
        Box::new(GreedyDispenser::with_standard_ladder(50)),
        Box::new(ConsoleDisplay),
        Arc::new(ConsolePrinter),
        Box::new(EnvelopeSlot::with_envelope()),
    );

    atm.start();

    atm.insert_card(Card::new("BANK-123", "1234-5678-9012-3456"))?;
    atm.enter_pin("1234")?;

    atm.request_withdrawal(1860)?;
    atm.print_mini_statement()?;
    atm.change_pin("4321")?;
    atm.deposit_cash(2000)?;

    atm.eject_card()?;
    atm.shutdown();

    Ok(())
}
