//! Cashpoint: ATM control logic as a library.
//!
//! The crate models a single automated teller machine: an explicit session
//! state machine driving card lifecycle, authentication, and transaction
//! dispatch, backed by a pluggable bank service and a denomination-aware cash
//! dispenser, with every completed transaction recorded in an observable
//! ledger.
//!
//! # Core Concepts
//!
//! - **Session state machine**: [`session::Atm`] accepts external actions and
//!   checks each against the legality table for the current
//!   [`core::AtmState`]; illegal combinations are usage errors, not crashes.
//! - **Cash dispensing**: [`dispenser::GreedyDispenser`] decomposes amounts
//!   greedily over a descending note ladder, all-or-nothing against stock.
//! - **Transaction ledger**: [`ledger::TransactionLedger`] appends immutable
//!   [`core::Transaction`] records and notifies observers synchronously, in
//!   registration order.
//! - **Collaborator contracts**: the bank ([`bank::BankService`]) and the
//!   physical devices ([`devices::Display`], [`devices::Printer`],
//!   [`devices::DepositSlot`]) are traits injected at construction; no
//!   process-wide singletons.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cashpoint::bank::InMemoryBank;
//! use cashpoint::core::{AtmState, Card};
//! use cashpoint::devices::{ConsoleDisplay, ConsolePrinter, EnvelopeSlot};
//! use cashpoint::dispenser::GreedyDispenser;
//! use cashpoint::session::Atm;
//!
//! let bank = InMemoryBank::new().with_account("1234-5678-9012-3456", "1234", 10_000);
//! let mut atm = Atm::new(
//!     Box::new(bank),
//!     Box::new(GreedyDispenser::with_standard_ladder(50)),
//!     Box::new(ConsoleDisplay),
//!     Arc::new(ConsolePrinter),
//!     Box::new(EnvelopeSlot::with_envelope()),
//! );
//!
//! atm.start();
//! atm.insert_card(Card::new("BANK-123", "1234-5678-9012-3456"))?;
//! atm.enter_pin("1234")?;
//! atm.request_withdrawal(1860)?;
//! atm.eject_card()?;
//! assert_eq!(atm.state(), AtmState::Idle);
//! # Ok::<(), cashpoint::session::AtmError>(())
//! ```

pub mod bank;
pub mod core;
pub mod devices;
pub mod dispenser;
pub mod ledger;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Action, AtmState, Card, Transaction, TransactionKind};
pub use crate::dispenser::{CashDispenser, GreedyDispenser};
pub use crate::ledger::{TransactionLedger, TransactionListener};
pub use crate::session::{Atm, AtmError};
