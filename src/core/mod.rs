//! Core domain values.
//!
//! This module contains the plain values the rest of the crate is built
//! around: cards, transactions, session states, and the state-change trace.
//! Everything here is an immutable value or a pure table; no I/O and no
//! collaborator calls.

mod card;
mod state;
mod transaction;

pub use card::Card;
pub use state::{Action, AtmState, SessionTrace, StateTransition};
pub use transaction::{Transaction, TransactionError, TransactionKind};
