//! Bank service contract and adapters.
//!
//! The bank is an external collaborator; the control logic only depends on
//! the narrow [`BankService`] contract. Calls are synchronous and unretried.
//! Failures come back as [`BankError`] values that the session turns into
//! user-visible messages, never into a crash.

mod gateway;
mod memory;

pub use gateway::BankGateway;
pub use memory::InMemoryBank;

use crate::core::Transaction;
use thiserror::Error;

/// Failures a bank service call can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("no account on file for PAN {0}")]
    UnknownAccount(String),

    #[error("amount must be strictly positive")]
    InvalidAmount,

    /// A real deployment's transport or backend failure.
    #[error("bank service unavailable: {0}")]
    Unavailable(String),
}

/// The operations the control logic consumes from a bank, keyed by PAN.
///
/// Implementations are expected to answer synchronously; the core performs no
/// retries and no caching.
pub trait BankService {
    /// Check a PIN against the account's stored PIN.
    fn verify_pin(&self, pan: &str, pin: &str) -> Result<bool, BankError>;

    /// Current balance in minor units.
    fn balance(&self, pan: &str) -> Result<i64, BankError>;

    /// Remove `amount` from the account and log a withdrawal statement row.
    fn debit(&mut self, pan: &str, amount: u32) -> Result<(), BankError>;

    /// Add `amount` to the account and log a deposit statement row.
    fn credit(&mut self, pan: &str, amount: u32) -> Result<(), BankError>;

    /// Replace the stored PIN. Returns whether the bank accepted the change.
    fn change_pin(&mut self, pan: &str, new_pin: &str) -> Result<bool, BankError>;

    /// Recent transactions for the account, oldest first.
    fn mini_statement(&self, pan: &str) -> Result<Vec<Transaction>, BankError>;
}
