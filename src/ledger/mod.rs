//! Transaction ledger with synchronous observers.
//!
//! The ledger is the append-only record of transactions completed during the
//! current run. Every append is delivered to each registered listener, in
//! registration order, before `record` returns. Delivery is isolated in a
//! single notify step so it could later be swapped for asynchronous delivery
//! without touching the append logic.

use crate::core::Transaction;
use thiserror::Error;

/// A listener failure surfaced to the caller of [`TransactionLedger::record`].
///
/// By the time a listener fails, the transaction has already been appended;
/// the ledger is never rolled back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transaction listener failed: {0}")]
pub struct ListenerError(pub String);

/// Observer of recorded transactions.
///
/// Listeners are notified synchronously and in registration order. A listener
/// error propagates out of `record`; it never corrupts the append.
pub trait TransactionListener {
    fn on_transaction_recorded(&self, tx: &Transaction) -> Result<(), ListenerError>;
}

/// Append-only, in-memory transaction history for the current run.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{Transaction, TransactionKind};
/// use cashpoint::ledger::TransactionLedger;
///
/// let mut ledger = TransactionLedger::new();
/// let tx = Transaction::new(TransactionKind::Deposit, 2000, "Deposit received").unwrap();
/// ledger.record(tx).unwrap();
///
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.last_n(5).len(), 1);
/// ```
#[derive(Default)]
pub struct TransactionLedger {
    history: Vec<Transaction>,
    listeners: Vec<Box<dyn TransactionListener>>,
}

impl TransactionLedger {
    /// Create an empty ledger with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Registration order is delivery order; the same
    /// listener may be registered more than once and will be notified once
    /// per registration.
    pub fn subscribe(&mut self, listener: Box<dyn TransactionListener>) {
        self.listeners.push(listener);
    }

    /// Append `tx` and notify every listener before returning.
    ///
    /// The append happens first; a failing listener propagates its error but
    /// leaves the appended transaction in place.
    pub fn record(&mut self, tx: Transaction) -> Result<(), ListenerError> {
        self.history.push(tx);
        let recorded = &self.history[self.history.len() - 1];
        self.notify(recorded)
    }

    fn notify(&self, tx: &Transaction) -> Result<(), ListenerError> {
        for listener in &self.listeners {
            listener.on_transaction_recorded(tx)?;
        }
        Ok(())
    }

    /// The most recent `min(n, len)` transactions in chronological order.
    ///
    /// Returns caller-owned clones; mutating the result does not affect the
    /// ledger.
    pub fn last_n(&self, n: usize) -> Vec<Transaction> {
        let from = self.history.len().saturating_sub(n);
        self.history[from..].to_vec()
    }

    /// Full history in recording order.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
