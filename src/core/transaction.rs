//! Transaction records.
//!
//! A transaction is an immutable value created by the session on a successful
//! withdrawal or deposit and appended to the ledger. It is constructed with
//! all fields at once and validated at construction time; there is no partial
//! or mutable building phase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// The kind of a recorded transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Withdrawal,
    Deposit,
}

impl TransactionKind {
    /// Get the kind's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Withdrawal => "WITHDRAWAL",
            Self::Deposit => "DEPOSIT",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors rejected at transaction construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("transaction amount must be strictly positive")]
    ZeroAmount,
}

/// An immutable record of a completed withdrawal or deposit.
///
/// Amounts are integer minor units. Cloning produces a value-identical,
/// independently-owned copy.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{Transaction, TransactionError, TransactionKind};
///
/// let tx = Transaction::new(TransactionKind::Deposit, 2000, "Deposit received")?;
/// assert_eq!(tx.amount(), 2000);
/// assert_eq!(tx.kind(), TransactionKind::Deposit);
///
/// // Zero amounts are rejected at construction.
/// assert!(Transaction::new(TransactionKind::Withdrawal, 0, "").is_err());
/// # Ok::<(), TransactionError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: Uuid,
    kind: TransactionKind,
    amount: u32,
    details: String,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction, rejecting a zero amount.
    ///
    /// The id and timestamp are assigned at creation.
    pub fn new(
        kind: TransactionKind,
        amount: u32,
        details: impl Into<String>,
    ) -> Result<Self, TransactionError> {
        if amount == 0 {
            return Err(TransactionError::ZeroAmount);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            details: details.into(),
            timestamp: Utc::now(),
        })
    }

    /// Unique id assigned at creation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The transaction kind.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount in integer minor units. Always strictly positive.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Free-text details, e.g. the dispensed denomination breakdown.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Wall-clock creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.timestamp, self.kind, self.amount, self.details
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_sets_all_fields() {
        let tx = Transaction::new(TransactionKind::Withdrawal, 1860, "Dispensed: 500x3").unwrap();
        assert_eq!(tx.kind(), TransactionKind::Withdrawal);
        assert_eq!(tx.amount(), 1860);
        assert_eq!(tx.details(), "Dispensed: 500x3");
    }

    #[test]
    fn zero_amount_is_rejected() {
        let err = Transaction::new(TransactionKind::Deposit, 0, "").unwrap_err();
        assert_eq!(err, TransactionError::ZeroAmount);
    }

    #[test]
    fn clone_is_value_identical_and_independent() {
        let tx = Transaction::new(TransactionKind::Deposit, 500, "Deposit received").unwrap();
        let copy = tx.clone();
        assert_eq!(copy, tx);
        assert_eq!(copy.id(), tx.id());
        drop(tx);
        assert_eq!(copy.amount(), 500);
    }

    #[test]
    fn fresh_transactions_get_distinct_ids() {
        let a = Transaction::new(TransactionKind::Deposit, 100, "").unwrap();
        let b = Transaction::new(TransactionKind::Deposit, 100, "").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn display_includes_kind_amount_and_details() {
        let tx = Transaction::new(TransactionKind::Withdrawal, 50, "Dispensed: 50x1").unwrap();
        let rendered = tx.to_string();
        assert!(rendered.contains("WITHDRAWAL"));
        assert!(rendered.contains("50"));
        assert!(rendered.contains("Dispensed: 50x1"));
    }

    #[test]
    fn transaction_serializes_correctly() {
        let tx = Transaction::new(TransactionKind::Deposit, 2000, "Deposit received").unwrap();
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }
}
