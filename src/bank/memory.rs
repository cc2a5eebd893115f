//! In-memory reference bank.

use super::{BankError, BankService};
use crate::core::{Transaction, TransactionKind};
use std::collections::HashMap;

struct Account {
    balance: i64,
    pin: String,
    statement: Vec<Transaction>,
}

/// A process-local bank holding balances, PINs, and statements per account.
///
/// Useful as the demo backend and as a test double. Accounts are seeded with
/// [`InMemoryBank::with_account`]; operations against unseeded PANs return
/// [`BankError::UnknownAccount`].
///
/// # Example
///
/// ```rust
/// use cashpoint::bank::{BankService, InMemoryBank};
///
/// let mut bank = InMemoryBank::new().with_account("1234-5678-9012-3456", "1234", 10_000);
///
/// assert!(bank.verify_pin("1234-5678-9012-3456", "1234").unwrap());
/// bank.debit("1234-5678-9012-3456", 1860).unwrap();
/// assert_eq!(bank.balance("1234-5678-9012-3456").unwrap(), 8140);
/// ```
#[derive(Default)]
pub struct InMemoryBank {
    accounts: HashMap<String, Account>,
}

impl InMemoryBank {
    /// Create a bank with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account with a PIN and an opening balance.
    pub fn with_account(mut self, pan: impl Into<String>, pin: impl Into<String>, balance: i64) -> Self {
        self.accounts.insert(
            pan.into(),
            Account {
                balance,
                pin: pin.into(),
                statement: Vec::new(),
            },
        );
        self
    }

    fn account(&self, pan: &str) -> Result<&Account, BankError> {
        self.accounts
            .get(pan)
            .ok_or_else(|| BankError::UnknownAccount(pan.to_string()))
    }

    fn account_mut(&mut self, pan: &str) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(pan)
            .ok_or_else(|| BankError::UnknownAccount(pan.to_string()))
    }
}

impl BankService for InMemoryBank {
    fn verify_pin(&self, pan: &str, pin: &str) -> Result<bool, BankError> {
        Ok(self.account(pan)?.pin == pin)
    }

    fn balance(&self, pan: &str) -> Result<i64, BankError> {
        Ok(self.account(pan)?.balance)
    }

    fn debit(&mut self, pan: &str, amount: u32) -> Result<(), BankError> {
        let entry = Transaction::new(TransactionKind::Withdrawal, amount, "Card withdrawal")
            .map_err(|_| BankError::InvalidAmount)?;
        let account = self.account_mut(pan)?;
        account.balance -= i64::from(amount);
        account.statement.push(entry);
        Ok(())
    }

    fn credit(&mut self, pan: &str, amount: u32) -> Result<(), BankError> {
        let entry = Transaction::new(TransactionKind::Deposit, amount, "Cash deposit")
            .map_err(|_| BankError::InvalidAmount)?;
        let account = self.account_mut(pan)?;
        account.balance += i64::from(amount);
        account.statement.push(entry);
        Ok(())
    }

    fn change_pin(&mut self, pan: &str, new_pin: &str) -> Result<bool, BankError> {
        self.account_mut(pan)?.pin = new_pin.to_string();
        Ok(true)
    }

    fn mini_statement(&self, pan: &str) -> Result<Vec<Transaction>, BankError> {
        Ok(self.account(pan)?.statement.clone())
    }
}
