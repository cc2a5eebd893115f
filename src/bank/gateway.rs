//! Card-keyed adapter over a [`BankService`].

use super::{BankError, BankService};
use crate::core::{Card, Transaction};

/// Adapter that translates card-level requests into PAN-keyed service calls.
///
/// The gateway owns the concrete service, keeping the session independent of
/// which bank backs the inserted card.
pub struct BankGateway {
    service: Box<dyn BankService>,
}

impl BankGateway {
    /// Wrap a concrete bank service.
    pub fn new(service: Box<dyn BankService>) -> Self {
        Self { service }
    }

    pub fn verify_pin(&self, card: &Card, pin: &str) -> Result<bool, BankError> {
        self.service.verify_pin(card.pan(), pin)
    }

    /// Whether the account can cover a withdrawal of `amount`.
    pub fn has_sufficient_funds(&self, card: &Card, amount: u32) -> Result<bool, BankError> {
        Ok(self.service.balance(card.pan())? >= i64::from(amount))
    }

    pub fn balance(&self, card: &Card) -> Result<i64, BankError> {
        self.service.balance(card.pan())
    }

    pub fn debit(&mut self, card: &Card, amount: u32) -> Result<(), BankError> {
        self.service.debit(card.pan(), amount)
    }

    pub fn credit(&mut self, card: &Card, amount: u32) -> Result<(), BankError> {
        self.service.credit(card.pan(), amount)
    }

    pub fn change_pin(&mut self, card: &Card, new_pin: &str) -> Result<bool, BankError> {
        self.service.change_pin(card.pan(), new_pin)
    }

    pub fn mini_statement(&self, card: &Card) -> Result<Vec<Transaction>, BankError> {
        self.service.mini_statement(card.pan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::InMemoryBank;

    fn gateway() -> (BankGateway, Card) {
        let bank = InMemoryBank::new().with_account("1234-5678-9012-3456", "1234", 10_000);
        let card = Card::new("BANK-123", "1234-5678-9012-3456");
        (BankGateway::new(Box::new(bank)), card)
    }

    #[test]
    fn sufficiency_compares_against_balance() {
        let (gateway, card) = gateway();
        assert!(gateway.has_sufficient_funds(&card, 10_000).unwrap());
        assert!(!gateway.has_sufficient_funds(&card, 10_001).unwrap());
    }

    #[test]
    fn debit_and_credit_move_the_balance() {
        let (mut gateway, card) = gateway();
        gateway.debit(&card, 1860).unwrap();
        assert_eq!(gateway.balance(&card).unwrap(), 8140);
        gateway.credit(&card, 2000).unwrap();
        assert_eq!(gateway.balance(&card).unwrap(), 10_140);
    }

    #[test]
    fn unknown_card_surfaces_bank_error() {
        let (gateway, _) = gateway();
        let stranger = Card::new("BANK-999", "0000-0000-0000-0000");
        assert!(matches!(
            gateway.balance(&stranger),
            Err(BankError::UnknownAccount(_))
        ));
    }
}
