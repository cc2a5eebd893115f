//! Card model.
//!
//! A card identifies the physical token inserted into the machine. It is an
//! immutable value owned by the active session for the session's lifetime and
//! dropped on eject.

use serde::{Deserialize, Serialize};

/// A bank card: issuing bank identifier plus primary account number (PAN).
///
/// # Example
///
/// ```rust
/// use cashpoint::core::Card;
///
/// let card = Card::new("BANK-123", "1234-5678-9012-3456");
/// assert_eq!(card.pan(), "1234-5678-9012-3456");
/// assert_eq!(card.masked_pan(), "****-****-****-3456");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    bank_id: String,
    pan: String,
}

impl Card {
    /// Create a card for the given bank and PAN.
    pub fn new(bank_id: impl Into<String>, pan: impl Into<String>) -> Self {
        Self {
            bank_id: bank_id.into(),
            pan: pan.into(),
        }
    }

    /// The issuing bank's identifier.
    pub fn bank_id(&self) -> &str {
        &self.bank_id
    }

    /// The primary account number.
    pub fn pan(&self) -> &str {
        &self.pan
    }

    /// The PAN with all but the last four characters masked.
    ///
    /// PANs of four characters or fewer are returned as-is.
    pub fn masked_pan(&self) -> String {
        let chars: Vec<char> = self.pan.chars().collect();
        if chars.len() > 4 {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("****-****-****-{tail}")
        } else {
            self.pan.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let card = Card::new("BANK-123", "1234-5678-9012-3456");
        assert_eq!(card.bank_id(), "BANK-123");
        assert_eq!(card.pan(), "1234-5678-9012-3456");
    }

    #[test]
    fn masked_pan_keeps_last_four() {
        let card = Card::new("BANK-123", "1234-5678-9012-3456");
        assert_eq!(card.masked_pan(), "****-****-****-3456");
    }

    #[test]
    fn short_pan_is_not_masked() {
        let card = Card::new("BANK-123", "9999");
        assert_eq!(card.masked_pan(), "9999");
    }

    #[test]
    fn card_clones_to_equal_value() {
        let card = Card::new("BANK-123", "1234-5678-9012-3456");
        assert_eq!(card.clone(), card);
    }

    #[test]
    fn card_serializes_correctly() {
        let card = Card::new("BANK-123", "1234-5678-9012-3456");
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
