//! Session error taxonomy.
//!
//! Only usage errors and observer failures surface as `Err` from the ATM
//! facade. Business failures (invalid PIN, insufficient funds, infeasible
//! dispense, missing envelope, rejected PIN change) are reported through the
//! display and return `Ok` with the session state unchanged, and collaborator
//! failures are caught at the session boundary and reported the same way.

use crate::core::{Action, AtmState};
use crate::ledger::ListenerError;
use thiserror::Error;

/// Errors returned by the ATM facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AtmError {
    /// The requested action is not legal in the current session state. A
    /// protocol violation by the caller; nothing changed.
    #[error("{action} is not available while the session is {state}")]
    UnsupportedAction { state: AtmState, action: Action },

    /// An action that needs a card ran without one. The legality table makes
    /// this unreachable through the public surface; it guards the session
    /// invariant directly.
    #[error("no card is present in the reader")]
    CardMissing,

    /// A ledger observer failed while the receipt was being delivered. The
    /// transaction is recorded regardless.
    #[error(transparent)]
    Ledger(#[from] ListenerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_action_names_state_and_action() {
        let err = AtmError::UnsupportedAction {
            state: AtmState::Idle,
            action: Action::Withdraw,
        };
        assert_eq!(
            err.to_string(),
            "withdraw is not available while the session is Idle"
        );
    }

    #[test]
    fn listener_error_converts_into_atm_error() {
        let err: AtmError = ListenerError("printer jam".into()).into();
        assert!(matches!(err, AtmError::Ledger(_)));
    }
}
