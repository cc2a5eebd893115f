//! Session states, actions, and the legality table.
//!
//! The session is an explicit state machine over three states. Which actions
//! are legal in which state is decided by a single exhaustively-matched table
//! rather than per-state handler objects, so every illegal combination is an
//! explicit case instead of a runtime surprise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The phase of the current ATM session.
///
/// Exactly one state is active at any time. A card is present in every state
/// except [`AtmState::Idle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtmState {
    /// No card in the reader.
    Idle,
    /// Card read, PIN not yet verified.
    CardInserted,
    /// PIN verified; transactions available.
    Authenticated,
}

impl AtmState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::CardInserted => "CardInserted",
            Self::Authenticated => "Authenticated",
        }
    }

    /// The message shown on entry to this state.
    pub fn entry_prompt(&self) -> &str {
        match self {
            Self::Idle => "Idle: Please insert your card",
            Self::CardInserted => "Card read. Please enter PIN",
            Self::Authenticated => "Authenticated. Choose transaction",
        }
    }

    /// Whether `action` is legal in this state.
    ///
    /// This is the full legality table: insert from Idle, PIN entry from
    /// CardInserted, transactions from Authenticated, eject from anywhere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cashpoint::core::{Action, AtmState};
    ///
    /// assert!(AtmState::Idle.allows(Action::InsertCard));
    /// assert!(AtmState::Idle.allows(Action::EjectCard));
    /// assert!(!AtmState::Idle.allows(Action::Withdraw));
    /// assert!(AtmState::Authenticated.allows(Action::Withdraw));
    /// ```
    pub fn allows(&self, action: Action) -> bool {
        matches!(
            (*self, action),
            (AtmState::Idle, Action::InsertCard)
                | (AtmState::CardInserted, Action::EnterPin)
                | (
                    AtmState::Authenticated,
                    Action::Withdraw
                        | Action::Deposit
                        | Action::PrintMiniStatement
                        | Action::ChangePin
                )
                | (_, Action::EjectCard)
        )
    }
}

impl fmt::Display for AtmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An externally requested action on the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    InsertCard,
    EnterPin,
    Withdraw,
    Deposit,
    PrintMiniStatement,
    ChangePin,
    EjectCard,
}

impl Action {
    /// All actions, for table-driven tests.
    pub const ALL: [Action; 7] = [
        Action::InsertCard,
        Action::EnterPin,
        Action::Withdraw,
        Action::Deposit,
        Action::PrintMiniStatement,
        Action::ChangePin,
        Action::EjectCard,
    ];

    /// Get the action's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::InsertCard => "insertCard",
            Self::EnterPin => "enterPin",
            Self::Withdraw => "withdraw",
            Self::Deposit => "deposit",
            Self::PrintMiniStatement => "printMiniStatement",
            Self::ChangePin => "changePin",
            Self::EjectCard => "ejectCard",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a single session state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: AtmState,
    /// The state being transitioned to
    pub to: AtmState,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered trace of session state changes for the current run.
///
/// Diagnostic only: nothing in the control logic reads it back.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionTrace {
    transitions: Vec<StateTransition>,
}

impl SessionTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// The path of states traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<AtmState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }
}
