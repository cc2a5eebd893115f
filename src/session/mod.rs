//! The session state machine and ATM facade.
//!
//! [`Atm`] is the single entry point callers drive. Every external action is
//! checked against the legality table for the current state, then orchestrates
//! the bank gateway, cash dispenser, and transaction ledger. One session
//! exists at a time; a card is held from insert to eject.

mod error;

pub use error::AtmError;

use crate::bank::{BankError, BankGateway, BankService};
use crate::core::{
    Action, AtmState, Card, SessionTrace, StateTransition, Transaction, TransactionKind,
};
use crate::devices::{DepositSlot, Display, Printer, ReceiptObserver};
use crate::dispenser::{format_breakdown, CashDispenser};
use crate::ledger::{TransactionLedger, TransactionListener};
use chrono::Utc;
use std::sync::Arc;

/// The active session: current state plus the inserted card, if any.
///
/// Invariant: the card is `Some` in every state except [`AtmState::Idle`].
pub struct Session {
    state: AtmState,
    card: Option<Card>,
    trace: SessionTrace,
}

impl Session {
    fn new() -> Self {
        Self {
            state: AtmState::Idle,
            card: None,
            trace: SessionTrace::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> AtmState {
        self.state
    }

    /// The inserted card, if any.
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// The state-change trace for this run.
    pub fn trace(&self) -> &SessionTrace {
        &self.trace
    }

    fn transition_to(&mut self, to: AtmState) {
        self.trace.record(StateTransition {
            from: self.state,
            to,
            timestamp: Utc::now(),
        });
        self.state = to;
    }
}

/// The ATM facade: one machine, one session, explicitly wired collaborators.
///
/// All collaborators are injected at construction; there are no process-wide
/// singletons. A [`ReceiptObserver`] over the injected printer is registered
/// on the ledger so every recorded transaction prints one receipt.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use cashpoint::bank::InMemoryBank;
/// use cashpoint::core::{AtmState, Card};
/// use cashpoint::devices::{ConsoleDisplay, ConsolePrinter, EnvelopeSlot};
/// use cashpoint::dispenser::GreedyDispenser;
/// use cashpoint::session::Atm;
///
/// let bank = InMemoryBank::new().with_account("1234-5678-9012-3456", "1234", 10_000);
/// let mut atm = Atm::new(
///     Box::new(bank),
///     Box::new(GreedyDispenser::with_standard_ladder(50)),
///     Box::new(ConsoleDisplay),
///     Arc::new(ConsolePrinter),
///     Box::new(EnvelopeSlot::with_envelope()),
/// );
///
/// atm.start();
/// atm.insert_card(Card::new("BANK-123", "1234-5678-9012-3456"))?;
/// atm.enter_pin("1234")?;
/// assert_eq!(atm.state(), AtmState::Authenticated);
///
/// atm.request_withdrawal(1860)?;
/// assert_eq!(atm.ledger().len(), 1);
///
/// atm.eject_card()?;
/// assert_eq!(atm.state(), AtmState::Idle);
/// # Ok::<(), cashpoint::session::AtmError>(())
/// ```
pub struct Atm {
    session: Session,
    bank: BankGateway,
    dispenser: Box<dyn CashDispenser>,
    ledger: TransactionLedger,
    display: Box<dyn Display>,
    printer: Arc<dyn Printer>,
    deposit_slot: Box<dyn DepositSlot>,
}

impl Atm {
    /// Wire up a machine from its collaborators.
    pub fn new(
        bank: Box<dyn BankService>,
        dispenser: Box<dyn CashDispenser>,
        display: Box<dyn Display>,
        printer: Arc<dyn Printer>,
        deposit_slot: Box<dyn DepositSlot>,
    ) -> Self {
        let mut ledger = TransactionLedger::new();
        ledger.subscribe(Box::new(ReceiptObserver::new(Arc::clone(&printer))));
        Self {
            session: Session::new(),
            bank: BankGateway::new(bank),
            dispenser,
            ledger,
            display,
            printer,
            deposit_slot,
        }
    }

    /// Show the startup banner and the Idle prompt.
    pub fn start(&self) {
        self.display.show("ATM is starting...");
        self.display.show(self.session.state.entry_prompt());
    }

    /// Show the shutdown banner. The session is simply dropped with the run.
    pub fn shutdown(&self) {
        self.display.show("ATM shutting down...");
    }

    /// The current session state.
    pub fn state(&self) -> AtmState {
        self.session.state
    }

    /// The session, for state, card, and trace inspection.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The run's transaction ledger.
    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    /// The cash dispenser, for stock inspection.
    pub fn dispenser(&self) -> &dyn CashDispenser {
        self.dispenser.as_ref()
    }

    /// Register an additional ledger observer.
    pub fn subscribe(&mut self, listener: Box<dyn TransactionListener>) {
        self.ledger.subscribe(listener);
    }

    /// Accept a card. Legal only from Idle.
    pub fn insert_card(&mut self, card: Card) -> Result<(), AtmError> {
        self.require(Action::InsertCard)?;
        self.display
            .show(&format!("Card inserted: {}", card.masked_pan()));
        self.session.card = Some(card);
        self.transition_to(AtmState::CardInserted);
        Ok(())
    }

    /// Verify a PIN. Legal only from CardInserted; an invalid PIN re-prompts
    /// in place, with no attempt cap.
    pub fn enter_pin(&mut self, pin: &str) -> Result<(), AtmError> {
        self.require(Action::EnterPin)?;
        let card = self.current_card()?.clone();
        match self.bank.verify_pin(&card, pin) {
            Ok(true) => self.transition_to(AtmState::Authenticated),
            Ok(false) => {
                self.display.show("Invalid PIN");
                self.transition_to(AtmState::CardInserted);
            }
            Err(err) => self.report_bank_error(&err),
        }
        Ok(())
    }

    /// Withdraw cash. Legal only from Authenticated.
    ///
    /// The amount must pass the balance check and the dispenser independently;
    /// either failure reports to the display and leaves balance, stock, and
    /// ledger untouched. On success the account is debited and a withdrawal
    /// transaction carrying the note breakdown is recorded.
    pub fn request_withdrawal(&mut self, amount: u32) -> Result<(), AtmError> {
        self.require(Action::Withdraw)?;
        let card = self.current_card()?.clone();

        if amount == 0 {
            self.display.show("Enter a positive amount");
            return Ok(());
        }
        match self.bank.has_sufficient_funds(&card, amount) {
            Ok(true) => {}
            Ok(false) => {
                self.display.show("Insufficient funds");
                return Ok(());
            }
            Err(err) => {
                self.report_bank_error(&err);
                return Ok(());
            }
        }

        let Some(bundles) = self.dispenser.dispense(amount) else {
            self.display
                .show("Cannot dispense requested amount with available denominations");
            return Ok(());
        };

        // Cash is committed; a debit failure here is reported but cannot be
        // rolled back into the stock.
        if let Err(err) = self.bank.debit(&card, amount) {
            self.report_bank_error(&err);
            return Ok(());
        }

        let details = format!("Dispensed: {}", format_breakdown(&bundles));
        if let Ok(tx) = Transaction::new(TransactionKind::Withdrawal, amount, details) {
            self.ledger.record(tx)?;
        }
        Ok(())
    }

    /// Deposit an envelope. Legal only from Authenticated.
    pub fn deposit_cash(&mut self, amount: u32) -> Result<(), AtmError> {
        self.require(Action::Deposit)?;
        let card = self.current_card()?.clone();

        if amount == 0 {
            self.display.show("Enter a positive amount");
            return Ok(());
        }
        if !self.deposit_slot.has_envelope() {
            self.display
                .show("Please insert deposit envelope in the deposit slot");
            return Ok(());
        }
        if let Err(err) = self.bank.credit(&card, amount) {
            self.report_bank_error(&err);
            return Ok(());
        }

        if let Ok(tx) = Transaction::new(TransactionKind::Deposit, amount, "Deposit received") {
            self.ledger.record(tx)?;
        }
        Ok(())
    }

    /// Fetch the account statement and hand it to the printer verbatim.
    /// Read-only: no ledger interaction.
    pub fn print_mini_statement(&mut self) -> Result<(), AtmError> {
        self.require(Action::PrintMiniStatement)?;
        let card = self.current_card()?.clone();
        match self.bank.mini_statement(&card) {
            Ok(statement) => self.printer.print_mini_statement(&statement),
            Err(err) => self.report_bank_error(&err),
        }
        Ok(())
    }

    /// Ask the bank to replace the card's PIN.
    pub fn change_pin(&mut self, new_pin: &str) -> Result<(), AtmError> {
        self.require(Action::ChangePin)?;
        let card = self.current_card()?.clone();
        match self.bank.change_pin(&card, new_pin) {
            Ok(true) => self.display.show("PIN changed successfully"),
            Ok(false) => self.display.show("Failed to change PIN"),
            Err(err) => self.report_bank_error(&err),
        }
        Ok(())
    }

    /// Return the card and go back to Idle. Legal from any state.
    pub fn eject_card(&mut self) -> Result<(), AtmError> {
        self.require(Action::EjectCard)?;
        self.display.show("Ejecting card...");
        self.session.card = None;
        self.transition_to(AtmState::Idle);
        Ok(())
    }

    fn require(&self, action: Action) -> Result<(), AtmError> {
        if self.session.state.allows(action) {
            Ok(())
        } else {
            Err(AtmError::UnsupportedAction {
                state: self.session.state,
                action,
            })
        }
    }

    fn current_card(&self) -> Result<&Card, AtmError> {
        self.session.card.as_ref().ok_or(AtmError::CardMissing)
    }

    fn transition_to(&mut self, to: AtmState) {
        self.session.transition_to(to);
        self.display.show(self.session.state.entry_prompt());
    }

    fn report_bank_error(&self, err: &BankError) {
        self.display.show(&format!("Bank service error: {err}"));
    }
}
