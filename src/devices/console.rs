//! Console-backed device implementations for demos and manual runs.

use super::{DepositSlot, Display, Printer};
use crate::core::Transaction;

/// Display that writes to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDisplay;

impl Display for ConsoleDisplay {
    fn show(&self, message: &str) {
        println!("[DISPLAY] {message}");
    }
}

/// Printer that writes receipts and statements to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print_receipt(&self, tx: &Transaction) {
        println!("--- RECEIPT ---");
        println!("{tx}");
        println!("--- END ---");
    }

    fn print_mini_statement(&self, transactions: &[Transaction]) {
        println!("--- MINI STATEMENT ---");
        for tx in transactions {
            println!("{tx}");
        }
        println!("--- END MINI ---");
    }
}

/// Deposit slot with a fixed envelope sensor reading.
#[derive(Clone, Copy, Debug)]
pub struct EnvelopeSlot {
    envelope_present: bool,
}

impl EnvelopeSlot {
    /// A slot that reports an envelope present.
    pub fn with_envelope() -> Self {
        Self {
            envelope_present: true,
        }
    }

    /// A slot that reports no envelope.
    pub fn empty() -> Self {
        Self {
            envelope_present: false,
        }
    }
}

impl DepositSlot for EnvelopeSlot {
    fn has_envelope(&self) -> bool {
        self.envelope_present
    }
}
