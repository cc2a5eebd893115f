//! Physical device contracts.
//!
//! The display, printer, and deposit slot are simple adapters with no
//! interesting failure modes; the control logic only depends on these traits.

mod console;

pub use console::{ConsoleDisplay, ConsolePrinter, EnvelopeSlot};

use crate::core::Transaction;
use crate::ledger::{ListenerError, TransactionListener};
use std::sync::Arc;

/// The user-facing screen. All user-visible outcomes go through here.
pub trait Display {
    fn show(&self, message: &str);
}

/// Receipt and statement printer.
pub trait Printer {
    fn print_receipt(&self, tx: &Transaction);

    /// Print a statement verbatim, oldest entry first.
    fn print_mini_statement(&self, transactions: &[Transaction]);
}

/// Envelope sensor on the deposit slot.
pub trait DepositSlot {
    fn has_envelope(&self) -> bool;
}

/// Ledger listener that prints a receipt for every recorded transaction.
///
/// Registered on the ledger at ATM construction so a successful withdrawal or
/// deposit prints exactly one receipt.
pub struct ReceiptObserver {
    printer: Arc<dyn Printer>,
}

impl ReceiptObserver {
    pub fn new(printer: Arc<dyn Printer>) -> Self {
        Self { printer }
    }
}

impl TransactionListener for ReceiptObserver {
    fn on_transaction_recorded(&self, tx: &Transaction) -> Result<(), ListenerError> {
        self.printer.print_receipt(tx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransactionKind;
    use std::sync::Mutex;

    struct CountingPrinter {
        receipts: Mutex<usize>,
    }

    impl Printer for CountingPrinter {
        fn print_receipt(&self, _tx: &Transaction) {
            *self.receipts.lock().unwrap() += 1;
        }

        fn print_mini_statement(&self, _transactions: &[Transaction]) {}
    }

    #[test]
    fn receipt_observer_prints_on_notification() {
        let printer = Arc::new(CountingPrinter {
            receipts: Mutex::new(0),
        });
        let observer = ReceiptObserver::new(Arc::clone(&printer) as Arc<dyn Printer>);

        let tx = Transaction::new(TransactionKind::Deposit, 100, "").unwrap();
        observer.on_transaction_recorded(&tx).unwrap();
        observer.on_transaction_recorded(&tx).unwrap();

        assert_eq!(*printer.receipts.lock().unwrap(), 2);
    }
}
