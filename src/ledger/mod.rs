pub mod account;
pub mod store;
pub mod transaction;

use std::fmt::Write;

pub use account::Account;
pub use store::LedgerStore;
pub use transaction::{format_transaction_id, Transaction, TRANSACTION_ID_WIDTH};

/// printable listing of an account's transactions in insertion order
pub fn render_transactions(account: &str, transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found for the account.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Account: {}", account);
    let _ = writeln!(out, "| Date     | Txn Id      | Type | Amount |");
    for txn in transactions {
        let _ = writeln!(
            out,
            "| {} | {:<width$} | {}    | {:>8} |",
            txn.date.format("%Y%m%d"),
            txn.id,
            txn.kind.code(),
            txn.amount.to_cents_string(),
            width = TRANSACTION_ID_WIDTH,
        );
    }
    out
}
