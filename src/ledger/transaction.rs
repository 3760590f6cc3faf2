use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::TransactionKind;

/// width of a `YYYYMMDD-NN` identifier, also used to blank interest lines
pub const TRANSACTION_ID_WIDTH: usize = 11;

/// an immutable ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: Money,
}

impl Transaction {
    pub fn new(id: String, date: NaiveDate, kind: TransactionKind, amount: Money) -> Self {
        Self { id, date, kind, amount }
    }

    /// interest line for a statement; carries no sequence number
    pub fn interest_credit(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: " ".repeat(TRANSACTION_ID_WIDTH),
            date,
            kind: TransactionKind::InterestCredit,
            amount,
        }
    }

    /// amount with the sign applied to a balance
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }
}

/// `YYYYMMDD-NN`, where NN is the per-account sequence number
pub fn format_transaction_id(date: NaiveDate, sequence: usize) -> String {
    format!("{}-{:02}", date.format("%Y%m%d"), sequence)
}
