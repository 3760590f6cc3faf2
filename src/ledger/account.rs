use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::ledger::transaction::{format_transaction_id, Transaction};
use crate::types::{AccountNumber, TransactionKind};

/// an account and its append-only history
///
/// `balance` follows insertion order. it is the current position, not the
/// balance on any particular date; dated figures come from the accrual
/// engine, which replays the history chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub number: AccountNumber,
    balance: Money,
    transactions: Vec<Transaction>,
}

impl Account {
    /// create empty account
    pub fn new(number: impl Into<AccountNumber>) -> Self {
        Self {
            number: number.into(),
            balance: Money::ZERO,
            transactions: Vec::new(),
        }
    }

    /// running balance over all posted transactions
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// id the next posted transaction on `date` would receive
    pub fn next_transaction_id(&self, date: NaiveDate) -> String {
        format_transaction_id(date, self.transactions.len() + 1)
    }

    /// append a transaction and move the running balance
    ///
    /// validation happens before this point; the account itself accepts
    /// anything it is given.
    pub fn post(&mut self, date: NaiveDate, kind: TransactionKind, amount: Money) -> &Transaction {
        let id = self.next_transaction_id(date);
        let transaction = Transaction::new(id, date, kind, amount);
        self.balance += transaction.signed_amount();
        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }
}
