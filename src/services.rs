//! capability seams between the bank and its consumers
//!
//! [`crate::Bank`] is the production implementation of both traits. the
//! statement generator depends only on the read side, so tests can feed it
//! hand-built histories.

use chrono::NaiveDate;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::ledger::Transaction;
use crate::rates::InterestRule;
use crate::types::TransactionKind;

/// posting and reading account transactions
pub trait TransactionService {
    /// validate and append a transaction, opening the account if unseen
    ///
    /// on `Err` nothing has changed.
    fn add_transaction(
        &mut self,
        account: &str,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
    ) -> Result<Transaction>;

    /// transactions in insertion order; empty for an unknown account
    fn transactions_for_account(&self, account: &str) -> Vec<Transaction>;

    fn has_account(&self, account: &str) -> bool;
}

/// maintaining the interest rate schedule
pub trait RateService {
    /// validate and insert a rule, replacing any rule on the same date
    fn add_interest_rule(&mut self, date: NaiveDate, rule_id: &str, rate: Rate) -> Result<InterestRule>;

    /// all rules, ascending by effective date
    fn interest_rules(&self) -> Vec<InterestRule>;
}
