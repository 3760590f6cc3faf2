use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::interest::AccrualEngine;
use crate::ledger::{Transaction, TRANSACTION_ID_WIDTH};
use crate::services::{RateService, TransactionService};
use crate::types::{AccountNumber, MonthPeriod, TransactionKind};

/// text returned in place of a statement for an unknown account
pub const ACCOUNT_NOT_FOUND: &str = "Account not found.";

/// one printed line with the balance after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub date: NaiveDate,
    pub transaction_id: String,
    pub kind: TransactionKind,
    pub amount: Money,
    pub balance: Money,
}

/// monthly statement for one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub account: AccountNumber,
    pub period: MonthPeriod,
    pub opening_balance: Money,
    pub lines: Vec<StatementLine>,
    /// credited interest; zero when no line was added
    pub interest: Money,
    pub closing_balance: Money,
}

impl Statement {
    /// the synthesised interest line, if any
    pub fn interest_line(&self) -> Option<&StatementLine> {
        self.lines
            .iter()
            .rev()
            .find(|l| l.kind == TransactionKind::InterestCredit)
    }

    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account: {}", self.account)?;
        writeln!(f, "| Date     | Txn Id      | Type | Amount  | Balance |")?;
        for line in &self.lines {
            writeln!(
                f,
                "| {} | {:<width$} | {:<4} | {:>7} | {:>7} |",
                line.date.format("%Y%m%d"),
                line.transaction_id,
                line.kind.code(),
                line.amount.to_cents_string(),
                line.balance.to_cents_string(),
                width = TRANSACTION_ID_WIDTH,
            )?;
        }
        Ok(())
    }
}

/// builds statements from the ledger and the accrual engine
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementGenerator {
    engine: AccrualEngine,
}

impl StatementGenerator {
    pub fn new(engine: AccrualEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &AccrualEngine {
        &self.engine
    }

    /// chronological statement with running balances and month-end interest
    pub fn generate<L, R>(
        &self,
        ledger: &L,
        rates: &R,
        account: &str,
        period: &MonthPeriod,
    ) -> Result<Statement>
    where
        L: TransactionService + ?Sized,
        R: RateService + ?Sized,
    {
        if !ledger.has_account(account) {
            return Err(LedgerError::AccountNotFound {
                account: account.to_string(),
            });
        }

        let history = ledger.transactions_for_account(account);
        let rules = rates.interest_rules();

        let opening_balance = self.engine.opening_balance(&history, period.start());
        let interest = self.engine.monthly_interest(&history, &rules, period);

        let mut selected: Vec<Transaction> = history
            .iter()
            .filter(|t| period.contains(t.date))
            .cloned()
            .collect();
        selected.sort_by_key(|t| t.date);

        if interest.is_positive() {
            selected.push(Transaction::interest_credit(period.end(), interest));
        }

        let mut balance = opening_balance;
        let mut lines = Vec::with_capacity(selected.len());
        for txn in selected {
            balance = balance
                .checked_add(txn.signed_amount())
                .ok_or(LedgerError::BalanceOverflow {
                    balance,
                    amount: txn.amount,
                })?;
            lines.push(StatementLine {
                date: txn.date,
                transaction_id: txn.id,
                kind: txn.kind,
                amount: txn.amount,
                balance,
            });
        }

        debug!(
            account,
            year = period.year(),
            month = period.month(),
            lines = lines.len(),
            %interest,
            "generated statement"
        );

        Ok(Statement {
            account: account.to_string(),
            period: *period,
            opening_balance,
            lines,
            interest: if interest.is_positive() { interest } else { Money::ZERO },
            closing_balance: balance,
        })
    }
}
