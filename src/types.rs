use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};

/// account number, the unique key of an account
pub type AccountNumber = String;

/// transaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// money in
    Deposit,
    /// money out, never allowed to overdraw
    Withdrawal,
    /// monthly interest, only ever synthesised by statements
    InterestCredit,
}

impl TransactionKind {
    /// single-letter code used in listings
    pub fn code(&self) -> char {
        match self {
            TransactionKind::Deposit => 'D',
            TransactionKind::Withdrawal => 'W',
            TransactionKind::InterestCredit => 'I',
        }
    }

    /// amount with the sign this kind applies to a balance
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            TransactionKind::Withdrawal => -amount,
            TransactionKind::Deposit | TransactionKind::InterestCredit => amount,
        }
    }

    /// whether callers may post this kind through the transaction service
    pub fn is_postable(&self) -> bool {
        !matches!(self, TransactionKind::InterestCredit)
    }
}

/// a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthPeriod {
    /// create a period, rejecting months outside 1..=12 and unrepresentable years
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let invalid = || LedgerError::InvalidPeriod { year, month };

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next_start
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self { year, month, start, end })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// first day of the month
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// last calendar day of the month
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// number of days in the month
    pub fn days_in_month(&self) -> u32 {
        self.end.day()
    }

    /// every day of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// check if date falls within the month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
