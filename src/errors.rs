use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::TransactionKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Money,
        requested: Money,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("posting {amount} to balance {balance} exceeds the representable range")]
    BalanceOverflow {
        balance: Money,
        amount: Money,
    },

    #[error("amount {amount} has more than {max_dp} decimal places")]
    TooManyDecimalPlaces {
        amount: Money,
        max_dp: u32,
    },

    #[error("transaction kind {kind:?} cannot be posted directly")]
    InvalidTransactionKind {
        kind: TransactionKind,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid account number: {account:?}")]
    InvalidAccountNumber {
        account: String,
    },

    #[error("invalid rule id: {rule_id:?}")]
    InvalidRuleId {
        rule_id: String,
    },

    #[error("account not found: {account}")]
    AccountNotFound {
        account: String,
    },

    #[error("invalid statement period: {year}-{month:02}")]
    InvalidPeriod {
        year: i32,
        month: u32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
