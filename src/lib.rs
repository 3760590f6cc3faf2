pub mod bank;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod rates;
pub mod serialization;
pub mod services;
pub mod statement;
pub mod types;
pub mod validation;

// re-export key types
pub use bank::{Bank, BankBuilder};
pub use config::{AccrualConfig, BankConfig, ValidationConfig};
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{EventStore, LedgerEvent};
pub use interest::{AccrualEngine, DailyAccrual, DayCountConvention, MonthlyAccrual};
pub use ledger::{Account, LedgerStore, Transaction};
pub use rates::{InterestRule, RateSchedule};
pub use services::{RateService, TransactionService};
pub use statement::{Statement, StatementGenerator, StatementLine, ACCOUNT_NOT_FOUND};
pub use types::{AccountNumber, MonthPeriod, TransactionKind};
pub use validation::{StandardValidator, Validator};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
