/// serialization support for the bank
use serde::{Deserialize, Serialize};

use crate::config::BankConfig;
use crate::decimal::Money;
use crate::ledger::{Account, Transaction};
use crate::rates::InterestRule;
use crate::types::AccountNumber;

/// serializable view of the whole bank
#[derive(Debug, Serialize, Deserialize)]
pub struct BankView {
    pub config: BankConfig,
    pub accounts: Vec<AccountView>,
    pub interest_rules: Vec<InterestRule>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountView {
    pub number: AccountNumber,
    pub balance: Money,
    pub transaction_count: usize,
    pub transactions: Vec<Transaction>,
}

impl AccountView {
    pub fn from_account(account: &Account) -> Self {
        AccountView {
            number: account.number.clone(),
            balance: account.balance(),
            transaction_count: account.transaction_count(),
            transactions: account.transactions().to_vec(),
        }
    }
}
