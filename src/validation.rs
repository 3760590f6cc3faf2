use crate::config::ValidationConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::ledger::Account;
use crate::types::TransactionKind;

/// accept/reject decisions for requests reaching the services
///
/// implementations see the account as it stands before the request; a
/// rejection must leave no trace, so validators never mutate.
pub trait Validator {
    fn validate_transaction(&self, account: &Account, kind: TransactionKind, amount: Money) -> Result<()>;

    fn validate_interest_rate(&self, rate: Rate) -> Result<()>;

    fn validate_account_number(&self, account: &str) -> Result<()> {
        if account.trim().is_empty() || account.chars().any(char::is_whitespace) {
            return Err(LedgerError::InvalidAccountNumber {
                account: account.to_string(),
            });
        }
        Ok(())
    }

    fn validate_rule_id(&self, rule_id: &str) -> Result<()> {
        if rule_id.trim().is_empty() || rule_id.chars().any(char::is_whitespace) {
            return Err(LedgerError::InvalidRuleId {
                rule_id: rule_id.to_string(),
            });
        }
        Ok(())
    }
}

/// production validator
#[derive(Debug, Clone, Default)]
pub struct StandardValidator {
    config: ValidationConfig,
}

impl StandardValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl Validator for StandardValidator {
    fn validate_transaction(&self, account: &Account, kind: TransactionKind, amount: Money) -> Result<()> {
        if !kind.is_postable() {
            return Err(LedgerError::InvalidTransactionKind { kind });
        }

        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount { amount });
        }

        if amount.decimal_places() > self.config.amount_dp {
            return Err(LedgerError::TooManyDecimalPlaces {
                amount,
                max_dp: self.config.amount_dp,
            });
        }

        // gross turnover bounds every partial sum of the history, in any date order
        let turnover = account
            .transactions()
            .iter()
            .try_fold(amount, |total, t| total.checked_add(t.amount));
        if turnover.is_none() {
            return Err(LedgerError::BalanceOverflow {
                balance: account.balance(),
                amount,
            });
        }

        if kind == TransactionKind::Withdrawal
            && !self.config.allow_overdraft
            && (account.balance() - amount).is_negative()
        {
            return Err(LedgerError::InsufficientFunds {
                available: account.balance(),
                requested: amount,
            });
        }

        Ok(())
    }

    fn validate_interest_rate(&self, rate: Rate) -> Result<()> {
        let pct = rate.as_percentage();
        if pct <= self.config.min_rate_pct || pct >= self.config.max_rate_pct {
            return Err(LedgerError::InvalidInterestRate { rate });
        }
        Ok(())
    }
}
