use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::BankConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::events::{EventStore, LedgerEvent};
use crate::interest::{AccrualEngine, DayCountConvention, MonthlyAccrual};
use crate::ledger::{render_transactions, Account, LedgerStore, Transaction};
use crate::rates::{render_rules, InterestRule, RateSchedule};
use crate::serialization::{AccountView, BankView};
use crate::services::{RateService, TransactionService};
use crate::statement::{Statement, StatementGenerator, ACCOUNT_NOT_FOUND};
use crate::types::{MonthPeriod, TransactionKind};
use crate::validation::{StandardValidator, Validator};

/// accounts, rate schedule and the services over them
pub struct Bank<V: Validator = StandardValidator> {
    config: BankConfig,
    ledger: LedgerStore,
    rates: RateSchedule,
    validator: V,
    statements: StatementGenerator,
    pub events: EventStore,
}

impl Bank<StandardValidator> {
    /// bank with the standard configuration
    pub fn new() -> Self {
        let config = BankConfig::standard();
        let validator = StandardValidator::new(config.validation.clone());
        Self::assemble(config, validator)
    }

    /// bank with a custom configuration and the standard validator
    pub fn with_config(config: BankConfig) -> Result<Self> {
        config.validate()?;
        let validator = StandardValidator::new(config.validation.clone());
        Ok(Self::assemble(config, validator))
    }
}

impl Default for Bank<StandardValidator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validator> Bank<V> {
    /// bank with a caller-supplied validator
    pub fn with_validator(config: BankConfig, validator: V) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, validator))
    }

    fn assemble(config: BankConfig, validator: V) -> Self {
        let engine = AccrualEngine::from_config(&config.accrual);
        Self {
            config,
            ledger: LedgerStore::new(),
            rates: RateSchedule::new(),
            validator,
            statements: StatementGenerator::new(engine),
            events: EventStore::new(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.ledger.get(number)
    }

    /// running balance, in insertion order
    pub fn balance(&self, number: &str) -> Option<Money> {
        self.ledger.get(number).map(Account::balance)
    }

    pub fn accounts(&self) -> Vec<&Account> {
        self.ledger.accounts()
    }

    /// rounded interest for the month; zero for unknown accounts or an empty schedule
    pub fn compute_monthly_interest(&self, account: &str, year: i32, month: u32) -> Result<Money> {
        let period = MonthPeriod::new(year, month)?;
        let history = self.transactions_for_account(account);
        let rules = self.rates.rules();
        Ok(self.statements.engine().monthly_interest(&history, &rules, &period))
    }

    /// day-by-day breakdown behind [`Bank::compute_monthly_interest`]
    pub fn accrue_month(&self, account: &str, year: i32, month: u32) -> Result<MonthlyAccrual> {
        let period = MonthPeriod::new(year, month)?;
        let history = self.transactions_for_account(account);
        let rules = self.rates.rules();
        Ok(self.statements.engine().accrue_month(&history, &rules, &period))
    }

    pub fn generate_statement(&self, account: &str, year: i32, month: u32) -> Result<Statement> {
        let period = MonthPeriod::new(year, month)?;
        self.statements.generate(self, self, account, &period)
    }

    /// printable statement, or the not-found text for an unknown account
    pub fn statement_text(&self, account: &str, year: i32, month: u32) -> String {
        match self.generate_statement(account, year, month) {
            Ok(statement) => statement.to_string(),
            Err(LedgerError::AccountNotFound { .. }) => ACCOUNT_NOT_FOUND.to_string(),
            Err(e) => e.to_string(),
        }
    }

    /// printable listing of an account's transactions
    pub fn transaction_listing(&self, account: &str) -> String {
        render_transactions(account, &self.transactions_for_account(account))
    }

    /// printable table of the rate schedule
    pub fn rules_listing(&self) -> String {
        render_rules(&self.rates.rules())
    }

    pub fn view(&self) -> BankView {
        BankView {
            config: self.config.clone(),
            accounts: self
                .ledger
                .accounts()
                .into_iter()
                .map(AccountView::from_account)
                .collect(),
            interest_rules: self.rates.rules(),
        }
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.view()).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }

    fn reject_transaction(
        &mut self,
        account: &str,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        error: LedgerError,
    ) -> LedgerError {
        warn!(account, %date, ?kind, %amount, %error, "transaction rejected");
        self.events.emit(LedgerEvent::TransactionRejected {
            account: account.to_string(),
            date,
            kind,
            amount,
            reason: error.to_string(),
        });
        error
    }
}

impl<V: Validator> TransactionService for Bank<V> {
    fn add_transaction(
        &mut self,
        account: &str,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
    ) -> Result<Transaction> {
        if let Err(e) = self.validator.validate_account_number(account) {
            return Err(self.reject_transaction(account, date, kind, amount, e));
        }

        // validate against a blank account so a rejection opens nothing
        let verdict = match self.ledger.get(account) {
            Some(existing) => self.validator.validate_transaction(existing, kind, amount),
            None => self
                .validator
                .validate_transaction(&Account::new(account), kind, amount),
        };
        if let Err(e) = verdict {
            return Err(self.reject_transaction(account, date, kind, amount, e));
        }

        if !self.ledger.contains(account) {
            info!(account, "opened account");
            self.events.emit(LedgerEvent::AccountOpened {
                account: account.to_string(),
            });
        }

        let entry = self.ledger.get_or_open(account);
        let posted = entry.post(date, kind, amount).clone();
        let balance = entry.balance();

        info!(
            account,
            transaction_id = %posted.id,
            ?kind,
            %amount,
            %balance,
            "posted transaction"
        );
        self.events.emit(LedgerEvent::TransactionPosted {
            account: account.to_string(),
            transaction_id: posted.id.clone(),
            date,
            kind,
            amount,
            balance,
        });

        Ok(posted)
    }

    fn transactions_for_account(&self, account: &str) -> Vec<Transaction> {
        self.ledger
            .get(account)
            .map(|a| a.transactions().to_vec())
            .unwrap_or_default()
    }

    fn has_account(&self, account: &str) -> bool {
        self.ledger.contains(account)
    }
}

impl<V: Validator> RateService for Bank<V> {
    fn add_interest_rule(&mut self, date: NaiveDate, rule_id: &str, rate: Rate) -> Result<InterestRule> {
        let verdict = self
            .validator
            .validate_rule_id(rule_id)
            .and_then(|_| self.validator.validate_interest_rate(rate));
        if let Err(e) = verdict {
            warn!(rule_id, %date, %rate, error = %e, "interest rule rejected");
            self.events.emit(LedgerEvent::InterestRuleRejected {
                rule_id: rule_id.to_string(),
                effective_date: date,
                rate,
                reason: e.to_string(),
            });
            return Err(e);
        }

        let rule = InterestRule::new(date, rule_id, rate);
        match self.rates.insert(rule.clone()) {
            Some(old) => {
                info!(rule_id, %date, %rate, replaced = %old.id, "replaced interest rule");
                self.events.emit(LedgerEvent::InterestRuleReplaced {
                    effective_date: date,
                    old_rule_id: old.id,
                    new_rule_id: rule.id.clone(),
                    old_rate: old.rate,
                    new_rate: rate,
                });
            }
            None => {
                info!(rule_id, %date, %rate, "added interest rule");
                self.events.emit(LedgerEvent::InterestRuleAdded {
                    rule_id: rule.id.clone(),
                    effective_date: date,
                    rate,
                });
            }
        }

        Ok(rule)
    }

    fn interest_rules(&self) -> Vec<InterestRule> {
        self.rates.rules()
    }
}

/// builder for [`Bank`]
pub struct BankBuilder<V: Validator = StandardValidator> {
    config: BankConfig,
    validator: V,
}

impl BankBuilder<StandardValidator> {
    pub fn new() -> Self {
        Self {
            config: BankConfig::standard(),
            validator: StandardValidator::default(),
        }
    }

    /// replace the whole configuration, validation limits included
    pub fn config(mut self, config: BankConfig) -> Self {
        self.validator = StandardValidator::new(config.validation.clone());
        self.config = config;
        self
    }

    pub fn allow_overdraft(mut self, allow: bool) -> Self {
        self.config.validation.allow_overdraft = allow;
        self.validator = StandardValidator::new(self.config.validation.clone());
        self
    }
}

impl Default for BankBuilder<StandardValidator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validator> BankBuilder<V> {
    pub fn day_count(mut self, convention: DayCountConvention) -> Self {
        self.config.accrual.day_count = convention;
        self
    }

    pub fn rounding_dp(mut self, dp: u32) -> Self {
        self.config.accrual.rounding_dp = dp;
        self
    }

    /// swap in a different validator
    pub fn validator<W: Validator>(self, validator: W) -> BankBuilder<W> {
        BankBuilder {
            config: self.config,
            validator,
        }
    }

    pub fn build(self) -> Result<Bank<V>> {
        Bank::with_validator(self.config, self.validator)
    }
}
