use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{AccountNumber, TransactionKind};

/// state changes and rejected requests recorded by the bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    // ledger events
    AccountOpened {
        account: AccountNumber,
    },
    TransactionPosted {
        account: AccountNumber,
        transaction_id: String,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        balance: Money,
    },
    TransactionRejected {
        account: AccountNumber,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        reason: String,
    },

    // rate schedule events
    InterestRuleAdded {
        rule_id: String,
        effective_date: NaiveDate,
        rate: Rate,
    },
    InterestRuleReplaced {
        effective_date: NaiveDate,
        old_rule_id: String,
        new_rule_id: String,
        old_rate: Rate,
        new_rate: Rate,
    },
    InterestRuleRejected {
        rule_id: String,
        effective_date: NaiveDate,
        rate: Rate,
        reason: String,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<LedgerEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }
}
