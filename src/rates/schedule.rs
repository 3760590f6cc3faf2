use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::rates::rule::InterestRule;

/// interest rules keyed by effective date
///
/// a date holds at most one rule; inserting on an occupied date replaces
/// the previous rule.
#[derive(Debug, Clone, Default)]
pub struct RateSchedule {
    rules: BTreeMap<NaiveDate, InterestRule>,
}

impl RateSchedule {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// insert a rule, returning the one it replaced
    pub fn insert(&mut self, rule: InterestRule) -> Option<InterestRule> {
        self.rules.insert(rule.effective_date, rule)
    }

    /// all rules, ascending by effective date
    pub fn rules(&self) -> Vec<InterestRule> {
        self.rules.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
