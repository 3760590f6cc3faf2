use std::collections::HashMap;

use crate::ledger::account::Account;

/// all accounts, keyed by number
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    accounts: HashMap<String, Account>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn get(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    /// fetch an account, opening it on first reference
    pub fn get_or_open(&mut self, number: &str) -> &mut Account {
        self.accounts
            .entry(number.to_string())
            .or_insert_with(|| Account::new(number))
    }

    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// accounts sorted by number
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.number.cmp(&b.number));
        accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_open_is_idempotent() {
        let mut store = LedgerStore::new();
        assert!(store.get("AC001").is_none());

        store.get_or_open("AC001");
        store.get_or_open("AC001");
        assert_eq!(store.len(), 1);
        assert!(store.contains("AC001"));
    }

    #[test]
    fn test_accounts_sorted() {
        let mut store = LedgerStore::new();
        store.get_or_open("AC002");
        store.get_or_open("AC001");
        let numbers: Vec<&str> = store.accounts().iter().map(|a| a.number.as_str()).collect();
        assert_eq!(numbers, vec!["AC001", "AC002"]);
    }
}
