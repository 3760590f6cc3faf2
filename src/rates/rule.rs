use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;

/// annual rate in force from `effective_date` until the next rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRule {
    pub effective_date: NaiveDate,
    pub id: String,
    pub rate: Rate,
}

impl InterestRule {
    pub fn new(effective_date: NaiveDate, id: impl Into<String>, rate: Rate) -> Self {
        Self {
            effective_date,
            id: id.into(),
            rate,
        }
    }
}
