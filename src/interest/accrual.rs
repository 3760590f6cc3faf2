use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AccrualConfig;
use crate::decimal::{Money, Rate};
use crate::ledger::Transaction;
use crate::rates::InterestRule;
use crate::types::MonthPeriod;

/// day count convention for the daily divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// fixed 365-day year, leap years included
    Actual365,
    /// fixed 360-day year
    Actual360,
    /// 366 in leap years, 365 otherwise
    ActualActual,
}

/// engine for accruing monthly interest over a dense daily balance series
#[derive(Debug, Clone, Copy)]
pub struct AccrualEngine {
    pub convention: DayCountConvention,
    pub rounding_dp: u32,
}

impl Default for AccrualEngine {
    fn default() -> Self {
        Self::from_config(&AccrualConfig::default())
    }
}

impl AccrualEngine {
    pub fn new(convention: DayCountConvention) -> Self {
        Self {
            convention,
            rounding_dp: 2,
        }
    }

    pub fn from_config(config: &AccrualConfig) -> Self {
        Self {
            convention: config.day_count,
            rounding_dp: config.rounding_dp,
        }
    }

    /// get year basis for the convention
    pub fn year_basis(&self, year: i32) -> u32 {
        match self.convention {
            DayCountConvention::Actual365 => 365,
            DayCountConvention::Actual360 => 360,
            DayCountConvention::ActualActual => {
                if is_leap_year(year) { 366 } else { 365 }
            }
        }
    }

    /// signed sum of every transaction dated before `date`
    pub fn opening_balance(&self, transactions: &[Transaction], date: NaiveDate) -> Money {
        transactions
            .iter()
            .filter(|t| t.date < date)
            .map(Transaction::signed_amount)
            .sum()
    }

    /// closing balance for every day of the period
    ///
    /// each day applies its own transactions before the balance is
    /// recorded. insertion order of `transactions` is irrelevant.
    pub fn daily_balances(&self, transactions: &[Transaction], period: &MonthPeriod) -> Vec<(NaiveDate, Money)> {
        let mut movements: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        let mut balance = Money::ZERO;

        for txn in transactions {
            if txn.date < period.start() {
                balance += txn.signed_amount();
            } else if period.contains(txn.date) {
                *movements.entry(txn.date).or_insert(Money::ZERO) += txn.signed_amount();
            }
        }

        period
            .days()
            .map(|day| {
                if let Some(delta) = movements.get(&day) {
                    balance += *delta;
                }
                (day, balance)
            })
            .collect()
    }

    /// active rule for every day of the period
    ///
    /// a day's rule is the one with the greatest effective date not after
    /// it. days before the earliest rule have none.
    pub fn daily_rules<'a>(&self, rules: &'a [InterestRule], period: &MonthPeriod) -> Vec<(NaiveDate, Option<&'a InterestRule>)> {
        let mut applicable: Vec<&InterestRule> = rules
            .iter()
            .filter(|r| r.effective_date <= period.end())
            .collect();
        applicable.sort_by_key(|r| r.effective_date);

        let mut next = 0;
        let mut current: Option<&InterestRule> = None;

        period
            .days()
            .map(|day| {
                while next < applicable.len() && applicable[next].effective_date <= day {
                    current = Some(applicable[next]);
                    next += 1;
                }
                (day, current)
            })
            .collect()
    }

    /// full day-by-day accrual for one account and month
    pub fn accrue_month(
        &self,
        transactions: &[Transaction],
        rules: &[InterestRule],
        period: &MonthPeriod,
    ) -> MonthlyAccrual {
        let opening_balance = self.opening_balance(transactions, period.start());
        let balances = self.daily_balances(transactions, period);
        let day_rules = self.daily_rules(rules, period);

        let mut days = Vec::with_capacity(balances.len());
        let mut unrounded = Money::ZERO;

        for ((date, closing_balance), (_, rule)) in balances.into_iter().zip(day_rules) {
            let (rule_id, rate) = match rule {
                Some(r) => (Some(r.id.clone()), r.rate),
                None => (None, Rate::ZERO),
            };
            let interest = self.daily_interest(closing_balance, rate, date.year());
            unrounded += interest;

            days.push(DailyAccrual {
                date,
                closing_balance,
                rule_id,
                rate,
                interest,
            });
        }

        let interest = unrounded.round_dp(self.rounding_dp);
        let closing_balance = days
            .last()
            .map(|d| d.closing_balance)
            .unwrap_or(opening_balance);

        debug!(
            year = period.year(),
            month = period.month(),
            %opening_balance,
            %closing_balance,
            %unrounded,
            %interest,
            "accrued month"
        );

        MonthlyAccrual {
            period: *period,
            opening_balance,
            closing_balance,
            days,
            unrounded_interest: unrounded,
            interest,
        }
    }

    /// rounded interest for the month; zero when no rule is in force
    pub fn monthly_interest(
        &self,
        transactions: &[Transaction],
        rules: &[InterestRule],
        period: &MonthPeriod,
    ) -> Money {
        if !rules.iter().any(|r| r.effective_date <= period.end()) {
            return Money::ZERO;
        }
        self.accrue_month(transactions, rules, period).interest
    }

    /// balance × annual rate / year basis, unrounded
    pub fn daily_interest(&self, balance: Money, annual_rate: Rate, year: i32) -> Money {
        let basis = Decimal::from(self.year_basis(year));
        Money::from_decimal(balance.as_decimal() * annual_rate.as_decimal() / basis)
    }
}

/// one day of a monthly accrual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAccrual {
    pub date: NaiveDate,
    pub closing_balance: Money,
    pub rule_id: Option<String>,
    pub rate: Rate,
    /// unrounded
    pub interest: Money,
}

/// a month of daily accruals with its rounded total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAccrual {
    pub period: MonthPeriod,
    pub opening_balance: Money,
    pub closing_balance: Money,
    pub days: Vec<DailyAccrual>,
    pub unrounded_interest: Money,
    pub interest: Money,
}

impl MonthlyAccrual {
    /// days on which some rule was in force
    pub fn days_with_rate(&self) -> usize {
        self.days.iter().filter(|d| d.rule_id.is_some()).count()
    }
}

/// check if year is a leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn txn(id: &str, date: NaiveDate, kind: TransactionKind, amount: Decimal) -> Transaction {
        Transaction::new(id.to_string(), date, kind, Money::from_decimal(amount))
    }

    fn rule(date: NaiveDate, id: &str, pct: Decimal) -> InterestRule {
        InterestRule::new(date, id, Rate::from_percent(pct))
    }

    fn june() -> MonthPeriod {
        MonthPeriod::new(2023, 6).unwrap()
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_year_basis() {
        assert_eq!(AccrualEngine::new(DayCountConvention::Actual365).year_basis(2024), 365);
        assert_eq!(AccrualEngine::new(DayCountConvention::Actual360).year_basis(2024), 360);
        assert_eq!(AccrualEngine::new(DayCountConvention::ActualActual).year_basis(2024), 366);
        assert_eq!(AccrualEngine::new(DayCountConvention::ActualActual).year_basis(2023), 365);
    }

    #[test]
    fn test_daily_balances_apply_same_day_first() {
        let engine = AccrualEngine::default();
        let txns = vec![
            txn("20230626-02", d(2023, 6, 26), TransactionKind::Withdrawal, dec!(20)),
            txn("20230601-01", d(2023, 6, 1), TransactionKind::Deposit, dec!(150)),
            txn("20230626-03", d(2023, 6, 26), TransactionKind::Withdrawal, dec!(100)),
        ];

        let balances = engine.daily_balances(&txns, &june());
        assert_eq!(balances.len(), 30);
        assert_eq!(balances[0], (d(2023, 6, 1), Money::from_major(150)));
        assert_eq!(balances[24].1, Money::from_major(150));
        assert_eq!(balances[25], (d(2023, 6, 26), Money::from_major(30)));
        assert_eq!(balances[29].1, Money::from_major(30));
    }

    #[test]
    fn test_opening_balance_from_dated_history() {
        let engine = AccrualEngine::default();
        let txns = vec![
            txn("20230701-01", d(2023, 7, 1), TransactionKind::Deposit, dec!(1000)),
            txn("20230505-02", d(2023, 5, 5), TransactionKind::Deposit, dec!(100)),
            txn("20230531-03", d(2023, 5, 31), TransactionKind::Withdrawal, dec!(40)),
            txn("20230601-04", d(2023, 6, 1), TransactionKind::Deposit, dec!(5)),
        ];

        assert_eq!(engine.opening_balance(&txns, d(2023, 6, 1)), Money::from_major(60));
        let balances = engine.daily_balances(&txns, &june());
        assert_eq!(balances[0].1, Money::from_major(65));
        assert_eq!(balances[29].1, Money::from_major(65));
    }

    #[test]
    fn test_daily_rules_switch_on_effective_date() {
        let engine = AccrualEngine::default();
        let rules = vec![
            rule(d(2023, 6, 15), "RULE03", dec!(2.20)),
            rule(d(2023, 1, 1), "RULE01", dec!(1.95)),
            rule(d(2023, 5, 20), "RULE02", dec!(1.90)),
            rule(d(2023, 7, 1), "RULE04", dec!(9.00)),
        ];

        let days = engine.daily_rules(&rules, &june());
        let id = |i: usize| days[i].1.map(|r| r.id.as_str());
        assert_eq!(id(0), Some("RULE02"));
        assert_eq!(id(13), Some("RULE02"));
        assert_eq!(id(14), Some("RULE03"));
        assert_eq!(id(29), Some("RULE03"));
    }

    #[test]
    fn test_daily_rules_skip_several_rules_at_once() {
        let engine = AccrualEngine::default();
        let rules = vec![
            rule(d(2023, 1, 1), "JAN", dec!(1)),
            rule(d(2023, 2, 1), "FEB", dec!(2)),
            rule(d(2023, 3, 1), "MAR", dec!(3.65)),
        ];

        let days = engine.daily_rules(&rules, &june());
        assert!(days.iter().all(|(_, r)| matches!(r, Some(rule) if rule.id == "MAR")));
    }

    #[test]
    fn test_days_before_first_rule_accrue_nothing() {
        let engine = AccrualEngine::default();
        let txns = vec![txn("20230601-01", d(2023, 6, 1), TransactionKind::Deposit, dec!(1000))];
        let rules = vec![rule(d(2023, 6, 16), "RULE01", dec!(3.65))];

        let accrual = engine.accrue_month(&txns, &rules, &june());
        assert_eq!(accrual.days_with_rate(), 15);
        assert_eq!(accrual.days[14].interest, Money::ZERO);
        assert_eq!(accrual.days[15].interest, Money::from_decimal(dec!(0.1)));
        assert_eq!(accrual.interest, Money::from_decimal(dec!(1.50)));
    }

    #[test]
    fn test_single_deposit_full_month() {
        let engine = AccrualEngine::default();
        let txns = vec![txn("20230601-01", d(2023, 6, 1), TransactionKind::Deposit, dec!(150))];
        let rules = vec![rule(d(2023, 1, 1), "RULE01", dec!(1.95))];

        // 150 × 1.95% × 30 / 365 = 0.2404
        assert_eq!(engine.monthly_interest(&txns, &rules, &june()), Money::from_decimal(dec!(0.24)));
    }

    #[test]
    fn test_rate_changes_mid_month() {
        let engine = AccrualEngine::default();
        let txns = vec![
            txn("20230505-01", d(2023, 5, 5), TransactionKind::Deposit, dec!(100)),
            txn("20230601-02", d(2023, 6, 1), TransactionKind::Deposit, dec!(150)),
            txn("20230626-03", d(2023, 6, 26), TransactionKind::Withdrawal, dec!(20)),
            txn("20230626-04", d(2023, 6, 26), TransactionKind::Withdrawal, dec!(100)),
        ];
        let rules = vec![
            rule(d(2023, 1, 1), "RULE01", dec!(1.95)),
            rule(d(2023, 5, 20), "RULE02", dec!(1.90)),
            rule(d(2023, 6, 15), "RULE03", dec!(2.20)),
        ];

        // (250×1.90×14 + 250×2.20×11 + 130×2.20×5) / 100 / 365 = 0.3871
        let accrual = engine.accrue_month(&txns, &rules, &june());
        assert_eq!(accrual.opening_balance, Money::from_major(100));
        assert_eq!(accrual.closing_balance, Money::from_major(130));
        assert_eq!(accrual.interest, Money::from_decimal(dec!(0.39)));
    }

    #[test]
    fn test_last_day_deposit_accrues_one_day() {
        let engine = AccrualEngine::default();
        let txns = vec![txn("20230630-01", d(2023, 6, 30), TransactionKind::Deposit, dec!(150))];
        let rules = vec![rule(d(2023, 1, 1), "RULE01", dec!(1.95))];

        assert_eq!(engine.monthly_interest(&txns, &rules, &june()), Money::from_decimal(dec!(0.01)));
    }

    #[test]
    fn test_no_rules_is_zero() {
        let engine = AccrualEngine::default();
        let txns = vec![txn("20230601-01", d(2023, 6, 1), TransactionKind::Deposit, dec!(150))];

        assert_eq!(engine.monthly_interest(&txns, &[], &june()), Money::ZERO);

        // rules that only start after the month behave the same
        let later = vec![rule(d(2023, 7, 1), "RULE09", dec!(5))];
        assert_eq!(engine.monthly_interest(&txns, &later, &june()), Money::ZERO);
    }

    #[test]
    fn test_no_transactions_is_zero() {
        let engine = AccrualEngine::default();
        let rules = vec![rule(d(2023, 1, 1), "RULE01", dec!(1.95))];

        let accrual = engine.accrue_month(&[], &rules, &june());
        assert!(accrual.days.iter().all(|d| d.closing_balance.is_zero()));
        assert_eq!(accrual.days_with_rate(), 30);
        assert_eq!(accrual.interest, Money::ZERO);
    }

    #[test]
    fn test_single_rounding_half_away_from_zero() {
        let engine = AccrualEngine::default();
        // 182.50 × 1% / 365 = 0.005 exactly
        let txns = vec![txn("20230630-01", d(2023, 6, 30), TransactionKind::Deposit, dec!(182.50))];
        let rules = vec![rule(d(2023, 1, 1), "RULE01", dec!(1))];

        let accrual = engine.accrue_month(&txns, &rules, &june());
        assert_eq!(accrual.unrounded_interest, Money::from_decimal(dec!(0.005)));
        assert_eq!(accrual.interest, Money::from_decimal(dec!(0.01)));
    }

    #[test]
    fn test_rounding_happens_once() {
        let engine = AccrualEngine::default();
        // each day accrues 0.004, which would round to zero on its own
        let txns = vec![txn("20230601-01", d(2023, 6, 1), TransactionKind::Deposit, dec!(146))];
        let rules = vec![rule(d(2023, 1, 1), "RULE01", dec!(1))];

        let accrual = engine.accrue_month(&txns, &rules, &june());
        assert_eq!(accrual.days[0].interest, Money::from_decimal(dec!(0.004)));
        assert_eq!(accrual.interest, Money::from_decimal(dec!(0.12)));
    }

    #[test]
    fn test_leap_february_day_count() {
        let feb = MonthPeriod::new(2024, 2).unwrap();
        let txns = vec![txn("20240201-01", d(2024, 2, 1), TransactionKind::Deposit, dec!(1000))];
        let rules = vec![rule(d(2024, 1, 1), "RULE01", dec!(3.65))];

        let fixed = AccrualEngine::new(DayCountConvention::Actual365);
        let accrual = fixed.accrue_month(&txns, &rules, &feb);
        assert_eq!(accrual.days.len(), 29);
        assert_eq!(accrual.interest, Money::from_decimal(dec!(2.90)));

        let actual_actual = AccrualEngine::new(DayCountConvention::ActualActual);
        assert_eq!(
            actual_actual.monthly_interest(&txns, &rules, &feb),
            Money::from_decimal(dec!(2.89))
        );

        let actual_360 = AccrualEngine::new(DayCountConvention::Actual360);
        assert_eq!(
            actual_360.monthly_interest(&txns, &rules, &feb),
            Money::from_decimal(dec!(2.94))
        );
    }
}
