/// rate changes mid-month, a rejected withdrawal and the listings
use interest_ledger::chrono::NaiveDate;
use interest_ledger::{Bank, Money, Rate, RateService, TransactionKind, TransactionService};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).ok_or("bad date");
    let mut bank = Bank::new();

    bank.add_interest_rule(date(2023, 1, 1)?, "RULE01", Rate::from_percent(dec!(1.95)))?;
    bank.add_interest_rule(date(2023, 5, 20)?, "RULE02", Rate::from_percent(dec!(1.90)))?;
    bank.add_interest_rule(date(2023, 6, 15)?, "RULE03", Rate::from_percent(dec!(2.20)))?;

    bank.add_transaction("AC001", date(2023, 5, 5)?, TransactionKind::Deposit, Money::from_major(100))?;
    bank.add_transaction("AC001", date(2023, 6, 1)?, TransactionKind::Deposit, Money::from_major(150))?;
    bank.add_transaction("AC001", date(2023, 6, 26)?, TransactionKind::Withdrawal, Money::from_major(20))?;
    bank.add_transaction("AC001", date(2023, 6, 26)?, TransactionKind::Withdrawal, Money::from_major(100))?;

    if let Err(e) = bank.add_transaction("AC001", date(2023, 6, 27)?, TransactionKind::Withdrawal, Money::from_major(500)) {
        println!("rejected: {}", e);
    }

    print!("{}", bank.rules_listing());
    print!("{}", bank.transaction_listing("AC001"));
    println!();

    let accrual = bank.accrue_month("AC001", 2023, 6)?;
    for day in accrual.days.iter().filter(|d| d.closing_balance.is_positive()).take(3) {
        println!(
            "{} balance {} rule {:?} accrued {}",
            day.date,
            day.closing_balance.to_cents_string(),
            day.rule_id,
            day.interest
        );
    }
    println!("unrounded {} -> credited {}", accrual.unrounded_interest, accrual.interest);
    println!();

    print!("{}", bank.statement_text("AC001", 2023, 6));
    println!("{}", bank.statement_text("AC999", 2023, 6));

    Ok(())
}
