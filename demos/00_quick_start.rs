/// quick start - one deposit, one rule, one statement
use interest_ledger::chrono::NaiveDate;
use interest_ledger::{Bank, Money, Rate, RateService, TransactionKind, TransactionService};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).ok_or("bad date");

    let mut bank = Bank::new();
    bank.add_interest_rule(date(2023, 1, 1)?, "RULE01", Rate::from_percent(dec!(1.95)))?;
    bank.add_transaction("AC001", date(2023, 6, 1)?, TransactionKind::Deposit, Money::from_major(150))?;

    // 150.00 at 1.95% for 30 days
    println!("interest: {}", bank.compute_monthly_interest("AC001", 2023, 6)?);
    print!("{}", bank.statement_text("AC001", 2023, 6));

    Ok(())
}
