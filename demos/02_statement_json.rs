/// json views of the bank, a statement and the event log
use interest_ledger::chrono::NaiveDate;
use interest_ledger::{
    BankBuilder, DayCountConvention, Money, Rate, RateService, TransactionKind, TransactionService,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).ok_or("bad date");

    let mut bank = BankBuilder::new()
        .day_count(DayCountConvention::ActualActual)
        .build()?;

    bank.add_interest_rule(date(2024, 1, 1)?, "RULE01", Rate::from_percent(dec!(3.65)))?;
    bank.add_transaction("AC001", date(2024, 2, 1)?, TransactionKind::Deposit, Money::from_major(1_000))?;
    bank.add_transaction("AC001", date(2024, 2, 20)?, TransactionKind::Withdrawal, Money::from_major(250))?;

    println!("{}", bank.config().to_json());
    println!("{}", bank.json());
    println!("{}", bank.generate_statement("AC001", 2024, 2)?.json());

    for event in bank.events.take_events() {
        println!("{:?}", event);
    }

    Ok(())
}
