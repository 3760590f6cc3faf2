pub mod accrual;

pub use accrual::{AccrualEngine, DailyAccrual, DayCountConvention, MonthlyAccrual};
