pub mod rule;
pub mod schedule;

use std::fmt::Write;

pub use rule::InterestRule;
pub use schedule::RateSchedule;

/// printable table of rules, in the order given
pub fn render_rules(rules: &[InterestRule]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Interest rules:");
    let _ = writeln!(out, "| Date     | RuleId | Rate (%) |");
    for rule in rules {
        let pct = rule
            .rate
            .as_percentage()
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        let _ = writeln!(
            out,
            "| {} | {} | {:>8} |",
            rule.effective_date.format("%Y%m%d"),
            rule.id,
            format!("{:.2}", pct),
        );
    }
    out
}
