use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};
use crate::interest::DayCountConvention;

/// bank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankConfig {
    pub accrual: AccrualConfig,
    pub validation: ValidationConfig,
}

/// interest accrual configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualConfig {
    /// year basis for the daily divisor
    pub day_count: DayCountConvention,
    /// decimal places of the reported monthly total
    pub rounding_dp: u32,
}

/// limits applied by the standard validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// exclusive lower bound, in percent
    pub min_rate_pct: Decimal,
    /// exclusive upper bound, in percent
    pub max_rate_pct: Decimal,
    /// maximum decimal places on a posted amount
    pub amount_dp: u32,
    pub allow_overdraft: bool,
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            day_count: DayCountConvention::Actual365,
            rounding_dp: 2,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_rate_pct: Decimal::ZERO,
            max_rate_pct: Decimal::ONE_HUNDRED,
            amount_dp: 2,
            allow_overdraft: false,
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl BankConfig {
    /// fixed 365-day divisor, cent rounding, rates strictly inside (0, 100)
    pub fn standard() -> Self {
        Self {
            accrual: AccrualConfig::default(),
            validation: ValidationConfig::default(),
        }
    }

    /// parse from json and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BankConfig = serde_json::from_str(json).map_err(|e| {
            LedgerError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.validation.min_rate_pct < Decimal::ZERO {
            return Err(LedgerError::InvalidConfiguration {
                message: format!("min_rate_pct {} is negative", self.validation.min_rate_pct),
            });
        }
        if self.validation.min_rate_pct >= self.validation.max_rate_pct {
            return Err(LedgerError::InvalidConfiguration {
                message: format!(
                    "rate bounds ({}, {}) leave no valid rate",
                    self.validation.min_rate_pct, self.validation.max_rate_pct
                ),
            });
        }
        if self.accrual.rounding_dp > 8 {
            return Err(LedgerError::InvalidConfiguration {
                message: format!("rounding_dp {} exceeds 8", self.accrual.rounding_dp),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_defaults() {
        let config = BankConfig::standard();
        assert_eq!(config.accrual.day_count, DayCountConvention::Actual365);
        assert_eq!(config.accrual.rounding_dp, 2);
        assert_eq!(config.validation.max_rate_pct, dec!(100));
        assert!(!config.validation.allow_overdraft);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BankConfig::standard();
        let parsed = BankConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let mut config = BankConfig::standard();
        config.validation.min_rate_pct = dec!(10);
        config.validation.max_rate_pct = dec!(5);
        assert!(matches!(
            config.validate(),
            Err(LedgerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            BankConfig::from_json("{ not json"),
            Err(LedgerError::InvalidConfiguration { .. })
        ));
    }
}
