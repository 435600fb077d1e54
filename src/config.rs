use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};

/// loan variant policy
///
/// the two variants share the annuity math and differ only in how GST is
/// overlaid: credit-card loans tax each month's interest at a configured
/// rate, personal loans never tax interest and tax the processing fee at a
/// fixed statutory rate instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanVariant {
    /// GST applies to interest and to the processing fee at the given rate
    CreditCard { gst_rate: Rate },
    /// no GST on interest; processing-fee GST fixed at 18%
    PersonalLoan,
}

/// loan configuration, one immutable snapshot per calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanConfig {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
    pub processing_fee_rate: Rate,
    pub variant: LoanVariant,
}

impl LoanConfig {
    /// create credit-card loan configuration
    pub fn credit_card(
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        gst_rate: Rate,
        processing_fee_rate: Rate,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_months,
            processing_fee_rate,
            variant: LoanVariant::CreditCard { gst_rate },
        }
    }

    /// create personal loan configuration
    pub fn personal_loan(
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        processing_fee_rate: Rate,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_months,
            processing_fee_rate,
            variant: LoanVariant::PersonalLoan,
        }
    }

    /// typical credit-card loan defaults: 18% GST, 1% processing fee
    pub fn credit_card_defaults(principal: Money, annual_rate: Rate, tenure_months: u32) -> Self {
        Self::credit_card(
            principal,
            annual_rate,
            tenure_months,
            Rate::from_percent(dec!(18)),
            Rate::from_percent(dec!(1)),
        )
    }

    /// validate input ranges
    ///
    /// degenerate inputs are rejected up front rather than letting them
    /// flow through the annuity division as garbage
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(EngineError::InvalidPrincipal {
                amount: self.principal,
            });
        }

        if self.tenure_months == 0 {
            return Err(EngineError::InvalidTenure { months: 0 });
        }

        if self.annual_rate.is_negative() {
            return Err(EngineError::InvalidRate {
                rate: self.annual_rate,
            });
        }

        if self.processing_fee_rate.is_negative() {
            return Err(EngineError::InvalidFeeRate {
                rate: self.processing_fee_rate,
            });
        }

        if let LoanVariant::CreditCard { gst_rate } = self.variant {
            if gst_rate.is_negative() {
                return Err(EngineError::InvalidTaxRate { rate: gst_rate });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> LoanConfig {
        LoanConfig::credit_card_defaults(
            Money::from_major(1_000_000),
            Rate::from_percent(dec!(12)),
            24,
        )
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let mut config = valid_config();
        config.annual_rate = Rate::ZERO;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let mut config = valid_config();

        config.principal = Money::ZERO;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidPrincipal { .. })
        ));

        config.principal = Money::from_major(-500);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidPrincipal { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_tenure() {
        let mut config = valid_config();
        config.tenure_months = 0;
        assert_eq!(
            config.validate(),
            Err(EngineError::InvalidTenure { months: 0 })
        );
    }

    #[test]
    fn test_rejects_negative_rates() {
        let mut config = valid_config();
        config.annual_rate = Rate::from_percent(dec!(-1));
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidRate { .. })
        ));

        let mut config = valid_config();
        config.processing_fee_rate = Rate::from_percent(dec!(-0.5));
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidFeeRate { .. })
        ));

        let mut config = valid_config();
        config.variant = LoanVariant::CreditCard {
            gst_rate: Rate::from_percent(dec!(-18)),
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidTaxRate { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = valid_config();
        let json = serde_json::to_string(&config).unwrap();
        let back: LoanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
