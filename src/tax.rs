use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LoanVariant;
use crate::decimal::{Money, Rate};

/// statutory GST rate applied to personal-loan processing fees
///
/// fixed at 18% regardless of any configured tax field; personal loans
/// expose no interest-tax input, so the fee levy is not user-tunable
pub const PERSONAL_LOAN_FEE_GST: Rate =
    Rate::const_from_decimal(Decimal::from_parts(18, 0, 0, false, 2));

/// GST overlay for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// rate levied on each month's interest component
    pub interest_gst: Rate,
    /// rate levied on the one-time processing fee
    pub fee_gst: Rate,
}

impl TaxPolicy {
    /// derive the tax policy for a loan variant
    pub fn for_variant(variant: &LoanVariant) -> Self {
        match variant {
            LoanVariant::CreditCard { gst_rate } => Self {
                interest_gst: *gst_rate,
                fee_gst: *gst_rate,
            },
            LoanVariant::PersonalLoan => Self {
                interest_gst: Rate::ZERO,
                fee_gst: PERSONAL_LOAN_FEE_GST,
            },
        }
    }

    /// GST due on an interest charge
    pub fn tax_on_interest(&self, interest: Money) -> Money {
        interest.percentage_of(self.interest_gst)
    }

    /// GST due on the processing fee
    pub fn tax_on_fee(&self, fee: Money) -> Money {
        fee.percentage_of(self.fee_gst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_card_uses_configured_rate() {
        let policy = TaxPolicy::for_variant(&LoanVariant::CreditCard {
            gst_rate: Rate::from_percent(dec!(12)),
        });

        assert_eq!(policy.interest_gst, Rate::from_percent(dec!(12)));
        assert_eq!(policy.fee_gst, Rate::from_percent(dec!(12)));
        assert_eq!(
            policy.tax_on_interest(Money::from_major(1000)),
            Money::from_major(120)
        );
    }

    #[test]
    fn test_personal_loan_fee_gst_is_fixed() {
        let policy = TaxPolicy::for_variant(&LoanVariant::PersonalLoan);

        assert_eq!(policy.interest_gst, Rate::ZERO);
        assert_eq!(policy.fee_gst, Rate::from_percent(dec!(18)));
        assert_eq!(policy.tax_on_interest(Money::from_major(1000)), Money::ZERO);
        assert_eq!(
            policy.tax_on_fee(Money::from_major(10_000)),
            Money::from_major(1_800)
        );
    }

    #[test]
    fn test_fixed_constant_value() {
        assert_eq!(PERSONAL_LOAN_FEE_GST.as_decimal(), dec!(0.18));
    }
}
