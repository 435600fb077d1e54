use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// calculate the fixed monthly installment (EMI, excluding any tax overlay)
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// degenerates to straight-line principal / n when the rate is zero, where
/// the standard formula's denominator would vanish
pub fn emi_amount(principal: Money, annual_rate: Rate, tenure_months: u32) -> Money {
    if tenure_months == 0 {
        return principal;
    }

    let monthly_rate = annual_rate.monthly().as_decimal();

    if monthly_rate.is_zero() {
        return principal / Decimal::from(tenure_months);
    }

    let compound = compound_factor(monthly_rate, tenure_months);

    let numerator = principal.as_decimal() * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// (1 + rate)^periods by loop multiplication
pub fn compound_factor(rate: Decimal, periods: u32) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

/// total cost above principal, as a rate of principal
///
/// the "effective rate" figure shown against the headline interest rate:
/// (total paid - principal) / principal
pub fn effective_cost_rate(total_paid: Money, principal: Money) -> Rate {
    if principal.is_zero() {
        return Rate::ZERO;
    }

    let excess = total_paid - principal;
    Rate::from_decimal(excess.as_decimal() / principal.as_decimal())
}
