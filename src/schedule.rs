use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::annuity::{effective_cost_rate, emi_amount};
use crate::config::LoanConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::tax::TaxPolicy;

/// one month's slice of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub month: u32,
    pub opening_balance: Money,
    pub base_installment: Money,
    pub interest: Money,
    pub principal: Money,
    pub tax_on_interest: Money,
    pub installment_with_tax: Money,
    pub closing_balance: Money,
}

/// column sums across all rows, for the schedule's totals line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub base_installment: Money,
    pub interest: Money,
    pub principal: Money,
    pub tax_on_interest: Money,
    pub installment_with_tax: Money,
}

/// full result of one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub principal: Money,
    pub monthly_installment: Money,
    pub processing_fee_amount: Money,
    pub tax_on_processing_fee: Money,
    pub total_interest: Money,
    pub total_tax: Money,
    pub total_paid: Money,
    pub schedule: Vec<InstallmentRow>,
}

impl CalculationResult {
    /// compute installment, fees, and the month-by-month schedule
    ///
    /// recomputed fresh on every call; the caller re-invokes with a new
    /// snapshot whenever any input field changes
    pub fn compute(config: &LoanConfig) -> Result<Self> {
        config.validate()?;

        let policy = TaxPolicy::for_variant(&config.variant);
        let monthly_rate = config.annual_rate.monthly();

        let base_installment =
            emi_amount(config.principal, config.annual_rate, config.tenure_months);
        let processing_fee_amount = config.principal.percentage_of(config.processing_fee_rate);
        let tax_on_processing_fee = policy.tax_on_fee(processing_fee_amount);

        let mut schedule = Vec::with_capacity(config.tenure_months as usize);
        let mut balance = config.principal;
        let mut total_interest = Money::ZERO;
        let mut total_tax = Money::ZERO;

        for month in 1..=config.tenure_months {
            let interest = balance.percentage_of(monthly_rate);
            let principal_portion = base_installment - interest;
            let tax_on_interest = policy.tax_on_interest(interest);
            let closing_balance = balance - principal_portion;

            schedule.push(InstallmentRow {
                month,
                opening_balance: balance,
                base_installment,
                interest,
                principal: principal_portion,
                tax_on_interest,
                installment_with_tax: base_installment + tax_on_interest,
                closing_balance,
            });

            total_interest += interest;
            total_tax += tax_on_interest;
            balance = closing_balance;
        }

        // total_tax is identically zero for personal loans, so the single
        // formula covers both variants
        let total_paid = base_installment * Decimal::from(config.tenure_months)
            + total_tax
            + processing_fee_amount
            + tax_on_processing_fee;

        Ok(Self {
            principal: config.principal,
            monthly_installment: base_installment,
            processing_fee_amount,
            tax_on_processing_fee,
            total_interest,
            total_tax,
            total_paid,
            schedule,
        })
    }

    /// get the row for a specific month (1-indexed)
    pub fn row(&self, month: u32) -> Option<&InstallmentRow> {
        self.schedule.get(month.checked_sub(1)? as usize)
    }

    /// re-sum every column across all rows for the totals line
    pub fn totals(&self) -> ScheduleTotals {
        let mut totals = ScheduleTotals {
            base_installment: Money::ZERO,
            interest: Money::ZERO,
            principal: Money::ZERO,
            tax_on_interest: Money::ZERO,
            installment_with_tax: Money::ZERO,
        };

        for row in &self.schedule {
            totals.base_installment += row.base_installment;
            totals.interest += row.interest;
            totals.principal += row.principal;
            totals.tax_on_interest += row.tax_on_interest;
            totals.installment_with_tax += row.installment_with_tax;
        }

        totals
    }

    /// amount paid above the borrowed principal
    pub fn extra_paid(&self) -> Money {
        self.total_paid - self.principal
    }

    /// total cost above principal as a rate of principal
    pub fn effective_cost(&self) -> Rate {
        effective_cost_rate(self.total_paid, self.principal)
    }
}

/// compute the full schedule for one loan configuration
pub fn compute_schedule(config: &LoanConfig) -> Result<CalculationResult> {
    CalculationResult::compute(config)
}
