/// personal loan - no GST on interest, fixed 18% GST on the processing fee
use emi_engine_rs::{compute_schedule, format_inr, LoanConfig, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LoanConfig::personal_loan(
        Money::from_major(500_000),
        Rate::from_percent(dec!(11.5)),
        36,
        Rate::from_percent(dec!(2)),
    );

    let result = compute_schedule(&config)?;

    println!("Monthly EMI:    {}", format_inr(result.monthly_installment));
    println!(
        "Processing fee: {} (+ {} GST, fixed 18%)",
        format_inr(result.processing_fee_amount),
        format_inr(result.tax_on_processing_fee)
    );
    println!("Total interest: {}", format_inr(result.total_interest));
    println!("Total paid:     {}", format_inr(result.total_paid));
    println!("Extra paid:     {}", format_inr(result.extra_paid()));

    // every installment equals the base EMI: no interest GST on this variant
    let first = result.row(1).expect("schedule has rows");
    assert_eq!(first.installment_with_tax, first.base_installment);

    Ok(())
}
