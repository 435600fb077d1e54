/// quick start - credit-card loan EMI with GST overlay
use emi_engine_rs::{compute_schedule, format_inr, LoanConfig, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ₹10,00,000 at 12% over 24 months, 18% GST, 1% processing fee
    let config = LoanConfig::credit_card(
        Money::from_major(1_000_000),
        Rate::from_percent(dec!(12)),
        24,
        Rate::from_percent(dec!(18)),
        Rate::from_percent(dec!(1)),
    );

    let result = compute_schedule(&config)?;

    println!("Monthly EMI (ex-GST): {}", format_inr(result.monthly_installment));
    println!(
        "Processing fee:       {} (+ {} GST)",
        format_inr(result.processing_fee_amount),
        format_inr(result.tax_on_processing_fee)
    );
    println!("Total interest:       {}", format_inr(result.total_interest));
    println!("Total GST (interest): {}", format_inr(result.total_tax));
    println!("Total paid:           {}", format_inr(result.total_paid));
    println!(
        "Effective rate:       {:.1}% over principal",
        result.effective_cost().as_percent()
    );

    println!("\nMonth | Opening     | Interest  | Principal | EMI + GST | Closing");
    for row in result.schedule.iter().take(6) {
        println!(
            "{:>5} | {:>11} | {:>9} | {:>9} | {:>9} | {:>11}",
            row.month,
            format_inr(row.opening_balance),
            format_inr(row.interest),
            format_inr(row.principal),
            format_inr(row.installment_with_tax),
            format_inr(row.closing_balance),
        );
    }

    let totals = result.totals();
    println!(
        "TOTAL | {:>11} | {:>9} | {:>9} | {:>9} |",
        "-",
        format_inr(totals.interest),
        format_inr(totals.principal),
        format_inr(totals.installment_with_tax),
    );

    Ok(())
}
