/// json output - serialize a calculation result for a presentation shell
use emi_engine_rs::{compute_schedule, LoanConfig, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LoanConfig::credit_card_defaults(
        Money::from_major(250_000),
        Rate::from_percent(dec!(14)),
        12,
    );

    let result = compute_schedule(&config)?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
