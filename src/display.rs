use rust_decimal::RoundingStrategy;

use crate::decimal::Money;

/// format an amount for display: rupee glyph, en-IN digit grouping,
/// zero decimal places
///
/// grouping is the Indian convention: last three digits, then groups of two
/// (₹1,00,00,000 for one crore)
pub fn format_inr(amount: Money) -> String {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let grouped = group_indian(&rounded.abs().to_string());

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut parts = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();

    format!("{},{}", parts.join(","), tail)
}
