//! Amount and percentage formatting

use bigdecimal::{BigDecimal, RoundingMode};

use super::query::{NegativeFormat, NumberFormat};

/// Symbol used when money formatting is on; unknown codes fall back to the code itself
pub fn currency_symbol(currency_code: &str) -> String {
    match currency_code {
        "USD" | "AUD" | "CAD" | "NZD" | "SGD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" | "CNY" => "¥".to_string(),
        "INR" => "₹".to_string(),
        "LYD" => "LD".to_string(),
        other => format!("{} ", other),
    }
}

/// Round half away from zero and render with thousands separators, no sign
fn render_magnitude(value: &BigDecimal, precision: u32) -> String {
    let rounded = value.abs().with_scale_round(i64::from(precision), RoundingMode::HalfUp);
    let (digits, _) = rounded.as_bigint_and_exponent();
    let digits = digits.to_string();

    let precision = precision as usize;
    let digits = format!("{:0>width$}", digits, width = precision + 1);
    let (integer, fraction) = digits.split_at(digits.len() - precision);

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if fraction.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

fn is_zero_text(magnitude: &str) -> bool {
    magnitude.chars().all(|c| matches!(c, '0' | ',' | '.'))
}

fn apply_sign(text: String, negative: bool, negative_format: NegativeFormat) -> String {
    match (negative, negative_format) {
        (false, _) => text,
        (true, NegativeFormat::Minus) => format!("-{}", text),
        (true, NegativeFormat::Parentheses) => format!("({})", text),
    }
}

/// Format an amount for display
///
/// `currency` is the currency code to prefix, or `None` for a bare number.
/// Zero renders as an empty string unless `show_zero` is set.
pub fn format_amount(amount: &BigDecimal, number_format: &NumberFormat, currency: Option<&str>) -> String {
    if *amount == BigDecimal::from(0) && !number_format.show_zero {
        return String::new();
    }

    let value = if number_format.divide_on_1000 {
        amount / BigDecimal::from(1000)
    } else {
        amount.clone()
    };

    let magnitude = render_magnitude(&value, number_format.precision);
    let negative = value < BigDecimal::from(0) && !is_zero_text(&magnitude);
    let text = match currency {
        Some(code) => format!("{}{}", currency_symbol(code), magnitude),
        None => magnitude,
    };

    apply_sign(text, negative, number_format.negative_format)
}

/// Format a fraction (`0.25`) as a percentage (`25.00%`)
///
/// Percentages are never divided by 1000 and zero is always shown.
pub fn format_percentage(fraction: &BigDecimal, number_format: &NumberFormat) -> String {
    let percent = fraction * BigDecimal::from(100);
    let magnitude = render_magnitude(&percent, number_format.precision);
    let negative = percent < BigDecimal::from(0) && !is_zero_text(&magnitude);

    apply_sign(format!("{}%", magnitude), negative, number_format.negative_format)
}
