// src/display/format.rs

//! Display strings for prices, percentages and volumes.
//! Always US-style grouping; there is no locale parameter.

/// Rendered in place of a value that is not a finite number.
pub const PLACEHOLDER: &str = "—";

/// `$1,234.56`, `-$0.99`, `$0.00`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let grouped = group_thousands(&format!("{:.2}", round_cents(price.abs())));
    if price < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `+5.68%`, `-5.68%`, and `0.00%` for both zeros.
pub fn format_percentage_change(change: f64) -> String {
    if !change.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if change == 0.0 {
        return "0.00%".to_string();
    }
    let magnitude = round_cents(change.abs());
    if change > 0.0 {
        format!("+{magnitude:.2}%")
    } else {
        format!("-{magnitude:.2}%")
    }
}

/// Volume in millions, e.g. `52.35M`.
pub fn format_volume(volume: f64) -> String {
    if !volume.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let millions = volume / 1_000_000.0;
    let magnitude = round_cents(millions.abs());
    if millions < 0.0 {
        format!("-{magnitude:.2}M")
    } else {
        format!("{magnitude:.2}M")
    }
}

pub fn format_shares(shares: f64) -> String {
    format!("{shares} shares")
}

/// Key-statistics cell: a price, or `-` when the field is missing.
pub fn format_optional_price(price: Option<f64>) -> String {
    price.map_or_else(|| "-".to_string(), format_price)
}

// Two decimals, ties away from zero. `{:.2}` alone would round ties to even.
fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// Inserts commas into the integer part of an already fixed-point string.
fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed, ""));
    let len = int_part.len();
    let mut out = String::with_capacity(fixed.len() + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
