//! Utility functions for the binecc library

use num_bigint::BigUint;
use num_traits::Num;

/// Parses a hexadecimal literal, accepting an optional `0x` prefix and `_` separators
pub fn parse_hex(literal: &str) -> Option<BigUint> {
    let trimmed = literal.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        return None;
    }
    BigUint::from_str_radix(&cleaned, 16).ok()
}

/// Renders a bit-polynomial in `x^i` notation, highest degree first
pub fn format_polynomial(poly: &BigUint) -> String {
    let terms: Vec<String> = (0..poly.bits())
        .rev()
        .filter(|&i| poly.bit(i))
        .map(|i| match i {
            0 => "1".to_string(),
            1 => "x".to_string(),
            _ => format!("x^{i}"),
        })
        .collect();

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}
