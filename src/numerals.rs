//! Substitution between ASCII and Persian digits.

use crate::consts::PERSIAN_DIGITS;
use std::fmt::Display;

/// Replaces every ASCII digit with its Persian counterpart.
/// Other characters, including Persian digits, are kept as they are.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(value) if c.is_ascii_digit() => PERSIAN_DIGITS[value as usize],
            _ => c,
        })
        .collect()
}

/// Replaces every Persian digit with its ASCII counterpart.
/// Other characters, including ASCII digits, are kept as they are.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            PERSIAN_DIGITS
                .iter()
                .zip('0'..='9')
                .find_map(|(&persian, ascii)| (persian == c).then_some(ascii))
                .unwrap_or(c)
        })
        .collect()
}

/// Renders a value with Persian digits.
pub fn persian_number(value: impl Display) -> String {
    to_persian_digits(&value.to_string())
}
