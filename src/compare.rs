use crate::{Error, Result};
use std::cmp::Ordering;

/// Compares two decimal numbers kept as strings, digit by digit, without ever
/// converting them to a fixed width numeric type. This is what makes range
/// checks possible for magnitudes beyond `i128`/`f64`/`Decimal`, like the
/// extended SQL decimal range of roughly ±10^38.
///
/// Accepted inputs are integer literals (`[+-]?digits`) or decimal literals
/// (`[+-]?digits.digits`); a comma is normalized to a dot before matching.
/// Anything else is an error.
pub fn compare(first: impl AsRef<str>, second: impl AsRef<str>) -> Result<Ordering> {
    let first = first.as_ref().replace(',', ".");
    let second = second.as_ref().replace(',', ".");
    if !is_numeric_literal(&first) {
        return Err(Error::msg(format!("'{first}' is not a valid number")));
    }
    if !is_numeric_literal(&second) {
        return Err(Error::msg(format!("'{second}' is not a valid number")));
    }
    Ok(compare_decimal(
        first.trim_start_matches('+'),
        second.trim_start_matches('+'),
    ))
}

/// Non-raising variant of [`compare`]: `None` when either input is not a
/// well formed number.
pub fn try_compare(first: impl AsRef<str>, second: impl AsRef<str>) -> Option<Ordering> {
    compare(first, second).ok()
}

/// An optionally signed run of digits, with at most one fractional part.
/// Expects an already normalized literal (comma replaced by dot).
pub(crate) fn is_numeric_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((integer, fraction)) => all_digits(integer) && all_digits(fraction),
        None => all_digits(unsigned),
    }
}

fn compare_decimal(first: &str, second: &str) -> Ordering {
    // "0" and "-0" denote the same value.
    if first == "0" && second == "-0" || first == "-0" && second == "0" {
        return Ordering::Equal;
    }

    let (integer1, fraction1) = split_at_dot(first);
    let (integer2, fraction2) = split_at_dot(second);

    let integers = compare_integer(integer1, integer2);
    if integers != Ordering::Equal {
        return integers;
    }

    // Equal integer parts: compare fractions as right padded positive integers.
    let width = fraction1.len().max(fraction2.len());
    let padded1 = format!("{fraction1:0<width$}");
    let padded2 = format!("{fraction2:0<width$}");
    compare_positive(&padded1, &padded2)
}

fn split_at_dot(value: &str) -> (&str, &str) {
    match value.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (value, "0"),
    }
}

fn compare_integer(first: &str, second: &str) -> Ordering {
    let first = first.trim_start_matches('0');
    let second = second.trim_start_matches('0');
    let negative1 = first.starts_with('-');
    let negative2 = second.starts_with('-');
    match (negative1, negative2) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        // Both negative: compare magnitudes with flipped polarity.
        (true, true) => compare_positive(
            second.trim_start_matches('-'),
            first.trim_start_matches('-'),
        ),
        (false, false) => compare_positive(first, second),
    }
}

fn compare_positive(first: &str, second: &str) -> Ordering {
    let first = first.trim_start_matches('0');
    let second = second.trim_start_matches('0');
    // A longer digit string is a bigger number; equal lengths compare
    // lexicographically since the alphabet is '0'..'9'.
    first.len().cmp(&second.len()).then_with(|| first.cmp(second))
}
