//! Base-10 digit-array codec
//!
//! Payload elements hold one decimal digit, 0 through 9. Conversions go
//! between `u64` values, formatted decimal strings, and digit runs.

use crate::digits::count_digits;
use crate::run::{DigitRun, Parsed};

use std::num::ParseIntError;

/// Render `x` as its decimal digits, most significant first
///
/// Reversed to least-significant-first when `little_endian` is set.
/// Zero is a single zero digit.
pub fn u64_to_b10(value: u64, little_endian: bool) -> Vec<u8> {
    let mut digits = Vec::with_capacity(count_digits(value) as usize);
    digits.extend(value.to_string().bytes().map(|b| b - b'0'));

    if little_endian {
        digits.reverse();
    }
    digits
}

/// Convert a formatted decimal string like `123.45` into the digit run
/// `{ 1 2 3 4 5 }` with `int_len == 3`
///
/// The string splits at the first separator; the integer half and the
/// reversed fractional half each pass through a `u64` and out of
/// [u64_to_b10] as standalone runs. A missing fractional half after a
/// separator is the implicit trailing zero. Empty or unparseable input
/// takes the [Parsed::Zero] fallback rather than failing.
pub fn ldbl_digits_to_b10(ldbl_digits: &str, little_endian: bool) -> Parsed {
    let (int_str, frac_str) = match ldbl_digits.split_once('.') {
        Some((int_str, frac_str)) => (int_str, Some(frac_str)),
        None => (ldbl_digits, None),
    };

    if int_str.is_empty() && frac_str.is_none() {
        return Parsed::Zero;
    }

    let int_val = match parse_half(int_str) {
        Some(val) => val,
        None => return Parsed::Zero,
    };

    // flip the fractional digits; emitting the reversed value
    // little-endian restores the original order
    let frac_val = match frac_str {
        Some(frac_str) => {
            let reversed: String = frac_str.chars().rev().collect();
            match parse_half(&reversed) {
                Some(val) => val,
                None => return Parsed::Zero,
            }
        }
        None => 0,
    };

    let mut digits = u64_to_b10(int_val, false);
    let int_len = digits.len() as u16;

    if frac_str.is_some() {
        digits.extend(u64_to_b10(frac_val, true));
    }

    if little_endian {
        digits.reverse();
    }

    Parsed::Value(DigitRun { digits, int_len })
}

// an absent half reads as zero, like the C library's strtoull("")
fn parse_half(half: &str) -> Option<u64> {
    if half.is_empty() {
        return Some(0);
    }
    half.parse().ok()
}

/// Render a digit run back into a decimal string: `{ 1 2 3 4 5 }` with
/// `int_len == 3` becomes `"123.45"`
///
/// An empty string is returned when there are no digits or `int_len`
/// exceeds the run length.
pub fn b10_to_ldbl_digits(digits: &[u8], int_len: u16) -> String {
    let int_len = int_len as usize;
    if digits.is_empty() || int_len > digits.len() {
        return String::new();
    }

    let mut s = String::with_capacity(digits.len() + 1);
    for &digit in &digits[..int_len] {
        s.push((digit + b'0') as char);
    }
    if int_len != digits.len() {
        s.push('.');
        for &digit in &digits[int_len..] {
            s.push((digit + b'0') as char);
        }
    }
    s
}

/// Render an integer digit run (no fractional part) as a string
pub fn b10_to_u64_digits(digits: &[u8]) -> String {
    digits.iter().map(|&digit| (digit + b'0') as char).collect()
}

/// Parse an integer digit run back to a `u64`
///
/// Overflow behavior is whatever the platform string-to-integer parse
/// does; it is surfaced untouched.
pub fn b10_to_u64(digits: &[u8]) -> Result<u64, ParseIntError> {
    b10_to_u64_digits(digits).parse()
}
