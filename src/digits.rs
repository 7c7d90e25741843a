//! Digit counting and extraction primitives
//!
//! Everything here works on hardware integers; the array codecs build their
//! payloads out of these routines.

use num_traits::pow;

// const DEFAULT_PREFER_CHAR_CONV: bool = ${RUST_BIGNUM_ARRAY_PREFER_CHAR_CONV} or false;
include!(concat!(env!("OUT_DIR"), "/default_extraction.rs"));

/// Number of decimal digits in the longest `u64`
pub const MAX_U64_DIGITS: usize = 20;

/// How [nth_digit_from_left] reads a digit out of an integer
///
/// `Arithmetic` divides by the right power of ten, `CharConv` renders the
/// number to a string and indexes it. Both agree for every `u64`; the string
/// form exists as a reference implementation for precision-sensitive review.
///
/// The default is chosen at compile time through the
/// `RUST_BIGNUM_ARRAY_PREFER_CHAR_CONV` environment variable.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Extraction {
    /// O(1) power-of-ten division
    Arithmetic,
    /// Render to a decimal string and index it
    CharConv,
}

impl Default for Extraction {
    fn default() -> Extraction {
        if DEFAULT_PREFER_CHAR_CONV {
            Extraction::CharConv
        } else {
            Extraction::Arithmetic
        }
    }
}

/// Count the decimal digits in `x`
///
/// Zero counts as one digit, the length of its rendered string.
/// The result is never more than [MAX_U64_DIGITS].
#[inline]
pub fn count_digits(x: u64) -> u32 {
    match x.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Highest 0-based digit index of `x`; `count_digits(x) - 1`
///
/// For use with [nth_digit_from_left].
#[inline]
pub fn indexable_digits(x: u64) -> u32 {
    count_digits(x) - 1
}

/// Count the base-256 digits (bytes of magnitude) in `x`
///
/// Zero counts as one digit, as in base 10.
#[inline]
pub fn count_b256_digits(x: u64) -> u32 {
    match x.checked_ilog2() {
        Some(log) => log / 8 + 1,
        None => 1,
    }
}

/// The decimal digit of `x` at 0-based position `n`, counted from the
/// most significant digit
///
/// `n` must be less than `count_digits(x)`.
pub fn nth_digit_from_left(x: u64, n: u32, strategy: Extraction) -> u8 {
    match strategy {
        Extraction::Arithmetic => {
            let tpow = pow(10u64, (indexable_digits(x) - n) as usize);
            ((x / tpow) % 10) as u8
        }
        Extraction::CharConv => {
            let s = x.to_string();
            s.as_bytes()[n as usize] - b'0'
        }
    }
}

/// Index where the fractional digits of a formatted decimal string begin
///
/// Normally one past the separator; a string ending in `.` points at the
/// separator itself so the implicit trailing zero is still countable; a
/// string with no separator points past the end.
pub fn find_frac_beginning(s: &str) -> usize {
    let pre_len = s.find('.').unwrap_or(s.len());
    let diff = s.len() - pre_len;

    if diff == 1 {
        pre_len
    } else if diff != 0 {
        pre_len + 1
    } else {
        s.len()
    }
}

/// Count the fractional digits in a formatted decimal string
///
/// Numbers like `123.` end with an implicit zero and have a fractional
/// length of 1.
pub fn count_frac_digits(s: &str) -> usize {
    let begin = find_frac_beginning(s);
    if s.len() - begin == 1 {
        return 1;
    }
    s[begin..].bytes().take_while(|b| b.is_ascii_digit()).count()
}
