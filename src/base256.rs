//! Base-256 digit-array codec
//!
//! Payload elements hold a full byte of magnitude each, so representing
//! 255 takes one element instead of three base-10 digits.

use num_integer::Integer;
use num_traits::pow;

use crate::run::{DigitRun, Parsed};
use crate::OverflowError;

/// Base-256 digits a `u64` can span
const MAX_U64_B256_DIGITS: usize = 8;

/// Transform `x` to its base-256 representation, most significant byte
/// first
///
/// Reversed to least-significant-first when `little_endian` is set.
/// Zero is a single zero-valued element.
pub fn u64_to_b256(value: u64, little_endian: bool) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }

    let mut digits = Vec::with_capacity(MAX_U64_B256_DIGITS);

    // least significant byte falls out first
    let mut rest = value;
    while rest != 0 {
        let (quot, rem) = rest.div_rem(&256);
        digits.push(rem as u8);
        rest = quot;
    }

    if !little_endian {
        digits.reverse();
    }
    digits
}

/// Rebuild a `u64` from base-256 digits, index 0 holding the least
/// significant byte
///
/// The weighted sum `Σ digits[i] * 256^i` overflows 64 bits as soon as
/// there are more than eight digits; that is an error rather than a
/// wrapped value.
pub fn b256_to_u64(digits: &[u8]) -> Result<u64, OverflowError> {
    if digits.len() > MAX_U64_B256_DIGITS {
        return Err(OverflowError);
    }

    let mut result = 0u64;
    for (i, &digit) in digits.iter().enumerate() {
        result += digit as u64 * pow(256u64, i);
    }
    Ok(result)
}

/// Convert a formatted decimal string into a base-256 digit run
///
/// The integer half lands most-significant-first; the fractional half's
/// byte order is flipped before the final concatenation so re-reading
/// the run forward restores the original digit order. Empty or
/// unparseable input takes the [Parsed::Zero] fallback.
pub fn ldbl_digits_to_b256(ldbl_digits: &str, little_endian: bool) -> Parsed {
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

    // flip the significant digits, then flip the byte order back
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

    let mut digits = u64_to_b256(int_val, false);
    let int_len = digits.len() as u16;

    if frac_str.is_some() {
        digits.extend(u64_to_b256(frac_val, true));
    }

    if little_endian {
        digits.reverse();
    }

    Parsed::Value(DigitRun { digits, int_len })
}

fn parse_half(half: &str) -> Option<u64> {
    if half.is_empty() {
        return Some(0);
    }
    half.parse().ok()
}

/// Render a base-256 digit run back into a decimal string
///
/// The run splits at `int_len`; the fractional portion's flip is undone
/// before each half converts back through [b256_to_u64]. An empty string
/// is returned for an empty run, `int_len` beyond the run length, or a
/// half too long to rebuild in 64 bits.
pub fn b256_to_ldbl_digits(digits: &[u8], int_len: u16) -> String {
    let int_len = int_len as usize;
    if digits.is_empty() || int_len > digits.len() {
        return String::new();
    }

    let (int_part, frac_part) = digits.split_at(int_len);

    // both halves read most-significant-first once the storage flip
    // is undone
    let frac_be: Vec<u8> = frac_part.iter().rev().copied().collect();

    let (int_val, frac_val) = match (half_to_u64(int_part), half_to_u64(&frac_be)) {
        (Ok(int_val), Ok(frac_val)) => (int_val, frac_val),
        _ => return String::new(),
    };

    if frac_part.is_empty() {
        return int_val.to_string();
    }

    let frac_str: String = frac_val.to_string().chars().rev().collect();
    format!("{}.{}", int_val, frac_str)
}

// a most-significant-first half, summed little-endian
fn half_to_u64(half: &[u8]) -> Result<u64, OverflowError> {
    let le: Vec<u8> = half.iter().rev().copied().collect();
    b256_to_u64(&le)
}


#[cfg(test)]
mod tests {
    use super::*;

    extern crate num_bigint;
    use num_bigint::BigUint;

    mod u64_to_b256 {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:expr, $le:literal => $expected:expr) => {
                #[test]
                fn $name() {
                    assert_eq!(u64_to_b256($input, $le), $expected);
                }
            };
        }

        impl_case!(case_0: 0, false => [0]);
        impl_case!(case_255: 255, false => [255]);
        impl_case!(case_256: 256, false => [1, 0]);
        impl_case!(case_256_le: 256, true => [0, 1]);
        impl_case!(case_65535: 65535, false => [255, 255]);
        impl_case!(case_12345678901234567890: 12345678901234567890, false
            => [171, 84, 169, 140, 235, 31, 10, 210]);
        impl_case!(case_u64_max: u64::MAX, false => [255; 8]);

        #[test]
        fn agrees_with_biguint_be_bytes() {
            let samples: &[u64] = &[1, 255, 256, 65535, 12345678901234567890, u64::MAX];
            for &x in samples {
                assert_eq!(u64_to_b256(x, false), BigUint::from(x).to_bytes_be());
                assert_eq!(u64_to_b256(x, true), BigUint::from(x).to_bytes_le());
            }
        }
    }

    mod b256_to_u64 {
        use super::*;

        #[test]
        fn two_full_bytes() {
            assert_eq!(b256_to_u64(&[255, 255]), Ok(65535));
        }

        #[test]
        fn empty_is_zero() {
            assert_eq!(b256_to_u64(&[]), Ok(0));
        }

        #[test]
        fn eight_full_bytes_is_max() {
            assert_eq!(b256_to_u64(&[255; 8]), Ok(u64::MAX));
        }

        #[test]
        fn nine_digits_overflows() {
            assert_eq!(b256_to_u64(&[0; 9]), Err(OverflowError));
        }
    }

    mod ldbl_digits_to_b256 {
        use super::*;

        #[test]
        fn integer_and_fraction() {
            let run = ldbl_digits_to_b256("123.45", false).into_run();
            // int 123 big-endian, then frac bytes flipped
            assert_eq!(run.digits, [123, 54]);
            assert_eq!(run.int_len, 1);
        }

        #[test]
        fn multi_byte_integer() {
            let run = ldbl_digits_to_b256("90210", false).into_run();
            assert_eq!(run.digits, [1, 96, 98]);
            assert_eq!(run.int_len, 3);
            assert_eq!(run.frac_len(), 0);
        }

        #[test]
        fn fallback_on_garbage() {
            assert!(ldbl_digits_to_b256("", false).is_fallback());
            assert!(ldbl_digits_to_b256("waffle", false).is_fallback());
            assert!(ldbl_digits_to_b256("12345678901234567890123.4", false).is_fallback());
        }

        #[test]
        fn little_endian_reverses_whole_run() {
            let run = ldbl_digits_to_b256("123.45", true).into_run();
            assert_eq!(run.digits, [54, 123]);
        }
    }

    mod b256_to_ldbl_digits {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $digits:expr, int_len $int_len:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    assert_eq!(b256_to_ldbl_digits(&$digits, $int_len), $expected);
                }
            };
        }

        impl_case!(case_123d45: [123, 54], int_len 1 => "123.45");
        impl_case!(case_int_only: [1, 96, 98], int_len 3 => "90210");
        impl_case!(case_empty: [0u8; 0], int_len 0 => "");
        impl_case!(case_int_len_too_large: [1, 2], int_len 3 => "");
        impl_case!(case_overlong_half: [1, 1, 1, 1, 1, 1, 1, 1, 1, 0], int_len 9 => "");
    }

    mod round_trip {
        use super::*;

        #[test]
        fn u64_both_endians() {
            let samples: &[u64] = &[0, 1, 255, 256, 65535, 12345678901234567890, u64::MAX];
            for &x in samples {
                assert_eq!(b256_to_u64(&u64_to_b256(x, true)), Ok(x));

                let mut be = u64_to_b256(x, false);
                be.reverse();
                assert_eq!(b256_to_u64(&be), Ok(x));
            }
        }

        #[test]
        fn string_to_run_and_back() {
            for s in ["123.45", "0.5", "90210", "65535.65535"] {
                let run = ldbl_digits_to_b256(s, false).into_run();
                assert_eq!(b256_to_ldbl_digits(&run.digits, run.int_len), s, "{}", s);
            }
        }
    }
}
