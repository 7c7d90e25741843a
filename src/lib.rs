//! A variable-precision decimal bignum encoding
//!
//! Primitive numeric values (`u64`, floating point) are converted into a
//! compact, self-describing byte array holding arbitrary-length integer and
//! fractional digit sequences, and round-tripped back into human-readable
//! decimal strings.
//!
//! Every array is a fixed header followed by a payload:
//!
//! ```text
//! METADATA, INT LEN, FRAC LEN, FLAGS, DATA...                       (narrow)
//! METADATA, INT HIGH, INT LOW, FRAC HIGH, FRAC LOW, FLAGS, DATA...  (wide)
//! ```
//!
//! The metadata byte selects one of two addressing modes (narrow one-byte
//! length fields, or wide two-byte fields) and one of two payload bases
//! (one decimal digit per element, or one full byte of base-256 magnitude).
//! Payload digits run most-significant-first, integer part then fractional
//! part, so reading the array left to right reproduces the number as
//! written.
//!
//! # Example
//!
//! ```
//! use bignum_array::{DigitArray, Flags, Metadata};
//!
//! let arr = DigitArray::encode(0.0, 23, Flags::NONE, Metadata::NONE);
//! assert_eq!(arr.as_bytes(), [0, 2, 0, 0, 2, 3]);
//! assert_eq!(arr.to_string(), "23");
//! ```
//!
//! This is an encoding library, not an arithmetic one: no operators are
//! defined over the arrays.
#![allow(clippy::style)]
#![allow(clippy::redundant_field_names)]
#![allow(clippy::needless_return)]

extern crate num_integer;
extern crate num_traits;

#[cfg(feature = "serde")]
extern crate serde;

use std::fmt;

pub mod address;
pub mod base10;
pub mod base256;
pub mod digits;
mod header;
mod run;

pub use digits::Extraction;
pub use header::{Flags, Header, Metadata, HEADER_OFFSET, HEADER_OFFSET_BIG};
pub use run::{DigitRun, Parsed};

#[cfg(test)]
extern crate paste;

/// Default epsilon for floating point comparisons
pub const COMPARE_EPS: f64 = 1e-11;

/// Maximum significant figures the narrow addressing mode will keep when
/// encoding a float, derived from the one-byte length-field maximum
pub const MAX_EXPORT_SIGFIGS: usize = (u8::MAX as usize * 2) - HEADER_OFFSET * 2;

/// The same ceiling for the wide addressing mode
pub const MAX_EXPORT_SIGFIGS_BIG: usize = (u16::MAX as usize * 2) - HEADER_OFFSET_BIG * 2;

/// Epsilon comparison for IEE-754 values, instead of `==`
#[inline]
pub fn compare_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Error parsing a digit array out of raw bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseArrayError {
    /// No bytes at all
    Empty,
    /// Fewer bytes than the metadata byte's header size
    TooShort { expected: usize, actual: usize },
    /// Buffer length disagrees with the header's self-described length
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ParseArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseArrayError::*;

        match *self {
            Empty => "empty byte buffer".fmt(f),
            TooShort { expected, actual } => {
                write!(f, "buffer of {} bytes is shorter than its {}-byte header", actual, expected)
            }
            LengthMismatch { expected, actual } => {
                write!(f, "header describes {} bytes but buffer holds {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ParseArrayError {}

/// A base-256 reconstruction exceeded the range of a `u64`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverflowError;

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        "digit sequence overflows 64 bits".fmt(f)
    }
}

impl std::error::Error for OverflowError {}

/// A self-describing digit array: header plus payload in one owned,
/// immutable buffer
///
/// Arrays are produced once by [DigitArray::encode] (or re-validated from
/// raw bytes by [DigitArray::from_bytes]) and only read thereafter. Each is
/// an independent, exclusively-owned buffer; `Clone` is the deep copy.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DigitArray {
    bytes: Vec<u8>,
}

impl DigitArray {
    /// Encode the first nonzero of two primitive arguments, or zero if
    /// both are
    ///
    /// Value properties like signedness, infiniteness and nan-ness belong
    /// in `value_flags`, not in some cryptic value for `ldbl`; signed zero
    /// is `encode(0.0, 0, Flags::SIGN, Metadata::NONE)`. A negative `ldbl`
    /// folds its sign into the flags and encodes its magnitude. Non-finite
    /// floats carry no magnitude at all, so they fall through to the
    /// integer (or zero) path with only their flags to speak for them.
    ///
    /// The caller picks the addressing mode: a magnitude whose digit
    /// counts do not fit one-byte length fields needs [Metadata::BIG], and
    /// the codec does not second-guess the choice.
    pub fn encode(ldbl: f64, u64_value: u64, value_flags: Flags, metadata: Metadata) -> DigitArray {
        Self::encode_with(ldbl, u64_value, value_flags, metadata, Extraction::default())
    }

    /// [DigitArray::encode] with an explicit digit-extraction strategy
    ///
    /// Both strategies produce identical arrays; the parameter exists so
    /// the string-based reference path can be exercised side by side with
    /// the arithmetic one.
    pub fn encode_with(
        ldbl: f64,
        u64_value: u64,
        value_flags: Flags,
        metadata: Metadata,
        strategy: Extraction,
    ) -> DigitArray {
        let flags = if ldbl < 0.0 { value_flags | Flags::SIGN } else { value_flags };
        let ldbl = ldbl.abs();

        if ldbl.is_finite() && !compare_eps(ldbl, 0.0, COMPARE_EPS) {
            encode_ldbl(ldbl, metadata, flags, strategy)
        } else if u64_value != 0 {
            encode_u64(u64_value, metadata, flags, strategy)
        } else {
            // both are zero, just give zero
            DigitArray { bytes: Header::new(metadata, 0, 0, flags).to_bytes() }
        }
    }

    /// Validate and copy a complete digit array from raw bytes
    ///
    /// The buffer must be exactly the length its own header describes.
    pub fn from_bytes(bytes: &[u8]) -> Result<DigitArray, ParseArrayError> {
        let header = Header::parse(bytes)?;
        if bytes.len() != header.real_len() {
            return Err(ParseArrayError::LengthMismatch {
                expected: header.real_len(),
                actual: bytes.len(),
            });
        }
        Ok(DigitArray { bytes: bytes.to_vec() })
    }

    /// Read one digit array off the front of `bytes`, returning it and
    /// the remainder
    ///
    /// This is the "read your own length prefix and copy that many bytes"
    /// contract composite values rely on when their arrays are laid out
    /// back to back.
    pub fn take_from(bytes: &[u8]) -> Result<(DigitArray, &[u8]), ParseArrayError> {
        let header = Header::parse(bytes)?;
        let real_len = header.real_len();
        if bytes.len() < real_len {
            return Err(ParseArrayError::LengthMismatch {
                expected: real_len,
                actual: bytes.len(),
            });
        }
        let (own, rest) = bytes.split_at(real_len);
        Ok((DigitArray { bytes: own.to_vec() }, rest))
    }

    /// The parsed header view of this array
    pub fn header(&self) -> Header {
        // the constructors guarantee a well-formed buffer
        Header {
            metadata: self.metadata(),
            int_len: self.int_len(),
            frac_len: self.frac_len(),
            flags: self.flags(),
        }
    }

    #[inline]
    pub fn metadata(&self) -> Metadata {
        Metadata::from_bits(self.bytes[0])
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits(self.bytes[self.header_offset() - 1])
    }

    #[inline]
    pub fn header_offset(&self) -> usize {
        self.metadata().header_offset()
    }

    /// Count of payload elements in the integer part
    pub fn int_len(&self) -> u16 {
        if self.metadata().is_big() {
            address::pair_to_u16(&self.bytes[1..3])
        } else {
            self.bytes[1] as u16
        }
    }

    /// Count of payload elements in the fractional part
    pub fn frac_len(&self) -> u16 {
        if self.metadata().is_big() {
            address::pair_to_u16(&self.bytes[3..5])
        } else {
            self.bytes[2] as u16
        }
    }

    /// Total length in bytes: header plus payload
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The whole array, header included
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The payload digits, integer part then fractional part
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[self.header_offset()..]
    }

    /// The integer-part digits
    pub fn int_part(&self) -> &[u8] {
        &self.payload()[..self.int_len() as usize]
    }

    /// The fractional-part digits
    pub fn frac_part(&self) -> &[u8] {
        &self.payload()[self.int_len() as usize..]
    }

    /// Whether this array holds no magnitude: an empty payload or one of
    /// all zero digits
    pub fn is_zero(&self) -> bool {
        self.payload().iter().all(|&digit| digit == 0)
    }

    /// Render the held magnitude as a decimal string through the decoder
    /// for this array's base
    ///
    /// Flags are not rendered here; [fmt::Display] layers them on top.
    pub fn to_decimal_string(&self) -> String {
        if self.metadata().is_base256() {
            base256::b256_to_ldbl_digits(self.payload(), self.int_len())
        } else {
            base10::b10_to_ldbl_digits(self.payload(), self.int_len())
        }
    }
}

impl fmt::Display for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let flags = self.flags();
        if flags.is_nan() {
            return if flags.is_sign() { "-NaN".fmt(f) } else { "NaN".fmt(f) };
        }
        if flags.is_inf() {
            return if flags.is_sign() { "-inf".fmt(f) } else { "inf".fmt(f) };
        }

        if flags.is_sign() {
            f.write_str("-")?;
        }
        let digits = self.to_decimal_string();
        if digits.is_empty() {
            "0".fmt(f)
        } else {
            digits.fmt(f)
        }
    }
}

/// Float path: format at the mode's significant-figure ceiling, then
/// populate through the base the metadata selects
fn encode_ldbl(ldbl: f64, metadata: Metadata, flags: Flags, strategy: Extraction) -> DigitArray {
    let sigfigs = if metadata.is_big() {
        MAX_EXPORT_SIGFIGS_BIG
    } else {
        MAX_EXPORT_SIGFIGS
    };

    // the entire value as a string, which may have trailing zeroes
    let mut fullstr = format!("{:.6}", ldbl);
    fullstr.truncate(sigfigs + 1);

    if metadata.is_base256() {
        let run = base256::ldbl_digits_to_b256(&fullstr, false).into_run();
        let mut bytes = Header::new(metadata, run.int_len, run.frac_len(), flags).to_bytes();
        bytes.extend(run.digits);
        return DigitArray { bytes };
    }

    // the integer half comes from the formatted string in both strategies;
    // formatting rounds the sixth fractional place, and a carry out of it
    // must land in the digits we emit
    let int_str = &fullstr[..fullstr.find('.').unwrap_or(fullstr.len())];
    let nint_digits = int_str.len() as u32;
    let nflot_digits = digits::count_frac_digits(&fullstr) as u32;

    let mut bytes =
        Header::new(metadata, nint_digits as u16, nflot_digits as u16, flags).to_bytes();
    bytes.reserve((nint_digits + nflot_digits) as usize);

    // the arithmetic strategy re-parses the half and divides digits back
    // out; an integer half too wide for a u64 can only go through chars
    match (strategy, int_str.parse::<u64>()) {
        (Extraction::Arithmetic, Ok(int_val)) => {
            for i in 0..nint_digits {
                bytes.push(digits::nth_digit_from_left(int_val, i, strategy));
            }
        }
        _ => {
            bytes.extend(int_str.bytes().map(|b| b - b'0'));
        }
    }

    // the fractional component must come from the string; a digit slot
    // holding the bare separator is the implicit trailing zero
    let frac = &fullstr.as_bytes()[digits::find_frac_beginning(&fullstr)..];
    for i in 0..nflot_digits as usize {
        let digit = frac.get(i).map(|b| b.wrapping_sub(b'0')).unwrap_or(0);
        bytes.push(if digit <= 9 { digit } else { 0 });
    }

    DigitArray { bytes }
}

/// Integer path: count digits in the selected base and extract them one
/// by one
fn encode_u64(u64_value: u64, metadata: Metadata, flags: Flags, strategy: Extraction) -> DigitArray {
    if metadata.is_base256() {
        let payload = base256::u64_to_b256(u64_value, false);
        let mut bytes = Header::new(metadata, payload.len() as u16, 0, flags).to_bytes();
        bytes.extend(payload);
        return DigitArray { bytes };
    }

    let ndigits = digits::count_digits(u64_value);
    let mut bytes = Header::new(metadata, ndigits as u16, 0, flags).to_bytes();
    bytes.reserve(ndigits as usize);

    match strategy {
        Extraction::Arithmetic => {
            for i in 0..ndigits {
                bytes.push(digits::nth_digit_from_left(u64_value, i, strategy));
            }
        }
        Extraction::CharConv => {
            bytes.extend(u64_value.to_string().bytes().map(|b| b - b'0'));
        }
    }

    DigitArray { bytes }
}

#[cfg(feature = "serde")]
mod digit_array_serde {
    use super::DigitArray;
    use serde::{de, ser};
    use std::fmt;

    impl ser::Serialize for DigitArray {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.serialize_bytes(self.as_bytes())
        }
    }

    impl<'de> de::Deserialize<'de> for DigitArray {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            deserializer.deserialize_bytes(DigitArrayVisitor)
        }
    }

    struct DigitArrayVisitor;

    impl<'de> de::Visitor<'de> for DigitArrayVisitor {
        type Value = DigitArray;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a self-describing digit-array byte sequence")
        }

        fn visit_bytes<E>(self, value: &[u8]) -> Result<DigitArray, E>
        where
            E: de::Error,
        {
            DigitArray::from_bytes(value).map_err(E::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<DigitArray, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(byte) = seq.next_element::<u8>()? {
                bytes.push(byte);
            }
            DigitArray::from_bytes(&bytes).map_err(de::Error::custom)
        }
    }

}


#[cfg(test)]
#[allow(non_snake_case)]
mod digit_array_tests {
    use super::*;

    include!("lib.tests.rs");
}

#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use paste::paste;
    use proptest::*;

    include!("lib.tests.property-tests.rs");
}
