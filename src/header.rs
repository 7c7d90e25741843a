//! Header codec: the metadata byte, the flags byte, and the parsed
//! header view
//!
//! Every digit array begins with a fixed prefix:
//!
//! ```text
//! METADATA, INT LEN, FRAC LEN, FLAGS, DATA...                       (narrow)
//! METADATA, INT HIGH, INT LOW, FRAC HIGH, FRAC LOW, FLAGS, DATA...  (wide)
//! ```
//!
//! The metadata byte alone determines the header size, so a header is
//! self-describing from its first byte.

use crate::address::{pack_u16, pair_to_u16};
use crate::ParseArrayError;

use std::fmt;
use std::ops::BitOr;

/// Header size in narrow (one-byte) addressing mode
pub const HEADER_OFFSET: usize = 4;
/// Header size in wide (two-byte) addressing mode
pub const HEADER_OFFSET_BIG: usize = 6;

/// The metadata byte: addressing mode and payload base for one array
///
/// Metadata is local to a single array and is never propagated to any
/// other array; each array describes itself.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Metadata(u8);

impl Metadata {
    /// Narrow addressing, base-10 payload
    pub const NONE: Metadata = Metadata(0x0);
    /// Wide (two-byte) addressing mode
    pub const BIG: Metadata = Metadata(0x01);
    /// Payload digits are base 256, one full byte of magnitude each
    /// (from the word zenzizenzizenzic)
    pub const ZENZ: Metadata = Metadata(0x02);
    /// Value overflows this array; combine with an extension array.
    /// Reserved: defined but not acted on by the codec.
    pub const OVERF: Metadata = Metadata(0x04);
    /// This array extends an overflowed one. Reserved, as above.
    pub const EXTN: Metadata = Metadata(0x08);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Metadata {
        Metadata(bits)
    }

    /// Whether this array uses the wide, two-byte addressing mode
    #[inline]
    pub const fn is_big(self) -> bool {
        self.0 & Metadata::BIG.0 != 0
    }

    /// Whether the payload is base 256 rather than base 10
    #[inline]
    pub const fn is_base256(self) -> bool {
        self.0 & Metadata::ZENZ.0 != 0
    }

    /// Size of the header this metadata byte announces
    #[inline]
    pub const fn header_offset(self) -> usize {
        if self.is_big() {
            HEADER_OFFSET_BIG
        } else {
            HEADER_OFFSET
        }
    }
}

impl BitOr for Metadata {
    type Output = Metadata;

    fn bitor(self, rhs: Metadata) -> Metadata {
        Metadata(self.0 | rhs.0)
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// The flags byte: properties of the number the array holds
///
/// Flags compose, so signed NaN and signed infinity are representable
/// as they should be.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0x0);
    /// The number is negative
    pub const SIGN: Flags = Flags(0x01);
    /// The number is not a number
    pub const NAN: Flags = Flags(0x02);
    /// The number is infinite
    pub const INF: Flags = Flags(0x04);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Flags {
        Flags(bits)
    }

    #[inline]
    pub const fn is_sign(self) -> bool {
        self.0 & Flags::SIGN.0 != 0
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 & Flags::NAN.0 != 0
    }

    #[inline]
    pub const fn is_inf(self) -> bool {
        self.0 & Flags::INF.0 != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

/// A parsed header: the four values every digit array prefix carries
///
/// Constructed once by [Header::parse] with bounds checking, instead of
/// re-deriving byte offsets at every field access.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Header {
    pub metadata: Metadata,
    pub int_len: u16,
    pub frac_len: u16,
    pub flags: Flags,
}

impl Header {
    pub fn new(metadata: Metadata, int_len: u16, frac_len: u16, flags: Flags) -> Header {
        Header { metadata, int_len, frac_len, flags }
    }

    /// Size of this header in bytes: 4 narrow, 6 wide
    #[inline]
    pub fn len(&self) -> usize {
        self.metadata.header_offset()
    }

    /// Total size of the array this header describes
    #[inline]
    pub fn real_len(&self) -> usize {
        self.len() + self.int_len as usize + self.frac_len as usize
    }

    /// Read a header off the front of `bytes`
    ///
    /// Only the header region is examined; `bytes` may be exactly a header
    /// or a whole array.
    pub fn parse(bytes: &[u8]) -> Result<Header, ParseArrayError> {
        let metadata = match bytes.first() {
            Some(&byte) => Metadata::from_bits(byte),
            None => return Err(ParseArrayError::Empty),
        };

        let offset = metadata.header_offset();
        if bytes.len() < offset {
            return Err(ParseArrayError::TooShort {
                expected: offset,
                actual: bytes.len(),
            });
        }

        let (int_len, frac_len) = if metadata.is_big() {
            (pair_to_u16(&bytes[1..3]), pair_to_u16(&bytes[3..5]))
        } else {
            (bytes[1] as u16, bytes[2] as u16)
        };

        Ok(Header {
            metadata,
            int_len,
            frac_len,
            flags: Flags::from_bits(bytes[offset - 1]),
        })
    }

    /// Serialize this header
    ///
    /// In narrow mode each length is masked to its low byte; callers must
    /// pick wide mode when a count may not fit. This truncation is the
    /// pinned wire behavior, not an error.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.len();
        let mut header = vec![0u8; len];

        // first byte is the type and base, last byte is flags
        header[0] = self.metadata.bits();
        header[len - 1] = self.flags.bits();

        if self.metadata.is_big() {
            let (int_high, int_low) = pack_u16(self.int_len);
            let (frac_high, frac_low) = pack_u16(self.frac_len);
            header[1] = int_high;
            header[2] = int_low;
            header[3] = frac_high;
            header[4] = frac_low;
        } else {
            header[1] = self.int_len as u8;
            header[2] = self.frac_len as u8;
        }

        header
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    mod to_bytes {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: ($meta:expr, $int:literal, $frac:literal, $flags:expr) => $expected:expr) => {
                #[test]
                fn $name() {
                    let header = Header::new($meta, $int, $frac, $flags);
                    assert_eq!(header.to_bytes(), $expected);
                }
            };
        }

        impl_case!(case_all_zero: (Metadata::NONE, 0, 0, Flags::NONE) => [0, 0, 0, 0]);
        impl_case!(case_narrow: (Metadata::NONE, 3, 67, Flags::SIGN) => [0, 3, 67, 0x01]);
        impl_case!(case_narrow_typed: (Metadata::ZENZ, 6, 7, Flags::SIGN) => [0x02, 6, 7, 0x01]);
        impl_case!(case_wide: (Metadata::BIG, 300, 670, Flags::SIGN) => [0x01, 1, 44, 2, 158, 0x01]);
        impl_case!(case_wide_max: (Metadata::BIG, 65535, 65535, Flags::SIGN) => [0x01, 255, 255, 255, 255, 0x01]);
        impl_case!(case_wide_zenz_snan: (Metadata::BIG | Metadata::ZENZ, 65535, 65535, Flags::SIGN | Flags::NAN) => [0x03, 255, 255, 255, 255, 0x03]);

        // counts above 255 are masked to the low byte in narrow mode
        impl_case!(case_narrow_truncates: (Metadata::NONE, 300, 670, Flags::NONE) => [0, 44, 158, 0]);
    }

    mod parse {
        use super::*;

        #[test]
        fn narrow_round_trip() {
            let header = Header::new(Metadata::ZENZ, 12, 255, Flags::SIGN | Flags::INF);
            assert_eq!(Header::parse(&header.to_bytes()), Ok(header));
        }

        #[test]
        fn wide_round_trip() {
            let header = Header::new(Metadata::BIG | Metadata::ZENZ, 300, 65535, Flags::NAN);
            assert_eq!(Header::parse(&header.to_bytes()), Ok(header));
        }

        #[test]
        fn empty_input() {
            assert_eq!(Header::parse(&[]), Err(ParseArrayError::Empty));
        }

        #[test]
        fn narrow_prefix_of_wide_header() {
            let bytes = [Metadata::BIG.bits(), 0, 1, 0];
            assert_eq!(
                Header::parse(&bytes),
                Err(ParseArrayError::TooShort { expected: 6, actual: 4 })
            );
        }

        #[test]
        fn header_then_payload_parses_the_same() {
            let mut bytes = Header::new(Metadata::NONE, 2, 0, Flags::NONE).to_bytes();
            let header = Header::parse(&bytes).unwrap();
            bytes.extend([2, 3]);
            assert_eq!(Header::parse(&bytes), Ok(header));
        }
    }

    #[test]
    fn offsets() {
        assert_eq!(Metadata::NONE.header_offset(), 4);
        assert_eq!(Metadata::ZENZ.header_offset(), 4);
        assert_eq!(Metadata::BIG.header_offset(), 6);
        assert_eq!((Metadata::BIG | Metadata::ZENZ).header_offset(), 6);
    }

    #[test]
    fn flags_compose() {
        let snan = Flags::SIGN | Flags::NAN;
        assert!(snan.is_sign() && snan.is_nan() && !snan.is_inf());
        assert_eq!(snan.bits(), 0x03);
    }
}
