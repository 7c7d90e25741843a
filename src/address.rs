//! Two-byte address codec
//!
//! Wide-mode headers store each 16-bit length field as a (high, low) byte
//! pair. These are pure inverse functions with no failure cases.

/// Split a 16-bit length into its (high, low) byte pair
#[inline]
pub fn pack_u16(n: u16) -> (u8, u8) {
    ((n >> 8) as u8, (n & 0xFF) as u8)
}

/// Rebuild a 16-bit length from its (high, low) byte pair
#[inline]
pub fn unpack_u16(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// [unpack_u16] reading directly from two adjacent header bytes
#[inline]
pub fn pair_to_u16(pair: &[u8]) -> u16 {
    unpack_u16(pair[0], pair[1])
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal <=> ($high:literal, $low:literal)) => {
            #[test]
            fn $name() {
                assert_eq!(pack_u16($n), ($high, $low));
                assert_eq!(unpack_u16($high, $low), $n);
                assert_eq!(pair_to_u16(&[$high, $low]), $n);
            }
        };
    }

    impl_case!(case_0: 0 <=> (0, 0));
    impl_case!(case_255: 255 <=> (0, 255));
    impl_case!(case_256: 256 <=> (1, 0));
    impl_case!(case_257: 257 <=> (1, 1));
    impl_case!(case_2340: 2340 <=> (9, 36));
    impl_case!(case_65533: 65533 <=> (255, 253));
    impl_case!(case_65535: 65535 <=> (255, 255));

    #[test]
    fn unpack_inverts_pack_exhaustively() {
        for n in 0..=u16::MAX {
            let (high, low) = pack_u16(n);
            assert_eq!(unpack_u16(high, low), n);
        }
    }
}
