// Tests for the digit-array factory, to be included by lib.rs

mod encode {
    use super::*;

    #[test]
    fn narrow_decimal_u64() {
        let arr = DigitArray::encode(0.0, 23, Flags::NONE, Metadata::NONE);
        assert_eq!(arr.as_bytes(), [0, 2, 0, 0, 2, 3]);
        assert_eq!(arr.int_len(), 2);
        assert_eq!(arr.frac_len(), 0);
    }

    #[test]
    fn narrow_base256_u64() {
        let arr = DigitArray::encode(0.0, 12345678901234567890, Flags::NONE, Metadata::ZENZ);
        assert_eq!(&arr.as_bytes()[..4], [Metadata::ZENZ.bits(), 8, 0, 0]);
        assert_eq!(arr.payload(), [171, 84, 169, 140, 235, 31, 10, 210]);
    }

    #[test]
    fn wide_decimal_u64() {
        let arr = DigitArray::encode(0.0, 90210, Flags::NONE, Metadata::BIG);
        assert_eq!(arr.as_bytes(), [1, 0, 5, 0, 0, 0, 9, 0, 2, 1, 0]);
        assert_eq!(arr.header_offset(), HEADER_OFFSET_BIG);
    }

    #[test]
    fn float_path_decimal() {
        let arr = DigitArray::encode(123.45, 0, Flags::NONE, Metadata::NONE);
        assert_eq!(arr.int_len(), 3);
        // %.6 formatting keeps six fractional places
        assert_eq!(arr.frac_len(), 6);
        assert_eq!(arr.payload(), [1, 2, 3, 4, 5, 0, 0, 0, 0]);
    }

    #[test]
    fn float_path_below_one() {
        let arr = DigitArray::encode(0.5, 0, Flags::NONE, Metadata::NONE);
        assert_eq!(arr.int_len(), 1);
        assert_eq!(arr.frac_len(), 6);
        assert_eq!(arr.payload(), [0, 5, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn float_path_base256() {
        let arr = DigitArray::encode(123.45, 0, Flags::NONE, Metadata::ZENZ);
        // int part 123; frac 450000 reversed is 54, to one flipped byte
        assert_eq!(arr.int_part(), [123]);
        assert_eq!(arr.frac_part(), [54]);
    }

    #[test]
    fn negative_float_folds_sign_into_flags() {
        let arr = DigitArray::encode(-123.45, 0, Flags::NONE, Metadata::NONE);
        assert!(arr.flags().is_sign());
        assert_eq!(arr.int_part(), [1, 2, 3]);
    }

    #[test]
    fn float_wins_over_integer() {
        let arr = DigitArray::encode(2.0, 23, Flags::NONE, Metadata::NONE);
        assert_eq!(arr.int_part(), [2]);
    }

    #[test]
    fn tiny_float_falls_through_to_integer_path() {
        let arr = DigitArray::encode(1e-12, 23, Flags::NONE, Metadata::NONE);
        assert_eq!(arr.payload(), [2, 3]);
    }

    #[test]
    fn nan_input_carries_only_flags() {
        let arr = DigitArray::encode(f64::NAN, 0, Flags::NAN, Metadata::NONE);
        assert_eq!(arr.len(), HEADER_OFFSET);
        assert!(arr.flags().is_nan());
        assert!(arr.is_zero());
    }

    mod zero_canonicalization {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $metadata:expr, $flags:expr) => {
                #[test]
                fn $name() {
                    let arr = DigitArray::encode(0.0, 0, $flags, $metadata);
                    assert_eq!(arr.len(), $metadata.header_offset());
                    assert_eq!(arr.int_len(), 0);
                    assert_eq!(arr.frac_len(), 0);
                    assert_eq!(arr.flags(), $flags);
                    assert!(arr.is_zero());
                }
            };
        }

        impl_case!(case_narrow: Metadata::NONE, Flags::NONE);
        impl_case!(case_narrow_signed: Metadata::NONE, Flags::SIGN);
        impl_case!(case_zenz: Metadata::ZENZ, Flags::NONE);
        impl_case!(case_wide: Metadata::BIG, Flags::SIGN | Flags::NAN);
        impl_case!(case_wide_zenz: Metadata::BIG | Metadata::ZENZ, Flags::INF);
    }

    mod size_invariant {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: ($ldbl:expr, $u64:expr, $metadata:expr)) => {
                #[test]
                fn $name() {
                    let arr = DigitArray::encode($ldbl, $u64, Flags::NONE, $metadata);
                    let expected = $metadata.header_offset()
                        + arr.int_len() as usize
                        + arr.frac_len() as usize;
                    assert_eq!(arr.len(), expected);
                }
            };
        }

        impl_case!(case_u64_narrow: (0.0, 90210, Metadata::NONE));
        impl_case!(case_u64_zenz: (0.0, u64::MAX, Metadata::ZENZ));
        impl_case!(case_u64_wide: (0.0, u64::MAX, Metadata::BIG));
        impl_case!(case_float_narrow: (123.456, 0, Metadata::NONE));
        impl_case!(case_float_zenz: (99999.5, 0, Metadata::ZENZ));
        impl_case!(case_float_wide_zenz: (3.25, 0, Metadata::BIG | Metadata::ZENZ));
        impl_case!(case_zero: (0.0, 0, Metadata::NONE));
    }

    mod strategies_agree {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: ($ldbl:expr, $u64:expr, $metadata:expr)) => {
                #[test]
                fn $name() {
                    let arith = DigitArray::encode_with(
                        $ldbl, $u64, Flags::NONE, $metadata, Extraction::Arithmetic);
                    let chars = DigitArray::encode_with(
                        $ldbl, $u64, Flags::NONE, $metadata, Extraction::CharConv);
                    assert_eq!(arith, chars);
                }
            };
        }

        impl_case!(case_u64: (0.0, 12345678901234567890, Metadata::NONE));
        impl_case!(case_u64_wide: (0.0, u64::MAX, Metadata::BIG));
        impl_case!(case_float: (123.45, 0, Metadata::NONE));
        impl_case!(case_float_below_one: (0.004, 0, Metadata::NONE));
        impl_case!(case_float_wide: (98765.4321, 0, Metadata::BIG));
    }
}

mod from_bytes {
    use super::*;

    #[test]
    fn accepts_what_encode_produces() {
        let arr = DigitArray::encode(123.45, 0, Flags::SIGN, Metadata::NONE);
        assert_eq!(DigitArray::from_bytes(arr.as_bytes()), Ok(arr));
    }

    #[test]
    fn header_only_zero() {
        let arr = DigitArray::from_bytes(&[0, 0, 0, 0]).unwrap();
        assert!(arr.is_zero());
        assert!(arr.payload().is_empty());
    }

    #[test]
    fn rejects_truncated_payload() {
        assert_eq!(
            DigitArray::from_bytes(&[0, 2, 0, 0, 2]),
            Err(ParseArrayError::LengthMismatch { expected: 6, actual: 5 })
        );
    }

    #[test]
    fn rejects_trailing_bytes() {
        assert_eq!(
            DigitArray::from_bytes(&[0, 2, 0, 0, 2, 3, 9]),
            Err(ParseArrayError::LengthMismatch { expected: 6, actual: 7 })
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(DigitArray::from_bytes(&[]), Err(ParseArrayError::Empty));
    }
}

mod take_from {
    use super::*;

    #[test]
    fn reads_own_length_and_leaves_the_rest() {
        let first = DigitArray::encode(0.0, 23, Flags::NONE, Metadata::NONE);
        let second = DigitArray::encode(0.0, 90210, Flags::SIGN, Metadata::ZENZ);

        let mut buffer = first.as_bytes().to_vec();
        buffer.extend(second.as_bytes());

        let (a, rest) = DigitArray::take_from(&buffer).unwrap();
        assert_eq!(a, first);
        let (b, rest) = DigitArray::take_from(rest).unwrap();
        assert_eq!(b, second);
        assert!(rest.is_empty());
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let arr = DigitArray::encode(0.0, 23, Flags::NONE, Metadata::NONE);
        let copy = arr.clone();
        assert_eq!(arr.as_bytes(), copy.as_bytes());
        assert_ne!(arr.as_bytes().as_ptr(), copy.as_bytes().as_ptr());
    }
}

mod display {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: ($ldbl:expr, $u64:expr, $flags:expr, $metadata:expr) => $expected:literal) => {
            #[test]
            fn $name() {
                let arr = DigitArray::encode($ldbl, $u64, $flags, $metadata);
                assert_eq!(arr.to_string(), $expected);
            }
        };
    }

    impl_case!(case_u64: (0.0, 23, Flags::NONE, Metadata::NONE) => "23");
    impl_case!(case_u64_zenz: (0.0, 90210, Flags::NONE, Metadata::ZENZ) => "90210");
    impl_case!(case_float: (123.45, 0, Flags::NONE, Metadata::NONE) => "123.450000");
    impl_case!(case_negative: (-123.45, 0, Flags::NONE, Metadata::NONE) => "-123.450000");
    impl_case!(case_zero: (0.0, 0, Flags::NONE, Metadata::NONE) => "0");
    impl_case!(case_signed_zero: (0.0, 0, Flags::SIGN, Metadata::NONE) => "-0");
    impl_case!(case_nan: (0.0, 0, Flags::NAN, Metadata::NONE) => "NaN");
    impl_case!(case_signed_nan: (0.0, 0, Flags::SIGN | Flags::NAN, Metadata::NONE) => "-NaN");
    impl_case!(case_inf: (0.0, 0, Flags::INF, Metadata::NONE) => "inf");
}

mod header_view {
    use super::*;

    #[test]
    fn matches_the_raw_bytes() {
        let arr = DigitArray::encode(0.0, 90210, Flags::SIGN, Metadata::BIG | Metadata::ZENZ);
        let header = arr.header();
        assert_eq!(header.metadata, Metadata::BIG | Metadata::ZENZ);
        assert_eq!(header.int_len, arr.int_len());
        assert_eq!(header.frac_len, 0);
        assert_eq!(header.flags, Flags::SIGN);
        assert_eq!(header.real_len(), arr.len());
    }
}
