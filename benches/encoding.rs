//! Benchmarks for digit-array encoding and decoding

extern crate criterion;
extern crate bignum_array;
extern crate oorandom;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bignum_array::{base10, base256, DigitArray, Extraction, Flags, Metadata};

criterion_main!(encoding);

criterion_group!(
    name = encoding;
    config = Criterion::default();
    targets =
        encode_u64_decimal,
        encode_u64_base256,
        encode_float_decimal,
        decode_to_string,
        round_trip_primitives,
);

fn random_values(count: usize) -> Vec<u64> {
    let mut rng = oorandom::Rand64::new(0x5eed);
    (0..count).map(|_| rng.rand_u64()).collect()
}

fn encode_u64_decimal(c: &mut Criterion) {
    let values = random_values(1000);

    c.bench_function("encode-u64-decimal-narrow", |b| {
        b.iter(|| {
            for &x in values.iter() {
                black_box(DigitArray::encode(0.0, x, Flags::NONE, Metadata::NONE));
            }
        });
    });

    c.bench_function("encode-u64-decimal-charconv", |b| {
        b.iter(|| {
            for &x in values.iter() {
                black_box(DigitArray::encode_with(
                    0.0,
                    x,
                    Flags::NONE,
                    Metadata::NONE,
                    Extraction::CharConv,
                ));
            }
        });
    });
}

fn encode_u64_base256(c: &mut Criterion) {
    let values = random_values(1000);

    c.bench_function("encode-u64-base256-narrow", |b| {
        b.iter(|| {
            for &x in values.iter() {
                black_box(DigitArray::encode(0.0, x, Flags::NONE, Metadata::ZENZ));
            }
        });
    });
}

fn encode_float_decimal(c: &mut Criterion) {
    let values: Vec<f64> = random_values(1000)
        .into_iter()
        .map(|x| (x % 1_000_000_000) as f64 / 1024.0)
        .collect();

    c.bench_function("encode-float-decimal-wide", |b| {
        b.iter(|| {
            for &x in values.iter() {
                black_box(DigitArray::encode(x, 0, Flags::NONE, Metadata::BIG));
            }
        });
    });
}

fn decode_to_string(c: &mut Criterion) {
    let arrays: Vec<DigitArray> = random_values(1000)
        .into_iter()
        .map(|x| DigitArray::encode(0.0, x, Flags::NONE, Metadata::ZENZ))
        .collect();

    c.bench_function("decode-base256-to-string", |b| {
        b.iter(|| {
            for arr in arrays.iter() {
                black_box(arr.to_decimal_string());
            }
        });
    });
}

fn round_trip_primitives(c: &mut Criterion) {
    let values = random_values(1000);

    c.bench_function("round-trip-b10", |b| {
        b.iter(|| {
            for &x in values.iter() {
                let mut digits = base10::u64_to_b10(x, true);
                digits.reverse();
                black_box(base10::b10_to_u64(&digits).unwrap());
            }
        });
    });

    c.bench_function("round-trip-b256", |b| {
        b.iter(|| {
            for &x in values.iter() {
                let digits = base256::u64_to_b256(x, true);
                black_box(base256::b256_to_u64(&digits).unwrap());
            }
        });
    });
}
