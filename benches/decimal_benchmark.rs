// ============================================================================
// Long Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Rounding - Scale reduction across simple and mean-based modes
// 2. Integer Roots - Bitwise vs wordwise square and cube roots
// 3. Transcendentals - exp, log and pi, cold and with a warm cache
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use long_decimal::math::{
    cbrtb_with_remainder, cbrtw_with_remainder, sqrtb_with_remainder, sqrtw_with_remainder,
};
use long_decimal::prelude::*;
use num_bigint::BigUint;
use std::hint::black_box;

fn wide_integer(words: usize) -> BigUint {
    let digits: Vec<u32> = (0..words as u32)
        .map(|i| i.wrapping_mul(0x9E37_79B9) | 1)
        .collect();
    BigUint::new(digits)
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_round_to_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_to_scale");
    let Ok(value) = "31415926535.8979323846264338327950288419716939937510".parse::<FixedDecimal>()
    else {
        return;
    };

    for mode in [
        RoundingMode::DOWN,
        RoundingMode::HALF_EVEN,
        RoundingMode::GEOMETRIC_EVEN,
        RoundingMode::HARMONIC_EVEN,
        RoundingMode::QUADRATIC_EVEN,
        RoundingMode::CUBIC_EVEN,
    ] {
        group.bench_with_input(BenchmarkId::new("mode", mode), &mode, |b, &mode| {
            b.iter(|| black_box(value.round_to_scale(black_box(10), mode)));
        });
    }

    group.finish();
}

// ============================================================================
// Integer Root Benchmarks
// Dispatch switches to the wordwise variants above 128 bits
// ============================================================================

fn benchmark_integer_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_roots");

    for words in [2usize, 8, 32] {
        let x = wide_integer(words);
        group.bench_with_input(BenchmarkId::new("sqrt_bitwise", words), &x, |b, x| {
            b.iter(|| black_box(sqrtb_with_remainder(x)));
        });
        group.bench_with_input(BenchmarkId::new("sqrt_wordwise", words), &x, |b, x| {
            b.iter(|| black_box(sqrtw_with_remainder(x)));
        });
        group.bench_with_input(BenchmarkId::new("cbrt_bitwise", words), &x, |b, x| {
            b.iter(|| black_box(cbrtb_with_remainder(x)));
        });
        group.bench_with_input(BenchmarkId::new("cbrt_wordwise", words), &x, |b, x| {
            b.iter(|| black_box(cbrtw_with_remainder(x)));
        });
    }

    group.finish();
}

fn benchmark_decimal_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_sqrt");
    let math = LongMath::new();
    let two = FixedDecimal::from(2);

    for prec in [20u32, 100, 500] {
        group.bench_with_input(BenchmarkId::new("sqrt2", prec), &prec, |b, &prec| {
            b.iter(|| black_box(math.sqrt(&two, prec, RoundingMode::HALF_EVEN)));
        });
    }

    group.finish();
}

// ============================================================================
// Transcendental Benchmarks
// Cold runs use a fresh engine so nothing is served from the cache
// ============================================================================

fn benchmark_transcendentals(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcendentals");
    let Ok(x) = "1.2345".parse::<FixedDecimal>() else {
        return;
    };

    for prec in [20u32, 100] {
        group.bench_with_input(BenchmarkId::new("exp_cold", prec), &prec, |b, &prec| {
            b.iter(|| black_box(LongMath::new().exp(&x, prec, RoundingMode::HALF_EVEN)));
        });
        group.bench_with_input(BenchmarkId::new("log_cold", prec), &prec, |b, &prec| {
            b.iter(|| black_box(LongMath::new().log(&x, prec, RoundingMode::HALF_EVEN)));
        });
        group.bench_with_input(BenchmarkId::new("power_cold", prec), &prec, |b, &prec| {
            b.iter(|| black_box(LongMath::new().power(&x, &x, prec, RoundingMode::HALF_EVEN)));
        });
    }

    group.finish();
}

fn benchmark_pi(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi");

    for prec in [50u32, 500] {
        group.bench_with_input(BenchmarkId::new("cold", prec), &prec, |b, &prec| {
            b.iter(|| black_box(LongMath::new().pi(prec, RoundingMode::HALF_EVEN)));
        });

        let warm = LongMath::new();
        let _ = warm.pi(prec, RoundingMode::HALF_EVEN);
        group.bench_with_input(BenchmarkId::new("cached", prec), &prec, |b, &prec| {
            b.iter(|| black_box(warm.pi(prec, RoundingMode::HALF_EVEN)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_round_to_scale,
    benchmark_integer_roots,
    benchmark_decimal_sqrt,
    benchmark_transcendentals,
    benchmark_pi,
);
criterion_main!(benches);
