//! Benchmarks for the per-keystroke and per-submit hot paths.
//!
//! Run with: cargo bench

use card_form::{
    expiry::ExpiryRules, format::format_input, luhn, FormController, FormEvent,
};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const VALID: &str = "4532015112830366";
const VALID_FORMATTED: &str = "4532 0151 1283 0366";
const MESSY: &str = "45a32 01-51 1283\t0366";

const VALID_DIGITS: [u8; 16] = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];

/// Benchmark the string-level Luhn check
fn bench_is_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid");

    group.bench_function("raw", |b| b.iter(|| luhn::is_valid(black_box(VALID))));

    group.bench_function("formatted", |b| {
        b.iter(|| luhn::is_valid(black_box(VALID_FORMATTED)))
    });

    group.bench_function("digits", |b| {
        b.iter(|| luhn::passes(black_box(&VALID_DIGITS)))
    });

    group.finish();
}

/// Benchmark formatting as the user types
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_input");

    for len in [4usize, 8, 16] {
        let input = &VALID[..len];
        group.bench_with_input(BenchmarkId::from_parameter(len), input, |b, input| {
            b.iter(|| format_input(black_box(input)))
        });
    }

    group.bench_function("messy", |b| b.iter(|| format_input(black_box(MESSY))));

    group.finish();
}

/// Benchmark a full form validation
fn bench_validate_form(c: &mut Criterion) {
    let rules = ExpiryRules::for_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    let mut form = FormController::with_rules(rules);
    form.apply(FormEvent::CardNumber(VALID.to_string()));
    form.apply(FormEvent::Cvv("123".to_string()));
    form.apply(FormEvent::CardHolderName("Ada Lovelace".to_string()));
    form.apply(FormEvent::ExpirationMonth("12".to_string()));
    form.apply(FormEvent::ExpirationYear("2028".to_string()));

    c.bench_function("validate_form", |b| b.iter(|| black_box(&form).validate()));
}

criterion_group!(benches, bench_is_valid, bench_format, bench_validate_form);
criterion_main!(benches);
