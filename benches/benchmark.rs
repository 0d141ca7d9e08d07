//! Benchmarks for Solitaire cipher operations.
//!
//! Measures the cost of a single keystream round, keystream letter
//! throughput, and encode/decode throughput on a fixed message.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use solitaire::{codec, Deck};

/// Message used consistently across the codec benchmarks.
const BENCH_MESSAGE: &str = "The quick brown fox jumps over the lazy dog, \
                             again and again, until the benchmark is done.";

/// Keystream letters drawn per iteration.
const KEYSTREAM_LETTERS: usize = 100;

/// Benchmarks one full keystream round (joker advances, triple cut,
/// count cut). The deck state advances naturally between iterations,
/// reflecting real streaming behavior.
fn bench_solitaire_round(c: &mut Criterion) {
    let mut deck = Deck::new();
    c.bench_function("solitaire_round", |b| {
        b.iter(|| {
            deck.solitaire_round();
        });
    });
}

/// Benchmarks keystream letter throughput, including the rounds skipped
/// for joker outputs.
fn bench_keystream(c: &mut Criterion) {
    let mut deck = Deck::new();

    let mut group = c.benchmark_group("keystream");
    group.throughput(Throughput::Elements(KEYSTREAM_LETTERS as u64));

    group.bench_function("letters_100", |b| {
        b.iter(|| deck.generate_keystream(black_box(KEYSTREAM_LETTERS)));
    });

    group.finish();
}

/// Benchmarks `encode` throughput on a fixed message. The deck is created
/// once and consumed as the stream advances.
fn bench_encode(c: &mut Criterion) {
    let mut deck = Deck::new();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    group.bench_function("fixed_message", |b| {
        b.iter(|| codec::encode(black_box(BENCH_MESSAGE), &mut deck).unwrap());
    });

    group.finish();
}

/// Benchmarks `decode` throughput against a precomputed ciphertext.
fn bench_decode(c: &mut Criterion) {
    let ciphertext = codec::encode(BENCH_MESSAGE, &mut Deck::new()).unwrap();
    let mut deck = Deck::new();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(ciphertext.len() as u64));

    group.bench_function("fixed_message", |b| {
        b.iter(|| codec::decode(black_box(&ciphertext), &mut deck).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_solitaire_round,
    bench_keystream,
    bench_encode,
    bench_decode,
);
criterion_main!(benches);
