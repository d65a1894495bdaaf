//! Benchmarks for rotor machine operations.
//!
//! Measures machine construction, single-letter encryption throughput and
//! whole-message encryption through the driver.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotorcrypt::driver::encrypt_with_config;
use rotorcrypt::{Machine, MachineConfig, RotorId};

/// Cleartext used for message benchmarks.
const BENCH_TEXT: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

/// Benchmarks `Machine::new()`, which derives the inverse maps for three rotors.
fn bench_construction(c: &mut Criterion) {
    c.bench_function("machine_new", |b| {
        b.iter(|| {
            Machine::new(
                black_box(RotorId::III),
                black_box(RotorId::II),
                black_box(RotorId::I),
                'A',
                'A',
                'A',
            )
            .unwrap()
        });
    });
}

/// Benchmarks `encrypt_char()` with the machine state advancing between
/// iterations, as it does while typing.
fn bench_encrypt_char(c: &mut Criterion) {
    let mut machine = Machine::new(RotorId::III, RotorId::II, RotorId::I, 'A', 'A', 'A').unwrap();

    let mut group = c.benchmark_group("encrypt_char");
    group.throughput(Throughput::Elements(1));
    group.bench_function("single_letter", |b| {
        b.iter(|| machine.encrypt_char(black_box('A')));
    });
    group.finish();
}

/// Benchmarks end-to-end message encryption across message lengths.
fn bench_encrypt_message(c: &mut Criterion) {
    let config = MachineConfig::default();
    let lengths: &[usize] = &[1, 10, 100];

    let mut group = c.benchmark_group("encrypt_message");
    for &repeats in lengths {
        let text = BENCH_TEXT.repeat(repeats);
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(text.len()), &text, |b, text| {
            b.iter(|| encrypt_with_config(&config, black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_encrypt_char,
    bench_encrypt_message,
);
criterion_main!(benches);
