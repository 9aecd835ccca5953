//! Benchmarks for the Karplus-Strong string.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fretcoach::{dsp::string::{PluckParams, PluckedString}, pitch};

use crate::BLOCK_SIZES;

pub fn bench_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/string");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Low E: longest delay line
        let mut low = PluckedString::new(48_000.0, PluckParams::default());
        low.pluck(pitch::frequency(0, 0));
        group.bench_with_input(BenchmarkId::new("low_e", size), &size, |b, _| {
            b.iter(|| {
                low.render(black_box(&mut buffer));
            })
        });

        // High e at the 12th fret: shortest
        let mut high = PluckedString::new(48_000.0, PluckParams::default());
        high.pluck(pitch::frequency(5, 12));
        group.bench_with_input(BenchmarkId::new("high_e_12", size), &size, |b, _| {
            b.iter(|| {
                high.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
