//! Benchmarks for the fractional delay line.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fretcoach::dsp::delay::DelayLine;

use crate::BLOCK_SIZES;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &size in BLOCK_SIZES {
        // Low E period at 48 kHz, the longest loop a string uses
        let mut line = DelayLine::with_capacity(2_400);
        let period = 48_000.0 / 82.41;

        group.bench_with_input(BenchmarkId::new("read_write", size), &size, |b, &n| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..n {
                    let out = line.read(black_box(period));
                    line.write(out * 0.5 + i as f32 * 1e-6);
                    acc += out;
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
