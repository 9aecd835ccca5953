//! Benchmarks for complete voice chains.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fretcoach::{
    dsp::string::PluckParams,
    graph::node::{GraphNode, RenderCtx},
    voices,
};

use crate::BLOCK_SIZES;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let ctx = RenderCtx::from_freq(48_000.0, 110.0); // open A

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // string → DC blocker → gate envelope
        let mut guitar = voices::guitar_string(48_000.0, PluckParams::default());
        guitar.note_on(&ctx);

        group.bench_with_input(BenchmarkId::new("guitar_string", size), &size, |b, _| {
            b.iter(|| {
                guitar.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
