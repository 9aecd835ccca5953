//! Benchmarks for the string bank.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fretcoach::{
    curriculum::chord_by_name,
    dsp::string::PluckParams,
    pitch,
    synth::{StringBank, SynthMessage},
    voices,
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn strummed_bank() -> StringBank {
    let mut bank = StringBank::new(SAMPLE_RATE, |sr: f32| {
        voices::guitar_string(sr, PluckParams::default())
    });
    if let Some(chord) = chord_by_name("G Major") {
        for (slot, pos) in chord.positions.iter().filter(|p| p.sounds()).enumerate() {
            let string = usize::from(pos.string);
            bank.handle(SynthMessage::Pluck {
                string,
                frequency: pitch::frequency(string, pos.fret),
                at: slot as f64 * 0.015,
                duration: 60.0,
                sequence: None,
            });
        }
    }
    bank
}

pub fn bench_strum(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/strum");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Six strings ringing, no events left in the queue
        let mut ringing = strummed_bank();
        let mut warmup = vec![0.0f32; 2048];
        ringing.render_block(&mut warmup);

        group.bench_with_input(BenchmarkId::new("six_strings", size), &size, |b, _| {
            b.iter(|| {
                ringing.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
