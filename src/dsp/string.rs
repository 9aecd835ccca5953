use crate::dsp::{delay::DelayLine, filter::SVFilter};

/*
Plucked String (Karplus-Strong)
===============================

A burst of noise one period long is written into a delay line whose length
is the period of the note. Every sample the oldest value is read back,
low-passed and fed in again, scaled slightly below 1:

    noise burst ──→ (+) ──→ [ delay: sr / f ] ──┬──→ output
                     ↑                          │
                     └── × resonance ←─ LPF ←───┘

  - The delay length sets the pitch.
  - The low-pass (`dampening`, Hz) removes high harmonics a little more on
    every trip, so bright attacks mellow as the string rings, just like steel.
  - `resonance` (< 1) is the loop gain: 0.98 rings for a couple of seconds,
    lower values choke the string sooner.
  - `attack_noise` scales the excitation burst: more noise, harder pick.

Triggering again while the string still rings restarts it from a fresh
burst, which is what makes a string voice monophonic.
*/

/// Lowest pitch the delay line can hold.
const MIN_FREQUENCY: f32 = 20.0;

/// Level under which a string is considered silent.
const SILENCE: f32 = 1.0e-4;

/// Peak follower decay per sample.
const PEAK_FALLOFF: f32 = 0.9995;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluckParams {
    pub attack_noise: f32,
    pub dampening: f32,
    pub resonance: f32,
}

impl Default for PluckParams {
    fn default() -> Self {
        Self {
            attack_noise: 1.5,
            dampening: 4000.0,
            resonance: 0.98,
        }
    }
}

pub struct PluckedString {
    line: DelayLine,
    damping: SVFilter,
    params: PluckParams,
    sample_rate: f32,
    /// Delay length in samples for the current note.
    period: f32,
    burst_remaining: usize,
    noise_state: u32,
    peak: f32,
}

impl PluckedString {
    pub fn new(sample_rate: f32, params: PluckParams) -> Self {
        let capacity = (sample_rate / MIN_FREQUENCY).ceil() as usize + 2;
        Self {
            line: DelayLine::with_capacity(capacity),
            damping: SVFilter::lowpass(params.dampening),
            params,
            sample_rate,
            period: 0.0,
            burst_remaining: 0,
            noise_state: 0x9E37_79B9,
            peak: 0.0,
        }
    }

    /// Excite the string at `frequency`. Non-positive frequencies are ignored.
    pub fn pluck(&mut self, frequency: f32) {
        if frequency <= 0.0 {
            return;
        }
        let max_period = (self.line.capacity() - 1) as f32;
        self.period = (self.sample_rate / frequency.max(MIN_FREQUENCY)).min(max_period);
        self.line.reset();
        self.damping.reset();
        self.burst_remaining = self.period.round() as usize;
        self.peak = self.params.attack_noise;
    }

    /// Advance one sample.
    pub fn next_sample(&mut self, g: f32, k: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }

        let delayed = self.line.read(self.period);
        let filtered = self.damping.process(delayed, k, g);

        let excitation = if self.burst_remaining > 0 {
            self.burst_remaining -= 1;
            self.noise() * self.params.attack_noise * 0.5
        } else {
            0.0
        };

        let out = excitation + filtered * self.params.resonance;
        self.line.write(out);

        self.peak = out.abs().max(self.peak * PEAK_FALLOFF);
        out
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        let g = self.damping.coefficient(self.sample_rate);
        let k = self.damping.damping();
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(g, k);
        }
    }

    /// True while the string still produces audible output.
    pub fn is_ringing(&self) -> bool {
        self.period > 0.0 && (self.burst_remaining > 0 || self.peak > SILENCE)
    }

    /// Stop immediately.
    pub fn mute(&mut self) {
        self.line.reset();
        self.damping.reset();
        self.burst_remaining = 0;
        self.peak = 0.0;
    }

    // xorshift32, mapped to [-1, 1)
    fn noise(&mut self) -> f32 {
        let mut x = self.noise_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.noise_state = x;
        (x as f32 / u32::MAX as f32) * 2.0 - 1.0
    }
}
