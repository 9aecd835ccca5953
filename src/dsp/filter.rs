use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
| type      | passes       | rejects      | used for                      |
| --------- | ------------ | ------------ | ----------------------------- |
| low-pass  | below cutoff | above cutoff | string damping, tone control  |
| high-pass | above cutoff | below cutoff | removing DC from pluck noise  |

Topology-preserving-transform state-variable filter (Simper). The integrator
gain `g` is computed from the cutoff once per block, or once per cutoff change
when the filter runs sample-by-sample inside a feedback loop.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    HighPass,
}

pub struct FilterOutputs {
    pub lowpass: f32,
    pub bandpass: f32,
    pub highpass: f32,
}

pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    pub resonance: f32,
    filter_type: FilterType,
}

impl SVFilter {
    pub fn new(filter_type: FilterType, cutoff_hz: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            resonance: 0.0,
            filter_type,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::LowPass, cutoff_hz)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::HighPass, cutoff_hz)
    }

    /// Integrator gain for the current cutoff. The cutoff is kept just below
    /// Nyquist so `tan` stays finite.
    #[inline]
    pub fn coefficient(&self, sample_rate: f32) -> f32 {
        let cutoff = self.cutoff_hz.clamp(1.0, sample_rate * 0.49);
        (PI * cutoff / sample_rate).tan()
    }

    /// Damping term: 2.0 at zero resonance (no peak), falling towards 0.
    #[inline]
    pub fn damping(&self) -> f32 {
        2.0 - 2.0 * self.resonance.clamp(0.0, 0.99)
    }

    pub fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> FilterOutputs {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        FilterOutputs {
            lowpass: v2,
            bandpass: v1,
            highpass: sample - k * v1 - v2,
        }
    }

    /// Filter one sample using the configured response.
    #[inline]
    pub fn process(&mut self, sample: f32, k: f32, g: f32) -> f32 {
        let outputs = self.next_sample(sample, k, g);
        match self.filter_type {
            FilterType::LowPass => outputs.lowpass,
            FilterType::HighPass => outputs.highpass,
        }
    }

    pub fn render(&mut self, buffer: &mut [f32], sample_rate: f32) {
        let g = self.coefficient(sample_rate);
        let k = self.damping();

        for sample in buffer.iter_mut() {
            *sample = self.process(*sample, k, g);
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff_hz = cutoff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn test_lowpass_passes_dc() {
        let mut filter = SVFilter::lowpass(500.0);
        let mut buffer = vec![1.0; 1024];

        filter.render(&mut buffer, SAMPLE_RATE);

        assert!(buffer[1023] > 0.99, "got {}", buffer[1023]);
    }

    #[test]
    fn test_highpass_blocks_dc() {
        let mut filter = SVFilter::highpass(500.0);
        let mut buffer = vec![1.0; 4096];

        filter.render(&mut buffer, SAMPLE_RATE);

        assert!(buffer[4095].abs() < 0.01, "got {}", buffer[4095]);
    }

    #[test]
    fn test_lowpass_attenuates_nyquist() {
        let mut filter = SVFilter::lowpass(1000.0);
        let mut buffer: Vec<f32> = (0..512).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();

        filter.render(&mut buffer, SAMPLE_RATE);

        let peak = buffer[256..].iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(peak < 0.05, "nyquist should be strongly attenuated, peak {peak}");
    }
}
