use std::collections::VecDeque;

use crate::{
    audio::{error::AudioError, AudioOutput},
    dsp::string::PluckParams,
    synth::{bank::StringBank, message::SynthMessage},
    voices, MAX_BLOCK_SIZE,
};

/// An output that renders on demand instead of on a device clock.
///
/// Messages queue up until the next `render`, the same way they wait in the
/// ring buffer for the next audio callback. The audio clock only advances when
/// samples are rendered, which makes engine timing fully deterministic.
pub struct OfflineOutput {
    bank: StringBank,
    queue: VecDeque<SynthMessage>,
    open: bool,
}

impl OfflineOutput {
    pub fn new(sample_rate: f32, params: PluckParams) -> Self {
        Self {
            bank: StringBank::new(sample_rate, move |sr: f32| voices::guitar_string(sr, params)),
            queue: VecDeque::new(),
            open: false,
        }
    }

    /// Render `frames` mono samples.
    pub fn render(&mut self, frames: usize) -> Vec<f32> {
        self.bank.process_messages(&mut self.queue);

        let mut out = vec![0.0; frames];
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.bank.render_block(block);
        }
        out
    }

    pub fn render_seconds(&mut self, seconds: f64) -> Vec<f32> {
        let frames = (seconds * f64::from(self.bank.sample_rate())).round() as usize;
        self.render(frames)
    }

    pub fn bank(&self) -> &StringBank {
        &self.bank
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl AudioOutput for OfflineOutput {
    fn open(&mut self) -> Result<(), AudioError> {
        self.open = true;
        Ok(())
    }

    fn close(&mut self) {
        // Whatever was sent before closing still reaches the bank.
        self.bank.process_messages(&mut self.queue);
        self.open = false;
    }

    fn send(&mut self, message: SynthMessage) -> Result<(), AudioError> {
        if !self.open {
            return Err(AudioError::AlreadyClosed);
        }
        self.queue.push_back(message);
        Ok(())
    }

    fn now(&self) -> f64 {
        self.bank.now()
    }
}
