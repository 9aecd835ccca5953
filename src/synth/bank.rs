use crate::{
    synth::{
        factory::VoiceFactory,
        message::{MessageReceiver, SequenceId, SynthMessage},
        voice::StringVoice,
    },
    MAX_BLOCK_SIZE, NUM_STRINGS,
};

/*
String Bank
===========

Six monophonic voices, one per string, plus a queue of plucks waiting for
their time on the audio clock. The clock counts rendered samples.

A block is rendered in spans that end at the next event boundary, so a pluck
scheduled for sample 1000 starts on sample 1000 whatever the block size:

  block:   |-------------- 512 --------------|
  events:          ↓ pluck          ↓ release
  spans:   |-------|----------------|--------|

Everything is preallocated. When the pending queue is full new plucks are
dropped rather than grown on the audio thread.
*/

const MAX_PENDING: usize = 512;

#[derive(Debug, Clone, Copy)]
struct PendingPluck {
    string: usize,
    frequency: f32,
    at: u64,
    length: u64,
    sequence: Option<SequenceId>,
}

pub struct StringBank {
    voices: Vec<StringVoice>,
    pending: Vec<PendingPluck>,
    sample_rate: f32,
    clock: u64,
    gain: f32,
    temp_buffer: Vec<f32>,
}

impl StringBank {
    pub fn new<F: VoiceFactory>(sample_rate: f32, factory: F) -> Self {
        let voices = (0..NUM_STRINGS)
            .map(|_| StringVoice::new(Box::new(factory.create_voice(sample_rate)), sample_rate))
            .collect();

        Self {
            voices,
            pending: Vec::with_capacity(MAX_PENDING),
            sample_rate,
            clock: 0,
            gain: 1.0,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Drain every queued control message.
    pub fn process_messages<R: MessageReceiver>(&mut self, rx: &mut R) {
        while let Some(msg) = rx.pop() {
            self.handle(msg);
        }
    }

    pub fn handle(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::Pluck {
                string,
                frequency,
                at,
                duration,
                sequence,
            } => {
                if string >= self.voices.len() || !(frequency > 0.0) {
                    return;
                }
                if self.pending.len() == MAX_PENDING {
                    return;
                }
                self.pending.push(PendingPluck {
                    string,
                    frequency,
                    at: self.seconds_to_samples(at),
                    length: self.seconds_to_samples(f64::from(duration)),
                    sequence,
                });
            }
            SynthMessage::CancelSequence { sequence } => {
                self.pending.retain(|p| p.sequence != Some(sequence));
                for voice in &mut self.voices {
                    if voice.sequence() == Some(sequence) {
                        voice.release();
                    }
                }
            }
            SynthMessage::SetVolume { db } => {
                self.gain = db_to_gain(db);
            }
            SynthMessage::ReleaseAll => {
                self.pending.clear();
                for voice in &mut self.voices {
                    voice.release();
                }
            }
        }
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        out.fill(0.0);

        let mut offset = 0;
        while offset < out.len() {
            self.fire_due();

            let remaining = (out.len() - offset).min(MAX_BLOCK_SIZE) as u64;
            let span = match self.next_boundary() {
                Some(boundary) => (boundary - self.clock).clamp(1, remaining),
                None => remaining,
            } as usize;

            self.mix(&mut out[offset..offset + span]);
            self.clock += span as u64;
            offset += span;
        }
    }

    /// Samples rendered so far.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Audio clock in seconds.
    pub fn now(&self) -> f64 {
        self.clock as f64 / f64::from(self.sample_rate)
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn voice(&self, string: usize) -> Option<&StringVoice> {
        self.voices.get(string)
    }

    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn fire_due(&mut self) {
        let clock = self.clock;
        for voice in &mut self.voices {
            voice.release_if_due(clock);
        }

        // Earliest first, so two plucks on one string land in time order.
        while let Some(idx) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.at <= clock)
            .min_by_key(|(_, p)| p.at)
            .map(|(idx, _)| idx)
        {
            let pluck = self.pending.swap_remove(idx);
            self.voices[pluck.string].start(pluck.frequency, clock + pluck.length, pluck.sequence);
        }
    }

    fn next_boundary(&self) -> Option<u64> {
        let plucks = self.pending.iter().map(|p| p.at);
        let releases = self.voices.iter().filter_map(|v| v.release_at());
        plucks.chain(releases).filter(|&at| at > self.clock).min()
    }

    fn mix(&mut self, out: &mut [f32]) {
        let frames = &mut self.temp_buffer[..out.len()];
        for voice in &mut self.voices {
            if !voice.is_active() {
                continue;
            }
            frames.fill(0.0);
            voice.render(frames);
            for (o, v) in out.iter_mut().zip(frames.iter()) {
                *o += v * self.gain;
            }
        }
    }

    fn seconds_to_samples(&self, seconds: f64) -> u64 {
        (seconds * f64::from(self.sample_rate)).round() as u64
    }
}

pub fn db_to_gain(db: f32) -> f32 {
    10.0f32.powf(db / 20.0)
}
