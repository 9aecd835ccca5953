//! Device output: a cpal stream rendering a `StringBank`.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    SampleFormat, Stream,
};
use rtrb::{Producer, RingBuffer};
use tracing::{error, info};

use fretcoach::{
    audio::{AudioError, AudioOutput},
    dsp::string::PluckParams,
    synth::{SynthMessage, StringBank},
    voices, MAX_BLOCK_SIZE,
};

// Room for a long scale plus a strum or two between callbacks.
const COMMAND_RING: usize = 256;

/// Nothing touches the device until `open`, which the engine only calls on
/// the "enable audio" key.
pub struct CpalOutput {
    pluck: PluckParams,
    stream: Option<Stream>,
    tx: Option<Producer<SynthMessage>>,
    /// Frames rendered by the callback.
    clock: Arc<AtomicU64>,
    sample_rate: f32,
}

impl CpalOutput {
    pub fn new(pluck: PluckParams) -> Self {
        Self {
            pluck,
            stream: None,
            tx: None,
            clock: Arc::new(AtomicU64::new(0)),
            sample_rate: 48_000.0,
        }
    }
}

impl AudioOutput for CpalOutput {
    fn open(&mut self) -> Result<(), AudioError> {
        if self.stream.is_some() {
            return Ok(());
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device
            .default_output_config()
            .map_err(|e| AudioError::UnsupportedFormat(e.to_string()))?;
        if config.sample_format() != SampleFormat::F32 {
            return Err(AudioError::UnsupportedFormat(format!(
                "{:?} samples, need f32",
                config.sample_format()
            )));
        }

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (tx, mut rx) = RingBuffer::<SynthMessage>::new(COMMAND_RING);
        let pluck = self.pluck;
        let mut bank = StringBank::new(sample_rate, move |sr: f32| voices::guitar_string(sr, pluck));
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        // The clock restarts with the bank.
        self.clock.store(0, Ordering::Release);
        let clock = Arc::clone(&self.clock);

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    bank.process_messages(&mut rx);

                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;
                    while frames_written < total_frames {
                        let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);

                        let block = &mut render_buf[..frames_to_render];
                        bank.render_block(block);

                        // Duplicate mono to all channels
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        frames_written += frames_to_render;
                    }

                    clock.store(bank.clock(), Ordering::Release);
                },
                move |err| error!(%err, "output stream error"),
                None,
            )
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        stream.play().map_err(|e| AudioError::Stream(e.to_string()))?;

        info!(sample_rate, channels, "audio output opened");
        self.sample_rate = sample_rate;
        self.stream = Some(stream);
        self.tx = Some(tx);
        Ok(())
    }

    fn close(&mut self) {
        self.tx = None;
        if self.stream.take().is_some() {
            info!("audio output closed");
        }
    }

    fn send(&mut self, message: SynthMessage) -> Result<(), AudioError> {
        let tx = self.tx.as_mut().ok_or(AudioError::AlreadyClosed)?;
        tx.push(message).map_err(|_| AudioError::QueueFull)
    }

    fn now(&self) -> f64 {
        self.clock.load(Ordering::Acquire) as f64 / f64::from(self.sample_rate)
    }
}
