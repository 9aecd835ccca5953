//! Control-side audio: the voice engine and the outputs it talks to.
//!
//! The engine never renders audio itself. It turns fretboard positions into
//! timed [`SynthMessage`]s and hands them to an [`AudioOutput`], which forwards
//! them to a [`StringBank`](crate::synth::StringBank) running wherever the
//! samples are produced: a device callback, or [`OfflineOutput`] in tests.

pub mod config;
pub mod engine;
pub mod error;
pub mod offline;

pub use config::EngineConfig;
pub use engine::VoiceEngine;
pub use error::AudioError;
pub use offline::OfflineOutput;

use crate::synth::message::SynthMessage;

/// Where the voice engine sends its commands.
pub trait AudioOutput {
    /// Start producing sound. Called once, on the "enable audio" gesture.
    fn open(&mut self) -> Result<(), AudioError>;

    /// Stop producing sound and release the device.
    fn close(&mut self);

    fn send(&mut self, message: SynthMessage) -> Result<(), AudioError>;

    /// Current position of the audio clock, in seconds.
    fn now(&self) -> f64;
}
