//! Pre-built voices.
//!
//! Each voice is a ready-to-use node graph. The string bank builds one per
//! string through a `VoiceFactory`:
//!
//! ```ignore
//! use fretcoach::{dsp::string::PluckParams, synth::StringBank, voices};
//!
//! let params = PluckParams::default();
//! let bank = StringBank::new(48_000.0, move |sr: f32| voices::guitar_string(sr, params));
//! ```

mod guitar;

pub use guitar::guitar_string;
