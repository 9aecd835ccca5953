//! fretcoach - guitar lesson engine.
//!
//! The crate is layered the same way a small synth library is: realtime-safe
//! DSP primitives at the bottom (`dsp`), composable nodes above them (`graph`),
//! voice management on the audio thread (`synth`), and a control-side engine
//! (`audio`) that turns fretboard positions into timed string triggers. The
//! `playback` module animates fingers and strums in step with that audio, and
//! `lesson` walks a learner through the built-in curriculum.

pub mod audio; // Voice engine and audio outputs
pub mod curriculum; // Chords, scales and songs
pub mod dsp;
pub mod graph; // Composable audio graph nodes
pub mod lesson; // Lesson/session controller
pub mod pitch;
pub mod playback; // Strum choreography state machine
pub mod sequencing; // Musical timing
pub mod synth; // String voices and the audio-side bank
pub mod voices; // Ready-made patches

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;

/// Number of strings on the instrument (and voices in the bank).
pub const NUM_STRINGS: usize = 6;
