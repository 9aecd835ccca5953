//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free once constructed and realtime-safe,
//! making them safe to embed directly inside voice structs. They stay focused
//! on the signal-processing math so graph combinators can layer on note
//! events and block rendering.

/// Circular delay line with fractional reads.
pub mod delay;
/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// State-variable filter implementation with multiple responses.
pub mod filter;
/// Karplus-Strong plucked string.
pub mod string;

pub use envelope::EnvelopeState;
