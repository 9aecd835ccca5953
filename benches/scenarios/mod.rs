//! Real-world scenario benchmarks.
//!
//! A single guitar voice, and the whole bank rendering a strummed chord the
//! way the audio callback does.

mod strum;
mod voices;

pub use strum::bench_strum;
pub use voices::bench_voices;
