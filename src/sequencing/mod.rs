//! Musical timing: note values and time signatures.

pub mod duration;
pub mod time_signature;

pub use duration::Duration;
pub use time_signature::{BarBeat, TimeSignature};
