//! Fretboard animation: finger presses, the strum sweep and ringing strings,
//! timed against a monotonic clock sampled once per rendered frame.

pub mod choreographer;
pub mod schedule;
pub mod state;
pub mod timing;

pub use choreographer::Choreographer;
pub use schedule::{Scheduler, TaskId};
pub use state::{Phase, PlaybackState, StringSet};
pub use timing::AnimationTiming;
