#[cfg(feature = "rtrb")]
use rtrb::Consumer;
use std::collections::VecDeque;

/// Identifies a cancellable run of scheduled plucks (one scale playback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(pub u64);

/// Commands sent from the control side to the audio side.
///
/// Times are absolute positions on the audio clock, in seconds. A pluck whose
/// time has already passed when the bank sees it sounds at the start of the
/// next rendered sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SynthMessage {
    Pluck {
        string: usize,
        frequency: f32,
        at: f64,
        duration: f32,
        sequence: Option<SequenceId>,
    },
    CancelSequence {
        sequence: SequenceId,
    },
    SetVolume {
        db: f32,
    },
    /// Drop everything pending and release every string.
    ReleaseAll,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for VecDeque<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        self.pop_front()
    }
}
