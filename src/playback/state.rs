#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NUM_STRINGS;

/// Where the chord choreography currently is.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fingers,
    Strum,
    Ringing,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Fingers => "fingers",
            Phase::Strum => "strum",
            Phase::Ringing => "ringing",
        }
    }
}

/// A set of string indices, one bit per string.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringSet(u8);

impl StringSet {
    pub const EMPTY: StringSet = StringSet(0);
    pub const ALL: StringSet = StringSet((1 << NUM_STRINGS) - 1);

    /// Indices outside the instrument are ignored.
    pub fn insert(&mut self, string: usize) {
        if string < NUM_STRINGS {
            self.0 |= 1 << string;
        }
    }

    pub fn contains(&self, string: usize) -> bool {
        string < NUM_STRINGS && self.0 & (1 << string) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Ascending string order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_STRINGS).filter(move |&s| self.contains(s))
    }
}

impl FromIterator<usize> for StringSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = StringSet::EMPTY;
        for string in iter {
            set.insert(string);
        }
        set
    }
}

/// What a renderer reads every frame. Owned by the choreographer and handed
/// out by reference or by copy, never mutated from outside.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub phase: Phase,
    /// 0.0 to 1.0 while the fingers press down.
    pub finger_progress: f32,
    /// 0.0 to 1.0 while the pick sweeps across the strings.
    pub strum_progress: f32,
    pub vibrating_strings: StringSet,
    pub current_scale_note: Option<usize>,
}

impl PlaybackState {
    /// String the pick is over during the strum, low E first.
    pub fn strum_string(&self) -> Option<usize> {
        (self.phase == Phase::Strum).then(|| strum_position(self.strum_progress))
    }
}

/// Index of the string under the pick at `progress`.
pub(crate) fn strum_position(progress: f32) -> usize {
    ((progress * NUM_STRINGS as f32).floor() as usize).min(NUM_STRINGS - 1)
}
