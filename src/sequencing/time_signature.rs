use std::fmt;

/// Time signature of a song chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
    /// Number of beats per bar (numerator)
    pub numerator: u8,
    /// Note value that gets one beat (denominator: 4 = quarter, 8 = eighth)
    pub denominator: u8,
}

/// A 1-based bar/beat position, as shown on a transport display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarBeat {
    pub bar: u32,
    pub beat: u32,
}

impl TimeSignature {
    /// Standard 4/4 time
    pub const FOUR_FOUR: TimeSignature = TimeSignature::new(4, 4);

    /// 3/4 time (waltz)
    pub const THREE_FOUR: TimeSignature = TimeSignature::new(3, 4);

    /// 6/8 time (compound duple)
    pub const SIX_EIGHT: TimeSignature = TimeSignature::new(6, 8);

    pub const fn new(numerator: u8, denominator: u8) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Beats counted per bar. Song charts count beats in the denominator's
    /// note value, so this is simply the numerator.
    pub fn beats_per_bar(&self) -> u32 {
        self.numerator.max(1) as u32
    }

    /// Compound meters group beats in threes (6/8, 9/8, 12/8).
    pub fn is_compound(&self) -> bool {
        self.numerator > 3 && self.numerator % 3 == 0 && self.denominator == 8
    }

    /// Bar and beat of a 0-based beat offset.
    pub fn position(&self, beat_offset: u32) -> BarBeat {
        let per_bar = self.beats_per_bar();
        BarBeat {
            bar: beat_offset / per_bar + 1,
            beat: beat_offset % per_bar + 1,
        }
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::FOUR_FOUR
    }
}
