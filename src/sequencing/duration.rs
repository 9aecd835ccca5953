/// Musical note duration represented as a rational fraction of a whole note.
/// Floats only appear when converting to wall-clock time.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    /// Numerator: how many parts
    pub numerator: u32,
    /// Denominator: of what size (4 = quarter, 8 = eighth, etc.)
    pub denominator: u32,
}

impl Duration {
    // Standard note values
    pub const WHOLE: Duration = Duration {
        numerator: 1,
        denominator: 1,
    };
    pub const HALF: Duration = Duration {
        numerator: 1,
        denominator: 2,
    };
    pub const QUARTER: Duration = Duration {
        numerator: 1,
        denominator: 4,
    };
    pub const EIGHTH: Duration = Duration {
        numerator: 1,
        denominator: 8,
    };
    pub const SIXTEENTH: Duration = Duration {
        numerator: 1,
        denominator: 16,
    };

    /// Length in beats, where a quarter note is one beat.
    /// Formula: beats = (numerator * 4) / denominator
    pub fn beats(&self) -> f64 {
        (self.numerator as f64 * 4.0) / self.denominator as f64
    }

    /// Length in seconds at `bpm` quarter-note beats per minute.
    pub fn to_seconds(&self, bpm: f64) -> f64 {
        self.beats() * 60.0 / bpm
    }
}
