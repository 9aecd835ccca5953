use std::time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::string::PluckParams, sequencing::Duration};

/// Voice engine settings.
///
/// ```ignore
/// let config = EngineConfig::default().volume_db(-12.0).strum_delay_ms(20);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Gap between consecutive strings of a strum.
    pub strum_delay: time::Duration,
    /// Initial volume of every voice.
    pub volume_db: f32,
    /// Length of chord and single notes, measured at `reference_bpm`.
    pub chord_note: Duration,
    /// Length of scale notes, measured at the scale's own tempo.
    pub scale_note: Duration,
    pub reference_bpm: f64,
    /// Scheduling headroom so the first pluck of a strum is not late by a block.
    pub lookahead: time::Duration,
    pub pluck: PluckParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strum_delay: time::Duration::from_millis(15),
            volume_db: -6.0,
            chord_note: Duration::HALF,
            scale_note: Duration::EIGHTH,
            reference_bpm: 120.0,
            lookahead: time::Duration::from_millis(20),
            pluck: PluckParams::default(),
        }
    }
}

impl EngineConfig {
    pub fn strum_delay_ms(mut self, ms: u64) -> Self {
        self.strum_delay = time::Duration::from_millis(ms);
        self
    }

    pub fn volume_db(mut self, db: f32) -> Self {
        self.volume_db = db;
        self
    }

    pub fn chord_note(mut self, value: Duration) -> Self {
        self.chord_note = value;
        self
    }

    pub fn scale_note(mut self, value: Duration) -> Self {
        self.scale_note = value;
        self
    }

    pub fn lookahead(mut self, lookahead: time::Duration) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn pluck(mut self, params: PluckParams) -> Self {
        self.pluck = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_notes_last_one_second_at_the_reference_tempo() {
        let config = EngineConfig::default();
        assert_eq!(config.chord_note.to_seconds(config.reference_bpm), 1.0);
    }

    #[test]
    fn builder_overrides() {
        let config = EngineConfig::default().strum_delay_ms(20).volume_db(-12.0);
        assert_eq!(config.strum_delay, time::Duration::from_millis(20));
        assert_eq!(config.volume_db, -12.0);
        assert_eq!(config.scale_note, Duration::EIGHTH);
    }
}
