use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessonConfig {
    /// Pause between selecting a chord and hearing it.
    pub auto_play_delay: Duration,
    /// Added to a scale's length before it counts as finished.
    pub scale_stop_slack: Duration,
    pub default_tempo: f64,
    pub min_tempo: f64,
    pub max_tempo: f64,
    /// Tempo change per slider step.
    pub tempo_step: f64,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            auto_play_delay: Duration::from_millis(50),
            scale_stop_slack: Duration::from_millis(100),
            default_tempo: 120.0,
            min_tempo: 60.0,
            max_tempo: 200.0,
            tempo_step: 5.0,
        }
    }
}

impl LessonConfig {
    pub fn auto_play_delay(mut self, delay: Duration) -> Self {
        self.auto_play_delay = delay;
        self
    }

    pub fn default_tempo(mut self, bpm: f64) -> Self {
        self.default_tempo = bpm;
        self
    }

    /// Bounds may come in either order. A NaN bound keeps the current one.
    pub fn tempo_range(mut self, min: f64, max: f64) -> Self {
        let min = if min.is_nan() { self.min_tempo } else { min };
        let max = if max.is_nan() { self.max_tempo } else { max };
        self.min_tempo = min.min(max);
        self.max_tempo = min.max(max);
        self
    }

    /// Never panics, even with inverted bounds set through the fields.
    pub fn clamp_tempo(&self, bpm: f64) -> f64 {
        bpm.max(self.min_tempo).min(self.max_tempo)
    }
}
