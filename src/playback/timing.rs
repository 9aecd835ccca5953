use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Durations of the chord choreography.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub finger_press: Duration,
    /// Gap between one finger landing and the next.
    pub finger_stagger: Duration,
    pub strum: Duration,
    pub pre_strum: Duration,
    pub vibration: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            finger_press: Duration::from_millis(300),
            finger_stagger: Duration::from_millis(50),
            strum: Duration::from_millis(200),
            pre_strum: Duration::from_millis(100),
            vibration: Duration::from_millis(2000),
        }
    }
}

impl AnimationTiming {
    pub fn finger_press(mut self, duration: Duration) -> Self {
        self.finger_press = duration;
        self
    }

    pub fn finger_stagger(mut self, duration: Duration) -> Self {
        self.finger_stagger = duration;
        self
    }

    pub fn strum(mut self, duration: Duration) -> Self {
        self.strum = duration;
        self
    }

    pub fn pre_strum(mut self, duration: Duration) -> Self {
        self.pre_strum = duration;
        self
    }

    pub fn vibration(mut self, duration: Duration) -> Self {
        self.vibration = duration;
        self
    }

    /// When `finger` starts pressing, relative to the start of the press
    /// phase. Index finger first; open and muted strings have no delay.
    pub fn finger_delay(&self, finger: i8) -> Duration {
        let steps = u32::try_from(finger - 1).unwrap_or(0);
        self.finger_stagger * steps
    }

    /// How far down `finger` is (0.0 to 1.0) when the press phase as a whole
    /// is at `finger_progress`. Later fingers land later but all are down by
    /// the end of the phase.
    pub fn finger_level(&self, finger: i8, finger_progress: f32) -> f32 {
        let total = self.finger_press.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let delay = self.finger_delay(finger).as_secs_f32().min(total);
        let travel = total - delay;
        if travel <= 0.0 {
            return if finger_progress >= 1.0 { 1.0 } else { 0.0 };
        }
        ((finger_progress * total - delay) / travel).clamp(0.0, 1.0)
    }
}
