//! The lesson a learner is working through: which chord, scale or song is
//! selected, what the fretboard shows for it, and when it plays.

pub mod config;
pub mod controller;
pub mod display;

pub use config::LessonConfig;
pub use controller::LessonController;
pub use display::DisplayState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonMode {
    #[default]
    Chords,
    Scales,
    Songs,
}

impl LessonMode {
    pub const ALL: [LessonMode; 3] = [LessonMode::Chords, LessonMode::Scales, LessonMode::Songs];

    pub fn label(&self) -> &'static str {
        match self {
            LessonMode::Chords => "Chords",
            LessonMode::Scales => "Scales",
            LessonMode::Songs => "Songs",
        }
    }
}
