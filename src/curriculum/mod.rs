//! Static lesson content: chord shapes, scale fingerings and song charts.
//!
//! Everything here is defined at compile time and never mutated. Consumers
//! share the tables directly; lookups by name are case-insensitive and return
//! `None` instead of failing when nothing matches.

mod chords;
mod scales;
mod songs;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{sequencing::TimeSignature, NUM_STRINGS};

pub use chords::CHORDS;
pub use scales::SCALES;
pub use songs::SONGS;

/// Finger sentinel for a muted string.
pub const MUTED: i8 = -1;
/// Finger sentinel for an open string.
pub const OPEN: i8 = 0;

/// Which strings a strum sounds, indexed low E first.
pub type StrumPattern = [bool; NUM_STRINGS];

/// Every string included.
pub const FULL_STRUM: StrumPattern = [true; NUM_STRINGS];

/// One string of a chord shape.
///
/// `fret == -1` is muted (`finger == -1`), `fret == 0` is open (`finger == 0`),
/// and a fretted note (`fret >= 1`) is held by finger 1 (index) to 4 (pinky).
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretPosition {
    pub string: u8,
    pub fret: i8,
    pub finger: i8,
}

impl FretPosition {
    pub const fn new(string: u8, fret: i8, finger: i8) -> Self {
        Self { string, fret, finger }
    }

    pub const fn muted(string: u8) -> Self {
        Self::new(string, MUTED, MUTED)
    }

    pub const fn open(string: u8) -> Self {
        Self::new(string, 0, OPEN)
    }

    pub fn is_muted(&self) -> bool {
        self.fret < 0
    }

    pub fn is_open(&self) -> bool {
        self.fret == 0
    }

    pub fn is_fretted(&self) -> bool {
        self.fret >= 1
    }

    /// Whether the string sounds when strummed (open or fretted).
    pub fn sounds(&self) -> bool {
        self.fret >= 0
    }

    /// Checks the string range, fret range and finger/fret pairing.
    pub fn is_valid(&self) -> bool {
        let string_ok = (self.string as usize) < NUM_STRINGS;
        let fret_ok = (-1..=24).contains(&self.fret);
        let finger_ok = match self.fret {
            -1 => self.finger == MUTED,
            0 => self.finger == OPEN,
            _ => (1..=4).contains(&self.finger),
        };
        string_ok && fret_ok && finger_ok
    }
}

/// Label printed on a finger marker: `X`, `O`, or the finger number.
pub fn finger_label(finger: i8) -> &'static str {
    match finger {
        MUTED => "X",
        OPEN => "O",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        _ => "?",
    }
}

/// A single index finger laid across several strings at one fret.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barre {
    pub fret: i8,
    pub from_string: u8,
    pub to_string: u8,
}

impl Barre {
    pub fn covers(&self, string: u8) -> bool {
        (self.from_string..=self.to_string).contains(&string)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub name: &'static str,
    /// At most one entry per string; strings without an entry are muted.
    pub positions: &'static [FretPosition],
    pub strum_pattern: Option<StrumPattern>,
    pub barre: Option<Barre>,
}

/// Fret range shown by a chord diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretWindow {
    /// Fret line at the top of the diagram (0 = the nut).
    pub start_fret: i8,
    /// Number of fret lines drawn.
    pub frets: u8,
}

impl Chord {
    /// Strum pattern, defaulting to every string.
    pub fn strum(&self) -> StrumPattern {
        self.strum_pattern.unwrap_or(FULL_STRUM)
    }

    /// Position held on `string`, if the chord names one.
    pub fn position(&self, string: u8) -> Option<&FretPosition> {
        self.positions.iter().find(|p| p.string == string)
    }

    pub fn is_barre(&self) -> bool {
        self.barre.is_some()
    }

    /// Diagram window: starts at the nut when the shape fits in the first
    /// four frets, otherwise one fret above the lowest fretted note. At least
    /// five frets are always shown.
    pub fn fret_window(&self) -> FretWindow {
        let fretted = || self.positions.iter().filter(|p| p.is_fretted()).map(|p| p.fret);
        let lowest = fretted().min().unwrap_or(1);
        let highest = fretted().max().unwrap_or(1);
        let start_fret = if highest <= 4 { 0 } else { lowest - 1 };
        let frets = (highest - start_fret + 1).max(5) as u8;
        FretWindow { start_fret, frets }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleNote {
    pub string: u8,
    pub fret: i8,
    pub is_root: bool,
    pub finger: i8,
}

impl ScaleNote {
    pub const fn new(string: u8, fret: i8, is_root: bool, finger: i8) -> Self {
        Self { string, fret, is_root, finger }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub name: &'static str,
    /// Interval pattern, display only (e.g. `W-W-H-W-W-W-H`).
    pub pattern: &'static str,
    /// Play order. The same string may appear several times.
    pub notes: &'static [ScaleNote],
}

/// One chord change in a song chart.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SongStep {
    /// Chord name, resolved against [`CHORDS`] at playback time.
    pub chord: &'static str,
    pub beats: u32,
    pub lyric: Option<&'static str>,
}

impl SongStep {
    /// Resolves the chord name; `None` when the chart names an unknown chord.
    pub fn resolve(&self) -> Option<&'static Chord> {
        chord_by_name(self.chord)
    }

    /// Same as [`resolve`](Self::resolve), against another chord table.
    pub fn resolve_in(&self, chords: &'static [Chord]) -> Option<&'static Chord> {
        find_chord(chords, self.chord)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: &'static str,
    pub artist: &'static str,
    /// Beats per minute.
    pub tempo: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub time_signature: TimeSignature,
    pub steps: &'static [SongStep],
}

impl Song {
    /// Tempo is finite and above zero.
    pub fn has_playable_tempo(&self) -> bool {
        self.tempo.is_finite() && self.tempo > 0.0
    }

    /// Seconds a step lasts at the song tempo: `beats / (tempo / 60)`.
    pub fn step_seconds(&self, step: &SongStep) -> f64 {
        step.beats as f64 / (self.tempo / 60.0)
    }

    /// Beat offset at which step `index` begins.
    pub fn beat_offset(&self, index: usize) -> u32 {
        self.steps.iter().take(index).map(|s| s.beats).sum()
    }

    pub fn total_beats(&self) -> u32 {
        self.steps.iter().map(|s| s.beats).sum()
    }
}

pub fn chord_by_name(name: &str) -> Option<&'static Chord> {
    find_chord(CHORDS, name)
}

fn find_chord(chords: &'static [Chord], name: &str) -> Option<&'static Chord> {
    chords.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn scale_by_name(name: &str) -> Option<&'static Scale> {
    SCALES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

pub fn song_by_title(title: &str) -> Option<&'static Song> {
    SONGS.iter().find(|s| s.title.eq_ignore_ascii_case(title))
}

/// The material a lesson walks through. Every table is non-empty.
#[derive(Debug, Clone, Copy)]
pub struct Curriculum {
    chords: &'static [Chord],
    scales: &'static [Scale],
    songs: &'static [Song],
}

impl Curriculum {
    /// `None` if any table is empty or a song has no playable tempo.
    pub fn new(
        chords: &'static [Chord],
        scales: &'static [Scale],
        songs: &'static [Song],
    ) -> Option<Self> {
        if chords.is_empty() || scales.is_empty() || songs.is_empty() {
            return None;
        }
        if songs.iter().any(|s| !s.has_playable_tempo()) {
            return None;
        }
        Some(Self { chords, scales, songs })
    }

    pub fn chords(&self) -> &'static [Chord] {
        self.chords
    }

    pub fn scales(&self) -> &'static [Scale] {
        self.scales
    }

    pub fn songs(&self) -> &'static [Song] {
        self.songs
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self {
            chords: CHORDS,
            scales: SCALES,
            songs: SONGS,
        }
    }
}
