/*
Pitch Mapping
=============

Standard tuning, low to high: E2 A2 D3 G3 B3 E4.

  string  name  open Hz   MIDI
  ------  ----  -------   ----
    0      E     82.41     40
    1      A    110.00     45
    2      D    146.83     50
    3      G    196.00     55
    4      B    246.94     59
    5      e    329.63     64

Each fret raises the pitch by one equal-tempered semitone, so

    frequency(string, fret) = open[string] * 2^(fret / 12)
    midi(string, fret)      = open_midi[string] + fret

A negative fret is a muted string: it has no pitch. `frequency` returns 0.0
and `midi_note` returns None for it.
*/

use crate::NUM_STRINGS;

/// Open-string frequencies in Hz, low E first.
pub const OPEN_STRING_FREQUENCIES: [f32; NUM_STRINGS] = [82.41, 110.0, 146.83, 196.0, 246.94, 329.63];

/// Open-string MIDI note numbers, low E first.
pub const OPEN_STRING_MIDI: [u8; NUM_STRINGS] = [40, 45, 50, 55, 59, 64];

/// String names as printed on diagrams (`e` is the high E).
pub const STRING_NAMES: [&str; NUM_STRINGS] = ["E", "A", "D", "G", "B", "e"];

/// Frequency returned for a muted string.
pub const SILENT: f32 = 0.0;

const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Frequency in Hz of `fret` on `string`, or [`SILENT`] when muted.
///
/// # Panics
///
/// Panics if `string` is not a valid string index.
pub fn frequency(string: usize, fret: i8) -> f32 {
    let open = OPEN_STRING_FREQUENCIES[string];
    if fret < 0 {
        return SILENT;
    }
    open * 2.0_f32.powf(fret as f32 / 12.0)
}

/// MIDI note number of `fret` on `string`, or `None` when muted.
///
/// # Panics
///
/// Panics if `string` is not a valid string index.
pub fn midi_note(string: usize, fret: i8) -> Option<u8> {
    let open = OPEN_STRING_MIDI[string];
    if fret < 0 {
        return None;
    }
    Some(open + fret as u8)
}

/// Name of the equal-tempered note nearest to `frequency`, e.g. `"A4"`.
///
/// Returns `None` for non-positive frequencies (silence).
pub fn note_name(frequency: f32) -> Option<String> {
    if frequency <= 0.0 || !frequency.is_finite() {
        return None;
    }
    let midi = (12.0 * (frequency / 440.0).log2() + 69.0).round() as i32;
    let name = NOTE_NAMES[midi.rem_euclid(12) as usize];
    let octave = midi.div_euclid(12) - 1;
    Some(format!("{name}{octave}"))
}
