use crate::curriculum::{Chord, FretPosition, Scale, ScaleNote, StrumPattern};

/// What the fretboard shows for the current lesson item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    /// Chord whose shape is on the neck, if any.
    pub chord: Option<&'static Chord>,
    pub finger_positions: &'static [FretPosition],
    pub scale_notes: &'static [ScaleNote],
    /// Strings drawn as part of the strum.
    pub highlighted_strings: StrumPattern,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            chord: None,
            finger_positions: &[],
            scale_notes: &[],
            highlighted_strings: [false; 6],
        }
    }
}

impl DisplayState {
    pub fn chord(chord: &'static Chord) -> Self {
        Self {
            chord: Some(chord),
            finger_positions: chord.positions,
            scale_notes: &[],
            highlighted_strings: chord.strum(),
        }
    }

    pub fn scale(scale: &'static Scale) -> Self {
        Self {
            chord: None,
            finger_positions: &[],
            scale_notes: scale.notes,
            highlighted_strings: [false; 6],
        }
    }

    /// Fret shown on `string`: the chord's position, or the lowest scale note
    /// on that string, or open.
    pub fn fret_on(&self, string: u8) -> i8 {
        if let Some(pos) = self.finger_positions.iter().find(|p| p.string == string) {
            return pos.fret;
        }
        self.scale_notes
            .iter()
            .filter(|n| n.string == string)
            .map(|n| n.fret)
            .min()
            .unwrap_or(0)
    }
}
