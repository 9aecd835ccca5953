use super::{Scale, ScaleNote};

const fn root(string: u8, fret: i8, finger: i8) -> ScaleNote {
    ScaleNote::new(string, fret, true, finger)
}

const fn note(string: u8, fret: i8, finger: i8) -> ScaleNote {
    ScaleNote::new(string, fret, false, finger)
}

pub static SCALES: &[Scale] = &[
    Scale {
        name: "C Major (Open Position)",
        pattern: "W-W-H-W-W-W-H",
        notes: &[
            root(1, 3, 3), // C (root)
            note(2, 0, 0), // D
            note(2, 2, 2), // E
            note(2, 3, 3), // F
            note(3, 0, 0), // G
            note(3, 2, 2), // A
            note(4, 0, 0), // B
            root(4, 1, 1), // C (octave)
            note(4, 3, 3), // D
            note(5, 0, 0), // E
            note(5, 1, 1), // F
            note(5, 3, 3), // G
        ],
    },
    Scale {
        name: "G Major (Open Position)",
        pattern: "W-W-H-W-W-W-H",
        notes: &[
            root(0, 3, 3), // G (root)
            note(1, 0, 0), // A
            note(1, 2, 2), // B
            note(2, 0, 0), // D
            note(2, 2, 2), // E
            root(3, 0, 0), // G (octave)
            note(3, 2, 2), // A
            note(4, 0, 0), // B
            note(4, 3, 3), // D
            note(5, 0, 0), // E
            root(5, 3, 3), // G (octave)
        ],
    },
    Scale {
        name: "A Minor Pentatonic (Position 1)",
        pattern: "Minor 3rd-W-W-Minor 3rd-W",
        notes: &[
            root(0, 5, 1), // A (root)
            note(0, 8, 4), // C
            note(1, 5, 1), // D
            note(1, 7, 3), // E
            note(2, 5, 1), // G
            note(2, 7, 3), // A (octave)
            note(3, 5, 1), // C
            note(3, 7, 3), // D
            root(4, 5, 1), // A (octave)
            note(4, 8, 4), // C
            note(5, 5, 1), // E
            note(5, 8, 4), // G
        ],
    },
    Scale {
        name: "E Minor Pentatonic (Open)",
        pattern: "Minor 3rd-W-W-Minor 3rd-W",
        notes: &[
            root(0, 0, 0), // E (root)
            note(0, 3, 3), // G
            note(1, 0, 0), // A
            note(1, 2, 2), // B
            note(2, 0, 0), // D
            root(2, 2, 2), // E (octave)
            note(3, 0, 0), // G
            note(3, 2, 2), // A
            note(4, 0, 0), // B
            note(4, 3, 3), // D
            root(5, 0, 0), // E (octave)
            note(5, 3, 3), // G
        ],
    },
    Scale {
        name: "D Major (Open Position)",
        pattern: "W-W-H-W-W-W-H",
        notes: &[
            root(2, 0, 0), // D (root)
            note(2, 2, 2), // E
            note(3, 0, 0), // G
            note(3, 2, 2), // A
            note(4, 0, 0), // B
            note(4, 3, 3), // D (octave)
            note(5, 0, 0), // E
            note(5, 2, 2), // F#
            note(5, 3, 3), // G
        ],
    },
    Scale {
        name: "Blues Scale in A",
        pattern: "Minor 3rd-W-H-H-Minor 3rd-W",
        notes: &[
            root(0, 5, 1), // A (root)
            note(0, 8, 4), // C
            note(1, 5, 1), // D
            note(1, 6, 2), // D# (blue note)
            note(1, 7, 3), // E
            note(2, 5, 1), // G
            root(2, 7, 3), // A (octave)
            note(3, 5, 1), // C
            note(3, 7, 3), // D
            note(3, 8, 4), // D# (blue note)
            root(4, 5, 1), // A (octave)
            note(4, 8, 4), // C
            note(5, 5, 1), // E
            note(5, 8, 4), // G
        ],
    },
];
