use super::{Barre, Chord, FretPosition};

const fn at(string: u8, fret: i8, finger: i8) -> FretPosition {
    FretPosition::new(string, fret, finger)
}

const X: bool = false;
const O: bool = true;

pub static CHORDS: &[Chord] = &[
    // Open chords
    Chord {
        name: "C Major",
        positions: &[
            FretPosition::muted(0),
            at(1, 3, 3),
            at(2, 2, 2),
            FretPosition::open(3),
            at(4, 1, 1),
            FretPosition::open(5),
        ],
        strum_pattern: Some([X, O, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "G Major",
        positions: &[
            at(0, 3, 2),
            at(1, 2, 1),
            FretPosition::open(2),
            FretPosition::open(3),
            FretPosition::open(4),
            at(5, 3, 3),
        ],
        strum_pattern: Some([O, O, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "D Major",
        positions: &[
            FretPosition::muted(0),
            FretPosition::muted(1),
            FretPosition::open(2),
            at(3, 2, 1),
            at(4, 3, 3),
            at(5, 2, 2),
        ],
        strum_pattern: Some([X, X, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "A Major",
        positions: &[
            FretPosition::muted(0),
            FretPosition::open(1),
            at(2, 2, 1),
            at(3, 2, 2),
            at(4, 2, 3),
            FretPosition::open(5),
        ],
        strum_pattern: Some([X, O, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "E Major",
        positions: &[
            FretPosition::open(0),
            at(1, 2, 2),
            at(2, 2, 3),
            at(3, 1, 1),
            FretPosition::open(4),
            FretPosition::open(5),
        ],
        strum_pattern: Some([O, O, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "A Minor",
        positions: &[
            FretPosition::muted(0),
            FretPosition::open(1),
            at(2, 2, 2),
            at(3, 2, 3),
            at(4, 1, 1),
            FretPosition::open(5),
        ],
        strum_pattern: Some([X, O, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "E Minor",
        positions: &[
            FretPosition::open(0),
            at(1, 2, 2),
            at(2, 2, 3),
            FretPosition::open(3),
            FretPosition::open(4),
            FretPosition::open(5),
        ],
        strum_pattern: Some([O, O, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "D Minor",
        positions: &[
            FretPosition::muted(0),
            FretPosition::muted(1),
            FretPosition::open(2),
            at(3, 2, 2),
            at(4, 3, 3),
            at(5, 1, 1),
        ],
        strum_pattern: Some([X, X, O, O, O, O]),
        barre: None,
    },
    // Barre chords
    Chord {
        name: "F Major",
        positions: &[
            at(0, 1, 1),
            at(1, 3, 3),
            at(2, 3, 4),
            at(3, 2, 2),
            at(4, 1, 1),
            at(5, 1, 1),
        ],
        strum_pattern: Some([O, O, O, O, O, O]),
        barre: Some(Barre { fret: 1, from_string: 0, to_string: 5 }),
    },
    Chord {
        name: "B Minor",
        positions: &[
            FretPosition::muted(0),
            at(1, 2, 1),
            at(2, 4, 3),
            at(3, 4, 4),
            at(4, 3, 2),
            at(5, 2, 1),
        ],
        strum_pattern: Some([X, O, O, O, O, O]),
        barre: Some(Barre { fret: 2, from_string: 1, to_string: 5 }),
    },
    Chord {
        name: "C7",
        positions: &[
            FretPosition::muted(0),
            at(1, 3, 3),
            at(2, 2, 2),
            at(3, 3, 4),
            at(4, 1, 1),
            FretPosition::open(5),
        ],
        strum_pattern: Some([X, O, O, O, O, O]),
        barre: None,
    },
    Chord {
        name: "G7",
        positions: &[
            at(0, 3, 3),
            at(1, 2, 2),
            FretPosition::open(2),
            FretPosition::open(3),
            FretPosition::open(4),
            at(5, 1, 1),
        ],
        strum_pattern: Some([O, O, O, O, O, O]),
        barre: None,
    },
];
