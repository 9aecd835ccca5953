use super::{Song, SongStep};
use crate::sequencing::TimeSignature;

const fn step(chord: &'static str, beats: u32, lyric: &'static str) -> SongStep {
    SongStep { chord, beats, lyric: Some(lyric) }
}

const fn hold(chord: &'static str, beats: u32) -> SongStep {
    SongStep { chord, beats, lyric: None }
}

pub static SONGS: &[Song] = &[
    Song {
        title: "Knockin' on Heaven's Door",
        artist: "Bob Dylan",
        tempo: 70.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[
            step("G Major", 4, "Mama, take this badge off of me"),
            hold("D Major", 4),
            step("A Minor", 4, "I can't use it anymore"),
            hold("A Minor", 4),
            step("G Major", 4, "It's gettin' dark, too dark to see"),
            hold("D Major", 4),
            step("C Major", 4, "Feel I'm knockin' on heaven's door"),
            hold("C Major", 4),
        ],
    },
    Song {
        title: "Wonderwall",
        artist: "Oasis",
        tempo: 87.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[
            step("E Minor", 4, "Today is gonna be the day"),
            step("G Major", 4, "That they're gonna throw it back to you"),
            step("D Major", 4, "By now you should've somehow"),
            step("A Minor", 4, "Realized what you gotta do"),
            step("E Minor", 4, "I don't believe that anybody"),
            step("G Major", 4, "Feels the way I do"),
            step("D Major", 4, "About you now"),
            hold("A Minor", 4),
        ],
    },
    Song {
        title: "Let It Be",
        artist: "The Beatles",
        tempo: 72.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[
            step("C Major", 4, "When I find myself in times of trouble"),
            step("G Major", 4, "Mother Mary comes to me"),
            step("A Minor", 4, "Speaking words of wisdom"),
            step("E Major", 4, "Let it be"),
            step("C Major", 4, "And in my hour of darkness"),
            step("G Major", 4, "She is standing right in front of me"),
            step("A Minor", 4, "Speaking words of wisdom"),
            step("E Major", 4, "Let it be"),
        ],
    },
    Song {
        title: "Horse with No Name",
        artist: "America",
        tempo: 120.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[
            step("E Minor", 4, "On the first part of the journey"),
            hold("D Major", 4),
            step("E Minor", 4, "I was looking at all the life"),
            hold("D Major", 4),
            step("E Minor", 4, "There were plants and birds and rocks and things"),
            hold("D Major", 4),
            step("E Minor", 4, "There was sand and hills and rings"),
            hold("D Major", 4),
        ],
    },
    Song {
        title: "Stand By Me",
        artist: "Ben E. King",
        tempo: 118.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[
            step("A Major", 4, "When the night has come"),
            step("A Major", 4, "And the land is dark"),
            step("E Major", 4, "And the moon is the only light we'll see"),
            hold("E Major", 4),
            step("A Major", 4, "No I won't be afraid"),
            step("A Major", 4, "Oh, I won't be afraid"),
            step("E Major", 4, "Just as long as you stand"),
            step("A Major", 4, "Stand by me"),
        ],
    },
    Song {
        title: "Sweet Home Alabama",
        artist: "Lynyrd Skynyrd",
        tempo: 100.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[
            step("D Major", 2, "Big wheels keep on turning"),
            hold("C Major", 2),
            step("G Major", 4, "Carry me home to see my kin"),
            step("D Major", 2, "Singing songs about the southland"),
            hold("C Major", 2),
            step("G Major", 4, "I miss Alabama once again"),
        ],
    },
];
