mod common;

use std::time::{Duration, Instant};

use common::Recorder;
use fretcoach::{
    audio::{EngineConfig, VoiceEngine},
    curriculum::{Chord, Curriculum, FretPosition, Scale, ScaleNote, Song, SongStep},
    lesson::{LessonConfig, LessonController, LessonMode},
    playback::{AnimationTiming, Phase},
    sequencing::{BarBeat, TimeSignature},
    synth::SynthMessage,
};

static CHORDS: &[Chord] = &[
    Chord {
        name: "E5",
        positions: &[
            FretPosition::open(0),
            FretPosition::new(1, 2, 1),
            FretPosition::new(2, 2, 2),
            FretPosition::muted(3),
            FretPosition::muted(4),
            FretPosition::muted(5),
        ],
        strum_pattern: Some([true, true, true, false, false, false]),
        barre: None,
    },
    Chord {
        name: "A5",
        positions: &[
            FretPosition::muted(0),
            FretPosition::open(1),
            FretPosition::new(2, 2, 1),
            FretPosition::new(3, 2, 2),
        ],
        strum_pattern: None,
        barre: None,
    },
    Chord {
        name: "D5 (ringing A)",
        positions: &[
            FretPosition::muted(0),
            FretPosition::muted(1),
            FretPosition::open(2),
            FretPosition::new(3, 2, 1),
            FretPosition::new(4, 3, 3),
            FretPosition::open(5),
        ],
        strum_pattern: Some([false, false, true, true, true, false]),
        barre: None,
    },
];

static SCALES: &[Scale] = &[
    Scale {
        name: "Four on A",
        pattern: "W-W-H",
        notes: &[
            ScaleNote::new(1, 0, true, 0),
            ScaleNote::new(1, 2, false, 1),
            ScaleNote::new(1, 4, false, 3),
            ScaleNote::new(1, 5, false, 4),
        ],
    },
    Scale {
        name: "Two on D",
        pattern: "W",
        notes: &[ScaleNote::new(2, 0, true, 0), ScaleNote::new(2, 2, false, 1)],
    },
];

static SONGS: &[Song] = &[
    Song {
        title: "Power Chords",
        artist: "Nobody",
        tempo: 120.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[
            SongStep { chord: "E5", beats: 2, lyric: Some("one") },
            SongStep { chord: "Q13", beats: 2, lyric: None },
            SongStep { chord: "A5", beats: 2, lyric: Some("three") },
        ],
    },
    Song {
        title: "Just A",
        artist: "Nobody",
        tempo: 60.0,
        time_signature: TimeSignature::THREE_FOUR,
        steps: &[SongStep { chord: "A5", beats: 3, lyric: None }],
    },
];

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn lesson_with(curriculum: Curriculum) -> (LessonController<Recorder>, Recorder) {
    let recorder = Recorder::new();
    let engine = VoiceEngine::new(
        recorder.clone(),
        EngineConfig::default().lookahead(Duration::ZERO),
    );
    let lesson = LessonController::with_curriculum(
        engine,
        LessonConfig::default(),
        AnimationTiming::default(),
        curriculum,
    );
    (lesson, recorder)
}

fn lesson() -> (LessonController<Recorder>, Recorder) {
    lesson_with(Curriculum::default())
}

fn small_lesson() -> (LessonController<Recorder>, Recorder) {
    lesson_with(Curriculum::new(CHORDS, SCALES, SONGS).unwrap())
}

/// Tick every 16 ms from `from` up to and including `from + span`.
fn run(lesson: &mut LessonController<Recorder>, from: Instant, span: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed <= span {
        lesson.tick(from + elapsed);
        elapsed += ms(16);
    }
}

#[test]
fn starts_on_the_first_chord() {
    let (lesson, _) = lesson();
    assert_eq!(lesson.mode(), LessonMode::Chords);
    assert_eq!(lesson.current_chord().name, "C Major");
    assert_eq!(lesson.display().chord.map(|c| c.name), Some("C Major"));
    assert_eq!(lesson.scale_tempo(), 120.0);
    assert!(lesson.show_finger_numbers());
    assert!(!lesson.is_audio_ready());
}

#[test]
fn enabling_audio_auto_plays_the_chord() {
    let (mut lesson, recorder) = lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();

    lesson.tick(t0 + ms(49));
    assert_eq!(lesson.playback().phase, Phase::Idle);

    lesson.tick(t0 + ms(50));
    assert_eq!(lesson.playback().phase, Phase::Fingers);
    assert!(recorder.plucks().is_empty(), "sound waits for the strum");

    run(&mut lesson, t0 + ms(50), ms(1000));
    let strings: Vec<usize> = recorder.plucks().iter().map(|&(s, _)| s).collect();
    assert_eq!(strings, vec![1, 2, 3, 4, 5]);
}

#[test]
fn without_audio_selection_only_updates_the_display() {
    let (mut lesson, _) = lesson();
    let t0 = Instant::now();

    lesson.next(t0);
    run(&mut lesson, t0, ms(500));

    assert_eq!(lesson.current_chord().name, "G Major");
    assert_eq!(lesson.display().chord.map(|c| c.name), Some("G Major"));
    assert_eq!(lesson.playback().phase, Phase::Idle);
}

#[test]
fn explicit_play_animates_even_without_audio() {
    let (mut lesson, recorder) = lesson();
    let t0 = Instant::now();

    lesson.play(t0);
    assert_eq!(lesson.playback().phase, Phase::Fingers);
    run(&mut lesson, t0, ms(1000));

    assert_eq!(lesson.playback().phase, Phase::Ringing);
    assert!(recorder.messages().is_empty());
}

#[test]
fn navigation_wraps_both_ways() {
    let (mut lesson, _) = lesson();
    let t0 = Instant::now();
    let chords = lesson.curriculum().chords().len();

    lesson.previous(t0);
    assert_eq!(lesson.chord_index(), chords - 1);
    lesson.next(t0);
    assert_eq!(lesson.chord_index(), 0);

    lesson.set_mode(LessonMode::Scales, t0);
    lesson.previous(t0);
    assert_eq!(lesson.scale_index(), lesson.curriculum().scales().len() - 1);

    lesson.set_mode(LessonMode::Songs, t0);
    lesson.previous(t0);
    assert_eq!(lesson.song_index(), lesson.curriculum().songs().len() - 1);
    assert_eq!(lesson.song_step_index(), 0);
}

#[test]
fn out_of_range_selection_is_ignored() {
    let (mut lesson, _) = small_lesson();
    let t0 = Instant::now();
    lesson.select_chord(1, t0);
    lesson.select_chord(7, t0);
    assert_eq!(lesson.chord_index(), 1);
    lesson.select_song_chord(99, t0);
    assert_eq!(lesson.song_step_index(), 0);
}

#[test]
fn reselecting_the_same_chord_does_not_replay_it() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    run(&mut lesson, t0, ms(3000));
    let first = recorder.plucks().len();
    assert_eq!(first, 3, "E5 strums its three lowest strings");

    let t1 = t0 + ms(3100);
    lesson.select_chord(0, t1);
    run(&mut lesson, t1, ms(1000));
    assert_eq!(recorder.plucks().len(), first);

    lesson.select_chord(1, t1 + ms(1100));
    run(&mut lesson, t1 + ms(1100), ms(1000));
    assert_eq!(recorder.plucks().len(), first + 3);
}

#[test]
fn unstrummed_open_string_vibrates_without_sounding() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    run(&mut lesson, t0, ms(3000));
    recorder.clear();

    let t1 = t0 + ms(3100);
    lesson.select_chord(2, t1);
    run(&mut lesson, t1, ms(1000));

    let plucked: Vec<usize> = recorder.plucks().iter().map(|&(s, _)| s).collect();
    assert_eq!(plucked, vec![2, 3, 4]);
    assert_eq!(lesson.playback().phase, Phase::Ringing);
    let ringing: Vec<usize> = lesson.playback().vibrating_strings.iter().collect();
    assert_eq!(ringing, vec![2, 3, 4, 5]);
}

#[test]
fn songs_without_a_tempo_are_refused() {
    static STALLED: &[Song] = &[Song {
        title: "Stalled",
        artist: "Nobody",
        tempo: 0.0,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[SongStep { chord: "E5", beats: 2, lyric: None }],
    }];
    static RUNAWAY: &[Song] = &[Song {
        title: "Runaway",
        artist: "Nobody",
        tempo: f64::INFINITY,
        time_signature: TimeSignature::FOUR_FOUR,
        steps: &[SongStep { chord: "E5", beats: 2, lyric: None }],
    }];
    assert!(Curriculum::new(CHORDS, SCALES, STALLED).is_none());
    assert!(Curriculum::new(CHORDS, SCALES, RUNAWAY).is_none());
    assert!(Curriculum::new(CHORDS, SCALES, SONGS).is_some());
}

#[test]
fn unknown_song_chord_keeps_the_previous_shape() {
    let (mut lesson, _) = small_lesson();
    let t0 = Instant::now();
    lesson.set_mode(LessonMode::Songs, t0);
    assert_eq!(lesson.display().chord.map(|c| c.name), Some("E5"));

    lesson.select_song_chord(1, t0);
    assert_eq!(lesson.song_step_index(), 1);
    assert_eq!(lesson.display().chord.map(|c| c.name), Some("E5"));

    lesson.select_song_chord(2, t0);
    assert_eq!(lesson.display().chord.map(|c| c.name), Some("A5"));
    assert_eq!(lesson.song_position(), BarBeat { bar: 2, beat: 1 });
}

#[test]
fn song_advances_on_its_tempo_and_loops() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    lesson.set_mode(LessonMode::Songs, t0);
    lesson.play(t0);
    assert!(lesson.is_song_playing());

    // Two beats at 120 BPM.
    lesson.tick(t0 + ms(999));
    assert_eq!(lesson.song_step_index(), 0);
    lesson.tick(t0 + ms(1000));
    assert_eq!(lesson.song_step_index(), 1);
    lesson.tick(t0 + ms(2000));
    assert_eq!(lesson.song_step_index(), 2);
    assert_eq!(lesson.display().chord.map(|c| c.name), Some("A5"));
    lesson.tick(t0 + ms(3000));
    assert_eq!(lesson.song_step_index(), 0);

    lesson.play(t0 + ms(3001));
    assert!(!lesson.is_song_playing());
    lesson.tick(t0 + ms(5000));
    assert_eq!(lesson.song_step_index(), 0);
    assert!(recorder.is_open());
}

#[test]
fn changing_song_stops_playback() {
    let (mut lesson, _) = small_lesson();
    let t0 = Instant::now();
    lesson.set_mode(LessonMode::Songs, t0);
    lesson.play(t0);
    lesson.tick(t0 + ms(1000));
    assert_eq!(lesson.song_step_index(), 1);

    lesson.next(t0 + ms(1100));
    assert!(!lesson.is_song_playing());
    assert_eq!(lesson.current_song().title, "Just A");
    assert_eq!(lesson.song_step_index(), 0);

    lesson.tick(t0 + ms(5000));
    assert_eq!(lesson.song_step_index(), 0);
}

#[test]
fn mode_change_stops_everything() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    lesson.set_mode(LessonMode::Scales, t0);
    lesson.play(t0);
    assert!(lesson.is_scale_playing());
    recorder.clear();

    lesson.set_mode(LessonMode::Songs, t0 + ms(10));
    assert!(!lesson.is_scale_playing());
    assert!(matches!(
        recorder.messages().as_slice(),
        [SynthMessage::CancelSequence { .. }]
    ));
    assert_eq!(lesson.playback().phase, Phase::Idle);
    assert_eq!(lesson.playback().current_scale_note, None);
}

#[test]
fn scale_plays_follows_the_cursor_and_finishes() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    lesson.set_mode(LessonMode::Scales, t0);
    recorder.clear();

    lesson.play(t0);
    assert!(lesson.is_scale_playing());
    assert_eq!(recorder.plucks().len(), 4);

    recorder.set_clock(0.0);
    lesson.tick(t0);
    assert_eq!(lesson.playback().current_scale_note, Some(0));

    recorder.set_clock(0.6);
    lesson.tick(t0 + ms(600));
    assert_eq!(lesson.playback().current_scale_note, Some(1));

    recorder.set_clock(1.5);
    lesson.tick(t0 + ms(1500));
    assert_eq!(lesson.playback().current_scale_note, Some(3));

    // Four half-second notes plus the slack.
    lesson.tick(t0 + ms(2099));
    assert!(lesson.is_scale_playing());
    lesson.tick(t0 + ms(2100));
    assert!(!lesson.is_scale_playing());
}

#[test]
fn toggling_a_scale_off_clears_the_cursor() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    lesson.set_mode(LessonMode::Scales, t0);
    lesson.play(t0);
    lesson.tick(t0);
    assert_eq!(lesson.playback().current_scale_note, Some(0));
    recorder.clear();

    lesson.play(t0 + ms(100));
    assert!(!lesson.is_scale_playing());
    assert_eq!(lesson.playback().current_scale_note, None);
    assert!(matches!(
        recorder.messages().as_slice(),
        [SynthMessage::CancelSequence { .. }]
    ));
}

#[test]
fn switching_scales_while_playing_restarts() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    lesson.set_mode(LessonMode::Scales, t0);
    lesson.play(t0);
    recorder.clear();

    lesson.next(t0 + ms(200));
    assert!(lesson.is_scale_playing());
    let messages = recorder.messages();
    assert!(matches!(messages[0], SynthMessage::CancelSequence { .. }));
    assert_eq!(recorder.plucks().len(), 2);
}

#[test]
fn scales_need_audio() {
    let (mut lesson, recorder) = small_lesson();
    let t0 = Instant::now();
    lesson.set_mode(LessonMode::Scales, t0);
    lesson.play(t0);
    assert!(!lesson.is_scale_playing());
    assert!(recorder.messages().is_empty());
}

#[test]
fn tempo_is_clamped_and_locked_while_playing() {
    let (mut lesson, _) = small_lesson();
    let t0 = Instant::now();
    assert_eq!(lesson.set_scale_tempo(300.0), 200.0);
    assert_eq!(lesson.set_scale_tempo(10.0), 60.0);
    assert_eq!(lesson.nudge_scale_tempo(2), 70.0);

    lesson.enable_audio(t0).unwrap();
    lesson.set_mode(LessonMode::Scales, t0);
    lesson.play(t0);
    assert_eq!(lesson.set_scale_tempo(150.0), 70.0);

    lesson.stop();
    assert_eq!(lesson.set_scale_tempo(150.0), 150.0);
}

#[test]
fn inverted_tempo_range_still_clamps() {
    let recorder = Recorder::new();
    let engine = VoiceEngine::new(recorder, EngineConfig::default());
    let mut lesson = LessonController::with_curriculum(
        engine,
        LessonConfig::default().tempo_range(200.0, 60.0),
        AnimationTiming::default(),
        Curriculum::default(),
    );
    assert_eq!(lesson.scale_tempo(), 120.0);
    assert_eq!(lesson.set_scale_tempo(20.0), 60.0);
    assert_eq!(lesson.set_scale_tempo(400.0), 200.0);
}

#[test]
fn plucking_a_string_sounds_the_shown_fret() {
    let (mut lesson, recorder) = lesson();
    let t0 = Instant::now();
    lesson.enable_audio(t0).unwrap();
    recorder.clear();

    lesson.pluck_string(0, t0);
    assert!(recorder.plucks().is_empty(), "low E is muted in C Major");

    lesson.pluck_string(1, t0);
    assert_eq!(recorder.plucks().len(), 1);
    assert_eq!(lesson.playback().phase, Phase::Ringing);
    let ringing: Vec<usize> = lesson.playback().vibrating_strings.iter().collect();
    assert_eq!(ringing, vec![1]);

    lesson.pluck_string(6, t0);
    assert_eq!(recorder.plucks().len(), 1);
}

#[test]
fn finger_numbers_toggle() {
    let (mut lesson, _) = lesson();
    lesson.toggle_finger_numbers();
    assert!(!lesson.show_finger_numbers());
    lesson.toggle_finger_numbers();
    assert!(lesson.show_finger_numbers());
}
