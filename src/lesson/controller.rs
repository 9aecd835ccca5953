use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{
    audio::{AudioError, AudioOutput, VoiceEngine},
    curriculum::{Chord, Curriculum, Scale, Song, SongStep},
    lesson::{config::LessonConfig, display::DisplayState, LessonMode},
    playback::{
        schedule::{Fired, Scheduler, TaskId},
        AnimationTiming, Choreographer, PlaybackState, StringSet,
    },
    sequencing::BarBeat,
    NUM_STRINGS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    AutoPlayChord,
    AdvanceSong,
    ScaleFinished,
}

/// Session state for one learner.
///
/// Owns the voice engine and the choreographer. Every user action takes the
/// current time, and [`tick`](Self::tick) must be called once per rendered
/// frame to run timers, animation and scale callbacks.
pub struct LessonController<O: AudioOutput> {
    config: LessonConfig,
    curriculum: Curriculum,
    mode: LessonMode,
    chord_index: usize,
    scale_index: usize,
    song_index: usize,
    song_step: usize,
    /// Last indices that were auto-played, so unrelated refreshes do not
    /// replay them.
    played_chord: Option<usize>,
    played_scale: Option<usize>,
    show_finger_numbers: bool,
    song_playing: bool,
    scale_playing: bool,
    scale_tempo: f64,
    display: DisplayState,
    engine: VoiceEngine<O>,
    choreographer: Choreographer<&'static Chord>,
    timers: Scheduler<Task>,
    auto_play: Option<TaskId>,
    song_timer: Option<TaskId>,
    scale_timer: Option<TaskId>,
}

impl<O: AudioOutput> LessonController<O> {
    pub fn new(engine: VoiceEngine<O>, config: LessonConfig) -> Self {
        Self::with_curriculum(engine, config, AnimationTiming::default(), Curriculum::default())
    }

    pub fn with_curriculum(
        engine: VoiceEngine<O>,
        config: LessonConfig,
        timing: AnimationTiming,
        curriculum: Curriculum,
    ) -> Self {
        let mut controller = Self {
            scale_tempo: config.clamp_tempo(config.default_tempo),
            config,
            curriculum,
            mode: LessonMode::Chords,
            chord_index: 0,
            scale_index: 0,
            song_index: 0,
            song_step: 0,
            played_chord: None,
            played_scale: None,
            show_finger_numbers: true,
            song_playing: false,
            scale_playing: false,
            display: DisplayState::default(),
            engine,
            choreographer: Choreographer::new(timing),
            timers: Scheduler::new(),
            auto_play: None,
            song_timer: None,
            scale_timer: None,
        };
        controller.refresh_display();
        controller
    }

    // ---- queries ----

    pub fn mode(&self) -> LessonMode {
        self.mode
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn playback(&self) -> &PlaybackState {
        self.choreographer.state()
    }

    pub fn timing(&self) -> &AnimationTiming {
        self.choreographer.timing()
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn engine(&self) -> &VoiceEngine<O> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut VoiceEngine<O> {
        &mut self.engine
    }

    pub fn is_audio_ready(&self) -> bool {
        self.engine.is_ready()
    }

    pub fn chord_index(&self) -> usize {
        self.chord_index
    }

    pub fn scale_index(&self) -> usize {
        self.scale_index
    }

    pub fn song_index(&self) -> usize {
        self.song_index
    }

    pub fn song_step_index(&self) -> usize {
        self.song_step
    }

    pub fn current_chord(&self) -> &'static Chord {
        &self.curriculum.chords()[self.chord_index]
    }

    pub fn current_scale(&self) -> &'static Scale {
        &self.curriculum.scales()[self.scale_index]
    }

    pub fn current_song(&self) -> &'static Song {
        &self.curriculum.songs()[self.song_index]
    }

    pub fn current_song_step(&self) -> Option<&'static SongStep> {
        self.current_song().steps.get(self.song_step)
    }

    /// Bar and beat at which the current song step starts.
    pub fn song_position(&self) -> BarBeat {
        let song = self.current_song();
        song.time_signature.position(song.beat_offset(self.song_step))
    }

    pub fn is_song_playing(&self) -> bool {
        self.song_playing
    }

    pub fn is_scale_playing(&self) -> bool {
        self.scale_playing
    }

    pub fn scale_tempo(&self) -> f64 {
        self.scale_tempo
    }

    pub fn show_finger_numbers(&self) -> bool {
        self.show_finger_numbers
    }

    // ---- actions ----

    /// Open the audio output. Selecting a chord after this plays it.
    pub fn enable_audio(&mut self, now: Instant) -> Result<(), AudioError> {
        self.engine.initialize()?;
        self.sync(now);
        Ok(())
    }

    /// Switching modes, even to the current one, stops everything first.
    pub fn set_mode(&mut self, mode: LessonMode, now: Instant) {
        self.stop();
        self.played_chord = None;
        self.played_scale = None;
        self.mode = mode;
        info!(mode = mode.label(), "lesson mode changed");
        self.sync(now);
    }

    pub fn next(&mut self, now: Instant) {
        self.step_selection(1, now);
    }

    pub fn previous(&mut self, now: Instant) {
        self.step_selection(-1, now);
    }

    /// Out-of-range indices are ignored.
    pub fn select_chord(&mut self, index: usize, now: Instant) {
        if index < self.curriculum.chords().len() {
            self.chord_index = index;
            self.sync(now);
        }
    }

    pub fn select_scale(&mut self, index: usize, now: Instant) {
        if index < self.curriculum.scales().len() {
            self.scale_index = index;
            self.sync(now);
        }
    }

    pub fn select_song(&mut self, index: usize, now: Instant) {
        if index < self.curriculum.songs().len() && index != self.song_index {
            self.stop();
            self.song_index = index;
            self.song_step = 0;
            self.sync(now);
        }
    }

    /// Jump to a chord of the current song. While the song plays it carries
    /// on from there.
    pub fn select_song_chord(&mut self, index: usize, now: Instant) {
        if index >= self.current_song().steps.len() {
            return;
        }
        self.song_step = index;
        self.refresh_display();
        if self.song_playing {
            self.start_song_step(now);
        }
    }

    /// The mode's play button: strum the chord, toggle the scale, or
    /// play/pause the song.
    pub fn play(&mut self, now: Instant) {
        match self.mode {
            LessonMode::Chords => self.play_chord(now),
            LessonMode::Scales => self.toggle_scale(now),
            LessonMode::Songs => self.toggle_song(now),
        }
    }

    /// Animate the chord on display and strum it when the animation's strum
    /// completes.
    pub fn play_chord(&mut self, now: Instant) {
        if let Some(chord) = self.display.chord {
            self.choreographer
                .trigger_chord_animation(chord.positions, chord, now);
        }
    }

    pub fn toggle_scale(&mut self, now: Instant) {
        if !self.engine.is_ready() {
            return;
        }
        if self.scale_playing {
            self.scale_playing = false;
            self.cancel_timer(Task::ScaleFinished);
            self.engine.stop_scale();
            self.choreographer.set_current_scale_note(None);
        } else {
            self.scale_playing = true;
            self.start_scale(now);
        }
    }

    pub fn toggle_song(&mut self, now: Instant) {
        if self.song_playing {
            self.stop();
        } else {
            self.song_playing = true;
            self.start_song_step(now);
        }
    }

    /// Stop all audio and animation.
    pub fn stop(&mut self) {
        self.song_playing = false;
        self.scale_playing = false;
        self.timers.cancel_all();
        self.auto_play = None;
        self.song_timer = None;
        self.scale_timer = None;
        self.engine.stop_all();
        self.choreographer.reset();
    }

    /// Set the scale tempo, clamped to the configured range. Locked while a
    /// scale plays. Returns the tempo in effect.
    pub fn set_scale_tempo(&mut self, bpm: f64) -> f64 {
        if !self.scale_playing && bpm.is_finite() {
            self.scale_tempo = self.config.clamp_tempo(bpm);
        }
        self.scale_tempo
    }

    pub fn nudge_scale_tempo(&mut self, steps: i32) -> f64 {
        self.set_scale_tempo(self.scale_tempo + f64::from(steps) * self.config.tempo_step)
    }

    pub fn toggle_finger_numbers(&mut self) {
        self.show_finger_numbers = !self.show_finger_numbers;
    }

    /// Sound one string at the fret on display and let it ring.
    pub fn pluck_string(&mut self, string: usize, now: Instant) {
        if string >= NUM_STRINGS {
            return;
        }
        let fret = self.display.fret_on(string as u8);
        if fret < 0 {
            return;
        }
        let duration = self.engine.config().chord_note;
        self.engine.play_note(string, fret, duration);
        self.choreographer
            .trigger_string_vibration(std::iter::once(string).collect::<StringSet>(), now);
    }

    /// Run everything due by `now`. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        let tick = self.timers.begin(now);
        while let Some(Fired { action, at, .. }) = self.timers.next_due(&tick) {
            match action {
                Task::AutoPlayChord => {
                    self.auto_play = None;
                    self.play_chord(at);
                }
                Task::AdvanceSong => {
                    self.song_timer = None;
                    let len = self.current_song().steps.len();
                    self.song_step = (self.song_step + 1) % len;
                    self.refresh_display();
                    self.start_song_step(at);
                }
                Task::ScaleFinished => {
                    self.scale_timer = None;
                    self.scale_playing = false;
                }
            }
        }

        if let Some(chord) = self.choreographer.tick(now) {
            self.engine.play_chord(chord.positions, &chord.strum(), true);
        }

        let choreographer = &mut self.choreographer;
        self.engine
            .poll(|index| choreographer.set_current_scale_note(Some(index)));
    }

    // ---- internals ----

    fn step_selection(&mut self, delta: isize, now: Instant) {
        match self.mode {
            LessonMode::Chords => {
                self.chord_index = wrap(self.chord_index, delta, self.curriculum.chords().len());
                self.sync(now);
            }
            LessonMode::Scales => {
                self.scale_index = wrap(self.scale_index, delta, self.curriculum.scales().len());
                self.sync(now);
            }
            LessonMode::Songs => {
                let index = wrap(self.song_index, delta, self.curriculum.songs().len());
                self.stop();
                self.song_index = index;
                self.song_step = 0;
                self.sync(now);
            }
        }
    }

    /// Bring the display up to date and start whatever a selection change
    /// implies.
    fn sync(&mut self, now: Instant) {
        self.refresh_display();

        match self.mode {
            LessonMode::Chords => {
                if self.engine.is_ready() && self.played_chord != Some(self.chord_index) {
                    self.played_chord = Some(self.chord_index);
                    self.cancel_timer(Task::AutoPlayChord);
                    self.auto_play = Some(self.timers.set_timeout(
                        now,
                        self.config.auto_play_delay,
                        Task::AutoPlayChord,
                    ));
                }
            }
            LessonMode::Scales => {
                if self.scale_playing && self.played_scale != Some(self.scale_index) {
                    self.start_scale(now);
                }
            }
            LessonMode::Songs => {}
        }
    }

    fn refresh_display(&mut self) {
        match self.mode {
            LessonMode::Chords => {
                self.display = DisplayState::chord(self.current_chord());
            }
            LessonMode::Scales => {
                self.display = DisplayState::scale(self.current_scale());
            }
            LessonMode::Songs => {
                let Some(step) = self.current_song_step() else {
                    return;
                };
                match step.resolve_in(self.curriculum.chords()) {
                    Some(chord) => self.display = DisplayState::chord(chord),
                    None => warn!(
                        song = self.current_song().title,
                        chord = step.chord,
                        "unknown chord in song, keeping previous shape"
                    ),
                }
            }
        }
    }

    fn start_scale(&mut self, now: Instant) {
        self.played_scale = Some(self.scale_index);
        self.cancel_timer(Task::ScaleFinished);
        self.choreographer.set_current_scale_note(None);

        let scale = self.current_scale();
        let millis = self.engine.play_scale(scale.notes, self.scale_tempo);
        let length = Duration::from_secs_f64(millis / 1000.0) + self.config.scale_stop_slack;
        self.scale_timer = Some(self.timers.set_timeout(now, length, Task::ScaleFinished));
        debug!(scale = scale.name, tempo = self.scale_tempo, "scale started");
    }

    /// Play the current song chord (when audio is on) and schedule the next.
    fn start_song_step(&mut self, now: Instant) {
        self.cancel_timer(Task::AdvanceSong);

        let song = self.current_song();
        let Some(step) = self.current_song_step() else {
            return;
        };
        if self.engine.is_ready() {
            match step.resolve_in(self.curriculum.chords()) {
                Some(chord) => {
                    self.choreographer
                        .trigger_chord_animation(chord.positions, chord, now)
                }
                None => debug!(chord = step.chord, "skipping unknown song chord"),
            }
        }

        match Duration::try_from_secs_f64(song.step_seconds(step)) {
            Ok(length) => {
                self.song_timer = Some(self.timers.set_timeout(now, length, Task::AdvanceSong));
            }
            Err(_) => warn!(song = song.title, tempo = song.tempo, "song step has no finite length"),
        }
    }

    fn cancel_timer(&mut self, task: Task) {
        let slot = match task {
            Task::AutoPlayChord => &mut self.auto_play,
            Task::AdvanceSong => &mut self.song_timer,
            Task::ScaleFinished => &mut self.scale_timer,
        };
        if let Some(id) = slot.take() {
            self.timers.cancel(id);
        }
    }
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}
