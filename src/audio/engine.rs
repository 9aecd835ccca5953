use tracing::{debug, info, warn};

use crate::{
    audio::{config::EngineConfig, error::AudioError, AudioOutput},
    curriculum::{FretPosition, ScaleNote, StrumPattern},
    pitch,
    sequencing::Duration,
    synth::message::{SequenceId, SynthMessage},
    NUM_STRINGS,
};

pub const MIN_VOLUME_DB: f32 = -60.0;
pub const MAX_VOLUME_DB: f32 = 0.0;

/// The scale currently scheduled on the audio clock.
#[derive(Debug, Clone, Copy)]
struct ScaleRun {
    sequence: SequenceId,
    start: f64,
    beat: f64,
    len: usize,
    /// Next note whose callback has not fired yet.
    cursor: usize,
}

impl ScaleRun {
    fn note_time(&self, index: usize) -> f64 {
        self.start + index as f64 * self.beat
    }
}

/// Turns fretboard positions into timed string triggers.
///
/// Six monophonic voices sit behind the output, one per string. Until
/// [`initialize`](Self::initialize) succeeds every other call is a silent no-op.
pub struct VoiceEngine<O: AudioOutput> {
    output: O,
    config: EngineConfig,
    ready: bool,
    volume_db: f32,
    scale: Option<ScaleRun>,
    next_sequence: u64,
}

impl<O: AudioOutput> VoiceEngine<O> {
    pub fn new(output: O, config: EngineConfig) -> Self {
        Self {
            output,
            volume_db: config.volume_db.clamp(MIN_VOLUME_DB, MAX_VOLUME_DB),
            config,
            ready: false,
            scale: None,
            next_sequence: 0,
        }
    }

    /// Open the output. Idempotent; on failure the engine stays uninitialized.
    pub fn initialize(&mut self) -> Result<(), AudioError> {
        if self.ready {
            return Ok(());
        }

        self.output.open()?;
        self.ready = true;
        self.send(SynthMessage::SetVolume { db: self.volume_db });
        info!(volume_db = self.volume_db, "voice engine initialized");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn volume_db(&self) -> f32 {
        self.volume_db
    }

    pub fn is_scale_playing(&self) -> bool {
        self.scale.is_some()
    }

    /// Sound one string now. Muted frets and unknown strings do nothing.
    pub fn play_note(&mut self, string: usize, fret: i8, duration: Duration) {
        if !self.ready || string >= NUM_STRINGS || fret < 0 {
            return;
        }

        let at = self.start_time();
        let duration = duration.to_seconds(self.config.reference_bpm) as f32;
        self.send(SynthMessage::Pluck {
            string,
            frequency: pitch::frequency(string, fret),
            at,
            duration,
            sequence: None,
        });
    }

    /// Strum the strings selected by `strum_pattern`.
    ///
    /// A string sounds only if `positions` gives it a fret of zero or more.
    /// Down strums go low E to high e, up strums the other way; each sounded
    /// string starts one strum delay after the previous sounded one. Returns
    /// how many strings were triggered.
    pub fn play_chord(
        &mut self,
        positions: &[FretPosition],
        strum_pattern: &StrumPattern,
        down_strum: bool,
    ) -> usize {
        if !self.ready {
            return 0;
        }

        let now = self.start_time();
        let gap = self.config.strum_delay.as_secs_f64();
        let duration = self.config.chord_note.to_seconds(self.config.reference_bpm) as f32;

        let mut sounded = 0;
        for string in strum_order(down_strum) {
            if !strum_pattern[string] {
                continue;
            }
            let Some(fret) = fret_on(positions, string) else {
                continue;
            };

            self.send(SynthMessage::Pluck {
                string,
                frequency: pitch::frequency(string, fret),
                at: now + sounded as f64 * gap,
                duration,
                sequence: None,
            });
            sounded += 1;
        }
        sounded
    }

    /// Schedule `notes` one beat apart at `tempo` BPM, replacing any scale
    /// already playing. Returns the total length in milliseconds.
    ///
    /// Note callbacks are delivered by [`poll`](Self::poll) as the audio clock
    /// reaches each note.
    pub fn play_scale(&mut self, notes: &[ScaleNote], tempo: f64) -> f64 {
        if !self.ready {
            return 0.0;
        }
        self.stop_scale();

        if notes.is_empty() || !(tempo > 0.0) {
            return 0.0;
        }

        let beat = 60.0 / tempo;
        let start = self.start_time();
        let duration = self.config.scale_note.to_seconds(tempo) as f32;

        self.next_sequence += 1;
        let sequence = SequenceId(self.next_sequence);
        let run = ScaleRun {
            sequence,
            start,
            beat,
            len: notes.len(),
            cursor: 0,
        };

        for (index, note) in notes.iter().enumerate() {
            let string = usize::from(note.string).min(NUM_STRINGS - 1);
            self.send(SynthMessage::Pluck {
                string,
                frequency: pitch::frequency(string, note.fret),
                at: run.note_time(index),
                duration,
                sequence: Some(sequence),
            });
        }

        self.scale = Some(run);
        debug!(notes = notes.len(), tempo, "scale scheduled");

        notes.len() as f64 * beat * 1000.0
    }

    /// Fire `on_note_play(index)` for every scale note the audio clock has
    /// reached since the last poll, in order.
    pub fn poll<F: FnMut(usize)>(&mut self, mut on_note_play: F) {
        let Some(run) = self.scale.as_mut() else {
            return;
        };

        let now = self.output.now();
        while run.cursor < run.len && run.note_time(run.cursor) <= now {
            on_note_play(run.cursor);
            run.cursor += 1;
        }

        if run.cursor == run.len {
            self.scale = None;
        }
    }

    pub fn stop_scale(&mut self) {
        if let Some(run) = self.scale.take() {
            self.send(SynthMessage::CancelSequence {
                sequence: run.sequence,
            });
            debug!(played = run.cursor, of = run.len, "scale stopped");
        }
    }

    /// Stops the scale. Chords and single notes ring out on their own.
    pub fn stop_all(&mut self) {
        self.stop_scale();
    }

    /// Set every voice's volume, clamped to [-60, 0] dB.
    pub fn set_volume(&mut self, db: f32) {
        if !self.ready {
            return;
        }
        self.volume_db = db.clamp(MIN_VOLUME_DB, MAX_VOLUME_DB);
        self.send(SynthMessage::SetVolume { db: self.volume_db });
    }

    /// Stop everything, release the voices and close the output. The engine
    /// can be initialized again afterwards.
    pub fn dispose(&mut self) {
        if !self.ready {
            return;
        }
        self.stop_all();
        self.send(SynthMessage::ReleaseAll);
        self.output.close();
        self.ready = false;
        info!("voice engine disposed");
    }

    fn start_time(&self) -> f64 {
        self.output.now() + self.config.lookahead.as_secs_f64()
    }

    fn send(&mut self, message: SynthMessage) {
        if let Err(err) = self.output.send(message) {
            warn!(%err, ?message, "synth message dropped");
        }
    }
}

impl<O: AudioOutput> Drop for VoiceEngine<O> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn strum_order(down_strum: bool) -> [usize; NUM_STRINGS] {
    let mut order = [0, 1, 2, 3, 4, 5];
    if !down_strum {
        order.reverse();
    }
    order
}

fn fret_on(positions: &[FretPosition], string: usize) -> Option<i8> {
    positions
        .iter()
        .find(|p| usize::from(p.string) == string && p.fret >= 0)
        .map(|p| p.fret)
}
