use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    curriculum::FretPosition,
    playback::{
        schedule::{Fired, Scheduler},
        state::{strum_position, Phase, PlaybackState, StringSet},
        timing::AnimationTiming,
    },
};

/*
Chord Choreography
==================

  idle ──trigger──→ fingers ──(press done)──→ pause ──→ strum ──(sweep done)──→ ringing ──→ idle
                    0 → 1 over finger_press  pre_strum  0 → 1 over strum        vibration

The press and the sweep advance once per frame from the time actually elapsed,
so a slow or uneven frame rate only makes the animation coarser, never longer.
While the pick crosses the neck every string it passes joins the vibrating
set. When the sweep completes the run's cue is handed back from `tick` and the
full strummed set starts ringing, on the same tick.

Every trigger cancels everything still scheduled first. A run's cue lives in
the run itself, so a cancelled run takes its cue with it.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    FingerFrame,
    BeginStrum,
    StrumFrame,
    EndRinging,
}

#[derive(Debug)]
struct Run<C> {
    strummed: StringSet,
    cue: Option<C>,
    /// Logical start of the phase being animated.
    phase_start: Instant,
    /// Last string position the pick was seen over.
    pick: Option<usize>,
}

/// Drives the finger-press, strum and ringing animation for one fretboard.
///
/// `C` is whatever the caller wants back when the strum completes, typically
/// the chord to play.
#[derive(Debug)]
pub struct Choreographer<C> {
    state: PlaybackState,
    timing: AnimationTiming,
    scheduler: Scheduler<Step>,
    run: Option<Run<C>>,
}

impl<C> Default for Choreographer<C> {
    fn default() -> Self {
        Self::new(AnimationTiming::default())
    }
}

impl<C> Choreographer<C> {
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            state: PlaybackState::default(),
            timing,
            scheduler: Scheduler::new(),
            run: None,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    /// True while anything is still scheduled.
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Animate a chord shape, replacing whatever was running. `cue` comes back
    /// from [`tick`](Self::tick) exactly once, when the strum completes.
    ///
    /// Empty `positions` do nothing at all.
    pub fn trigger_chord_animation(&mut self, positions: &[FretPosition], cue: C, now: Instant) {
        if positions.is_empty() {
            return;
        }
        self.cancel();

        let strummed: StringSet = positions
            .iter()
            .filter(|p| p.fret >= 0)
            .map(|p| usize::from(p.string))
            .collect();

        self.state.phase = Phase::Fingers;
        self.state.finger_progress = 0.0;
        self.state.strum_progress = 0.0;
        self.state.vibrating_strings.clear();

        self.run = Some(Run {
            strummed,
            cue: Some(cue),
            phase_start: now,
            pick: None,
        });
        self.scheduler.request_frame(Step::FingerFrame);
        debug!(strings = strummed.len(), "chord animation started");
    }

    /// Ring `strings` without the finger and strum animation.
    pub fn trigger_string_vibration(&mut self, strings: StringSet, now: Instant) {
        self.cancel();
        self.state.phase = Phase::Ringing;
        self.state.vibrating_strings = strings;
        self.scheduler
            .set_timeout(now, self.timing.vibration, Step::EndRinging);
    }

    /// Leaves every other field alone.
    pub fn set_current_scale_note(&mut self, index: Option<usize>) {
        self.state.current_scale_note = index;
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.state = PlaybackState::default();
    }

    /// Advance to `now`. Returns the cue of a run whose strum just completed.
    pub fn tick(&mut self, now: Instant) -> Option<C> {
        let tick = self.scheduler.begin(now);
        let mut cue = None;

        while let Some(Fired { action, at, .. }) = self.scheduler.next_due(&tick) {
            match action {
                Step::FingerFrame => self.finger_frame(at),
                Step::BeginStrum => self.begin_strum(at),
                Step::StrumFrame => {
                    if let Some(done) = self.strum_frame(at) {
                        cue = done;
                    }
                }
                Step::EndRinging => self.end_ringing(),
            }
        }
        cue
    }

    fn finger_frame(&mut self, now: Instant) {
        let Some(run) = self.run.as_ref() else {
            return;
        };
        let progress = progress(now, run.phase_start, self.timing.finger_press);
        self.state.finger_progress = progress;

        if progress < 1.0 {
            self.scheduler.request_frame(Step::FingerFrame);
        } else {
            self.scheduler
                .set_timeout(now, self.timing.pre_strum, Step::BeginStrum);
        }
    }

    fn begin_strum(&mut self, at: Instant) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        run.phase_start = at;
        run.pick = None;

        self.state.phase = Phase::Strum;
        self.state.strum_progress = 0.0;
        self.scheduler.request_frame(Step::StrumFrame);
    }

    /// `Some(cue)` once the sweep has completed.
    fn strum_frame(&mut self, now: Instant) -> Option<Option<C>> {
        let run = self.run.as_mut()?;
        let progress = progress(now, run.phase_start, self.timing.strum);
        self.state.strum_progress = progress;

        let reached = strum_position(progress);
        let from = run.pick.map_or(0, |pick| pick + 1);
        for string in from..=reached {
            if run.strummed.contains(string) {
                self.state.vibrating_strings.insert(string);
            }
        }
        run.pick = Some(reached);

        if progress < 1.0 {
            self.scheduler.request_frame(Step::StrumFrame);
            return None;
        }

        let cue = run.cue.take();
        self.state.phase = Phase::Ringing;
        self.state.vibrating_strings = run.strummed;
        self.scheduler
            .set_timeout(now, self.timing.vibration, Step::EndRinging);
        debug!("strum complete");
        Some(cue)
    }

    fn end_ringing(&mut self) {
        self.state.phase = Phase::Idle;
        self.state.vibrating_strings.clear();
        self.run = None;
    }

    fn cancel(&mut self) {
        if !self.scheduler.is_idle() {
            debug!(pending = self.scheduler.pending(), "animation cancelled");
        }
        self.scheduler.cancel_all();
        self.run = None;
    }
}

fn progress(now: Instant, start: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}
