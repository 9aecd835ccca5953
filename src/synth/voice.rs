use crate::{
    graph::node::{GraphNode, RenderCtx},
    synth::message::SequenceId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,      // Silent, nothing to render
    Active,    // Ringing, release not reached yet
    Releasing, // Past its duration, envelope fading out
}

/// One string. Monophonic: starting a note cuts off whatever the string was
/// playing and restarts the patch from a fresh pluck.
pub struct StringVoice {
    state: VoiceState,
    frequency: f32,
    /// Sample (on the bank clock) at which the note is released.
    release_at: Option<u64>,
    sequence: Option<SequenceId>,
    sample_rate: f32,
    graph: Box<dyn GraphNode>,
}

impl StringVoice {
    pub fn new(graph: Box<dyn GraphNode>, sample_rate: f32) -> Self {
        Self {
            state: VoiceState::Free,
            frequency: 0.0,
            release_at: None,
            sequence: None,
            sample_rate,
            graph,
        }
    }

    pub fn start(&mut self, frequency: f32, release_at: u64, sequence: Option<SequenceId>) {
        self.frequency = frequency;
        self.release_at = Some(release_at);
        self.sequence = sequence;
        self.state = VoiceState::Active;

        let ctx = self.ctx();
        self.graph.note_on(&ctx);
    }

    pub fn release(&mut self) {
        if self.state == VoiceState::Active {
            self.state = VoiceState::Releasing;
            self.release_at = None;

            let ctx = self.ctx();
            self.graph.note_off(&ctx);
        }
    }

    /// Release if the note's duration has run out by `clock`.
    pub fn release_if_due(&mut self, clock: u64) {
        if matches!(self.release_at, Some(at) if at <= clock) {
            self.release();
        }
    }

    pub fn render(&mut self, out: &mut [f32]) {
        let ctx = self.ctx();
        self.graph.render_block(out, &ctx);

        // The string may decay to silence before its release time.
        if !self.graph.is_active() {
            self.free();
        }
    }

    pub fn free(&mut self) {
        self.state = VoiceState::Free;
        self.release_at = None;
        self.sequence = None;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, VoiceState::Active | VoiceState::Releasing)
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn release_at(&self) -> Option<u64> {
        self.release_at
    }

    pub fn sequence(&self) -> Option<SequenceId> {
        self.sequence
    }

    fn ctx(&self) -> RenderCtx {
        RenderCtx::from_freq(self.sample_rate, self.frequency)
    }
}
