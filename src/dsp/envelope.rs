use crate::{graph::node::RenderCtx, MIN_TIME};

/*
ADSR Envelope
=============

A linear ADSR envelope generator. String voices use it as a gate: the pluck
itself supplies the natural decay, and the envelope fades the string out once
the note's duration has elapsed (the hand damping the string).

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release

Per-sample step for a stage:

    increment = target_change / (time_seconds * sample_rate)

note_off triggers Release from ANY stage. Release always starts from the
CURRENT level, not the sustain level, so releasing during attack cannot click.
Release snapshots its starting level and length at note_off time and then
interpolates linearly, which guarantees it lands exactly on 0.0.
*/

/// The current stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,    // Gate low, envelope inactive, level = 0
    Attack,  // Gate just went high, ramping up to 1.0
    Decay,   // Reached peak, ramping down to sustain level
    Sustain, // Holding at sustain level while gate is high
    Release, // Gate went low, ramping down to 0
}

pub struct Envelope {
    attack_time: f32,
    decay_time: f32,
    sustain_level: f32,
    release_time: f32,

    stage: EnvelopeState,
    level: f32,

    decay_start_level: f32,

    release_start_level: f32,
    release_total_samples: u32,
    release_elapsed_samples: u32,
}

impl Envelope {
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack_time: attack.max(MIN_TIME),
            decay_time: decay.max(MIN_TIME),
            sustain_level: sustain.clamp(0.0, 1.0),
            release_time: release.max(MIN_TIME),

            stage: EnvelopeState::Idle,
            level: 0.0,
            decay_start_level: 0.0,
            release_start_level: 0.0,
            release_total_samples: 1,
            release_elapsed_samples: 0,
        }
    }

    /// Gate high: restart the attack from zero so a retrigger sounds distinct.
    pub fn note_on(&mut self, _ctx: &RenderCtx) {
        self.level = 0.0;
        self.stage = EnvelopeState::Attack;
        self.release_elapsed_samples = 0;
    }

    /// Gate low: start the release phase from the current level.
    pub fn note_off(&mut self, ctx: &RenderCtx) {
        if self.stage == EnvelopeState::Idle {
            return;
        }

        self.release_start_level = self.level;
        self.release_total_samples = (self.release_time * ctx.sample_rate).round().max(1.0) as u32;
        self.release_elapsed_samples = 0;
        self.stage = EnvelopeState::Release;
    }

    /// Advance the envelope by one sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        match self.stage {
            EnvelopeState::Idle => {
                self.level = 0.0;
            }

            EnvelopeState::Attack => {
                self.level += 1.0 / (self.attack_time * ctx.sample_rate);

                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.decay_start_level = 1.0;
                    self.stage = EnvelopeState::Decay;
                }
            }

            EnvelopeState::Decay => {
                let target = self.sustain_level;
                let total_drop = self.decay_start_level - target;
                self.level -= total_drop / (self.decay_time * ctx.sample_rate);

                if self.level <= target {
                    self.level = target;
                    self.stage = EnvelopeState::Sustain;
                }
            }

            EnvelopeState::Sustain => {
                self.level = self.sustain_level;
            }

            EnvelopeState::Release => {
                let progress =
                    self.release_elapsed_samples as f32 / self.release_total_samples as f32;
                self.level = (self.release_start_level * (1.0 - progress)).max(0.0);

                self.release_elapsed_samples = self.release_elapsed_samples.saturating_add(1);

                if self.release_elapsed_samples >= self.release_total_samples {
                    self.level = 0.0;
                    self.stage = EnvelopeState::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        self.level
    }

    /// Render a block of envelope values into the buffer.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(ctx);
        }
    }

    /// Returns true if the envelope is producing output (not idle).
    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeState::Idle
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn ctx() -> RenderCtx {
        RenderCtx::from_freq(SAMPLE_RATE, 110.0)
    }

    /// The gate every guitar string uses.
    fn gate() -> Envelope {
        Envelope::adsr(0.001, 0.001, 1.0, 0.25)
    }

    fn render_samples(env: &mut Envelope, samples: usize) -> Vec<f32> {
        let ctx = ctx();
        (0..samples).map(|_| env.next_sample(&ctx)).collect()
    }

    #[test]
    fn gate_opens_almost_instantly() {
        let mut env = gate();
        env.note_on(&ctx());
        render_samples(&mut env, 3);

        assert_eq!(env.state(), EnvelopeState::Sustain);
        assert_eq!(env.level(), 1.0);
    }

    #[test]
    fn gate_holds_until_released() {
        let mut env = gate();
        env.note_on(&ctx());

        let held = render_samples(&mut env, 2_000);
        assert!(held[2..].iter().all(|&level| level == 1.0));
        assert!(env.is_active());
    }

    #[test]
    fn release_fades_over_a_quarter_second() {
        let mut env = gate();
        env.note_on(&ctx());
        render_samples(&mut env, 10);
        env.note_off(&ctx());

        let first_half = render_samples(&mut env, 125);
        assert_eq!(env.state(), EnvelopeState::Release);
        assert!((env.level() - 0.5).abs() < 0.01, "got {}", env.level());
        assert!(first_half.windows(2).all(|w| w[1] <= w[0]));

        render_samples(&mut env, 125);
        assert_eq!(env.state(), EnvelopeState::Idle);
        assert_eq!(env.level(), 0.0);
        assert!(!env.is_active());
    }

    #[test]
    fn release_during_attack_starts_from_the_current_level() {
        let mut env = Envelope::adsr(0.01, 0.001, 1.0, 0.25);
        env.note_on(&ctx());
        render_samples(&mut env, 5);
        let level = env.level();
        assert!(level < 1.0);

        env.note_off(&ctx());
        let tail = render_samples(&mut env, 300);
        assert!(tail.iter().all(|&l| l <= level));
        assert!(!env.is_active());
    }

    #[test]
    fn retrigger_restarts_from_zero() {
        let mut env = gate();
        env.note_on(&ctx());
        render_samples(&mut env, 10);
        env.note_off(&ctx());
        render_samples(&mut env, 50);

        env.note_on(&ctx());
        assert_eq!(env.state(), EnvelopeState::Attack);
        assert_eq!(env.level(), 0.0);
    }

    #[test]
    fn note_off_while_idle_is_ignored() {
        let mut env = gate();
        env.note_off(&ctx());
        assert_eq!(env.state(), EnvelopeState::Idle);
    }
}
