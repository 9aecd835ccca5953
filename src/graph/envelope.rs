use crate::{
    dsp::envelope::Envelope,
    graph::node::{GraphNode, RenderCtx},
};

/// ADSR envelope as a graph node. Renders the envelope level (0.0 - 1.0),
/// so it is normally used as the modulator of an `.amplify()`.
pub struct EnvNode {
    env: Envelope,
}

impl EnvNode {
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            env: Envelope::adsr(attack, decay, sustain, release),
        }
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.env.render(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.env.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.env.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.env.is_active()
    }
}
