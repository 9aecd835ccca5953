use crate::{
    dsp::string::{PluckParams, PluckedString},
    graph::node::{GraphNode, RenderCtx},
};

/// Plucked string source. `note_on` plucks at the context frequency; the
/// string then rings down on its own, so `note_off` is left to whatever
/// envelope follows it in the chain.
pub struct StringNode {
    string: PluckedString,
}

impl StringNode {
    /// The delay line is sized for `sample_rate` up front so rendering never
    /// allocates.
    pub fn new(sample_rate: f32, params: PluckParams) -> Self {
        Self {
            string: PluckedString::new(sample_rate, params),
        }
    }
}

impl GraphNode for StringNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        self.string.render(out);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.string.pluck(ctx.frequency);
    }

    fn is_active(&self) -> bool {
        self.string.is_ringing()
    }
}
