use crate::{
    dsp::filter::{FilterType, SVFilter},
    graph::node::{GraphNode, RenderCtx},
};

/// Filter as a graph node, processing its input in place.
///
/// A filter only shapes what flows into it, so it never keeps a voice alive
/// on its own: `is_active` is false and the source decides.
pub struct FilterNode {
    filter: SVFilter,
}

impl FilterNode {
    pub fn new(filter_type: FilterType, cutoff_hz: f32) -> Self {
        Self {
            filter: SVFilter::new(filter_type, cutoff_hz),
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::LowPass, cutoff_hz)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::HighPass, cutoff_hz)
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx.sample_rate);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.filter.reset();
    }

    fn is_active(&self) -> bool {
        false
    }
}
