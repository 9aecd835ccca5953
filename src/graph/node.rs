/// Context passed to graph nodes during rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz)
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
}

impl RenderCtx {
    pub fn from_freq(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }
}

/// Core trait for audio processing graph nodes
///
/// Nodes can render audio and respond to musical events
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when a note starts
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_on(&mut self, _ctx: &RenderCtx) {}

    /// Triggered when a note is released
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_off(&mut self, _ctx: &RenderCtx) {}

    /// Check if this node is still producing sound
    ///
    /// Used by voice management to know when a voice can be freed.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        (**self).note_on(ctx)
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        (**self).note_off(ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
