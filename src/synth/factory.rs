use crate::graph::node::GraphNode;

/// Builds the patch for one string voice.
///
/// The bank calls the factory once per string at construction time, with the
/// output sample rate, so every buffer the patch needs is allocated before the
/// audio thread starts.
pub trait VoiceFactory {
    type Voice: GraphNode + 'static;

    fn create_voice(&self, sample_rate: f32) -> Self::Voice;
}

impl<F, T> VoiceFactory for F
where
    F: Fn(f32) -> T,
    T: GraphNode + 'static,
{
    type Voice = T;

    fn create_voice(&self, sample_rate: f32) -> Self::Voice {
        self(sample_rate)
    }
}
