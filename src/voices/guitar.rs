//! Steel-string guitar voice.
//!
//! A Karplus-Strong string does the heavy lifting: the pluck excites a
//! delay line tuned to the note and the loop filter mellows the tone as it
//! rings.
//!
//! # How It Works
//!
//! 1. Plucked string (noise burst into a tuned, damped delay loop)
//! 2. High-pass at 30 Hz removes the DC offset the noise burst leaves behind
//! 3. Gate envelope: instant attack, full sustain while the note is held,
//!    short release so a note ends without a click
//!
//! The string decays on its own, so the envelope only shortens notes whose
//! duration runs out before the string falls silent.

use crate::{
    dsp::string::PluckParams,
    graph::{envelope::EnvNode, extensions::NodeExt, filter::FilterNode, string::StringNode},
};

const DC_BLOCK_HZ: f32 = 30.0;
const RELEASE: f32 = 0.25;

/// Create one guitar string voice for the given output sample rate.
pub fn guitar_string(sample_rate: f32, params: PluckParams) -> impl crate::graph::GraphNode {
    StringNode::new(sample_rate, params)
        .through(FilterNode::highpass(DC_BLOCK_HZ))
        .amplify(EnvNode::adsr(0.001, 0.001, 1.0, RELEASE))
}
