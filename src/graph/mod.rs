//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with what instrument design
//! needs: note events and block-based rendering. The `extensions` module adds
//! fluent helpers so a string patch reads as a chain.

/// Multiply two signals together (amplitude control).
pub mod amplify;
/// Envelope generator node exposing ADSR state.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.through()`).
pub mod extensions;
/// State-variable filter node.
pub mod filter;
/// Core traits shared by all graph nodes.
pub mod node;
/// Plucked-string source node.
pub mod string;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, RenderCtx};
