// Purpose: string voices and the audio-side bank
// This layer sits above graph nodes and runs on the audio thread

pub mod bank;
pub mod factory;
pub mod message;
pub mod voice;

pub use bank::StringBank;
pub use factory::VoiceFactory;
pub use message::{MessageReceiver, SequenceId, SynthMessage};
pub use voice::{StringVoice, VoiceState};
