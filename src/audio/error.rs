use thiserror::Error;

/// Failures at the audio output boundary. Nothing above the output ever
/// fails: the engine turns these into "nothing happens".
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available")]
    NoOutputDevice,

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("audio stream error: {0}")]
    Stream(String),

    #[error("command queue to the audio thread is full")]
    QueueFull,

    #[error("audio output is closed")]
    AlreadyClosed,
}
