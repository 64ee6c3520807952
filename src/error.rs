use std::path::PathBuf;
use std::process::ExitStatus;

/// Everything that can go wrong while building or driving an engine.
///
/// None of these conditions is retried; each one surfaces synchronously at
/// the failing call.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown engine variant `{0}`")]
    UnknownVariant(String),

    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("unknown dataset `{0}`")]
    UnknownDataset(String),

    #[error("model path environment variable not set: set one of MODEL_PATH, MODELPATH, MODEL_DIR, MODELDIR")]
    ModelDirNotSet,

    #[error("model weights not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("{}: expected {expected} Hz sample rate, found {found} Hz", .path.display())]
    SampleRate {
        path: PathBuf,
        expected: u32,
        found: u32,
    },

    #[error("whisper-cli exited with {status}: {stderr}")]
    ToolFailure { status: ExitStatus, stderr: String },

    #[error("wav probe failed: {0}")]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
