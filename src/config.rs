//! Engine configuration resolved once at program entry.

use std::env;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// Environment variables checked for the model directory, in priority order.
pub const MODEL_DIR_VARS: [&str; 4] = ["MODEL_PATH", "MODELPATH", "MODEL_DIR", "MODELDIR"];

/// Transcription tool invoked when it is not overridden, resolved via `PATH`.
pub const DEFAULT_BINARY: &str = "whisper-cli";

/// Where to find model weights and which binary runs them.
///
/// Built explicitly or from the environment at startup; engines never read
/// environment variables themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub model_dir: PathBuf,
    pub binary: PathBuf,
}

impl EngineConfig {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            binary: PathBuf::from(DEFAULT_BINARY),
        }
    }

    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Scans [`MODEL_DIR_VARS`] and takes the first variable that is set to a
    /// non-empty value.
    pub fn from_env() -> Result<Self> {
        MODEL_DIR_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|dir| EngineConfig::new(dir))
            .ok_or(EngineError::ModelDirNotSet)
    }
}
