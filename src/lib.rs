//! # whisper-bench
//!
//! A benchmarking harness for the whisper.cpp model sizes. Transcription runs
//! through the `whisper-cli` binary, one invocation per audio file, with a
//! side-car transcript cache and separate accounting for audio heard versus
//! wall-clock inference time.
//!
//! ## Features
//!
//! - **Every released size**: Tiny through Large-v3-turbo, picked by name
//! - **Side-car transcript cache**: interrupted runs resume without re-paying inference
//! - **Honest accounting**: cached files count as audio heard, never as processing time
//! - **Published results**: WER, PER and real-time factor tables for six languages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use whisper_bench::engines::whisper_cpp::WhisperVariant;
//! use whisper_bench::{create, EngineConfig, Language, TranscriptionEngine};
//!
//! let config = EngineConfig::from_env()?;
//! let mut engine = create(WhisperVariant::Base, Language::En, &config)?;
//!
//! let text = engine.transcribe(Path::new("clips/sample-0001.wav"))?;
//! println!("{}: {}", engine.name(), text);
//! println!("rtf: {:.3}", engine.process_secs() / engine.audio_secs());
//! # Ok::<(), whisper_bench::EngineError>(())
//! ```
//!
//! ## Audio Requirements
//!
//! Input audio files must be:
//! - WAV format
//! - 16 kHz sample rate
//!
//! When the configuration is built from the environment, the model directory
//! is taken from the first non-empty variable among `MODEL_PATH`,
//! `MODELPATH`, `MODEL_DIR` and `MODELDIR`.

pub mod audio;
pub mod config;
pub mod dataset;
pub mod engines;
mod error;
pub mod language;
pub mod report;
pub mod results;

use std::path::Path;

use engines::whisper_cpp::{WhisperCppEngine, WhisperVariant};

pub use config::EngineConfig;
pub use dataset::Dataset;
pub use error::{EngineError, Result};
pub use language::Language;

/// Common interface for benchmarked transcription engines.
///
/// An engine keeps two running counters. Audio seconds grow on every call,
/// cache hits included; processing seconds grow only when inference actually
/// ran. Their ratio is the engine's real-time factor over the run.
pub trait TranscriptionEngine {
    /// Transcribe one audio file, reading through the side-car cache.
    fn transcribe(&mut self, audio_path: &Path) -> Result<String>;

    /// Seconds of audio fed to the engine so far, cached files included.
    fn audio_secs(&self) -> f64;

    /// Wall-clock seconds spent on inference, cache hits excluded.
    fn process_secs(&self) -> f64;

    /// Name used in printed reports.
    fn name(&self) -> &'static str;

    /// Release anything held for the model. Engines that spawn a fresh
    /// process per file keep nothing resident, so the default is a no-op.
    fn unload(&mut self) {}
}

/// Create the engine for one model size.
pub fn create(
    variant: WhisperVariant,
    language: Language,
    config: &EngineConfig,
) -> Result<Box<dyn TranscriptionEngine>> {
    Ok(Box::new(WhisperCppEngine::new(variant, language, config)?))
}
