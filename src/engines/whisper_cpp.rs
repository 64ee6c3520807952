//! whisper.cpp speech recognition engine driven through the `whisper-cli` binary.
//!
//! Each model size released for whisper.cpp is a [`WhisperVariant`]. The
//! engine shells out to `whisper-cli` once per file and keeps a side-car
//! transcript cache next to the audio, so re-running a benchmark never pays
//! for inference twice. Cached reads still count toward audio seconds but
//! never toward processing seconds, which keeps real-time factors honest
//! across interrupted runs.
//!
//! # Requirements
//!
//! - The `whisper-cli` binary from whisper.cpp, on `PATH` or configured explicitly
//! - GGML model weights named as released (`ggml-tiny.bin`, `ggml-large-v3.bin`, ...)
//! - Audio resampled to 16 kHz WAV
//!
//! # Examples
//!
//! ```rust,no_run
//! use whisper_bench::{EngineConfig, Language, TranscriptionEngine};
//! use whisper_bench::engines::whisper_cpp::{WhisperCppEngine, WhisperVariant};
//! use std::path::Path;
//!
//! let config = EngineConfig::new("models");
//! let mut engine = WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &config)?;
//! let text = engine.transcribe(Path::new("audio.wav"))?;
//! println!("{}", text);
//! # Ok::<(), whisper_bench::EngineError>(())
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;
use std::time::Instant;

use log::{debug, info, warn};

use crate::audio::{self, SAMPLE_RATE};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::language::Language;
use crate::TranscriptionEngine;

/// whisper.cpp model size.
///
/// The first four sizes have English-only weights that are picked
/// automatically when the benchmark language is English. The large sizes
/// ship multilingual weights only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhisperVariant {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
    LargeV2,
    LargeV3,
    LargeV3Turbo,
}

impl WhisperVariant {
    pub const ALL: [WhisperVariant; 8] = [
        WhisperVariant::Tiny,
        WhisperVariant::Base,
        WhisperVariant::Small,
        WhisperVariant::Medium,
        WhisperVariant::Large,
        WhisperVariant::LargeV2,
        WhisperVariant::LargeV3,
        WhisperVariant::LargeV3Turbo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WhisperVariant::Tiny => "tiny",
            WhisperVariant::Base => "base",
            WhisperVariant::Small => "small",
            WhisperVariant::Medium => "medium",
            WhisperVariant::Large => "large",
            WhisperVariant::LargeV2 => "large-v2",
            WhisperVariant::LargeV3 => "large-v3",
            WhisperVariant::LargeV3Turbo => "large-v3-turbo",
        }
    }

    /// Weight file name as published in the whisper.cpp model releases.
    pub fn weight_filename(&self, language: Language) -> &'static str {
        match (self, language) {
            (WhisperVariant::Tiny, Language::En) => "ggml-tiny.en.bin",
            (WhisperVariant::Tiny, _) => "ggml-tiny.bin",
            (WhisperVariant::Base, Language::En) => "ggml-base.en.bin",
            (WhisperVariant::Base, _) => "ggml-base.bin",
            (WhisperVariant::Small, Language::En) => "ggml-small.en.bin",
            (WhisperVariant::Small, _) => "ggml-small.bin",
            (WhisperVariant::Medium, Language::En) => "ggml-medium.en.bin",
            (WhisperVariant::Medium, _) => "ggml-medium.bin",
            (WhisperVariant::Large, _) => "ggml-large-v1.bin",
            (WhisperVariant::LargeV2, _) => "ggml-large-v2.bin",
            (WhisperVariant::LargeV3, _) => "ggml-large-v3.bin",
            (WhisperVariant::LargeV3Turbo, _) => "ggml-large-v3-turbo.bin",
        }
    }

    /// Side-car cache extension. One per variant, so transcripts from
    /// different model sizes never collide on the same audio file.
    pub fn cache_extension(&self) -> &'static str {
        match self {
            WhisperVariant::Tiny => "wspt",
            WhisperVariant::Base => "wspb",
            WhisperVariant::Small => "wsps",
            WhisperVariant::Medium => "wspm",
            WhisperVariant::Large => "wspl",
            WhisperVariant::LargeV2 => "wspl2",
            WhisperVariant::LargeV3 => "wspl3",
            WhisperVariant::LargeV3Turbo => "wspl3t",
        }
    }

    /// Name used in printed reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            WhisperVariant::Tiny => "Whisper Tiny",
            WhisperVariant::Base => "Whisper Base",
            WhisperVariant::Small => "Whisper Small",
            WhisperVariant::Medium => "Whisper Medium",
            WhisperVariant::Large => "Whisper Large-v1",
            WhisperVariant::LargeV2 => "Whisper Large-v2",
            WhisperVariant::LargeV3 => "Whisper Large-v3",
            WhisperVariant::LargeV3Turbo => "Whisper Large-v3-turbo",
        }
    }
}

impl fmt::Display for WhisperVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WhisperVariant {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" => Ok(WhisperVariant::Tiny),
            "base" => Ok(WhisperVariant::Base),
            "small" => Ok(WhisperVariant::Small),
            "medium" => Ok(WhisperVariant::Medium),
            "large" | "large-v1" => Ok(WhisperVariant::Large),
            "large-v2" => Ok(WhisperVariant::LargeV2),
            "large-v3" => Ok(WhisperVariant::LargeV3),
            "large-v3-turbo" => Ok(WhisperVariant::LargeV3Turbo),
            _ => Err(EngineError::UnknownVariant(s.to_string())),
        }
    }
}

/// One resolved `whisper-cli` invocation target: a binary, a weight file and
/// a language code.
#[derive(Debug)]
struct WhisperCli {
    binary: PathBuf,
    weights: PathBuf,
    language: &'static str,
}

impl WhisperCli {
    fn new(config: &EngineConfig, variant: WhisperVariant, language: Language) -> Result<Self> {
        let weights = config.model_dir.join(variant.weight_filename(language));
        if !weights.exists() {
            return Err(EngineError::ModelNotFound(weights));
        }

        Ok(Self {
            binary: config.binary.clone(),
            weights,
            language: language.whisper_code(),
        })
    }

    /// Unique output base per invocation so concurrent runs never clobber
    /// each other's transcript files.
    fn output_base(&self, audio_path: &Path) -> PathBuf {
        let stem = audio_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("transcription");
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}-{}", stem, nanos))
    }

    fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let output_base = self.output_base(audio_path);

        debug!(
            "Running {} on {} (model: {})",
            self.binary.display(),
            audio_path.display(),
            self.weights.display()
        );

        let output = Command::new(&self.binary)
            .arg("--model")
            .arg(&self.weights)
            .arg("--language")
            .arg(self.language)
            .arg("--output-file")
            .arg(&output_base)
            .arg("--no-timestamps")
            .arg("--output-txt")
            .arg(audio_path)
            .output()?;

        if !output.status.success() {
            return Err(EngineError::ToolFailure {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        // whisper-cli appends ".txt" to the output base verbatim, so extend
        // the base the same way; with_extension would truncate a dotted stem.
        let mut transcript_path = output_base.into_os_string();
        transcript_path.push(".txt");
        let transcript_path = PathBuf::from(transcript_path);
        let text = fs::read_to_string(&transcript_path)?;
        if let Err(err) = fs::remove_file(&transcript_path) {
            warn!("Failed to remove {}: {}", transcript_path.display(), err);
        }

        Ok(text.trim().to_string())
    }
}

/// whisper.cpp transcription engine with side-car caching and time accounting.
///
/// Every call adds the clip's duration to the audio counter. Only calls that
/// actually reach `whisper-cli` add wall-clock time to the processing
/// counter, so `process_secs / audio_secs` stays a valid real-time factor
/// even when most of a run is served from cache.
#[derive(Debug)]
pub struct WhisperCppEngine {
    cli: WhisperCli,
    variant: WhisperVariant,
    audio_secs: f64,
    process_secs: f64,
}

impl WhisperCppEngine {
    /// Create an engine for one model size.
    ///
    /// Fails if the weight file for `variant` and `language` does not exist
    /// under the configured model directory.
    pub fn new(
        variant: WhisperVariant,
        language: Language,
        config: &EngineConfig,
    ) -> Result<Self> {
        let cli = WhisperCli::new(config, variant, language)?;

        Ok(Self {
            cli,
            variant,
            audio_secs: 0.0,
            process_secs: 0.0,
        })
    }

    fn cache_path(&self, audio_path: &Path) -> PathBuf {
        audio_path.with_extension(self.variant.cache_extension())
    }
}

impl TranscriptionEngine for WhisperCppEngine {
    fn transcribe(&mut self, audio_path: &Path) -> Result<String> {
        let info = audio::probe(audio_path)?;
        if info.sample_rate != SAMPLE_RATE {
            return Err(EngineError::SampleRate {
                path: audio_path.to_path_buf(),
                expected: SAMPLE_RATE,
                found: info.sample_rate,
            });
        }
        self.audio_secs += info.duration_secs();

        let cache_path = self.cache_path(audio_path);
        if cache_path.exists() {
            debug!("Cache hit: {}", cache_path.display());
            return Ok(fs::read_to_string(&cache_path)?);
        }

        let start = Instant::now();
        let text = self.cli.transcribe(audio_path)?;
        let elapsed = start.elapsed().as_secs_f64();
        self.process_secs += elapsed;

        info!(
            "Transcribed {} in {:.2}s ({} chars)",
            audio_path.display(),
            elapsed,
            text.len()
        );

        fs::write(&cache_path, &text)?;

        Ok(text)
    }

    fn audio_secs(&self) -> f64 {
        self.audio_secs
    }

    fn process_secs(&self) -> f64 {
        self.process_secs
    }

    fn name(&self) -> &'static str {
        self.variant.display_name()
    }
}
