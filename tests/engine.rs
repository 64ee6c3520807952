#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use once_cell::sync::Lazy;
use tempfile::TempDir;

use whisper_bench::engines::whisper_cpp::{WhisperCppEngine, WhisperVariant};
use whisper_bench::{EngineConfig, EngineError, Language, TranscriptionEngine};

/// Everything one test needs on disk: a model directory with fake weights,
/// a place for audio clips and a stand-in transcription tool that records
/// how it was called.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("models")).expect("create model dir");
        Self { dir }
    }

    fn model_dir(&self) -> PathBuf {
        self.dir.path().join("models")
    }

    fn add_weights(&self, filename: &str) {
        fs::write(self.model_dir().join(filename), b"ggml").expect("write weights");
    }

    fn config(&self, tool: &Path) -> EngineConfig {
        EngineConfig::new(self.model_dir()).with_binary(tool)
    }

    /// Writes a 16-bit mono WAV of silence.
    fn wav(&self, name: &str, sample_rate: u32, frames: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("create wav");
        for _ in 0..frames {
            writer.write_sample(0i16).expect("write sample");
        }
        writer.finalize().expect("finalize wav");
        path
    }

    /// Stand-in for whisper-cli: logs its arguments and writes `transcript`
    /// to the requested output file.
    fn stub_tool(&self, transcript: &str) -> PathBuf {
        let script = format!(
            "#!/bin/sh\n\
             dir=\"$(dirname \"$0\")\"\n\
             printf '%s\\n' \"$*\" >> \"$dir/calls.log\"\n\
             out=\"\"\n\
             while [ $# -gt 1 ]; do\n\
             \tif [ \"$1\" = \"--output-file\" ]; then out=\"$2\"; fi\n\
             \tshift\n\
             done\n\
             printf '%s\\n' '{transcript}' > \"$out.txt\"\n",
            transcript = transcript
        );
        self.write_tool(&script)
    }

    /// Stand-in that fails the way whisper-cli does on a broken model.
    fn failing_tool(&self, message: &str) -> PathBuf {
        let script = format!("#!/bin/sh\necho '{}' >&2\nexit 3\n", message);
        self.write_tool(&script)
    }

    fn write_tool(&self, script: &str) -> PathBuf {
        let path = self.dir.path().join("whisper-cli");
        fs::write(&path, script).expect("write tool");
        let mut perms = fs::metadata(&path).expect("tool metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod tool");
        path
    }

    fn calls(&self) -> Vec<String> {
        match fs::read_to_string(self.dir.path().join("calls.log")) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[test]
fn test_transcribes_through_the_tool() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    let tool = fixture.stub_tool("hello from the stub");
    let audio = fixture.wav("clip.wav", 16000, 8000);

    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &fixture.config(&tool))
            .expect("create engine");

    let text = engine.transcribe(&audio).expect("transcribe");
    assert_eq!(text, "hello from the stub");
    assert_eq!(fixture.calls().len(), 1);

    let cache = audio.with_extension("wspt");
    assert!(cache.exists(), "side-car cache should be written");
    assert_eq!(
        fs::read_to_string(&cache).expect("read cache"),
        "hello from the stub"
    );
}

#[test]
fn test_dotted_stems_transcribe_through_the_tool() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    let tool = fixture.stub_tool("split take one");
    let audio = fixture.wav("clip.part1.wav", 16000, 8000);

    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &fixture.config(&tool))
            .expect("create engine");

    let text = engine.transcribe(&audio).expect("transcribe");
    assert_eq!(text, "split take one");
    assert_eq!(fixture.calls().len(), 1);

    // Only the trailing extension swaps out for the cache tag.
    let cache = fixture.dir.path().join("clip.part1.wspt");
    assert!(cache.exists(), "side-car cache should be written");
    assert_eq!(
        fs::read_to_string(&cache).expect("read cache"),
        "split take one"
    );
}

#[test]
fn test_tool_receives_the_expected_arguments() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-small.bin");
    let tool = fixture.stub_tool("ciao");
    let audio = fixture.wav("clip.wav", 16000, 8000);

    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Small, Language::It, &fixture.config(&tool))
            .expect("create engine");
    engine.transcribe(&audio).expect("transcribe");

    let calls = fixture.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];

    let weights = fixture.model_dir().join("ggml-small.bin");
    assert!(call.starts_with(&format!("--model {}", weights.display())));
    assert!(call.contains("--language it"));
    assert!(call.contains("--output-file"));
    assert!(call.contains("--no-timestamps --output-txt"));
    assert!(call.ends_with(&format!(" {}", audio.display())));
}

#[test]
fn test_cache_hit_skips_the_tool() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-base.en.bin");
    let tool = fixture.stub_tool("cached once");
    let audio = fixture.wav("clip.wav", 16000, 8000);

    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Base, Language::En, &fixture.config(&tool))
            .expect("create engine");

    let first = engine.transcribe(&audio).expect("first pass");
    let process_after_first = engine.process_secs();
    assert!(process_after_first > 0.0);

    let second = engine.transcribe(&audio).expect("second pass");
    assert_eq!(first, second);
    assert_eq!(fixture.calls().len(), 1, "cache hit must not invoke the tool");

    // 8000 frames at 16 kHz is exactly half a second, twice over
    assert_eq!(engine.audio_secs(), 1.0);
    assert_eq!(engine.process_secs(), process_after_first);
}

#[test]
fn test_cache_is_read_verbatim_without_spawning() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    let audio = fixture.wav("clip.wav", 16000, 8000);
    fs::write(audio.with_extension("wspt"), "  spaced  \n").expect("seed cache");

    // A tool path that cannot run proves the hit never spawns anything
    let config = fixture.config(Path::new("/nonexistent/whisper-cli"));
    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &config).expect("create engine");

    let text = engine.transcribe(&audio).expect("cached transcribe");
    assert_eq!(text, "  spaced  \n");
    assert_eq!(engine.audio_secs(), 0.5);
    assert_eq!(engine.process_secs(), 0.0);
}

#[test]
fn test_wrong_sample_rate_is_rejected_before_counting() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    let tool = fixture.stub_tool("never used");
    let audio = fixture.wav("clip.wav", 44100, 4410);

    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &fixture.config(&tool))
            .expect("create engine");

    let err = engine.transcribe(&audio).unwrap_err();
    match err {
        EngineError::SampleRate {
            expected, found, ..
        } => {
            assert_eq!(expected, 16000);
            assert_eq!(found, 44100);
        }
        other => panic!("expected a sample rate error, got {:?}", other),
    }

    assert_eq!(engine.audio_secs(), 0.0);
    assert_eq!(fixture.calls().len(), 0);
}

#[test]
fn test_tool_failure_surfaces_stderr() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    let tool = fixture.failing_tool("model blew up");
    let audio = fixture.wav("clip.wav", 16000, 8000);

    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &fixture.config(&tool))
            .expect("create engine");

    let err = engine.transcribe(&audio).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("model blew up"), "got: {}", message);
    assert!(matches!(err, EngineError::ToolFailure { .. }));

    assert!(
        !audio.with_extension("wspt").exists(),
        "failed runs must not be cached"
    );
}

#[test]
fn test_variants_keep_separate_caches() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    fixture.add_weights("ggml-base.en.bin");
    let tool = fixture.stub_tool("same words");
    let audio = fixture.wav("clip.wav", 16000, 8000);
    let config = fixture.config(&tool);

    let mut tiny =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &config).expect("tiny engine");
    let mut base =
        WhisperCppEngine::new(WhisperVariant::Base, Language::En, &config).expect("base engine");

    tiny.transcribe(&audio).expect("tiny pass");
    base.transcribe(&audio).expect("base pass");

    assert!(audio.with_extension("wspt").exists());
    assert!(audio.with_extension("wspb").exists());
    assert_eq!(fixture.calls().len(), 2, "each variant pays once");
}

#[test]
fn test_cache_is_shared_across_instances_but_counters_are_not() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    let tool = fixture.stub_tool("warmed up");
    let audio = fixture.wav("clip.wav", 16000, 8000);
    let config = fixture.config(&tool);

    let mut first =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &config).expect("first engine");
    first.transcribe(&audio).expect("warm the cache");

    let mut second =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &config).expect("second engine");
    assert_eq!(second.audio_secs(), 0.0);
    assert_eq!(second.process_secs(), 0.0);

    second.transcribe(&audio).expect("cached pass");
    assert_eq!(fixture.calls().len(), 1, "second instance reads the cache");
    assert_eq!(second.audio_secs(), 0.5);
    assert_eq!(second.process_secs(), 0.0);
    assert_eq!(first.audio_secs(), 0.5);
}

#[test]
fn test_missing_tool_output_is_an_error() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-tiny.en.bin");
    // Exits cleanly but never writes the transcript file
    let tool = fixture.write_tool("#!/bin/sh\nexit 0\n");
    let audio = fixture.wav("clip.wav", 16000, 8000);

    let mut engine =
        WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &fixture.config(&tool))
            .expect("create engine");

    let err = engine.transcribe(&audio).unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}

#[test]
fn test_factory_builds_named_engines_with_zeroed_counters() {
    let fixture = Fixture::new();
    fixture.add_weights("ggml-medium.bin");
    let config = fixture.config(Path::new("/nonexistent/whisper-cli"));

    let engine = whisper_bench::create(WhisperVariant::Medium, Language::De, &config)
        .expect("create engine");
    assert_eq!(engine.name(), "Whisper Medium");
    assert_eq!(engine.audio_secs(), 0.0);
    assert_eq!(engine.process_secs(), 0.0);
}

// Spawn check for the real binary - tests below skip unless it is on PATH
static WHISPER_CLI_AVAILABLE: Lazy<bool> =
    Lazy::new(|| Command::new("whisper-cli").arg("--help").output().is_ok());

#[test]
fn test_real_binary_smoke() {
    if !*WHISPER_CLI_AVAILABLE {
        eprintln!("Skipping test: whisper-cli not on PATH");
        return;
    }
    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Skipping test: no model path variable set");
            return;
        }
    };
    let mut engine = match WhisperCppEngine::new(WhisperVariant::Tiny, Language::En, &config) {
        Ok(engine) => engine,
        Err(_) => {
            eprintln!("Skipping test: tiny English weights not available");
            return;
        }
    };

    let fixture = Fixture::new();
    let audio = fixture.wav("silence.wav", 16000, 16000);
    engine.transcribe(&audio).expect("transcribe silence");
    assert_eq!(engine.audio_secs(), 1.0);
}
