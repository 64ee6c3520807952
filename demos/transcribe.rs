use std::path::PathBuf;
use std::time::Instant;

use whisper_bench::engines::whisper_cpp::{WhisperCppEngine, WhisperVariant};
use whisper_bench::{EngineConfig, Language, TranscriptionEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // Weights live in models/; fetch them with whisper.cpp's
    // download-ggml-model.sh script.
    let config = EngineConfig::new("models");
    let wav_path = PathBuf::from("samples/jfk.wav");

    let mut engine = WhisperCppEngine::new(WhisperVariant::Base, Language::En, &config)?;
    println!("Using {}", engine.name());

    println!("Transcribing file: {:?}", wav_path);
    let transcribe_start = Instant::now();
    let text = engine.transcribe(&wav_path)?;
    let transcribe_duration = transcribe_start.elapsed();
    println!("Transcription completed in {:.2?}", transcribe_duration);

    println!("Transcription result:");
    println!("{}", text);

    let rtf = engine.process_secs() / engine.audio_secs();
    println!("Real-time factor: {:.3}", rtf);

    // A second pass is served from the side-car cache, so only the audio
    // counter moves
    let _ = engine.transcribe(&wav_path)?;
    println!(
        "Counters after a cached re-run: audio {:.2}s, processing {:.2}s",
        engine.audio_secs(),
        engine.process_secs()
    );

    engine.unload();

    Ok(())
}
