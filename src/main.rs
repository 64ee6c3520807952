use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use whisper_bench::engines::whisper_cpp::WhisperVariant;
use whisper_bench::{create, report, results, EngineConfig, Language};

#[derive(Debug, Parser)]
#[command(name = "whisper-bench")]
#[command(about = "Benchmark whisper.cpp model sizes over a directory of audio clips.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transcribe every WAV file in a directory and report timing counters.
    Run {
        /// Model size to benchmark.
        #[arg(long)]
        engine: WhisperVariant,

        /// Benchmark language.
        #[arg(long, default_value = "en")]
        language: Language,

        /// Directory of 16 kHz WAV clips.
        #[arg(long)]
        audio_dir: PathBuf,

        /// Directory holding the ggml weight files. Falls back to the
        /// MODEL_PATH family of environment variables.
        #[arg(long)]
        model_dir: Option<PathBuf>,

        /// whisper-cli binary to invoke.
        #[arg(long)]
        binary: Option<PathBuf>,

        /// Write the run summary as JSON to this path.
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print the published result charts for a language.
    Report {
        #[arg(long, default_value = "en")]
        language: Language,

        /// Chart punctuation error rates instead of word error rates.
        #[arg(long)]
        punctuation: bool,

        /// Write the charted rows as JSON to this path.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct RunSummary {
    engine: String,
    language: Language,
    files: usize,
    audio_secs: f64,
    process_secs: f64,
    rtf: f64,
}

#[derive(Debug, Serialize)]
struct ReportSummary {
    language: Language,
    error_rates: Vec<report::ErrorRateRow>,
    core_hours: Vec<report::CoreHoursRow>,
}

fn resolve_config(model_dir: Option<PathBuf>, binary: Option<PathBuf>) -> Result<EngineConfig> {
    let config = match model_dir {
        Some(dir) => EngineConfig::new(dir),
        None => EngineConfig::from_env()
            .context("no --model-dir given and no model path variable set")?,
    };
    Ok(match binary {
        Some(binary) => config.with_binary(binary),
        None => config,
    })
}

fn run(
    variant: WhisperVariant,
    language: Language,
    audio_dir: &Path,
    config: &EngineConfig,
    json: Option<&Path>,
) -> Result<()> {
    let mut clips: Vec<PathBuf> = fs::read_dir(audio_dir)
        .with_context(|| format!("failed to read {}", audio_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "wav"))
        .collect();
    clips.sort();

    if clips.is_empty() {
        bail!("no wav files under {}", audio_dir.display());
    }

    let mut engine = create(variant, language, config)?;
    let name = engine.name();
    info!("Benchmarking {} on {} clips", name, clips.len());

    for (index, clip) in clips.iter().enumerate() {
        let text = engine
            .transcribe(clip)
            .with_context(|| format!("failed to transcribe {}", clip.display()))?;
        info!(
            "[{}/{}] {}: {} chars",
            index + 1,
            clips.len(),
            clip.display(),
            text.len()
        );
    }

    let audio_secs = engine.audio_secs();
    let process_secs = engine.process_secs();
    let rtf = report::rtf(process_secs, audio_secs);
    engine.unload();

    println!("{}", name);
    println!("  files:      {}", clips.len());
    println!("  audio:      {:.1}s", audio_secs);
    println!("  processing: {:.1}s", process_secs);
    println!("  rtf:        {:.3}", rtf);

    if let Some(path) = json {
        let summary = RunSummary {
            engine: name.to_string(),
            language,
            files: clips.len(),
            audio_secs,
            process_secs,
            rtf,
        };
        fs::write(path, serde_json::to_string_pretty(&summary)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}

fn print_report(language: Language, punctuation: bool, json: Option<&Path>) -> Result<()> {
    let (title, rates) = if punctuation {
        (
            "Punctuation Error Rate (lower is better)",
            results::per(language),
        )
    } else {
        ("Word Error Rate (lower is better)", results::wer(language))
    };

    print!("{}", report::error_rate_chart(title, rates));
    println!();
    print!("{}", report::core_hours_chart());

    if let Some(path) = json {
        let summary = ReportSummary {
            language,
            error_rates: report::error_rate_rows(rates),
            core_hours: report::core_hours_rows(),
        };
        fs::write(path, serde_json::to_string_pretty(&summary)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            engine,
            language,
            audio_dir,
            model_dir,
            binary,
            json,
        } => {
            let config = resolve_config(model_dir, binary)?;
            run(engine, language, &audio_dir, &config, json.as_deref())
        }
        Command::Report {
            language,
            punctuation,
            json,
        } => print_report(language, punctuation, json.as_deref()),
    }
}
