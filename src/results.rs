//! Published benchmark numbers for the whisper.cpp model sizes.
//!
//! Accuracy was scored offline against corpus references; throughput was
//! measured on a single CPU core. The tables only cover the five sizes that
//! were run end to end, so the v2/v3 variants never appear here.

use crate::dataset::Dataset;
use crate::engines::whisper_cpp::WhisperVariant;
use crate::language::Language;

/// One measured data point: a model size scored on a corpus.
pub type ErrorRate = (WhisperVariant, Dataset, f64);

/// Real-time factor on TED-LIUM. 1.0 means transcription takes as long as
/// the audio itself.
pub const RTF_TED_LIUM: &[(WhisperVariant, f64)] = &[
    (WhisperVariant::Tiny, 0.158),
    (WhisperVariant::Base, 0.323),
    (WhisperVariant::Small, 0.988),
    (WhisperVariant::Medium, 1.522),
];

pub const WER_EN: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::CommonVoice, 24.42),
    (WhisperVariant::Tiny, Dataset::LibriSpeechTestClean, 5.88),
    (WhisperVariant::Tiny, Dataset::LibriSpeechTestOther, 13.76),
    (WhisperVariant::Tiny, Dataset::TedLium, 6.55),
    (WhisperVariant::Base, Dataset::CommonVoice, 17.93),
    (WhisperVariant::Base, Dataset::LibriSpeechTestClean, 4.26),
    (WhisperVariant::Base, Dataset::LibriSpeechTestOther, 10.36),
    (WhisperVariant::Base, Dataset::TedLium, 5.44),
    (WhisperVariant::Small, Dataset::CommonVoice, 12.70),
    (WhisperVariant::Small, Dataset::LibriSpeechTestClean, 3.31),
    (WhisperVariant::Small, Dataset::LibriSpeechTestOther, 7.20),
    (WhisperVariant::Small, Dataset::TedLium, 4.75),
    (WhisperVariant::Medium, Dataset::CommonVoice, 10.16),
    (WhisperVariant::Medium, Dataset::LibriSpeechTestClean, 3.27),
    (WhisperVariant::Medium, Dataset::LibriSpeechTestOther, 6.21),
    (WhisperVariant::Medium, Dataset::TedLium, 4.58),
    (WhisperVariant::Large, Dataset::CommonVoice, 8.98),
    (WhisperVariant::Large, Dataset::LibriSpeechTestClean, 3.67),
    (WhisperVariant::Large, Dataset::LibriSpeechTestOther, 5.36),
    (WhisperVariant::Large, Dataset::TedLium, 4.60),
];

pub const WER_FR: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::CommonVoice, 49.8),
    (WhisperVariant::Tiny, Dataset::Mls, 36.2),
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 32.1),
    (WhisperVariant::Base, Dataset::CommonVoice, 35.4),
    (WhisperVariant::Base, Dataset::Mls, 24.4),
    (WhisperVariant::Base, Dataset::VoxPopuli, 23.3),
    (WhisperVariant::Small, Dataset::CommonVoice, 19.2),
    (WhisperVariant::Small, Dataset::Mls, 13.5),
    (WhisperVariant::Small, Dataset::VoxPopuli, 15.3),
    (WhisperVariant::Medium, Dataset::CommonVoice, 13.1),
    (WhisperVariant::Medium, Dataset::Mls, 8.6),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 12.1),
    (WhisperVariant::Large, Dataset::CommonVoice, 9.3),
    (WhisperVariant::Large, Dataset::Mls, 4.6),
    (WhisperVariant::Large, Dataset::VoxPopuli, 10.9),
];

pub const WER_ES: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::CommonVoice, 33.3),
    (WhisperVariant::Tiny, Dataset::Mls, 20.6),
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 22.7),
    (WhisperVariant::Base, Dataset::CommonVoice, 20.2),
    (WhisperVariant::Base, Dataset::Mls, 13.0),
    (WhisperVariant::Base, Dataset::VoxPopuli, 15.3),
    (WhisperVariant::Small, Dataset::CommonVoice, 9.8),
    (WhisperVariant::Small, Dataset::Mls, 7.7),
    (WhisperVariant::Small, Dataset::VoxPopuli, 11.4),
    (WhisperVariant::Medium, Dataset::CommonVoice, 6.2),
    (WhisperVariant::Medium, Dataset::Mls, 4.8),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 9.7),
    (WhisperVariant::Large, Dataset::CommonVoice, 4.0),
    (WhisperVariant::Large, Dataset::Mls, 2.9),
    (WhisperVariant::Large, Dataset::VoxPopuli, 9.7),
];

pub const WER_DE: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::CommonVoice, 39.5),
    (WhisperVariant::Tiny, Dataset::Mls, 28.6),
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 33.0),
    (WhisperVariant::Base, Dataset::CommonVoice, 26.9),
    (WhisperVariant::Base, Dataset::Mls, 19.8),
    (WhisperVariant::Base, Dataset::VoxPopuli, 24.0),
    (WhisperVariant::Small, Dataset::CommonVoice, 13.8),
    (WhisperVariant::Small, Dataset::Mls, 11.2),
    (WhisperVariant::Small, Dataset::VoxPopuli, 16.2),
    (WhisperVariant::Medium, Dataset::CommonVoice, 8.3),
    (WhisperVariant::Medium, Dataset::Mls, 7.6),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 13.5),
    (WhisperVariant::Large, Dataset::CommonVoice, 5.3),
    (WhisperVariant::Large, Dataset::Mls, 4.4),
    (WhisperVariant::Large, Dataset::VoxPopuli, 12.5),
];

pub const WER_IT: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::CommonVoice, 48.1),
    (WhisperVariant::Tiny, Dataset::Mls, 43.3),
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 43.5),
    (WhisperVariant::Base, Dataset::CommonVoice, 32.3),
    (WhisperVariant::Base, Dataset::Mls, 31.6),
    (WhisperVariant::Base, Dataset::VoxPopuli, 31.6),
    (WhisperVariant::Small, Dataset::CommonVoice, 15.4),
    (WhisperVariant::Small, Dataset::Mls, 20.6),
    (WhisperVariant::Small, Dataset::VoxPopuli, 22.7),
    (WhisperVariant::Medium, Dataset::CommonVoice, 8.7),
    (WhisperVariant::Medium, Dataset::Mls, 14.9),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 19.3),
    (WhisperVariant::Large, Dataset::CommonVoice, 4.9),
    (WhisperVariant::Large, Dataset::Mls, 8.8),
    (WhisperVariant::Large, Dataset::VoxPopuli, 21.8),
];

pub const WER_PT: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::CommonVoice, 47.7),
    (WhisperVariant::Tiny, Dataset::Mls, 34.6),
    (WhisperVariant::Base, Dataset::CommonVoice, 31.2),
    (WhisperVariant::Base, Dataset::Mls, 22.7),
    (WhisperVariant::Small, Dataset::CommonVoice, 15.6),
    (WhisperVariant::Small, Dataset::Mls, 13.0),
    (WhisperVariant::Medium, Dataset::CommonVoice, 9.6),
    (WhisperVariant::Medium, Dataset::Mls, 8.1),
    (WhisperVariant::Large, Dataset::CommonVoice, 5.9),
    (WhisperVariant::Large, Dataset::Mls, 5.4),
];

pub const PER_EN: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 24.7),
    (WhisperVariant::Tiny, Dataset::Fleurs, 15.4),
    (WhisperVariant::Tiny, Dataset::CommonVoice, 12.2),
    (WhisperVariant::Base, Dataset::VoxPopuli, 23.7),
    (WhisperVariant::Base, Dataset::Fleurs, 14.2),
    (WhisperVariant::Base, Dataset::CommonVoice, 9.7),
    (WhisperVariant::Small, Dataset::VoxPopuli, 22.5),
    (WhisperVariant::Small, Dataset::Fleurs, 12.2),
    (WhisperVariant::Small, Dataset::CommonVoice, 10.8),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 21.7),
    (WhisperVariant::Medium, Dataset::Fleurs, 10.2),
    (WhisperVariant::Medium, Dataset::CommonVoice, 10.4),
    (WhisperVariant::Large, Dataset::VoxPopuli, 21.4),
    (WhisperVariant::Large, Dataset::Fleurs, 11.1),
    (WhisperVariant::Large, Dataset::CommonVoice, 10.2),
];

pub const PER_FR: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 31.5),
    (WhisperVariant::Tiny, Dataset::Fleurs, 27.3),
    (WhisperVariant::Tiny, Dataset::CommonVoice, 15.0),
    (WhisperVariant::Base, Dataset::VoxPopuli, 26.8),
    (WhisperVariant::Base, Dataset::Fleurs, 18.5),
    (WhisperVariant::Base, Dataset::CommonVoice, 10.9),
    (WhisperVariant::Small, Dataset::VoxPopuli, 25.0),
    (WhisperVariant::Small, Dataset::Fleurs, 13.4),
    (WhisperVariant::Small, Dataset::CommonVoice, 10.2),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 22.8),
    (WhisperVariant::Medium, Dataset::Fleurs, 11.1),
    (WhisperVariant::Medium, Dataset::CommonVoice, 8.7),
    (WhisperVariant::Large, Dataset::VoxPopuli, 23.8),
    (WhisperVariant::Large, Dataset::Fleurs, 9.4),
    (WhisperVariant::Large, Dataset::CommonVoice, 10.8),
];

pub const PER_ES: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 33.3),
    (WhisperVariant::Tiny, Dataset::Fleurs, 17.6),
    (WhisperVariant::Tiny, Dataset::CommonVoice, 18.9),
    (WhisperVariant::Base, Dataset::VoxPopuli, 32.2),
    (WhisperVariant::Base, Dataset::Fleurs, 15.0),
    (WhisperVariant::Base, Dataset::CommonVoice, 16.9),
    (WhisperVariant::Small, Dataset::VoxPopuli, 29.8),
    (WhisperVariant::Small, Dataset::Fleurs, 12.1),
    (WhisperVariant::Small, Dataset::CommonVoice, 10.9),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 26.7),
    (WhisperVariant::Medium, Dataset::Fleurs, 15.1),
    (WhisperVariant::Medium, Dataset::CommonVoice, 14.4),
    (WhisperVariant::Large, Dataset::VoxPopuli, 26.4),
    (WhisperVariant::Large, Dataset::Fleurs, 9.2),
    (WhisperVariant::Large, Dataset::CommonVoice, 6.1),
];

pub const PER_DE: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 30.0),
    (WhisperVariant::Tiny, Dataset::Fleurs, 22.0),
    (WhisperVariant::Tiny, Dataset::CommonVoice, 9.3),
    (WhisperVariant::Base, Dataset::VoxPopuli, 25.6),
    (WhisperVariant::Base, Dataset::Fleurs, 14.9),
    (WhisperVariant::Base, Dataset::CommonVoice, 5.8),
    (WhisperVariant::Small, Dataset::VoxPopuli, 22.6),
    (WhisperVariant::Small, Dataset::Fleurs, 11.5),
    (WhisperVariant::Small, Dataset::CommonVoice, 3.7),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 21.3),
    (WhisperVariant::Medium, Dataset::Fleurs, 10.2),
    (WhisperVariant::Medium, Dataset::CommonVoice, 3.4),
    (WhisperVariant::Large, Dataset::VoxPopuli, 20.5),
    (WhisperVariant::Large, Dataset::Fleurs, 15.3),
    (WhisperVariant::Large, Dataset::CommonVoice, 6.5),
];

pub const PER_IT: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::VoxPopuli, 45.3),
    (WhisperVariant::Tiny, Dataset::Fleurs, 26.3),
    (WhisperVariant::Tiny, Dataset::CommonVoice, 27.4),
    (WhisperVariant::Base, Dataset::VoxPopuli, 45.7),
    (WhisperVariant::Base, Dataset::Fleurs, 18.2),
    (WhisperVariant::Base, Dataset::CommonVoice, 19.8),
    (WhisperVariant::Small, Dataset::VoxPopuli, 39.0),
    (WhisperVariant::Small, Dataset::Fleurs, 12.9),
    (WhisperVariant::Small, Dataset::CommonVoice, 10.8),
    (WhisperVariant::Medium, Dataset::VoxPopuli, 39.5),
    (WhisperVariant::Medium, Dataset::Fleurs, 12.5),
    (WhisperVariant::Medium, Dataset::CommonVoice, 15.0),
    (WhisperVariant::Large, Dataset::VoxPopuli, 36.4),
    (WhisperVariant::Large, Dataset::Fleurs, 12.2),
    (WhisperVariant::Large, Dataset::CommonVoice, 11.9),
];

pub const PER_PT: &[ErrorRate] = &[
    (WhisperVariant::Tiny, Dataset::Fleurs, 22.7),
    (WhisperVariant::Tiny, Dataset::CommonVoice, 22.2),
    (WhisperVariant::Base, Dataset::Fleurs, 16.9),
    (WhisperVariant::Base, Dataset::CommonVoice, 15.4),
    (WhisperVariant::Small, Dataset::Fleurs, 13.9),
    (WhisperVariant::Small, Dataset::CommonVoice, 11.6),
    (WhisperVariant::Medium, Dataset::Fleurs, 12.8),
    (WhisperVariant::Medium, Dataset::CommonVoice, 11.8),
    (WhisperVariant::Large, Dataset::Fleurs, 16.6),
    (WhisperVariant::Large, Dataset::CommonVoice, 9.2),
];

/// Word error rates for `language`. Both Portuguese locales were scored
/// against the same references.
pub fn wer(language: Language) -> &'static [ErrorRate] {
    match language {
        Language::En => WER_EN,
        Language::De => WER_DE,
        Language::Es => WER_ES,
        Language::Fr => WER_FR,
        Language::It => WER_IT,
        Language::PtBr | Language::PtPt => WER_PT,
    }
}

/// Punctuation error rates for `language`.
pub fn per(language: Language) -> &'static [ErrorRate] {
    match language {
        Language::En => PER_EN,
        Language::De => PER_DE,
        Language::Es => PER_ES,
        Language::Fr => PER_FR,
        Language::It => PER_IT,
        Language::PtBr | Language::PtPt => PER_PT,
    }
}
