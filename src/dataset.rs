//! Speech corpora the published numbers were measured on.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    CommonVoice,
    Fleurs,
    LibriSpeechTestClean,
    LibriSpeechTestOther,
    Mls,
    TedLium,
    VoxPopuli,
}

impl Dataset {
    pub const ALL: [Dataset; 7] = [
        Dataset::CommonVoice,
        Dataset::Fleurs,
        Dataset::LibriSpeechTestClean,
        Dataset::LibriSpeechTestOther,
        Dataset::Mls,
        Dataset::TedLium,
        Dataset::VoxPopuli,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::CommonVoice => "common-voice",
            Dataset::Fleurs => "fleurs",
            Dataset::LibriSpeechTestClean => "librispeech-test-clean",
            Dataset::LibriSpeechTestOther => "librispeech-test-other",
            Dataset::Mls => "mls",
            Dataset::TedLium => "ted-lium",
            Dataset::VoxPopuli => "voxpopuli",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "common-voice" => Ok(Dataset::CommonVoice),
            "fleurs" => Ok(Dataset::Fleurs),
            "librispeech-test-clean" => Ok(Dataset::LibriSpeechTestClean),
            "librispeech-test-other" => Ok(Dataset::LibriSpeechTestOther),
            "mls" => Ok(Dataset::Mls),
            "ted-lium" => Ok(Dataset::TedLium),
            "voxpopuli" => Ok(Dataset::VoxPopuli),
            _ => Err(EngineError::UnknownDataset(s.to_string())),
        }
    }
}
