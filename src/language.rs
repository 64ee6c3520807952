//! Languages covered by the published benchmark corpora.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::EngineError;

/// Benchmark language. The two Portuguese locales are kept apart because the
/// Common Voice corpora differ, even though whisper.cpp treats both as `pt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    En,
    De,
    Es,
    Fr,
    It,
    PtBr,
    PtPt,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::De,
        Language::Es,
        Language::Fr,
        Language::It,
        Language::PtBr,
        Language::PtPt,
    ];

    /// Code handed to `whisper-cli --language`.
    pub fn whisper_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
            Language::PtBr | Language::PtPt => "pt",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
            Language::PtBr => "pt-br",
            Language::PtPt => "pt-pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "it" => Ok(Language::It),
            "pt-br" => Ok(Language::PtBr),
            "pt-pt" => Ok(Language::PtPt),
            _ => Err(EngineError::UnknownLanguage(s.to_string())),
        }
    }
}
