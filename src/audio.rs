//! WAV probing helpers shared by the engines and the CLI.

use std::path::Path;

use crate::error::Result;

/// Sample rate every benchmarked corpus is resampled to before a run.
pub const SAMPLE_RATE: u32 = 16000;

/// Header facts pulled from a WAV file without decoding any samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    pub sample_rate: u32,
    /// Frame count per channel, as reported by the header.
    pub frames: u32,
}

impl WavInfo {
    pub fn duration_secs(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }
}

/// Reads the WAV header of `path`.
pub fn probe(path: &Path) -> Result<WavInfo> {
    let reader = hound::WavReader::open(path)?;
    let sample_rate = reader.spec().sample_rate;
    Ok(WavInfo {
        sample_rate,
        frames: reader.duration(),
    })
}
