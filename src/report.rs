//! Text reports over the published benchmark tables.
//!
//! Each chart ranks the model sizes by their mean error rate over every
//! corpus a table covers, best first, and draws a proportional bar per row.

use serde::Serialize;

use crate::engines::whisper_cpp::WhisperVariant;
use crate::results::{ErrorRate, RTF_TED_LIUM};

const BAR_WIDTH: usize = 40;
const RULE_WIDTH: usize = 66;

/// Mean error rate per model size, rounded to one decimal and sorted
/// ascending.
pub fn mean_by_variant(rates: &[ErrorRate]) -> Vec<(WhisperVariant, f64)> {
    let mut means: Vec<(WhisperVariant, f64)> = WhisperVariant::ALL
        .iter()
        .filter_map(|&variant| {
            let scores: Vec<f64> = rates
                .iter()
                .filter(|entry| entry.0 == variant)
                .map(|entry| entry.2)
                .collect();
            if scores.is_empty() {
                return None;
            }
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            // Means landing on a .x5 boundary must round up to match the
            // published figures, so nudge before rounding.
            Some((variant, ((mean + 1e-9) * 10.0).round() / 10.0))
        })
        .collect();
    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    means
}

/// Core-hours needed to process 100 hours of audio on a single core.
pub fn core_hours(rtf: f64) -> f64 {
    (rtf * 100.0 * 10.0).round() / 10.0
}

/// Real-time factor of a finished run. A run with zero seconds of audio
/// reports a factor of 0 instead of dividing by zero.
pub fn rtf(process_secs: f64, audio_secs: f64) -> f64 {
    if audio_secs > 0.0 {
        process_secs / audio_secs
    } else {
        0.0
    }
}

fn bar(value: f64, max: f64) -> String {
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.max(1))
}

/// Bar chart of mean error rates, one row per model size, best first.
pub fn error_rate_chart(title: &str, rates: &[ErrorRate]) -> String {
    let means = mean_by_variant(rates);
    let max = means.last().map(|(_, mean)| *mean).unwrap_or(1.0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for (variant, mean) in &means {
        out.push_str(&format!(
            "{:<24} {:>5.1}%  {}\n",
            variant.display_name(),
            mean,
            bar(*mean, max)
        ));
    }
    out
}

/// Bar chart of core-hours per 100 hours of audio, from the TED-LIUM
/// real-time factors.
pub fn core_hours_chart() -> String {
    let max = RTF_TED_LIUM
        .iter()
        .map(|(_, rtf)| core_hours(*rtf))
        .fold(0.0f64, f64::max);

    let mut out = String::new();
    out.push_str("Core-hours to process 100 hours of audio (lower is better)\n");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for (variant, rtf) in RTF_TED_LIUM {
        let hours = core_hours(*rtf);
        out.push_str(&format!(
            "{:<24} {:>6.1}  {}\n",
            variant.display_name(),
            hours,
            bar(hours, max)
        ));
    }
    out
}

#[derive(Debug, Serialize)]
pub struct ErrorRateRow {
    pub engine: &'static str,
    pub mean_pct: f64,
}

pub fn error_rate_rows(rates: &[ErrorRate]) -> Vec<ErrorRateRow> {
    mean_by_variant(rates)
        .into_iter()
        .map(|(variant, mean)| ErrorRateRow {
            engine: variant.display_name(),
            mean_pct: mean,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CoreHoursRow {
    pub engine: &'static str,
    pub core_hours: f64,
}

pub fn core_hours_rows() -> Vec<CoreHoursRow> {
    RTF_TED_LIUM
        .iter()
        .map(|(variant, rtf)| CoreHoursRow {
            engine: variant.display_name(),
            core_hours: core_hours(*rtf),
        })
        .collect()
}
