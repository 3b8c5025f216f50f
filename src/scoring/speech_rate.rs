use crate::model::{CriterionDetails, CriterionKind, CriterionScore, SpeechRateDetails, round_to};
use crate::rubric::BucketTable;

pub const MISSING_DURATION_NOTE: &str = "duration_seconds not provided";

/// Only an absent, zero or negative duration disables the criterion. An
/// infinite duration yields 0 wpm; NaN yields no bucket and scores 0.
pub fn usable_duration(duration_seconds: Option<f64>) -> Option<f64> {
    duration_seconds.filter(|d| d.is_nan() || *d > 0.0)
}

pub fn words_per_minute(word_count: usize, duration_seconds: f64) -> f64 {
    word_count as f64 / (duration_seconds / 60.0)
}

pub fn score_speech_rate(
    word_count: usize,
    duration_seconds: Option<f64>,
    table: &BucketTable,
) -> CriterionScore {
    let Some(duration) = usable_duration(duration_seconds) else {
        tracing::debug!(?duration_seconds, "speech rate not applicable");
        return CriterionScore::new(
            CriterionKind::SpeechRate,
            table.max_score,
            0.0,
            CriterionDetails::SpeechRate(SpeechRateDetails {
                wpm: None,
                bucket: None,
                note: Some(MISSING_DURATION_NOTE),
                not_applicable: true,
            }),
        )
        .not_applicable();
    };

    let wpm = words_per_minute(word_count, duration);
    let (score, bucket) = table.score(wpm);
    tracing::debug!(wpm, score, "speech rate scored");

    CriterionScore::new(
        CriterionKind::SpeechRate,
        table.max_score,
        score,
        CriterionDetails::SpeechRate(SpeechRateDetails {
            wpm: Some(round_to(wpm, 2)),
            bucket,
            note: None,
            not_applicable: false,
        }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/speech_rate.rs"]
mod tests;
