use crate::model::{
    CriterionKind, CriterionScore, EvaluationMeta, EvaluationResult, OVERALL_MAX_SCORE,
    criterion_order, round_to,
};
use crate::rubric::Rubric;
use crate::scoring;
use crate::text::TranscriptView;

/// Scores a transcript against the built-in introduction rubric.
///
/// Total over its input: empty text and missing or non-positive durations
/// degrade to each criterion's fallback instead of failing.
pub fn evaluate_transcript(transcript: &str, duration_seconds: Option<f64>) -> EvaluationResult {
    evaluate_with_rubric(transcript, duration_seconds, Rubric::intro_v1())
}

pub fn evaluate_with_rubric(
    transcript: &str,
    duration_seconds: Option<f64>,
    rubric: &Rubric,
) -> EvaluationResult {
    let view = TranscriptView::new(transcript.trim());

    let criteria: Vec<CriterionScore> = criterion_order()
        .iter()
        .map(|&kind| run_criterion(kind, &view, duration_seconds, rubric))
        .collect();

    let raw_total: f64 = criteria.iter().map(|c| c.score).sum();
    let raw_max: f64 = criteria
        .iter()
        .filter(|c| c.applicable)
        .map(|c| c.max_score)
        .sum();
    let overall_score = overall_percentage(raw_total, raw_max);

    tracing::debug!(
        word_count = view.word_count(),
        raw_total,
        raw_max,
        overall_score,
        "transcript evaluated"
    );

    EvaluationResult {
        overall_score,
        max_score: OVERALL_MAX_SCORE,
        criteria,
        meta: EvaluationMeta {
            word_count: view.word_count(),
            duration_seconds,
            raw_total,
            raw_max,
        },
    }
}

/// 0 when nothing is applicable, otherwise the percentage rounded to 2 decimals.
pub fn overall_percentage(raw_total: f64, raw_max: f64) -> f64 {
    if raw_max == 0.0 {
        return 0.0;
    }
    round_to(raw_total / raw_max * OVERALL_MAX_SCORE, 2)
}

fn run_criterion(
    kind: CriterionKind,
    view: &TranscriptView,
    duration_seconds: Option<f64>,
    rubric: &Rubric,
) -> CriterionScore {
    match kind {
        CriterionKind::Salutation => scoring::score_salutation(&view.lowered, &rubric.salutation),
        CriterionKind::MustHaveKeywords => {
            scoring::score_must_have(&view.lowered, &rubric.must_have)
        }
        CriterionKind::GoodToHaveKeywords => {
            scoring::score_good_to_have(&view.lowered, &rubric.good_to_have)
        }
        CriterionKind::Flow => scoring::score_flow(&view.lowered, &rubric.flow),
        CriterionKind::SpeechRate => {
            scoring::score_speech_rate(view.word_count(), duration_seconds, &rubric.speech_rate)
        }
        CriterionKind::Vocabulary => scoring::score_vocabulary(&view.tokens, &rubric.vocabulary),
        CriterionKind::Clarity => scoring::score_clarity(&view.tokens, &rubric.clarity),
        CriterionKind::Engagement => scoring::score_engagement(&view.tokens, &rubric.engagement),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
