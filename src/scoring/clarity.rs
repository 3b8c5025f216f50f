use std::collections::HashMap;

use crate::model::{ClarityDetails, CriterionDetails, CriterionKind, CriterionScore, round_to};
use crate::rubric::FillerRule;

/// Phrase hits are non-overlapping substring counts over the space-joined
/// tokens; single-word hits are exact token matches.
pub fn count_fillers(tokens: &[String], rule: &FillerRule) -> usize {
    let joined = tokens.join(" ");
    let phrase_hits: usize = rule.phrases().map(|p| joined.matches(p).count()).sum();

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }
    let word_hits: usize = rule
        .words()
        .map(|w| freq.get(w).copied().unwrap_or(0))
        .sum();

    phrase_hits + word_hits
}

pub fn filler_rate(filler_count: usize, word_count: usize) -> f64 {
    filler_count as f64 * 100.0 / word_count.max(1) as f64
}

pub fn score_clarity(tokens: &[String], rule: &FillerRule) -> CriterionScore {
    let table = &rule.buckets;
    if tokens.is_empty() {
        return CriterionScore::new(
            CriterionKind::Clarity,
            table.max_score,
            0.0,
            CriterionDetails::Clarity(ClarityDetails {
                filler_count: 0,
                rate_per_100_words: 0.0,
                bucket: None,
            }),
        );
    }

    let filler_count = count_fillers(tokens, rule);
    let rate = filler_rate(filler_count, tokens.len());
    let (score, bucket) = table.score(rate);
    tracing::debug!(filler_count, rate, score, "clarity scored");

    CriterionScore::new(
        CriterionKind::Clarity,
        table.max_score,
        score,
        CriterionDetails::Clarity(ClarityDetails {
            filler_count,
            rate_per_100_words: round_to(rate, 2),
            bucket,
        }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/clarity.rs"]
mod tests;
