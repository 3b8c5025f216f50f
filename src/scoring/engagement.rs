use std::collections::HashSet;

use crate::model::{CriterionDetails, CriterionKind, CriterionScore, EngagementDetails, round_to};
use crate::rubric::EngagementRule;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentHits {
    pub positive: usize,
    pub negative: usize,
}

/// Counts distinct tokens, so repeating "happy" does not raise the index.
pub fn sentiment_hits(tokens: &[String], rule: &EngagementRule) -> SentimentHits {
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let positive = distinct.iter().filter(|w| in_vocab(rule.positive, w)).count();
    let negative = distinct.iter().filter(|w| in_vocab(rule.negative, w)).count();
    SentimentHits { positive, negative }
}

fn in_vocab(vocab: &[&str], word: &str) -> bool {
    vocab.iter().any(|v| *v == word)
}

pub fn positivity_index(hits: SentimentHits, neutral_index: f64) -> f64 {
    let total = hits.positive + hits.negative;
    if total == 0 {
        neutral_index
    } else {
        hits.positive as f64 / total as f64
    }
}

pub fn score_engagement(tokens: &[String], rule: &EngagementRule) -> CriterionScore {
    let table = &rule.buckets;
    // Empty input reports 0.0, not the neutral index.
    if tokens.is_empty() {
        return CriterionScore::new(
            CriterionKind::Engagement,
            table.max_score,
            0.0,
            CriterionDetails::Engagement(EngagementDetails {
                positivity_index_0_1: 0.0,
                bucket: None,
                positive_hits: 0,
                negative_hits: 0,
            }),
        );
    }

    let hits = sentiment_hits(tokens, rule);
    let positivity = positivity_index(hits, rule.neutral_index);
    let (score, bucket) = table.score(positivity);
    tracing::debug!(?hits, positivity, score, "engagement scored");

    CriterionScore::new(
        CriterionKind::Engagement,
        table.max_score,
        score,
        CriterionDetails::Engagement(EngagementDetails {
            positivity_index_0_1: round_to(positivity, 3),
            bucket,
            positive_hits: hits.positive,
            negative_hits: hits.negative,
        }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/engagement.rs"]
mod tests;
