use std::collections::HashSet;

use crate::model::{CriterionDetails, CriterionKind, CriterionScore, VocabularyDetails, round_to};
use crate::rubric::BucketTable;

/// Distinct tokens over total tokens; 0 for an empty sequence.
pub fn type_token_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    unique.len() as f64 / tokens.len() as f64
}

pub fn score_vocabulary(tokens: &[String], table: &BucketTable) -> CriterionScore {
    if tokens.is_empty() {
        return CriterionScore::new(
            CriterionKind::Vocabulary,
            table.max_score,
            0.0,
            CriterionDetails::Vocabulary(VocabularyDetails {
                ttr: 0.0,
                bucket: None,
            }),
        );
    }

    let ttr = type_token_ratio(tokens);
    let (score, bucket) = table.score(ttr);
    tracing::debug!(ttr, score, "vocabulary scored");

    CriterionScore::new(
        CriterionKind::Vocabulary,
        table.max_score,
        score,
        CriterionDetails::Vocabulary(VocabularyDetails {
            ttr: round_to(ttr, 3),
            bucket,
        }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/vocabulary.rs"]
mod tests;
