use crate::model::{CriterionDetails, CriterionKind, CriterionScore, SalutationDetails};
use crate::rubric::{SalutationRule, first_match};

pub fn score_salutation(lowered: &str, rule: &SalutationRule) -> CriterionScore {
    // Trailing space lets "hi " match a transcript that ends on the greeting.
    let padded = format!("{lowered} ");

    let hit = first_match(
        rule.tiers
            .iter()
            .flat_map(|tier| tier.phrases.iter().map(move |phrase| (tier, *phrase))),
        |(_, phrase)| padded.contains(*phrase),
    );

    let (score, details) = match hit {
        Some((tier, phrase)) => (
            tier.score,
            SalutationDetails {
                tier: tier.name,
                matched_phrase: Some(phrase),
            },
        ),
        None => (
            0.0,
            SalutationDetails {
                tier: "none",
                matched_phrase: None,
            },
        ),
    };

    tracing::debug!(tier = details.tier, phrase = ?details.matched_phrase, "salutation scored");

    CriterionScore::new(
        CriterionKind::Salutation,
        rule.max_score,
        score,
        CriterionDetails::Salutation(details),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/salutation.rs"]
mod tests;
