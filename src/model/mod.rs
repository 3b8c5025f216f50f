pub mod criteria;
pub mod result;

pub use criteria::{
    ClarityDetails, CriterionDetails, CriterionKind, CriterionScore, EngagementDetails,
    FlowDetails, OrderedMap, SalutationDetails, SlotDetails, SpeechRateDetails,
    VocabularyDetails, criterion_order,
};
pub use result::{EvaluationMeta, EvaluationResult, OVERALL_MAX_SCORE};

/// Rounds to `places` decimals, ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
