use crate::model::{CriterionDetails, CriterionKind, CriterionScore, FlowDetails, OrderedMap};
use crate::rubric::{FlowRule, FlowStage};
use crate::text::char_position;

/// Earliest character offset at which any of the stage's triggers occurs.
pub fn stage_position(lowered: &str, stage: &FlowStage) -> Option<usize> {
    stage
        .triggers
        .iter()
        .filter_map(|t| char_position(lowered, t))
        .min()
}

/// Absent stages are skipped; at least two present stages are required.
pub fn is_ordered(positions: &[Option<usize>]) -> bool {
    let found: Vec<usize> = positions.iter().flatten().copied().collect();
    found.len() >= 2 && found.windows(2).all(|w| w[0] <= w[1])
}

pub fn score_flow(lowered: &str, rule: &FlowRule) -> CriterionScore {
    let positions: Vec<Option<usize>> = rule
        .stages
        .iter()
        .map(|stage| stage_position(lowered, stage))
        .collect();
    let ordered = is_ordered(&positions);
    let score = if ordered { rule.max_score } else { 0.0 };

    tracing::debug!(?positions, ordered, "flow scored");

    let stage_positions = rule
        .stages
        .iter()
        .map(|s| s.id)
        .zip(positions)
        .collect::<Vec<_>>();

    CriterionScore::new(
        CriterionKind::Flow,
        rule.max_score,
        score,
        CriterionDetails::Flow(FlowDetails {
            stage_positions: OrderedMap(stage_positions),
            is_ordered: ordered,
        }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/flow.rs"]
mod tests;
