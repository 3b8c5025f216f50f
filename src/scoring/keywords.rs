use crate::model::{CriterionDetails, CriterionKind, CriterionScore, OrderedMap, SlotDetails};
use crate::rubric::{Slot, SlotGroup};

pub fn slot_present(lowered: &str, slot: &Slot) -> bool {
    slot.triggers.iter().any(|t| lowered.contains(*t))
}

fn score_group(lowered: &str, group: &SlotGroup, kind: CriterionKind) -> CriterionScore {
    let mut hits = Vec::with_capacity(group.slots.len());
    let mut score = 0.0;
    for slot in group.slots {
        let present = slot_present(lowered, slot);
        if present {
            score += group.points_per_slot;
        }
        hits.push((slot.id, present));
    }

    tracing::debug!(criterion = kind.name(), score, "slot group scored");

    CriterionScore::new(
        kind,
        group.max_score(),
        score,
        CriterionDetails::Slots(SlotDetails {
            slots: OrderedMap(hits),
        }),
    )
}

pub fn score_must_have(lowered: &str, group: &SlotGroup) -> CriterionScore {
    score_group(lowered, group, CriterionKind::MustHaveKeywords)
}

pub fn score_good_to_have(lowered: &str, group: &SlotGroup) -> CriterionScore {
    score_group(lowered, group, CriterionKind::GoodToHaveKeywords)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/keywords.rs"]
mod tests;
