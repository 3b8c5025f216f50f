use super::*;
use crate::rubric::Rubric;

fn slots(c: &CriterionScore) -> &OrderedMap<bool> {
    match &c.details {
        CriterionDetails::Slots(d) => &d.slots,
        other => panic!("unexpected details {other:?}"),
    }
}

const FULL: &str = "hello everyone, my name is meera and i am 12 years old. i study in class 7 at green valley school. \
                    i live with my family; my father is a doctor. i am from pune. my hobbies are music and dance. \
                    i want to become an engineer. thank you.";

#[test]
fn test_all_must_have_slots() {
    let c = score_must_have(FULL, &Rubric::intro_v1().must_have);
    assert_eq!(c.score, 20.0);
    assert_eq!(c.max_score, 20.0);
    assert!(slots(&c).0.iter().all(|(_, present)| *present));
}

#[test]
fn test_good_to_have_partial() {
    let c = score_good_to_have(FULL, &Rubric::intro_v1().good_to_have);
    assert_eq!(c.score, 8.0);
    assert_eq!(c.max_score, 10.0);
    assert_eq!(slots(&c).get("school_highlights"), Some(&false));
    assert_eq!(slots(&c).get("extra_curricular"), Some(&true));
}

#[test]
fn test_no_triggers_scores_zero() {
    let rubric = Rubric::intro_v1();
    let text = "the weather today is pleasant";
    assert_eq!(score_must_have(text, &rubric.must_have).score, 0.0);
    assert_eq!(score_good_to_have(text, &rubric.good_to_have).score, 0.0);
}

#[test]
fn test_slots_independent() {
    // "i am from" satisfies both the name trigger "i am " and origin.
    let rubric = Rubric::intro_v1();
    let text = "i am from delhi";
    let must = score_must_have(text, &rubric.must_have);
    let good = score_good_to_have(text, &rubric.good_to_have);
    assert_eq!(slots(&must).get("name"), Some(&true));
    assert_eq!(must.score, 4.0);
    assert_eq!(slots(&good).get("origin_location"), Some(&true));
    assert_eq!(good.score, 2.0);
}

#[test]
fn test_slot_order_preserved() {
    let c = score_must_have("", &Rubric::intro_v1().must_have);
    let ids: Vec<&str> = slots(&c).0.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids[0], "name");
    assert_eq!(ids[4], "hobbies_or_interests_or_goals");
}
