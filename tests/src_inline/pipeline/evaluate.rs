use super::*;
use crate::model::{CriterionDetails, OrderedMap};

const APARNA: &str = "Good morning, my name is Aparna. I am 13 years old and I study in class 8. \
                      I am from Hyderabad and I live with my family. My hobbies are reading and playing badminton. \
                      My goal is to become a scientist. Thank you for listening.";

const MEERA: &str = "Hello everyone, my name is Meera and I am 12 years old. I study in class 7 at Green Valley School. \
                     I live with my family; my father is a doctor. I am from Pune. My hobbies are music and dance. \
                     I want to become an engineer. Thank you.";

fn score_of(result: &EvaluationResult, kind: CriterionKind) -> f64 {
    result.criterion(kind).map(|c| c.score).unwrap_or(f64::NAN)
}

fn slots(result: &EvaluationResult, kind: CriterionKind) -> OrderedMap<bool> {
    match result.criterion(kind).map(|c| &c.details) {
        Some(CriterionDetails::Slots(d)) => d.slots.clone(),
        other => panic!("unexpected details {other:?}"),
    }
}

#[test]
fn test_aparna_scenario() {
    let result = evaluate_transcript(APARNA, Some(60.0));
    assert_eq!(score_of(&result, CriterionKind::Salutation), 4.0);
    assert_eq!(score_of(&result, CriterionKind::Flow), 5.0);

    // No "school" trigger in the text.
    assert_eq!(score_of(&result, CriterionKind::MustHaveKeywords), 16.0);
    assert_eq!(
        slots(&result, CriterionKind::MustHaveKeywords).get("school"),
        Some(&false)
    );

    let good = slots(&result, CriterionKind::GoodToHaveKeywords);
    assert_eq!(good.get("family_background"), Some(&true));
    assert_eq!(good.get("origin_location"), Some(&true));
    assert_eq!(good.get("thanks_or_closing"), Some(&true));
    assert_eq!(score_of(&result, CriterionKind::GoodToHaveKeywords), 6.0);

    assert_eq!(score_of(&result, CriterionKind::SpeechRate), 2.0);
    assert_eq!(score_of(&result, CriterionKind::Vocabulary), 8.0);
    assert_eq!(score_of(&result, CriterionKind::Clarity), 15.0);
    assert_eq!(score_of(&result, CriterionKind::Engagement), 9.0);

    assert_eq!(result.meta.word_count, 43);
    assert_eq!(result.meta.raw_total, 65.0);
    assert_eq!(result.meta.raw_max, 90.0);
    assert_eq!(result.overall_score, 72.22);
    assert_eq!(result.max_score, 100.0);
}

#[test]
fn test_full_must_have() {
    let result = evaluate_transcript(MEERA, Some(90.0));
    assert_eq!(score_of(&result, CriterionKind::MustHaveKeywords), 20.0);
    assert_eq!(score_of(&result, CriterionKind::GoodToHaveKeywords), 8.0);
    assert_eq!(score_of(&result, CriterionKind::Salutation), 2.0);
    assert_eq!(result.overall_score, 76.67);
}

#[test]
fn test_without_duration_excludes_speech_rate() {
    let result = evaluate_transcript(APARNA, None);
    let speech = result.criterion(CriterionKind::SpeechRate).unwrap();
    assert!(!speech.applicable);
    assert_eq!(speech.score, 0.0);
    assert_eq!(result.meta.raw_max, 80.0);
    assert_eq!(result.meta.raw_total, 63.0);
    assert_eq!(result.overall_score, 78.75);
}

#[test]
fn test_empty_transcript_is_total() {
    let result = evaluate_transcript("", None);
    assert_eq!(result.meta.word_count, 0);
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.meta.raw_max, 80.0);
    assert_eq!(result.criteria.len(), 8);

    let result = evaluate_transcript("   ", Some(30.0));
    assert_eq!(score_of(&result, CriterionKind::SpeechRate), 2.0);
    assert_eq!(result.meta.raw_total, 2.0);
    assert_eq!(result.meta.raw_max, 90.0);
    assert_eq!(result.overall_score, 2.22);
}

#[test]
fn test_scores_within_bounds() {
    let inputs = [
        "",
        "um um um like like you know",
        APARNA,
        MEERA,
        "I am sad and nervous, hi",
        "12345 !!!",
    ];
    for text in inputs {
        for duration in [None, Some(0.0), Some(1.0), Some(60.0), Some(-3.0)] {
            let result = evaluate_transcript(text, duration);
            assert!((0.0..=100.0).contains(&result.overall_score));
            for c in &result.criteria {
                assert!(c.score >= 0.0 && c.score <= c.max_score, "{c:?}");
            }
        }
    }
}

#[test]
fn test_criteria_order() {
    let result = evaluate_transcript(APARNA, Some(60.0));
    let kinds: Vec<CriterionKind> = result.criteria.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, criterion_order());
}

#[test]
fn test_overall_percentage_zero_denominator() {
    assert_eq!(overall_percentage(0.0, 0.0), 0.0);
    assert_eq!(overall_percentage(45.0, 90.0), 50.0);
}

#[test]
fn test_deterministic_serialization() {
    let a = serde_json::to_string(&evaluate_transcript(APARNA, Some(60.0))).unwrap();
    let b = serde_json::to_string(&evaluate_transcript(APARNA, Some(60.0))).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_json_shape() {
    let value = serde_json::to_value(evaluate_transcript(APARNA, None)).unwrap();
    assert_eq!(value["max_score"], 100.0);
    assert_eq!(value["meta"]["duration_seconds"], serde_json::Value::Null);
    let criteria = value["criteria"].as_array().unwrap();
    assert_eq!(criteria[0]["name"], "Salutation quality");
    assert_eq!(criteria[0]["details"]["tier"], "good");
    assert_eq!(criteria[0]["score_normalized_0_1"], 0.8);
    assert_eq!(criteria[3]["details"]["stage_positions"]["name"], 14);
    assert_eq!(criteria[4]["details"]["not_applicable"], true);
    assert!(criteria[0].get("kind").is_none());
    assert!(criteria[0].get("applicable").is_none());
}

#[test]
fn test_custom_rubric() {
    let mut rubric = *Rubric::intro_v1();
    rubric.must_have.points_per_slot = 1.0;
    let result = evaluate_with_rubric(APARNA, Some(60.0), &rubric);
    let must = result.criterion(CriterionKind::MustHaveKeywords).unwrap();
    assert_eq!(must.max_score, 5.0);
    assert_eq!(must.score, 4.0);
}

#[test]
fn test_infinite_duration_counts_toward_max() {
    let result = evaluate_transcript(APARNA, Some(f64::INFINITY));
    assert!(result.criterion(CriterionKind::SpeechRate).unwrap().applicable);
    assert_eq!(score_of(&result, CriterionKind::SpeechRate), 2.0);
    assert_eq!(result.meta.raw_max, 90.0);
    assert_eq!(result.overall_score, 72.22);
}

#[test]
fn test_ttr_tie_rounds_to_even() {
    let text = vec!["um"; 16].join(" ");
    let result = evaluate_transcript(&text, None);
    match &result.criterion(CriterionKind::Vocabulary).unwrap().details {
        CriterionDetails::Vocabulary(d) => assert_eq!(d.ttr, 0.062),
        other => panic!("unexpected details {other:?}"),
    }
}
