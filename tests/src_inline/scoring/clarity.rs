use super::*;
use crate::rubric::Rubric;
use crate::text::tokenize;

fn rule() -> &'static FillerRule {
    &Rubric::intro_v1().clarity
}

fn details(c: &CriterionScore) -> &ClarityDetails {
    match &c.details {
        CriterionDetails::Clarity(d) => d,
        other => panic!("unexpected details {other:?}"),
    }
}

#[test]
fn test_empty_tokens() {
    let c = score_clarity(&[], rule());
    assert_eq!(c.score, 0.0);
    assert_eq!(details(&c).filler_count, 0);
}

#[test]
fn test_no_fillers_full_marks() {
    let t = tokenize("My name is Aparna and I study in class eight.");
    let c = score_clarity(&t, rule());
    assert_eq!(c.score, 15.0);
    assert_eq!(details(&c).bucket, Some("0–3"));
}

#[test]
fn test_phrases_and_words_counted() {
    let t = tokenize(
        "um so like I was you know kind of nervous um and like actually basically so yeah",
    );
    assert_eq!(t.len(), 17);
    assert_eq!(count_fillers(&t, rule()), 9);
    let c = score_clarity(&t, rule());
    assert_eq!(c.score, 3.0);
    assert_eq!(details(&c).rate_per_100_words, 52.94);
    assert_eq!(details(&c).bucket, Some("13–inf"));
}

#[test]
fn test_single_words_match_whole_tokens_only() {
    // "likely" and "umbrella" are not fillers.
    let t = tokenize("likely umbrella error");
    assert_eq!(count_fillers(&t, rule()), 0);
}

#[test]
fn test_filler_rate_guards_zero() {
    assert_eq!(filler_rate(0, 0), 0.0);
    assert_eq!(filler_rate(5, 100), 5.0);
}

#[test]
fn test_rate_in_gap_scores_zero() {
    // 1 filler in 25 words = 4.0 (in bucket), 1 in 30 words ~= 3.33 (gap)
    let mut words = vec!["um".to_string()];
    words.extend(std::iter::repeat_n("word".to_string(), 29));
    let c = score_clarity(&words, rule());
    assert_eq!(c.score, 0.0);
    assert_eq!(details(&c).bucket, None);

    let mut words = vec!["um".to_string()];
    words.extend(std::iter::repeat_n("word".to_string(), 24));
    assert_eq!(score_clarity(&words, rule()).score, 12.0);
}
