use crate::model::EvaluationResult;
use crate::report::json::render_details_json;
use crate::report::{format_normalized, format_score};

const CRITERION_WIDTH: usize = 42;

pub fn render_report_text(result: &EvaluationResult) -> String {
    let mut out = String::new();

    out.push_str("Spoken Introduction Score Report\n");
    out.push_str("================================\n\n");

    out.push_str(&format!(
        "Overall score: {:.1} / {}\n\n",
        result.overall_score,
        format_score(result.max_score)
    ));

    out.push_str("Meta\n");
    out.push_str(&format!("Word count: {}\n", result.meta.word_count));
    out.push_str(&format!(
        "Duration (s): {}\n",
        match result.meta.duration_seconds {
            Some(d) => format_score(d),
            None => "not provided".to_string(),
        }
    ));
    out.push_str(&format!(
        "Raw total: {} / {}\n\n",
        format_score(result.meta.raw_total),
        format_score(result.meta.raw_max)
    ));

    out.push_str("Criterion-wise scores\n");
    out.push_str(&format!(
        "{:<width$}  {:>6}  {:>4}  {:>10}\n",
        "Criterion",
        "Score",
        "Max",
        "Norm (0-1)",
        width = CRITERION_WIDTH
    ));
    out.push_str(&format!("{}\n", "-".repeat(CRITERION_WIDTH + 28)));
    for c in &result.criteria {
        out.push_str(&format!(
            "{:<width$}  {:>6}  {:>4}  {:>10}\n",
            c.name,
            format_score(c.score),
            format_score(c.max_score),
            format_normalized(c.score_normalized_0_1),
            width = CRITERION_WIDTH
        ));
    }

    out.push_str("\nDetails\n");
    for c in &result.criteria {
        let details = render_details_json(&c.details).unwrap_or_else(|e| format!("<{e}>"));
        out.push_str(&format!(
            "{} – {}/{}\n  {}\n",
            c.name,
            format_score(c.score),
            format_score(c.max_score),
            details
        ));
    }

    out
}
