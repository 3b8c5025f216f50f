use crate::error::CliError;
use crate::model::EvaluationResult;

pub fn render_evaluation_json(result: &EvaluationResult) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// JSON for a single criterion's details block.
pub fn render_details_json(details: &crate::model::CriterionDetails) -> Result<String, CliError> {
    Ok(serde_json::to_string(details)?)
}
