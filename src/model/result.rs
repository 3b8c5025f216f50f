use serde::Serialize;

use crate::model::criteria::{CriterionKind, CriterionScore};

pub const OVERALL_MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationMeta {
    pub word_count: usize,
    pub duration_seconds: Option<f64>,
    pub raw_total: f64,
    pub raw_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub overall_score: f64,
    pub max_score: f64,
    pub criteria: Vec<CriterionScore>,
    pub meta: EvaluationMeta,
}

impl EvaluationResult {
    pub fn criterion(&self, kind: CriterionKind) -> Option<&CriterionScore> {
        self.criteria.iter().find(|c| c.kind == kind)
    }
}
