//! Rule-based scoring of spoken self-introduction transcripts.
//!
//! [`evaluate_transcript`] runs every criterion of the built-in rubric and
//! returns an [`EvaluationResult`] with a 0-100 overall score.

pub mod error;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod rubric;
pub mod scoring;
pub mod text;

pub use error::CliError;
pub use model::{CriterionKind, CriterionScore, EvaluationMeta, EvaluationResult};
pub use pipeline::{evaluate_transcript, evaluate_with_rubric};
pub use rubric::Rubric;
