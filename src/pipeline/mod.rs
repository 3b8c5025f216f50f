pub mod evaluate;

pub use evaluate::{evaluate_transcript, evaluate_with_rubric, overall_percentage};
