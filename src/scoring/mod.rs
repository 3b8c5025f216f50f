//! Criterion scorers. Each one is a pure function of the transcript views and
//! its rubric table, and always returns a score within `0..=max_score`.

pub mod clarity;
pub mod engagement;
pub mod flow;
pub mod keywords;
pub mod salutation;
pub mod speech_rate;
pub mod vocabulary;

pub use clarity::score_clarity;
pub use engagement::score_engagement;
pub use flow::score_flow;
pub use keywords::{score_good_to_have, score_must_have};
pub use salutation::score_salutation;
pub use speech_rate::score_speech_rate;
pub use vocabulary::score_vocabulary;
