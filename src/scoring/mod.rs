pub mod engine;
pub mod reversal;
pub mod validation;

pub use engine::{aggregate, mean_ignoring_missing, scale_score, score_responses, ScoreTable};
pub use reversal::{apply_reversal, reverse_response};
pub use validation::validate_key;
