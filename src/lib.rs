//! Score HEXACO-PI-R (100-item form) questionnaire responses.
//!
//! The pipeline is Load -> reverse-key -> aggregate -> Save:
//!
//! ```no_run
//! use std::path::Path;
//! use hexaco_score::{inventory, output, responses, scoring};
//!
//! let loaded = responses::load_responses(Path::new("results.csv"), b',')?;
//! let scores = scoring::score_responses(&loaded.table, &inventory::DOMAINS);
//! output::save_scores(Path::new("personality.csv"), &scores, b',')?;
//! # Ok::<(), hexaco_score::ScoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod output;
pub mod responses;
pub mod scoring;

pub use error::ScoreError;
