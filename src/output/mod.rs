pub mod formatter;
pub mod writer;

pub use formatter::{format_score, format_score_table, render_score_table, should_use_colors};
pub use writer::{format_mean, save_scores, write_scores};
