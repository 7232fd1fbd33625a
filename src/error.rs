use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a scoring run.
///
/// Malformed cells are not in here: they are recovered locally and reported
/// as [`crate::responses::MalformedCell`] diagnostics instead.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Response file not found or unreadable at {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Response file {} is missing required item columns: {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("Failed to parse response file {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write scores to {}: {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ScoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_all() {
        let err = ScoreError::MissingColumns {
            path: PathBuf::from("results.csv"),
            columns: vec!["q7".to_string(), "q99".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("results.csv"));
        assert!(msg.contains("q7, q99"));
    }

    #[test]
    fn test_sink_write_names_path() {
        let err = ScoreError::SinkWrite {
            path: PathBuf::from("out/personality.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/personality.csv"));
    }
}
