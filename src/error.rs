use std::path::PathBuf;

use thiserror::Error;

/// Failures of the command-line front end. Scoring itself cannot fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error while {context} ({}): {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize evaluation: {0}")]
    Json(#[from] serde_json::Error),
    #[error("please enter or upload a transcript")]
    EmptyTranscript,
    #[error("invalid --duration {0}: must be a finite number >= 0")]
    InvalidDuration(f64),
}

impl CliError {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}
