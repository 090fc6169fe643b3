use std::path::PathBuf;

use thiserror::Error;

/// Every way a run can fail. All of them end the process.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0}")]
    Configuration(String),

    #[error("Input file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialise the generation client: {0}")]
    AuthConfiguration(String),

    #[error("Generation request to model '{model}' failed: {message}")]
    Service { model: String, message: String },
}

impl RunError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
