use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
/// Every variant is terminal to the run; `main` maps it to a console line and an exit code.
#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Missing files in {}: {}", dir.display(), files.join(", "))]
    MissingSections { dir: PathBuf, files: Vec<String> },

    #[error("No job description provided")]
    MissingJobDescription,

    #[error("Cancelled by user")]
    Cancelled,

    #[error("Error reading {}: {reason}", path.display())]
    JobFile { path: PathBuf, reason: String },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl OptimizerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OptimizerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            OptimizerError::Cancelled => 130,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
