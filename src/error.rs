//! Error types for cursor-rules
//!
//! Emission only fails on the filesystem. Every variant names the path that
//! could not be created or written so the message is actionable on its own.

use std::path::PathBuf;

/// Errors raised while writing rule files
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The target directory (or one of its parents) could not be created
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target path exists but is not a directory
    #[error("Path '{}' exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// A record's file name would escape the target directory
    #[error("Invalid rule file name '{file_name}': must be a single path component")]
    InvalidFileName { file_name: String },

    /// A rule file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    /// The path the failure refers to
    pub fn path(&self) -> PathBuf {
        match self {
            EmitError::CreateDir { path, .. }
            | EmitError::NotADirectory { path }
            | EmitError::Write { path, .. } => path.clone(),
            EmitError::InvalidFileName { file_name } => PathBuf::from(file_name),
        }
    }
}
