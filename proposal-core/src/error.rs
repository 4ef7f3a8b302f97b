//! Error types for proposal-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while collecting answers or preparing the
/// target directory.
#[derive(Debug, Error)]
pub enum ProposalError {
    /// The terminal prompt itself failed (closed stdin, not a terminal, etc.).
    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// A field handed to [`crate::ProposalAnswers::new`] failed validation.
    #[error("invalid {field}: {message}")]
    Invalid { field: &'static str, message: String },

    /// Creating the target directory failed for a reason other than
    /// "already exists".
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Clearing an existing target directory before overwrite failed.
    #[error("failed to remove existing directory {path}: {source}")]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
