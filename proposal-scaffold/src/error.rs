//! Error types for proposal-scaffold.

use std::path::PathBuf;

use thiserror::Error;

use proposal_core::ProposalError;
use proposal_renderer::RenderError;

/// All errors that can arise from a scaffolding run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Prompting or target directory setup failed.
    #[error("proposal error: {0}")]
    Proposal(#[from] ProposalError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// `std::env::current_dir()` failed.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// An I/O error while writing output, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ScaffoldError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.into(),
        source,
    }
}
