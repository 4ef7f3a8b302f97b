//! Error types for proposal-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template did not parse.
    #[error("failed to parse template {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Rendering failed, typically a placeholder naming an undefined variable.
    #[error("failed to render template {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Building the tera context from [`crate::TemplateVars`] failed.
    #[error("template context error: {0}")]
    Context(#[source] tera::Error),

    /// Filesystem error while loading templates from a directory.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}
