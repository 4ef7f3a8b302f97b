//! Atomic writer for rendered templates.
//!
//! ## Per file
//!
//! 1. Render (or copy verbatim, for the reserved script).
//! 2. Normalise rendered line endings to LF.
//! 3. Write to `<path>.proposal.tmp`.
//! 4. Rename to final path (atomic on POSIX).
//!
//! The first failing file aborts the run. Files already written stay.

use std::path::{Path, PathBuf};

use proposal_renderer::{Renderer, TemplateFile, TemplateVars};

use crate::error::{io_err, ScaffoldError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// Template was rendered and written.
    Rendered { path: PathBuf },
    /// Reserved script copied byte-for-byte.
    Copied { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Rendered { path } | WriteResult::Copied { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Atomically write `content` to `path`.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    let tmp = PathBuf::from(format!("{}.proposal.tmp", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), ScaffoldError> {
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// write_templates
// ---------------------------------------------------------------------------

/// Render every file in `files` into `target`, keeping base names.
///
/// All templates are parsed before anything is written.
pub fn write_templates(
    target: &Path,
    files: &[TemplateFile],
    vars: &TemplateVars,
) -> Result<Vec<WriteResult>, ScaffoldError> {
    let renderer = Renderer::new(files)?;
    let ctx = vars.to_tera_context()?;
    let mut writes = Vec::with_capacity(files.len());

    for file in files {
        let path = target.join(&file.base_name);
        let text = renderer.render(file, &ctx)?;
        if file.is_reserved() {
            atomic_write(&path, &text)?;
            tracing::info!("copied: {}", path.display());
            writes.push(WriteResult::Copied { path });
        } else {
            atomic_write(&path, &text.replace("\r\n", "\n"))?;
            tracing::info!("wrote: {}", path.display());
            writes.push(WriteResult::Rendered { path });
        }
    }
    Ok(writes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
