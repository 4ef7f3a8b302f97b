//! Target directory setup.
//!
//! ```text
//! create_dir(target)
//!   ├─ Ok                  → Created
//!   ├─ Err(AlreadyExists)  → confirm overwrite? (default no)
//!   │     ├─ no            → Declined   (nothing touched)
//!   │     └─ yes           → remove, create_dir → Overwritten
//!   └─ Err(other)          → ProposalError::CreateDir
//! ```
//!
//! Removal only ever happens after an explicit "yes".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ProposalError;
use crate::prompt::Prompter;

/// How the target directory ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preparation {
    /// Did not exist; created empty.
    Created,
    /// Existed; user agreed to overwrite; now empty.
    Overwritten,
    /// Existed; user said no. The directory is untouched.
    Declined,
}

impl Preparation {
    /// Whether templates should be written.
    pub fn is_ready(self) -> bool {
        !matches!(self, Preparation::Declined)
    }
}

fn create_err(path: &Path, source: io::Error) -> ProposalError {
    ProposalError::CreateDir { path: PathBuf::from(path), source }
}

fn remove_err(path: &Path, source: io::Error) -> ProposalError {
    ProposalError::RemoveDir { path: PathBuf::from(path), source }
}

/// Text of the overwrite confirmation.
pub fn overwrite_prompt(target: &Path) -> String {
    format!(
        "Directory {} already exists. Do you want to overwrite it?",
        target.display()
    )
}

/// Create `target`, asking before replacing anything that is already there.
///
/// The parent directory must exist; only `target` itself is created.
pub fn prepare<P: Prompter + ?Sized>(
    target: &Path,
    prompter: &mut P,
) -> Result<Preparation, ProposalError> {
    match fs::create_dir(target) {
        Ok(()) => {
            tracing::info!(path = %target.display(), "created proposal directory");
            Ok(Preparation::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            let overwrite = prompter
                .confirm(&overwrite_prompt(target), false)
                .map_err(ProposalError::Prompt)?;
            if !overwrite {
                tracing::debug!(path = %target.display(), "overwrite declined");
                return Ok(Preparation::Declined);
            }
            remove_existing(target).map_err(|e| remove_err(target, e))?;
            fs::create_dir(target).map_err(|e| create_err(target, e))?;
            tracing::info!(path = %target.display(), "overwrote proposal directory");
            Ok(Preparation::Overwritten)
        }
        Err(e) => Err(create_err(target, e)),
    }
}

/// Remove whatever sits at `path`. A symlink is unlinked, never followed.
fn remove_existing(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn fresh_directory_is_created_without_asking() {
        let cwd = TempDir::new().expect("tempdir");
        let target = cwd.path().join("proposal-x");
        let mut p = ScriptedPrompter::new();

        assert_eq!(prepare(&target, &mut p).unwrap(), Preparation::Created);
        assert!(target.is_dir());
        assert!(p.asked().is_empty());
    }

    #[test]
    fn missing_parent_is_fatal() {
        let cwd = TempDir::new().expect("tempdir");
        let target = cwd.path().join("nope").join("proposal-x");
        let err = prepare(&target, &mut ScriptedPrompter::new()).unwrap_err();
        match err {
            ProposalError::CreateDir { path, source } => {
                assert_eq!(path, target);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overwrite_prompt_defaults_to_no() {
        let cwd = TempDir::new().expect("tempdir");
        let target = cwd.path().join("proposal-x");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "keep").unwrap();

        let mut p = ScriptedPrompter::new().with_default_confirm();
        assert_eq!(prepare(&target, &mut p).unwrap(), Preparation::Declined);
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
        assert_eq!(p.asked(), [overwrite_prompt(&target)]);
    }

    #[test]
    fn existing_file_is_replaced_by_directory() {
        let cwd = TempDir::new().expect("tempdir");
        let target = cwd.path().join("proposal-x");
        fs::write(&target, "not a dir").unwrap();

        let mut p = ScriptedPrompter::new().with_confirm(true);
        assert_eq!(prepare(&target, &mut p).unwrap(), Preparation::Overwritten);
        assert!(target.is_dir());
    }

    #[test]
    fn is_ready() {
        assert!(Preparation::Created.is_ready());
        assert!(Preparation::Overwritten.is_ready());
        assert!(!Preparation::Declined.is_ready());
    }
}
