//! Proposal core library: domain types, prompting, workspace setup, errors.
//!
//! Public API surface:
//! - [`types`] — [`ProposalAnswers`] and [`DerivedContext`]
//! - [`slug`] — kebab-case slugging for directory names
//! - [`prompt`] — the [`Prompter`] seam (plus a scripted one under `test-util`)
//! - [`collect`] — the sequential question flow
//! - [`workspace`] — target directory creation / overwrite
//! - [`error`] — [`ProposalError`]

pub mod collect;
pub mod error;
pub mod prompt;
pub mod slug;
pub mod types;
pub mod workspace;

pub use error::ProposalError;
pub use prompt::Prompter;
#[cfg(any(test, feature = "test-util"))]
pub use prompt::ScriptedPrompter;
pub use types::{DerivedContext, ProposalAnswers};
pub use workspace::Preparation;
