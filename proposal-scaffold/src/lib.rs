//! # proposal-scaffold
//!
//! Pipeline that turns answers into a populated proposal directory.
//!
//! Call [`run`] to ask every question and scaffold, or [`scaffold`] when the
//! answers are already known.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use config::{ScaffoldConfig, TEMPLATES_DIR_ENV};
pub use error::ScaffoldError;
pub use pipeline::{run, scaffold, Outcome};
pub use writer::{write_templates, WriteResult};
