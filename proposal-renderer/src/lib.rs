//! # proposal-renderer
//!
//! Tera-based rendering of the proposal template sets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use proposal_renderer::{Renderer, TemplateSource, TemplateVars};
//!
//! fn render_all(vars: &TemplateVars) -> Result<(), proposal_renderer::RenderError> {
//!     let files = TemplateSource::Embedded.select(true)?;
//!     let renderer = Renderer::new(&files)?;
//!     let ctx = vars.to_tera_context()?;
//!     for file in &files {
//!         let text = renderer.render(file, &ctx)?;
//!         println!("{}: {} bytes", file.base_name, text.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod sets;

pub use context::TemplateVars;
pub use engine::Renderer;
pub use error::RenderError;
pub use sets::{TemplateFile, TemplateSetKind, TemplateSource, RESERVED_SCRIPT};
