//! Tera rendering engine.
//!
//! Every non-reserved template of a run is parsed up front, so a syntax error
//! in any file fails before the first output is written. The reserved
//! deployment script is never handed to tera.

use tera::Tera;

use crate::error::RenderError;
use crate::sets::TemplateFile;

/// Parsed templates for one run.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Parse all non-reserved `files`.
    pub fn new(files: &[TemplateFile]) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        // Output is markdown, JSON, YAML, shell; never HTML-escape.
        tera.autoescape_on(vec![]);
        for file in files.iter().filter(|f| !f.is_reserved()) {
            let name = file.template_name();
            tera.add_raw_template(&name, &file.raw_content)
                .map_err(|source| RenderError::Parse { name, source })?;
        }
        Ok(Renderer { tera })
    }

    /// Output text for `file`: verbatim for the reserved script, rendered
    /// against `ctx` for everything else.
    pub fn render(&self, file: &TemplateFile, ctx: &tera::Context) -> Result<String, RenderError> {
        if file.is_reserved() {
            tracing::debug!(file = %file.base_name, "copying verbatim");
            return Ok(file.raw_content.clone());
        }
        let name = file.template_name();
        self.tera
            .render(&name, ctx)
            .map_err(|source| RenderError::Template { name, source })
    }
}
