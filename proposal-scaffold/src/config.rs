//! Run configuration, resolved once from the process environment.

use std::path::PathBuf;

use proposal_renderer::TemplateSource;

use crate::error::ScaffoldError;

/// Overrides the embedded templates with `<dir>/base` and `<dir>/additional`.
pub const TEMPLATES_DIR_ENV: &str = "PROPOSAL_TEMPLATES_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Directory the proposal directory is created in.
    pub cwd: PathBuf,
    /// Template directory override; `None` uses the embedded sets.
    pub templates_dir: Option<PathBuf>,
}

impl ScaffoldConfig {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        ScaffoldConfig { cwd: cwd.into(), templates_dir: None }
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    /// Current directory plus [`TEMPLATES_DIR_ENV`] (ignored when empty).
    /// A relative override is taken relative to the current directory.
    pub fn from_env() -> Result<Self, ScaffoldError> {
        let cwd = std::env::current_dir().map_err(ScaffoldError::CurrentDir)?;
        let templates_dir = std::env::var_os(TEMPLATES_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(|v| cwd.join(v));
        Ok(ScaffoldConfig { cwd, templates_dir })
    }

    pub fn template_source(&self) -> TemplateSource {
        TemplateSource::from_dir(self.templates_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_embedded_templates() {
        let config = ScaffoldConfig::new("/work");
        assert_eq!(config.template_source(), TemplateSource::Embedded);
    }

    #[test]
    fn override_switches_to_directory_source() {
        let config = ScaffoldConfig::new("/work").with_templates_dir("/tpl");
        assert_eq!(
            config.template_source(),
            TemplateSource::Directory(PathBuf::from("/tpl"))
        );
    }
}
