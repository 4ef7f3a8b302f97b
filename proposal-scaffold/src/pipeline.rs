//! Scaffolding pipeline: collect → prepare directory → render.

use std::path::PathBuf;

use proposal_core::{collect, workspace, DerivedContext, Preparation, Prompter, ProposalAnswers};
use proposal_renderer::TemplateVars;

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::writer::{write_templates, WriteResult};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Directory created (or overwritten) and every template written.
    Scaffolded {
        directory: PathBuf,
        preparation: Preparation,
        writes: Vec<WriteResult>,
    },
    /// Directory existed and the user kept it. Nothing was written.
    Declined { directory: PathBuf },
}

/// Ask every question, then [`scaffold`].
pub fn run<P: Prompter + ?Sized>(
    config: &ScaffoldConfig,
    prompter: &mut P,
) -> Result<Outcome, ScaffoldError> {
    let answers = collect::collect(prompter)?;
    scaffold(config, &answers, prompter)
}

/// Create the proposal directory for `answers` and fill it.
///
/// `prompter` is only used for the overwrite confirmation.
pub fn scaffold<P: Prompter + ?Sized>(
    config: &ScaffoldConfig,
    answers: &ProposalAnswers,
    prompter: &mut P,
) -> Result<Outcome, ScaffoldError> {
    let derived = DerivedContext::derive(answers, &config.cwd);
    let directory = derived.target_directory().to_path_buf();

    let preparation = workspace::prepare(&directory, prompter)?;
    if !preparation.is_ready() {
        return Ok(Outcome::Declined { directory });
    }

    let files = config.template_source().select(answers.include_spec())?;
    let vars = TemplateVars::new(answers, &derived);
    let writes = write_templates(&directory, &files, &vars)?;

    Ok(Outcome::Scaffolded { directory, preparation, writes })
}
