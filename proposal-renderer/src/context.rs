//! Template context — the variables a template may reference.

use serde::Serialize;

use proposal_core::{DerivedContext, ProposalAnswers};

use crate::error::RenderError;

/// Rendering payload. Serialized with camelCase keys, so templates see
/// `proposalName`, `proposalNameHyphen`, `fullname`, `nickname` and `email`.
/// Nothing else is defined; referencing any other name is a render error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVars {
    pub proposal_name: String,
    pub proposal_name_hyphen: String,
    pub fullname: String,
    pub nickname: String,
    pub email: String,
}

impl TemplateVars {
    pub fn new(answers: &ProposalAnswers, derived: &DerivedContext) -> Self {
        TemplateVars {
            proposal_name: answers.proposal_name().to_owned(),
            proposal_name_hyphen: derived.proposal_name_hyphen().to_owned(),
            fullname: answers.fullname().to_owned(),
            nickname: answers.nickname().to_owned(),
            email: answers.email().to_owned(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::Context)
    }
}
