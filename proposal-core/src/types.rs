//! Domain types for a single scaffolding run.
//!
//! [`ProposalAnswers`] is built once from user input and never mutated.
//! [`DerivedContext`] is a pure function of the answers and a working directory.

use std::path::{Path, PathBuf};

use crate::collect;
use crate::error::ProposalError;
use crate::slug::kebab_case;

/// Prefix of every generated directory name.
pub const DIRECTORY_PREFIX: &str = "proposal-";

// ---------------------------------------------------------------------------
// ProposalAnswers
// ---------------------------------------------------------------------------

/// Everything the user typed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalAnswers {
    proposal_name: String,
    nickname: String,
    fullname: String,
    email: String,
    include_spec: bool,
}

impl ProposalAnswers {
    /// Build answers, applying the same validation the prompts apply.
    pub fn new(
        proposal_name: impl Into<String>,
        nickname: impl Into<String>,
        fullname: impl Into<String>,
        email: impl Into<String>,
        include_spec: bool,
    ) -> Result<Self, ProposalError> {
        let answers = Self {
            proposal_name: proposal_name.into(),
            nickname: nickname.into(),
            fullname: fullname.into(),
            email: email.into(),
            include_spec,
        };
        for field in collect::Field::ALL {
            field
                .validate(answers.get(*field))
                .map_err(|message| ProposalError::Invalid { field: field.key(), message })?;
        }
        Ok(answers)
    }

    pub fn proposal_name(&self) -> &str {
        &self.proposal_name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the spec + CI template set should be generated as well.
    pub fn include_spec(&self) -> bool {
        self.include_spec
    }

    fn get(&self, field: collect::Field) -> &str {
        match field {
            collect::Field::ProposalName => &self.proposal_name,
            collect::Field::Nickname => &self.nickname,
            collect::Field::Fullname => &self.fullname,
            collect::Field::Email => &self.email,
        }
    }
}

// ---------------------------------------------------------------------------
// DerivedContext
// ---------------------------------------------------------------------------

/// Values computed from the answers: the hyphenated name and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedContext {
    proposal_name_hyphen: String,
    target_directory: PathBuf,
}

impl DerivedContext {
    /// `<cwd>/proposal-<kebab-case(proposal name)>`.
    ///
    /// `cwd` is expected to be absolute (it normally comes from
    /// `std::env::current_dir`); it is joined as-is.
    pub fn derive(answers: &ProposalAnswers, cwd: &Path) -> Self {
        let proposal_name_hyphen = hyphenate(answers.proposal_name());
        let target_directory = cwd.join(&proposal_name_hyphen);
        Self { proposal_name_hyphen, target_directory }
    }

    /// e.g. `proposal-my-cool-idea`.
    pub fn proposal_name_hyphen(&self) -> &str {
        &self.proposal_name_hyphen
    }

    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }
}

/// `proposal-` + kebab-cased `name`.
pub fn hyphenate(name: &str) -> String {
    format!("{DIRECTORY_PREFIX}{}", kebab_case(name))
}
