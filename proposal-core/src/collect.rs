//! Sequential question flow that produces [`ProposalAnswers`].
//!
//! Questions are asked in a fixed order. A refused answer re-asks the same
//! question; the flow never advances past an invalid field.

use crate::error::ProposalError;
use crate::prompt::Prompter;
use crate::types::ProposalAnswers;

/// Shown for any empty text answer.
pub const EMPTY_MESSAGE: &str = "should not be empty";

pub const SPEC_PROMPT: &str =
    "Do you want to generate spec template and CI configuration for deployment?";

/// The free-text fields, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProposalName,
    Nickname,
    Fullname,
    Email,
}

impl Field {
    pub const ALL: &'static [Field] =
        &[Field::ProposalName, Field::Nickname, Field::Fullname, Field::Email];

    pub fn prompt(self) -> &'static str {
        match self {
            Field::ProposalName => "Proposal name",
            Field::Nickname => "Your GitHub nickname",
            Field::Fullname => "Your full name",
            Field::Email => "Your email",
        }
    }

    /// Template variable name for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::ProposalName => "proposalName",
            Field::Nickname => "nickname",
            Field::Fullname => "fullname",
            Field::Email => "email",
        }
    }

    /// `Err(message)` when `value` must be asked for again.
    ///
    /// Input is not trimmed: whitespace counts as content.
    pub fn validate(self, value: &str) -> Result<(), String> {
        not_empty(value)
    }
}

pub fn not_empty(value: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(EMPTY_MESSAGE.to_owned())
    } else {
        Ok(())
    }
}

/// Ask `field` until it validates.
fn ask<P: Prompter + ?Sized>(prompter: &mut P, field: Field) -> Result<String, ProposalError> {
    loop {
        let value = prompter.input(field.prompt()).map_err(ProposalError::Prompt)?;
        match field.validate(&value) {
            Ok(()) => return Ok(value),
            Err(message) => {
                tracing::debug!(field = field.key(), %message, "answer rejected");
                prompter.reject(&message).map_err(ProposalError::Prompt)?;
            }
        }
    }
}

/// Run the whole question flow.
///
/// Only prompt I/O failures are returned; validation failures are handled by
/// asking again.
pub fn collect<P: Prompter + ?Sized>(prompter: &mut P) -> Result<ProposalAnswers, ProposalError> {
    let proposal_name = ask(prompter, Field::ProposalName)?;
    let nickname = ask(prompter, Field::Nickname)?;
    let fullname = ask(prompter, Field::Fullname)?;
    let email = ask(prompter, Field::Email)?;
    let include_spec = prompter.confirm(SPEC_PROMPT, true).map_err(ProposalError::Prompt)?;

    ProposalAnswers::new(proposal_name, nickname, fullname, email, include_spec)
}
