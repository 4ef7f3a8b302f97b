//! The terminal seam.
//!
//! Everything interactive goes through [`Prompter`]. The binary implements it
//! on top of `dialoguer`; `ScriptedPrompter` (behind the `test-util` feature)
//! replays canned answers so the question flow and the overwrite flow can run
//! without a terminal.

#[cfg(any(test, feature = "test-util"))]
use std::collections::VecDeque;
use std::io;

/// Line-oriented questions and yes/no confirmations.
pub trait Prompter {
    /// Ask for a line of text. Empty input must be returned as `""`, not
    /// rejected; validation is the caller's job.
    fn input(&mut self, prompt: &str) -> io::Result<String>;

    /// Ask a yes/no question; pressing enter picks `default`.
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;

    /// Tell the user why the last answer was refused.
    fn reject(&mut self, message: &str) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// ScriptedPrompter
// ---------------------------------------------------------------------------

/// Replays queued answers and records what was asked.
///
/// Running out of queued answers is reported as
/// [`io::ErrorKind::UnexpectedEof`], so an unexpected extra question fails
/// loudly instead of hanging.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    confirms: VecDeque<Option<bool>>,
    asked: Vec<String>,
    rejections: Vec<String>,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one text answer.
    pub fn with_input(mut self, answer: impl Into<String>) -> Self {
        self.inputs.push_back(answer.into());
        self
    }

    /// Queue several text answers in order.
    pub fn with_inputs<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(answers.into_iter().map(Into::into));
        self
    }

    /// Queue an explicit yes/no answer.
    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(Some(answer));
        self
    }

    /// Queue a bare <enter> on a confirmation, taking its default.
    pub fn with_default_confirm(mut self) -> Self {
        self.confirms.push_back(None);
        self
    }

    /// Every prompt shown, in order (text and confirmations).
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Every rejection message shown, in order.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Whether all queued answers were consumed.
    pub fn is_exhausted(&self) -> bool {
        self.inputs.is_empty() && self.confirms.is_empty()
    }
}

#[cfg(any(test, feature = "test-util"))]
fn exhausted(prompt: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("no scripted answer left for {prompt:?}"),
    )
}

#[cfg(any(test, feature = "test-util"))]
impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_owned());
        self.inputs.pop_front().ok_or_else(|| exhausted(prompt))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        self.asked.push(prompt.to_owned());
        let answer = self.confirms.pop_front().ok_or_else(|| exhausted(prompt))?;
        Ok(answer.unwrap_or(default))
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        self.rejections.push(message.to_owned());
        Ok(())
    }
}
