//! `dialoguer`-backed [`Prompter`] on stderr.

use std::io;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use proposal_core::Prompter;

#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(io::Error::other)
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        eprintln!("{} {}", "✘".red(), message.red());
        Ok(())
    }
}
