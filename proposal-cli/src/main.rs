//! create-proposal — scaffold a new proposal directory from templates.
//!
//! # Usage
//!
//! ```text
//! create-proposal
//! ```
//!
//! Everything else is asked interactively. Set `PROPOSAL_TEMPLATES_DIR` to
//! use `<dir>/base` and `<dir>/additional` instead of the bundled templates,
//! and `RUST_LOG` (default `warn`) for diagnostics on stderr.

mod prompt;

use anyhow::{Context, Result};
use clap::Parser;

use proposal_scaffold::{Outcome, ScaffoldConfig};

use prompt::TerminalPrompter;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "create-proposal",
    version,
    about = "Scaffold a new proposal directory from templates",
    long_about = None,
)]
struct Cli {}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = ScaffoldConfig::from_env().context("failed to resolve configuration")?;
    let mut prompter = TerminalPrompter::default();
    let outcome = proposal_scaffold::run(&config, &mut prompter).with_context(|| {
        format!("failed to scaffold proposal in '{}'", config.cwd.display())
    })?;

    match outcome {
        Outcome::Scaffolded { .. } => println!("done"),
        Outcome::Declined { directory } => {
            tracing::debug!(path = %directory.display(), "existing directory kept");
        }
    }
    Ok(())
}
