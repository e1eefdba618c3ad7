//! completion command - Generate shell completion scripts for `circ`

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

impl Shell {
    /// The clap_complete generator for this shell.
    fn generator(self) -> CompletionShell {
        match self {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
        }
    }
}

/// Generate a completion script for the requested shell on stdout.
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell.generator(), &mut cmd, &name, &mut std::io::stdout());
    Ok(())
}
