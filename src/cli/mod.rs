//! cli
//!
//! Command-line interface layer for Circulate.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT touch registry state directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers in [`commands`]. Handlers build a registry from a catalog seed
//! and drive the [`crate::core`] types; the registry is always an explicit
//! value, never global state.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::ui::Verbosity;
use anyhow::Result;

/// Shared context threaded from global flags to command handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal status output).
    pub quiet: bool,
}

impl Context {
    /// The verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        debug: cli.debug,
        quiet: cli.quiet,
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
