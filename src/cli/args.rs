//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal status output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Circulate - A small library circulation catalog CLI
#[derive(Parser, Debug)]
#[command(name = "circ")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal status output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the scripted circulation demo
    #[command(
        name = "demo",
        long_about = "Run the scripted circulation demo.\n\n\
            Seeds a catalog (built-in, or from a TOML file via --catalog), then \
            walks the fixed sequence: the first patron borrows and returns the \
            first book, and the first librarian generates the book and user \
            reports. All outcomes appear on stdout; borrow failures are part of \
            the transcript, not process errors."
    )]
    Demo {
        /// Seed the catalog from a TOML file instead of the built-in data
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },

    /// List every book in the catalog, in registration order
    Books {
        /// Seed the catalog from a TOML file instead of the built-in data
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },

    /// List every user in the catalog, in registration order
    Users {
        /// Seed the catalog from a TOML file instead of the built-in data
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported for completion generation.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
