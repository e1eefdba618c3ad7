//! cli::commands
//!
//! Command handlers. Each handler builds its registry from the catalog seed
//! and writes its output to stdout.

pub mod completion;
pub mod demo;
pub mod list;

use crate::catalog::CatalogFile;
use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::registry::Registry;
use crate::ui::output;
use anyhow::Result;
use std::path::Path;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Demo { catalog } => demo::demo(ctx, catalog.as_deref()),
        Command::Books { catalog } => list::books(ctx, catalog.as_deref()),
        Command::Users { catalog } => list::users(ctx, catalog.as_deref()),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Build a registry from `--catalog` if given, else from the built-in seed.
pub(crate) fn load_registry(ctx: &Context, catalog: Option<&Path>) -> Result<Registry> {
    let seed = match catalog {
        Some(path) => {
            output::debug(
                format!("loading catalog from {}", path.display()),
                ctx.verbosity(),
            );
            CatalogFile::load(path)?
        }
        None => {
            output::debug("using built-in catalog seed", ctx.verbosity());
            CatalogFile::default_seed()
        }
    };
    Ok(seed.into_registry())
}
