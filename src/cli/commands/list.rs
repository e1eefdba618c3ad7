//! books/users commands - Print catalog listings
//!
//! Listings print one display line per entity in registration order, under
//! a header preceded by a blank line.

use crate::cli::commands::load_registry;
use crate::cli::Context;
use anyhow::Result;
use std::path::Path;

/// List every book in the catalog.
pub fn books(ctx: &Context, catalog: Option<&Path>) -> Result<()> {
    let registry = load_registry(ctx, catalog)?;
    println!();
    println!("Library Books:");
    for line in registry.book_lines() {
        println!("{}", line);
    }
    Ok(())
}

/// List every user in the catalog.
pub fn users(ctx: &Context, catalog: Option<&Path>) -> Result<()> {
    let registry = load_registry(ctx, catalog)?;
    println!();
    println!("Library Users:");
    for line in registry.user_lines() {
        println!("{}", line);
    }
    Ok(())
}
