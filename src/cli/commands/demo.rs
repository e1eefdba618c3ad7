//! demo command - Run the scripted circulation sequence
//!
//! The transcript is fixed: the first patron borrows and returns the first
//! book, then the first librarian generates both reports. Borrow and return
//! outcomes print as messages; neither path is a process error.

use crate::cli::commands::load_registry;
use crate::cli::Context;
use crate::core::user::{Borrower, Role};
use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::Path;

/// Run the scripted circulation demo.
pub fn demo(ctx: &Context, catalog: Option<&Path>) -> Result<()> {
    let mut registry = load_registry(ctx, catalog)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Borrow/return leg: needs a book mutable while the user list stays
    // readable, hence the split borrow.
    {
        let (books, users) = registry.circulation_mut();
        let patron = users
            .iter()
            .find(|u| u.role() == Role::Patron)
            .context("catalog has no patron")?;
        let book = books.first_mut().context("catalog has no books")?;

        writeln!(out)?;
        writeln!(out, "--- Patron borrowing a book ---")?;
        match patron.borrow_book(book) {
            Ok(()) => writeln!(out, "Book borrowed: {}", book.title())?,
            Err(err) => writeln!(out, "{}", err)?,
        }

        writeln!(out, "--- Patron returning a book ---")?;
        patron.return_book(book);
        writeln!(out, "Book returned: {}", book.title())?;
    }

    // Reporting leg: the librarian's capability takes the registry and the
    // writer as explicit inputs.
    let reporter = registry
        .users()
        .iter()
        .find_map(|u| u.as_report_generator())
        .context("catalog has no librarian")?;

    writeln!(out)?;
    writeln!(out, "--- Librarian generating reports ---")?;
    reporter.generate_report(&registry, &mut out)?;
    reporter.generate_user_report(&registry, &mut out)?;

    Ok(())
}
