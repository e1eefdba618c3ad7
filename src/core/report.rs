//! core::report
//!
//! The reporting capability, implemented only by librarians.
//!
//! # Design
//!
//! Report generation takes the registry and an output writer as explicit
//! inputs. Nothing here reaches into global state, and tests capture the
//! report bodies by passing a `Vec<u8>` writer.
//!
//! Each report prints its generation line, then a blank line, then the
//! listing header, then one display line per entity in registration order.

use crate::core::registry::Registry;
use std::io::{self, Write};

/// The reporting capability.
///
/// Kept separate from [`crate::core::user::Borrower`] so variants without
/// reporting never carry stubs.
pub trait ReportGenerator {
    /// Write the book report: every book in registration order.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn generate_report(&self, registry: &Registry, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Generating book report...")?;
        writeln!(out)?;
        writeln!(out, "Library Books:")?;
        for line in registry.book_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Write the user report: every user in registration order.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn generate_user_report(&self, registry: &Registry, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Generating user report...")?;
        writeln!(out)?;
        writeln!(out, "Library Users:")?;
        for line in registry.user_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
