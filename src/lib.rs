//! Circulate - A small library circulation catalog CLI
//!
//! Circulate models a minimal library: books with an availability state,
//! patrons and librarians who borrow and return them, and a registry that
//! owns every book and user and renders listings and reports. The `circ`
//! binary seeds a catalog (built-in or from a TOML file) and exercises the
//! circulation flows from the command line.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Domain types: books, users, borrowing rules, registry, reports
//! - [`catalog`] - Catalog seed schema and TOML loading
//! - [`ui`] - Output formatting and verbosity handling
//!
//! # Correctness Invariants
//!
//! Circulate maintains the following invariants:
//!
//! 1. A book's availability starts `Available` and leaves it only through a
//!    successful borrow
//! 2. Returning a book always lands in `Available`, no matter the prior state
//! 3. Registry listings preserve registration order exactly
//! 4. Borrow failures are ordinary result values, never panics

pub mod catalog;
pub mod cli;
pub mod core;
pub mod ui;
