//! ui
//!
//! User-facing output utilities.
//!
//! # Design
//!
//! Command bodies (reports, listings, demo transcript) write to stdout
//! directly; debug and error messages go through [`output`] so verbosity
//! is handled consistently.

pub mod output;

pub use output::{error, Verbosity};
