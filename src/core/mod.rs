//! core
//!
//! Core domain types and operations for Circulate.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BookId, UserId
//! - [`book`] - Books and the availability state machine
//! - [`user`] - The Borrower contract and its Patron/Librarian variants
//! - [`registry`] - The registry owning all books and users
//! - [`report`] - The reporting capability (librarians only)
//!
//! # Design Principles
//!
//! - Strong typing keeps book and user identifiers from mixing
//! - Borrow outcomes are result values, not printed side effects
//! - The registry is an explicit value passed by reference, never global state

pub mod book;
pub mod registry;
pub mod report;
pub mod types;
pub mod user;
