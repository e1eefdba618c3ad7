//! core::user
//!
//! The [`Borrower`] contract and its two variants, [`Patron`] and
//! [`Librarian`].
//!
//! # Design
//!
//! Each variant is a small value type wrapping a shared [`UserCard`]. The
//! `Borrower` trait requires `borrow_book` so variants may diverge, and
//! provides `return_book` as shared behavior. Today Patron and Librarian
//! borrow identically; the contract still allows them to differ.
//!
//! Reporting is a separate capability (see [`crate::core::report`]) exposed
//! through [`Borrower::as_report_generator`], implemented only by Librarian.
//! Patrons never carry reporting stubs.
//!
//! No construction-time validation exists: age and id accept any integer.

use crate::core::book::{Book, BorrowError};
use crate::core::report::ReportGenerator;
use crate::core::types::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant of user a catalog entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May borrow and return books.
    Patron,
    /// May borrow and return books, and generate reports.
    Librarian,
}

/// Identity state shared by all user variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    id: UserId,
    name: String,
    age: i32,
}

impl UserCard {
    /// Create a card. No validation; any age or id is accepted.
    pub fn new(id: UserId, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// The user's identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The user's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's age.
    pub fn age(&self) -> i32 {
        self.age
    }
}

impl fmt::Display for UserCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User ID: {}, Name: {}, Age: {}", self.id, self.name, self.age)
    }
}

/// The polymorphic user contract.
///
/// Every variant must decide how to borrow; returning is shared behavior
/// that forwards to the book. Nothing verifies that the returning user ever
/// borrowed this particular book (no borrow-ownership tracking exists).
pub trait Borrower {
    /// The user's identity card.
    fn card(&self) -> &UserCard;

    /// The user's variant.
    fn role(&self) -> Role;

    /// Attempt to borrow a book.
    ///
    /// # Errors
    ///
    /// Returns a [`BorrowError`] when the book cannot be borrowed; the
    /// book's state is left unchanged.
    fn borrow_book(&self, book: &mut Book) -> Result<(), BorrowError>;

    /// Return a book. Forwards to [`Book::return_book`]; always succeeds.
    fn return_book(&self, book: &mut Book) {
        book.return_book();
    }

    /// The reporting capability, if this variant carries it.
    fn as_report_generator(&self) -> Option<&dyn ReportGenerator> {
        None
    }
}

/// A library user who may only borrow and return books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    card: UserCard,
}

impl Patron {
    /// Create a patron.
    pub fn new(id: UserId, name: impl Into<String>, age: i32) -> Self {
        Self {
            card: UserCard::new(id, name, age),
        }
    }
}

impl Borrower for Patron {
    fn card(&self) -> &UserCard {
        &self.card
    }

    fn role(&self) -> Role {
        Role::Patron
    }

    fn borrow_book(&self, book: &mut Book) -> Result<(), BorrowError> {
        if book.is_available() {
            book.borrow()
        } else {
            Err(BorrowError::NotAvailable)
        }
    }
}

/// A library user who may also generate catalog and user reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Librarian {
    card: UserCard,
}

impl Librarian {
    /// Create a librarian.
    pub fn new(id: UserId, name: impl Into<String>, age: i32) -> Self {
        Self {
            card: UserCard::new(id, name, age),
        }
    }
}

impl Borrower for Librarian {
    fn card(&self) -> &UserCard {
        &self.card
    }

    fn role(&self) -> Role {
        Role::Librarian
    }

    // Same decision logic as Patron today; the trait keeps the door open
    // for divergent behavior per variant.
    fn borrow_book(&self, book: &mut Book) -> Result<(), BorrowError> {
        if book.is_available() {
            book.borrow()
        } else {
            Err(BorrowError::NotAvailable)
        }
    }

    fn as_report_generator(&self) -> Option<&dyn ReportGenerator> {
        Some(self)
    }
}

impl ReportGenerator for Librarian {}
