//! core::book
//!
//! Books and the availability state machine.
//!
//! # State Machine
//!
//! `availability` has two states, `Available` and `Borrowed`:
//!
//! - initial state is `Available`
//! - `Available -> Borrowed` on a successful [`Book::borrow`]
//! - any [`Book::return_book`] lands in `Available`, including the
//!   `Available -> Available` no-op
//!
//! Returning a book never checks that it was actually borrowed, and nothing
//! tracks which user holds which book. That permissive behavior is kept
//! deliberately.
//!
//! # Example
//!
//! ```
//! use circulate::core::book::{Book, BorrowError};
//! use circulate::core::types::BookId;
//!
//! let mut book = Book::new(BookId::new(1), "The Great Gatsby", "F. Scott Fitzgerald");
//! assert!(book.is_available());
//!
//! book.borrow().unwrap();
//! assert!(!book.is_available());
//! assert!(matches!(book.borrow(), Err(BorrowError::AlreadyBorrowed { .. })));
//!
//! book.return_book();
//! assert!(book.is_available());
//! ```

use crate::core::types::BookId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from borrow operations.
///
/// Both variants are ordinary outcomes of circulation, not fatal conditions.
/// The display strings are the exact messages shown to users.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BorrowError {
    /// The book itself rejected the borrow: it is already checked out.
    #[error("Sorry, {title} is already borrowed.")]
    AlreadyBorrowed { title: String },

    /// A user declined to borrow after seeing the book was unavailable.
    /// Distinct message path from [`BorrowError::AlreadyBorrowed`].
    #[error("The book is not available for borrowing.")]
    NotAvailable,
}

/// Whether a book is eligible to be borrowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// On the shelf, eligible for borrowing.
    #[default]
    Available,
    /// Checked out.
    Borrowed,
}

/// A book in the catalog.
///
/// Identity is immutable after construction; only `availability` mutates,
/// and only through [`Book::borrow`] and [`Book::return_book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    availability: Availability,
}

impl Book {
    /// Create a new book. Availability starts `Available`.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            availability: Availability::Available,
        }
    }

    /// The book's identifier.
    pub fn id(&self) -> BookId {
        self.id
    }

    /// The book's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether the book is currently eligible to be borrowed.
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Borrow the book.
    ///
    /// Flips `Available -> Borrowed` on success.
    ///
    /// # Errors
    ///
    /// Returns [`BorrowError::AlreadyBorrowed`] if the book is checked out;
    /// the state is left unchanged.
    pub fn borrow(&mut self) -> Result<(), BorrowError> {
        if self.is_available() {
            self.availability = Availability::Borrowed;
            Ok(())
        } else {
            Err(BorrowError::AlreadyBorrowed {
                title: self.title.clone(),
            })
        }
    }

    /// Return the book.
    ///
    /// Unconditionally lands in `Available`. Idempotent: returning a book
    /// that was never borrowed is a state-wise no-op.
    pub fn return_book(&mut self) {
        self.availability = Availability::Available;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Title: {}, Author: {}, Available: {}",
            self.id,
            self.title,
            self.author,
            self.is_available()
        )
    }
}
