//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BookId`] - Book identifier
//! - [`UserId`] - User identifier
//!
//! Identifiers are plain integers with no validation and no enforced
//! uniqueness; the newtypes exist so a book id can never be passed where a
//! user id is expected. Any integer is accepted, including zero and
//! negative values.
//!
//! # Examples
//!
//! ```
//! use circulate::core::types::{BookId, UserId};
//!
//! let book = BookId::new(1);
//! assert_eq!(book.value(), 1);
//!
//! // No validation: unusual values are representable
//! let user = UserId::new(-7);
//! assert_eq!(user.to_string(), "-7");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A book identifier.
///
/// Unique by convention only; the registry never enforces uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Create a new book id. Accepts any integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user identifier.
///
/// Unique by convention only, same as [`BookId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user id. Accepts any integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
