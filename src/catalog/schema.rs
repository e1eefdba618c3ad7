//! catalog::schema
//!
//! Serde schema for catalog seed files, plus the built-in default seed.
//!
//! The schema is strict: unknown keys are rejected so a typoed field fails
//! loudly instead of silently seeding a half-empty catalog.

use crate::core::book::Book;
use crate::core::registry::Registry;
use crate::core::types::{BookId, UserId};
use crate::core::user::{Borrower, Librarian, Patron, Role};
use serde::{Deserialize, Serialize};

/// One book entry in a catalog seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookSeed {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

/// One user entry in a catalog seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSeed {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub role: Role,
}

/// A full catalog seed: books and users in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub books: Vec<BookSeed>,
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

impl CatalogFile {
    /// The built-in seed: two books, one patron, one librarian.
    pub fn default_seed() -> Self {
        Self {
            books: vec![
                BookSeed {
                    id: BookId::new(1),
                    title: "The Great Gatsby".to_string(),
                    author: "F. Scott Fitzgerald".to_string(),
                },
                BookSeed {
                    id: BookId::new(2),
                    title: "1984".to_string(),
                    author: "George Orwell".to_string(),
                },
            ],
            users: vec![
                UserSeed {
                    id: UserId::new(105),
                    name: "Alok".to_string(),
                    age: 24,
                    role: Role::Patron,
                },
                UserSeed {
                    id: UserId::new(200),
                    name: "Mr. Ram".to_string(),
                    age: 40,
                    role: Role::Librarian,
                },
            ],
        }
    }

    /// Materialize the seed into a fresh registry, preserving file order.
    pub fn into_registry(self) -> Registry {
        let mut registry = Registry::new();
        for book in self.books {
            registry.add_book(Book::new(book.id, book.title, book.author));
        }
        for user in self.users {
            let boxed: Box<dyn Borrower> = match user.role {
                Role::Patron => Box::new(Patron::new(user.id, user.name, user.age)),
                Role::Librarian => Box::new(Librarian::new(user.id, user.name, user.age)),
            };
            registry.add_user(boxed);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_matches_the_stock_demo_data() {
        let registry = CatalogFile::default_seed().into_registry();
        assert_eq!(
            registry.book_lines(),
            vec![
                "Book ID: 1, Title: The Great Gatsby, Author: F. Scott Fitzgerald, Available: true",
                "Book ID: 2, Title: 1984, Author: George Orwell, Available: true",
            ]
        );
        assert_eq!(
            registry.user_lines(),
            vec![
                "User ID: 105, Name: Alok, Age: 24",
                "User ID: 200, Name: Mr. Ram, Age: 40",
            ]
        );
    }

    #[test]
    fn into_registry_assigns_roles() {
        let registry = CatalogFile::default_seed().into_registry();
        let roles: Vec<Role> = registry.users().iter().map(|u| u.role()).collect();
        assert_eq!(roles, vec![Role::Patron, Role::Librarian]);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Patron).unwrap(), "\"patron\"");
        assert_eq!(
            serde_json::to_string(&Role::Librarian).unwrap(),
            "\"librarian\""
        );
    }

    #[test]
    fn seed_round_trips_through_toml() {
        let seed = CatalogFile::default_seed();
        let text = toml::to_string(&seed).unwrap();
        let parsed: CatalogFile = toml::from_str(&text).unwrap();
        assert_eq!(parsed, seed);
    }
}
