//! core::registry
//!
//! The registry owning every book and user in the catalog.
//!
//! # Design
//!
//! The registry is an explicit value: constructed once by the driver and
//! passed by reference to whatever needs it. There is no process-wide
//! singleton and no global accessor; tests build a fresh registry each.
//!
//! Both sequences preserve registration order, which is the order all
//! listings use. There is no duplicate detection, no capacity limit, and
//! no removal operation.

use crate::core::book::Book;
use crate::core::types::BookId;
use crate::core::user::Borrower;

/// The collection of all known books and users.
#[derive(Default)]
pub struct Registry {
    books: Vec<Book>,
    users: Vec<Box<dyn Borrower>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book. Appends; duplicates are not detected.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Register a user. Appends; duplicates are not detected.
    pub fn add_user(&mut self, user: Box<dyn Borrower>) {
        self.users.push(user);
    }

    /// All books, in registration order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All users, in registration order.
    pub fn users(&self) -> &[Box<dyn Borrower>] {
        &self.users
    }

    /// Look up a book by id for mutation. Linear scan, first match wins
    /// (ids are unique by convention only).
    pub fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id() == id)
    }

    /// Split access to mutable books alongside the user list.
    ///
    /// Circulation needs a user driving a mutation on a book while both
    /// live in the registry; splitting the borrows keeps that safe.
    pub fn circulation_mut(&mut self) -> (&mut [Book], &[Box<dyn Borrower>]) {
        (&mut self.books, &self.users)
    }

    /// Display lines for every book, in registration order.
    pub fn book_lines(&self) -> Vec<String> {
        self.books.iter().map(|b| b.to_string()).collect()
    }

    /// Display lines for every user, in registration order.
    pub fn user_lines(&self) -> Vec<String> {
        self.users.iter().map(|u| u.card().to_string()).collect()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("books", &self.books)
            .field("users", &self.user_lines())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::UserId;
    use crate::core::user::{Librarian, Patron};

    fn seeded() -> Registry {
        let mut registry = Registry::new();
        registry.add_book(Book::new(
            BookId::new(1),
            "The Great Gatsby",
            "F. Scott Fitzgerald",
        ));
        registry.add_book(Book::new(BookId::new(2), "1984", "George Orwell"));
        registry.add_user(Box::new(Patron::new(UserId::new(105), "Alok", 24)));
        registry.add_user(Box::new(Librarian::new(UserId::new(200), "Mr. Ram", 40)));
        registry
    }

    #[test]
    fn listings_preserve_registration_order() {
        let registry = seeded();
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
    fn book_mut_finds_by_id() {
        let mut registry = seeded();
        let book = registry.book_mut(BookId::new(2)).unwrap();
        assert_eq!(book.title(), "1984");
        book.borrow().unwrap();
        assert!(!registry.books()[1].is_available());
    }

    #[test]
    fn book_mut_misses_unknown_ids() {
        let mut registry = seeded();
        assert!(registry.book_mut(BookId::new(99)).is_none());
    }

    #[test]
    fn duplicate_ids_are_not_rejected_and_first_match_wins() {
        let mut registry = Registry::new();
        registry.add_book(Book::new(BookId::new(7), "First", "A"));
        registry.add_book(Book::new(BookId::new(7), "Second", "B"));
        assert_eq!(registry.books().len(), 2);
        assert_eq!(registry.book_mut(BookId::new(7)).unwrap().title(), "First");
    }

    #[test]
    fn circulation_split_lets_a_user_mutate_a_book() {
        let mut registry = seeded();
        let (books, users) = registry.circulation_mut();
        let patron = &users[0];
        patron.borrow_book(&mut books[0]).unwrap();
        assert!(!registry.books()[0].is_available());
    }

    #[test]
    fn shared_reference_sees_accumulated_state() {
        // The explicit-value replacement for singleton identity: every
        // borrower of the same registry observes the same lists.
        let mut registry = Registry::new();
        let r = &mut registry;
        r.add_book(Book::new(BookId::new(1), "A", "a"));
        r.add_book(Book::new(BookId::new(2), "B", "b"));
        assert_eq!(r.books().len(), 2);
        assert_eq!(registry.books().len(), 2);
    }
}
