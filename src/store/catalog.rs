//! In-memory user and book catalogs
//!
//! Both catalogs are id-keyed `IndexMap`s so iteration order is insertion
//! order — the unique-users report lists the catalog in exactly the order the
//! entries were first loaded, even when a later load overwrites an entry.

use crate::types::{Book, User};
use indexmap::IndexMap;

/// The two keyed collections reports resolve display names against
///
/// Inserting an id that already exists replaces the stored entry (last write
/// wins) without disturbing its position. Entries are never removed.
#[derive(Debug, Default)]
pub struct Catalog {
    users: IndexMap<String, User>,
    books: IndexMap<String, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Insert or overwrite a user by id
    pub fn upsert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Insert or overwrite a book by id
    pub fn upsert_book(&mut self, book: Book) {
        self.books.insert(book.id.clone(), book);
    }

    pub fn has_user(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn has_book(&self, id: &str) -> bool {
        self.books.contains_key(id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    /// Users in insertion order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Books in insertion order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
