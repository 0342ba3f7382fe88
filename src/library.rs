//! In-memory author/book collections
//!
//! Two append-only lists with a foreign-key-style link (book → author)
//! resolved by linear scan. The lists live behind a shared handle rather
//! than module state so the schema and the tests can carry isolated
//! instances; the stock dataset ships in [`Library::seeded`].
//!
//! None of these operations can fail: an absent match is an empty result,
//! and appends perform no uniqueness or referential checks.

use std::sync::{Arc, RwLock};

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// An author of one or more books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// A book written by an author
///
/// `author_id` is an unchecked reference: appending a book never validates
/// that a matching author exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author_id: i64,
}

#[derive(Debug, Default)]
struct Collections {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// Shared handle to the in-memory collections
///
/// Ids are assigned as (current length + 1). Holding the write lock across
/// the read-length-then-append step keeps that policy consistent under
/// concurrent mutations.
#[derive(Debug, Clone, Default)]
pub struct Library {
    inner: Arc<RwLock<Collections>>,
}

impl Library {
    /// Empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Collections populated with the stock dataset
    pub fn seeded() -> Self {
        let authors: Vec<Author> = [
            (1, "J. K. Rowling"),
            (2, "J. R. R. Tolkien"),
            (3, "Brent Weeks"),
        ]
        .into_iter()
        .map(|(id, name)| Author {
            id,
            name: name.to_string(),
        })
        .collect();

        let books: Vec<Book> = [
            (1, "Harry Potter and the Chamber of Secrets", 1),
            (2, "Harry Potter and the Prisoner of Azkaban", 1),
            (3, "Harry Potter and the Goblet of Fire", 1),
            (4, "The Fellowship of the Ring", 2),
            (5, "The Two Towers", 2),
            (6, "The Return of the King", 2),
            (7, "The Way of Shadows", 3),
            (8, "Beyond the Shadows", 3),
        ]
        .into_iter()
        .map(|(id, name, author_id)| Book {
            id,
            name: name.to_string(),
            author_id,
        })
        .collect();

        Self {
            inner: Arc::new(RwLock::new(Collections { authors, books })),
        }
    }

    /// First book with the given id, or nothing
    pub fn book(&self, id: i64) -> Option<Book> {
        let inner = self.inner.read().unwrap();
        inner.books.iter().find(|book| book.id == id).cloned()
    }

    /// Every book, in insertion order
    pub fn books(&self) -> Vec<Book> {
        self.inner.read().unwrap().books.clone()
    }

    /// First author with the given id, or nothing
    pub fn author(&self, id: i64) -> Option<Author> {
        let inner = self.inner.read().unwrap();
        inner.authors.iter().find(|author| author.id == id).cloned()
    }

    /// Every author, in insertion order
    pub fn authors(&self) -> Vec<Author> {
        self.inner.read().unwrap().authors.clone()
    }

    /// The author a book refers to, or nothing if `author_id` matches no one
    pub fn author_of(&self, book: &Book) -> Option<Author> {
        self.author(book.author_id)
    }

    /// Every book carrying the given author's id, in insertion order
    pub fn books_of(&self, author: &Author) -> Vec<Book> {
        let inner = self.inner.read().unwrap();
        inner
            .books
            .iter()
            .filter(|book| book.author_id == author.id)
            .cloned()
            .collect()
    }

    /// Append a book with the next id; the `author_id` reference is not
    /// checked against the author list
    pub fn add_book(&self, name: String, author_id: i64) -> Book {
        let mut inner = self.inner.write().unwrap();
        let book = Book {
            id: inner.books.len() as i64 + 1,
            name,
            author_id,
        };
        inner.books.push(book.clone());
        book
    }

    /// Append an author with the next id
    pub fn add_author(&self, name: String) -> Author {
        let mut inner = self.inner.write().unwrap();
        let author = Author {
            id: inner.authors.len() as i64 + 1,
            name,
        };
        inner.authors.push(author.clone());
        author
    }
}
