//! Relationship fields between books and authors
//!
//! The scalar fields come straight off the library records; these
//! resolvers add the cross-references so a query can walk book → author
//! and author → books without extra round trips.

use crate::library::{Author, Book, Library};
use async_graphql::{ComplexObject, Context};

#[ComplexObject]
impl Book {
    /// The author of this book
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        ctx.data_unchecked::<Library>().author_of(self)
    }
}

#[ComplexObject]
impl Author {
    /// Every book by this author
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx.data_unchecked::<Library>().books_of(self)
    }
}
