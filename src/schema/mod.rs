//! GraphQL schema and resolvers
//!
//! The whole API hangs off two roots:
//!
//! - **Queries**: `book`, `books`, `author`, `authors`, `song`, `songs`
//! - **Mutations**: `addBook`, `addAuthor`, `addSong`, `updateSong`,
//!   `deleteSong`
//!
//! Book and author fields read the in-memory [`Library`]; song fields go
//! through the database pool. Both are attached to the schema as context
//! data so resolvers stay free of plumbing arguments.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::Library;
use async_graphql::{EmptySubscription, Schema};
use sqlx::SqlitePool;

/// The executable schema
pub type TunebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with its shared data attached
pub fn build_schema(pool: SqlitePool, library: Library) -> TunebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .data(library)
        .finish()
}
