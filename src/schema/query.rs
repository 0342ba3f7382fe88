//! Root query resolvers

use crate::db;
use crate::db::Song;
use crate::library::{Author, Book, Library};
use async_graphql::{Context, Object, Result};
use sqlx::SqlitePool;
use tracing::error;

/// Root of all read operations
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: i64) -> Option<Book> {
        ctx.data_unchecked::<Library>().book(id)
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx.data_unchecked::<Library>().books()
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: i64) -> Option<Author> {
        ctx.data_unchecked::<Library>().author(id)
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        ctx.data_unchecked::<Library>().authors()
    }

    /// A single song
    async fn song(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Song>> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        match db::songs::get_song(pool, id).await {
            Ok(song) => Ok(song),
            Err(e) => {
                error!("Failed to load song {}: {}", id, e);
                Err(e.into())
            }
        }
    }

    /// List of all songs
    async fn songs(&self, ctx: &Context<'_>) -> Result<Vec<Song>> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        match db::songs::list_songs(pool).await {
            Ok(songs) => Ok(songs),
            Err(e) => {
                error!("Failed to list songs: {}", e);
                Err(e.into())
            }
        }
    }
}
