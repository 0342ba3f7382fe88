//! Root mutation resolvers

use crate::db;
use crate::db::{Song, SongChanges};
use crate::library::{Author, Book, Library};
use async_graphql::{Context, Object, Result};
use sqlx::SqlitePool;
use tracing::{error, info};

/// Root of all write operations
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i64) -> Book {
        info!("Adding book: {}", name);
        ctx.data_unchecked::<Library>().add_book(name, author_id)
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Author {
        info!("Adding author: {}", name);
        ctx.data_unchecked::<Library>().add_author(name)
    }

    /// Add a song
    async fn add_song(
        &self,
        ctx: &Context<'_>,
        title: String,
        artist: String,
        release_year: i64,
    ) -> Result<Option<Song>> {
        info!("Adding song: {} by {}", title, artist);
        let pool = ctx.data_unchecked::<SqlitePool>();
        match db::songs::add_song(pool, &title, &artist, release_year).await {
            Ok(song) => Ok(song),
            Err(e) => {
                error!("Failed to add song {}: {}", title, e);
                Err(e.into())
            }
        }
    }

    /// Update the supplied fields of a song
    async fn update_song(
        &self,
        ctx: &Context<'_>,
        id: i64,
        title: Option<String>,
        artist: Option<String>,
        release_year: Option<i64>,
    ) -> Result<Option<Song>> {
        info!("Updating song {}", id);
        let pool = ctx.data_unchecked::<SqlitePool>();
        let changes = SongChanges {
            title,
            artist,
            release_year,
        };
        match db::songs::update_song(pool, id, changes).await {
            Ok(song) => Ok(song),
            Err(e) => {
                error!("Failed to update song {}: {}", id, e);
                Err(e.into())
            }
        }
    }

    /// Delete a song
    async fn delete_song(&self, ctx: &Context<'_>, id: i64) -> Result<String> {
        info!("Deleting song {}", id);
        let pool = ctx.data_unchecked::<SqlitePool>();
        match db::songs::delete_song(pool, id).await {
            Ok(message) => Ok(message),
            Err(e) => {
                error!("Failed to delete song {}: {}", id, e);
                Err(e.into())
            }
        }
    }
}
