//! Song row operations
//!
//! Plain CRUD over the songs table. Lookups that find nothing return
//! `None` rather than an error; only the database itself (or an empty
//! update) can fail these calls.

use crate::error::Error;
use crate::Result;
use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// A song row
///
/// The stored column is `releaseYear`; the Rust field follows crate
/// naming and maps back to it on both the row and API surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, SimpleObject)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    #[sqlx(rename = "releaseYear")]
    pub release_year: i64,
}

/// Field-level changes to apply to a stored song
///
/// Absent fields are left untouched by [`update_song`].
#[derive(Debug, Clone, Default)]
pub struct SongChanges {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub release_year: Option<i64>,
}

impl SongChanges {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.release_year.is_none()
    }
}

/// Every song, in rowid order
pub async fn list_songs(pool: &SqlitePool) -> Result<Vec<Song>> {
    let songs = sqlx::query_as::<_, Song>("SELECT * FROM songs")
        .fetch_all(pool)
        .await?;

    Ok(songs)
}

/// One song by id, or `None` when no row matches
pub async fn get_song(pool: &SqlitePool, id: i64) -> Result<Option<Song>> {
    let song = sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(song)
}

/// Insert a song and return the stored row
///
/// The id comes from the insert itself, so the returned row reflects
/// exactly what the table now holds.
pub async fn add_song(
    pool: &SqlitePool,
    title: &str,
    artist: &str,
    release_year: i64,
) -> Result<Option<Song>> {
    let result = sqlx::query("INSERT INTO songs (title, artist, releaseYear) VALUES (?, ?, ?)")
        .bind(title)
        .bind(artist)
        .bind(release_year)
        .execute(pool)
        .await?;

    get_song(pool, result.last_insert_rowid()).await
}

/// Apply the present fields of `changes` to one song, then return the
/// row as stored
///
/// Returns `None` when no row has the given id. An empty change set is
/// rejected rather than silently issuing a no-op UPDATE.
pub async fn update_song(pool: &SqlitePool, id: i64, changes: SongChanges) -> Result<Option<Song>> {
    if changes.is_empty() {
        return Err(Error::InvalidInput(
            "no fields supplied for song update".to_string(),
        ));
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE songs SET ");
    {
        let mut clause = builder.separated(", ");
        if let Some(title) = changes.title {
            clause.push("title = ").push_bind_unseparated(title);
        }
        if let Some(artist) = changes.artist {
            clause.push("artist = ").push_bind_unseparated(artist);
        }
        if let Some(release_year) = changes.release_year {
            clause
                .push("releaseYear = ")
                .push_bind_unseparated(release_year);
        }
    }
    builder.push(" WHERE id = ").push_bind(id);

    builder.build().execute(pool).await?;

    get_song(pool, id).await
}

/// Delete a song by id and return a confirmation message
///
/// Deleting an id that no longer exists is a no-op and still confirms;
/// callers treat delete as idempotent.
pub async fn delete_song(pool: &SqlitePool, id: i64) -> Result<String> {
    sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(format!("Song with ID {} has been deleted", id))
}
