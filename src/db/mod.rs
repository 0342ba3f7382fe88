//! Database access layer
//!
//! SQLite via sqlx. `init` owns connection setup and schema creation,
//! `songs` owns the row operations on the songs table.

pub mod init;
pub mod songs;

pub use init::init_database;
pub use songs::{Song, SongChanges};
