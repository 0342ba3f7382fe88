//! Tests for database initialization
//!
//! Covers automatic creation of the database file and songs table,
//! idempotent re-initialization, connection pragmas, and id behavior
//! across reopens.

use std::path::PathBuf;
use tunebook::db::init::init_database;
use tunebook::db::songs;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let test_db = format!("/tmp/tunebook-test-db-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    // Ensure database doesn't exist
    let _ = std::fs::remove_file(&db_path);

    let result = init_database(&db_path).await;

    assert!(
        result.is_ok(),
        "Database initialization failed: {:?}",
        result.err()
    );

    // Verify database file was created
    assert!(db_path.exists(), "Database file was not created");

    // Cleanup
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_database_opens_existing() {
    let test_db = format!("/tmp/tunebook-test-db-existing-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    // Ensure database doesn't exist
    let _ = std::fs::remove_file(&db_path);

    // Create database first time
    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());

    // Open database second time (should succeed)
    let pool2 = init_database(&db_path).await;
    assert!(
        pool2.is_ok(),
        "Failed to open existing database: {:?}",
        pool2.err()
    );

    // Cleanup
    drop(pool1);
    drop(pool2);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_songs_table_schema() {
    let test_db = format!("/tmp/tunebook-test-db-schema-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    let pool = init_database(&db_path).await.unwrap();

    // table_info rows: (cid, name, type, notnull, dflt_value, pk)
    let columns: Vec<(i64, String, String, i64, Option<String>, i64)> =
        sqlx::query_as("PRAGMA table_info(songs)")
            .fetch_all(&pool)
            .await
            .unwrap();

    let names: Vec<&str> = columns.iter().map(|column| column.1.as_str()).collect();
    assert_eq!(names, vec!["id", "title", "artist", "releaseYear"]);

    // id is the primary key, everything else is NOT NULL
    assert_eq!(columns[0].5, 1, "id should be the primary key");
    assert!(
        columns[1..].iter().all(|column| column.3 == 1),
        "Data columns should be NOT NULL"
    );

    // Cleanup
    drop(pool);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_idempotent_initialization() {
    let test_db = format!("/tmp/tunebook-test-db-idempotent-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    // Initialize and store a row
    let pool1 = init_database(&db_path).await.unwrap();
    songs::add_song(&pool1, "Kept", "Someone", 1999)
        .await
        .unwrap();
    drop(pool1);

    // Initialize again; the existing row must survive
    let pool2 = init_database(&db_path).await.unwrap();
    let all = songs::list_songs(&pool2).await.unwrap();

    assert_eq!(all.len(), 1, "Row lost across re-initialization");
    assert_eq!(all[0].title, "Kept");

    // Cleanup
    drop(pool2);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_foreign_keys_enabled() {
    let test_db = format!("/tmp/tunebook-test-db-fk-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    let pool = init_database(&db_path).await.unwrap();

    let fk_enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(fk_enabled, 1, "Foreign keys should be enabled");

    // Cleanup
    drop(pool);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_busy_timeout_set() {
    let test_db = format!("/tmp/tunebook-test-db-timeout-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    let pool = init_database(&db_path).await.unwrap();

    let timeout: i64 = sqlx::query_scalar("PRAGMA busy_timeout")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(timeout, 5000, "Busy timeout should be 5000ms");

    // Cleanup
    drop(pool);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_unopenable_path_is_an_error() {
    // A path whose parent is a regular file can never be created
    let blocker = format!("/tmp/tunebook-test-db-blocker-{}", std::process::id());
    std::fs::write(&blocker, b"not a directory").unwrap();

    let db_path = PathBuf::from(format!("{}/nested.db", blocker));
    let result = init_database(&db_path).await;

    assert!(result.is_err(), "Opening under a regular file should fail");

    let _ = std::fs::remove_file(&blocker);
}

#[tokio::test]
async fn test_ids_continue_across_reopen() {
    let test_db = format!("/tmp/tunebook-test-db-ids-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    // Insert two rows and drop the second
    let pool1 = init_database(&db_path).await.unwrap();
    songs::add_song(&pool1, "First", "A", 1990).await.unwrap();
    songs::add_song(&pool1, "Second", "B", 1991).await.unwrap();
    songs::delete_song(&pool1, 2).await.unwrap();
    drop(pool1);

    // The id sequence survives a reopen; id 2 is never handed out again
    let pool2 = init_database(&db_path).await.unwrap();
    let song = songs::add_song(&pool2, "Third", "C", 1992)
        .await
        .unwrap()
        .expect("Insert should produce a readable row");

    assert_eq!(song.id, 3);

    // Cleanup
    drop(pool2);
    let _ = std::fs::remove_file(&db_path);
}
